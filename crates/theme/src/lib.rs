//! Egui theming for the drive UI. Call [`set_theme`] at the top of
//! `eframe::App::update` with one of the [`Theme`] constants.

mod themes;
pub use themes::{Theme, DRIVE_DARK, DRIVE_LIGHT};

use egui::{style, Color32, Stroke};

/// Apply the given theme to an [`egui::Context`].
pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    let old = ctx.style().visuals.clone();
    ctx.set_visuals(theme_visuals(old, theme));
}

fn widget_visuals(
    old: style::WidgetVisuals,
    theme: &Theme,
    bg_fill: Color32,
) -> style::WidgetVisuals {
    style::WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: Stroke {
            color: theme.overlay,
            ..old.bg_stroke
        },
        fg_stroke: Stroke {
            color: theme.text,
            ..old.fg_stroke
        },
        ..old
    }
}

fn theme_visuals(old: style::Visuals, theme: Theme) -> style::Visuals {
    let dark = theme == DRIVE_DARK;
    style::Visuals {
        dark_mode: dark,
        override_text_color: Some(theme.text),
        widgets: style::Widgets {
            noninteractive: widget_visuals(old.widgets.noninteractive, &theme, theme.base),
            inactive: widget_visuals(old.widgets.inactive, &theme, theme.surface),
            hovered: widget_visuals(old.widgets.hovered, &theme, theme.overlay),
            active: widget_visuals(old.widgets.active, &theme, theme.overlay),
            open: widget_visuals(old.widgets.open, &theme, theme.surface),
        },
        selection: style::Selection {
            bg_fill: theme.accent.linear_multiply(if dark { 0.3 } else { 0.2 }),
            stroke: Stroke {
                color: theme.accent,
                ..old.selection.stroke
            },
        },
        hyperlink_color: theme.accent,
        faint_bg_color: theme.surface,
        extreme_bg_color: theme.crust,
        code_bg_color: theme.surface,
        window_fill: theme.base,
        panel_fill: theme.base,
        window_stroke: Stroke {
            color: theme.overlay,
            ..old.window_stroke
        },
        ..old
    }
}
