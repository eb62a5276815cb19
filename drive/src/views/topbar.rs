use catalog::{Catalog, Navigation};
use egui::{Align, Layout, RichText, TopBottomPanel};
use egui_material_icons::icons::{
    ICON_CHEVRON_RIGHT, ICON_DARK_MODE, ICON_LIGHT_MODE, ICON_UPLOAD,
};

use super::BrowserCmd;
use crate::models::Settings;

/// Breadcrumb bar: "My Drive", the ancestor chain of the current folder, the
/// current folder itself (not a link), and the upload button on the right.
pub fn ui(
    ctx: &egui::Context,
    catalog: &Catalog,
    nav: &Navigation,
    settings: &mut Settings,
    mut on_cmd: impl FnMut(BrowserCmd),
) {
    let theme = settings.theme();

    TopBottomPanel::top("breadcrumb-bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button(RichText::new("My Drive").strong()).clicked() {
                on_cmd(BrowserCmd::Root);
            }

            for folder in catalog.breadcrumbs(nav.current()) {
                ui.label(RichText::new(ICON_CHEVRON_RIGHT).color(theme.subtext));
                if ui.button(&folder.name).clicked() {
                    on_cmd(BrowserCmd::Open(folder.id.clone()));
                }
            }

            // the folder on screen is shown but is not a link
            if let Some(current) = catalog.folder(nav.current()) {
                ui.label(RichText::new(ICON_CHEVRON_RIGHT).color(theme.subtext));
                ui.label(RichText::new(&current.name).strong());
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .button(RichText::new(format!("{ICON_UPLOAD} Upload")).color(theme.accent))
                    .clicked()
                {
                    on_cmd(BrowserCmd::Upload);
                }

                let icon = if settings.dark_mode {
                    ICON_LIGHT_MODE
                } else {
                    ICON_DARK_MODE
                };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    settings.dark_mode = !settings.dark_mode;
                }
            });
        });
        ui.add_space(6.0);
    });
}
