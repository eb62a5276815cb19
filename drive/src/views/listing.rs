use catalog::{Catalog, File, Folder, Navigation};
use egui::{CentralPanel, RichText};
use egui_extras::{Column, TableBuilder};
use egui_material_icons::icons::{ICON_DESCRIPTION, ICON_FOLDER};
use theme::Theme;

use super::BrowserCmd;

const ROW_HEIGHT: f32 = 28.0;

/// Listing of the current folder: child folders first, then files, both in
/// catalog order. Name / Type / Size, like the mockup.
pub fn ui(
    ctx: &egui::Context,
    catalog: &Catalog,
    nav: &Navigation,
    theme: Theme,
    mut on_cmd: impl FnMut(BrowserCmd),
) {
    let folders = catalog.folders_in(nav.current());
    let files = catalog.files_in(nav.current());

    CentralPanel::default().show(ctx, |ui| {
        if folders.is_empty() && files.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("This folder is empty").color(theme.subtext));
            });
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().resizable(true))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(80.0))
            .header(24.0, |mut header| {
                for title in ["Name", "Type", "Size"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).color(theme.subtext).strong());
                    });
                }
            })
            .body(|mut body| {
                for folder in folders {
                    folder_row(&mut body, folder, theme, &mut on_cmd);
                }
                for file in files {
                    file_row(&mut body, file, theme);
                }
            });
    });
}

fn folder_row(
    body: &mut egui_extras::TableBody<'_>,
    folder: &Folder,
    theme: Theme,
    on_cmd: &mut impl FnMut(BrowserCmd),
) {
    body.row(ROW_HEIGHT, |mut row| {
        row.col(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(ICON_FOLDER).color(theme.folder));
                if ui.selectable_label(false, &folder.name).clicked() {
                    on_cmd(BrowserCmd::Open(folder.id.clone()));
                }
            });
        });
        row.col(|ui| {
            ui.label("Folder");
        });
        row.col(|ui| {
            ui.label("-");
        });
    });
}

fn file_row(body: &mut egui_extras::TableBody<'_>, file: &File, theme: Theme) {
    body.row(ROW_HEIGHT, |mut row| {
        row.col(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(ICON_DESCRIPTION).color(theme.file));
                ui.label(&file.name);
            });
        });
        row.col(|ui| {
            ui.label(&file.kind);
        });
        row.col(|ui| {
            ui.label(format!("{} KB", file.size_kb));
        });
    });
}
