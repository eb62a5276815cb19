#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod models;
mod views;

use catalog::{Catalog, Navigation};
use egui_notify::Toasts;
use models::notification::Notification;
use models::Settings;
use theme::set_theme;
use views::BrowserCmd;

fn main() -> eframe::Result {
    env_logger::init();

    // optional first argument: path to a catalog JSON file
    let (catalog, notice) = match std::env::args().nth(1) {
        Some(path) => match load_catalog(&path) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                log::error!("Failed to load catalog from {}: {}", path, e);
                let notice = Notification::Error(format!(
                    "Could not load {}; showing the demo drive instead",
                    path
                ));
                (Catalog::mock(), Some(notice))
            }
        },
        None => (Catalog::mock(), None),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([960.0, 540.0]),
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Drive",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            let mut app = DriveApp::new(catalog);
            if let Some(notice) = notice {
                app.notify(notice);
            }
            Ok(Box::new(app))
        }),
    )
}

fn load_catalog(path: &str) -> Result<Catalog, String> {
    let src = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    Catalog::from_json(&src).map_err(|e| e.to_string())
}

pub struct DriveApp {
    catalog: Catalog,
    nav: Navigation,
    settings: Settings,
    toasts: Toasts,
    pending: Vec<Notification>,
}

impl DriveApp {
    pub fn new(catalog: Catalog) -> Self {
        DriveApp {
            catalog,
            nav: Navigation::default(),
            settings: Settings::default(),
            toasts: Toasts::default(),
            pending: Vec::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// Single entry point for every intent the views emit.
    fn apply_cmd(&mut self, cmd: BrowserCmd) {
        match cmd {
            BrowserCmd::Open(id) => {
                log::info!("Navigating to folder {:?}", id);
                self.nav.navigate_to(id);
            }
            BrowserCmd::Root => {
                log::info!("Navigating to root");
                self.nav.navigate_to_root();
            }
            // placeholder: uploads are not implemented, nothing is mutated
            BrowserCmd::Upload => {
                self.notify(Notification::Info(
                    "Upload functionality would be implemented here".into(),
                ));
            }
        }
    }
}

impl eframe::App for DriveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        set_theme(ctx, self.settings.theme());

        let mut cmds = Vec::new();
        views::topbar::ui(ctx, &self.catalog, &self.nav, &mut self.settings, |cmd| {
            cmds.push(cmd)
        });
        views::listing::ui(
            ctx,
            &self.catalog,
            &self.nav,
            self.settings.theme(),
            |cmd| cmds.push(cmd),
        );
        for cmd in cmds {
            self.apply_cmd(cmd);
        }

        for notification in self.pending.drain(..) {
            notification.create_toast(&mut self.toasts);
        }
        self.toasts.show(ctx);
    }
}
