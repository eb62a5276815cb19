use egui_notify::Toasts;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Notification {
    Info(String),
    Error(String),
}

impl Notification {
    pub fn create_toast(&self, toasts: &mut Toasts) {
        match self {
            Notification::Info(msg) => {
                toasts.info(msg).duration(Some(Duration::from_secs(3)));
            }
            Notification::Error(msg) => {
                toasts.error(msg).duration(Some(Duration::from_secs(5)));
            }
        };
    }
}
