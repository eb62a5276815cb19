pub mod notification;

/// UI preferences. Not persisted; the session starts dark like the mockup.
#[derive(Debug)]
pub struct Settings {
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { dark_mode: true }
    }
}

impl Settings {
    pub fn theme(&self) -> theme::Theme {
        if self.dark_mode {
            theme::DRIVE_DARK
        } else {
            theme::DRIVE_LIGHT
        }
    }
}
