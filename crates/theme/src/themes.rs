use egui::Color32;

/// The colors for a theme variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Theme {
    /// Primary action color (upload button, links).
    pub accent: Color32,
    /// Tint for folder icons.
    pub folder: Color32,
    /// Tint for file icons.
    pub file: Color32,
    pub text: Color32,
    pub subtext: Color32,
    /// Row separators and widget borders.
    pub overlay: Color32,
    /// Listing card background.
    pub surface: Color32,
    /// Window background.
    pub base: Color32,
    pub crust: Color32,
}

pub const DRIVE_DARK: Theme = Theme {
    accent: Color32::from_rgb(37, 99, 235),
    folder: Color32::from_rgb(96, 165, 250),
    file: Color32::from_rgb(156, 163, 175),
    text: Color32::from_rgb(243, 244, 246),
    subtext: Color32::from_rgb(156, 163, 175),
    overlay: Color32::from_rgb(55, 65, 81),
    surface: Color32::from_rgb(31, 41, 55),
    base: Color32::from_rgb(17, 24, 39),
    crust: Color32::from_rgb(3, 7, 18),
};

pub const DRIVE_LIGHT: Theme = Theme {
    accent: Color32::from_rgb(37, 99, 235),
    folder: Color32::from_rgb(59, 130, 246),
    file: Color32::from_rgb(107, 114, 128),
    text: Color32::from_rgb(17, 24, 39),
    subtext: Color32::from_rgb(107, 114, 128),
    overlay: Color32::from_rgb(229, 231, 235),
    surface: Color32::from_rgb(249, 250, 251),
    base: Color32::from_rgb(255, 255, 255),
    crust: Color32::from_rgb(243, 244, 246),
};
