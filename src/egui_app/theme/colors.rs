//! Color Palettes
//!
//! Two palettes, light and dark, over the same blue accent. Views never
//! pick raw colors; they go through [`palette`] so the whole UI flips with
//! the dark-mode toggle.

use eframe::egui::Color32;

/// A full color palette for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window and main panel background
    pub window_bg: Color32,
    /// Top navigation bar background
    pub top_bar_bg: Color32,
    /// Card background
    pub card_bg: Color32,
    /// Card border
    pub card_stroke: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary/muted text
    pub text_secondary: Color32,
    /// Accent (primary buttons, links, brand)
    pub accent: Color32,
    /// Accent hover
    pub accent_hover: Color32,
    /// Destructive actions
    pub danger: Color32,
    /// Success notifications
    pub success: Color32,
    /// Filled star
    pub star_filled: Color32,
    /// Empty star
    pub star_empty: Color32,
    /// Genre tag background
    pub tag_bg: Color32,
    /// Text input background
    pub input_bg: Color32,
}

/// Light theme
pub const LIGHT: Palette = Palette {
    window_bg: Color32::from_rgb(0xF9, 0xFA, 0xFB),
    top_bar_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    card_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    card_stroke: Color32::from_rgb(0xE5, 0xE7, 0xEB),
    text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
    text_secondary: Color32::from_rgb(0x6B, 0x72, 0x80),
    accent: Color32::from_rgb(0x3B, 0x82, 0xF6),
    accent_hover: Color32::from_rgb(0x25, 0x63, 0xEB),
    danger: Color32::from_rgb(0xEF, 0x44, 0x44),
    success: Color32::from_rgb(0x22, 0xC5, 0x5E),
    star_filled: Color32::from_rgb(0xF5, 0x9E, 0x0B),
    star_empty: Color32::from_rgb(0xD1, 0xD5, 0xDB),
    tag_bg: Color32::from_rgb(0xE0, 0xEA, 0xFF),
    input_bg: Color32::from_rgb(0xF3, 0xF4, 0xF6),
};

/// Dark theme
pub const DARK: Palette = Palette {
    window_bg: Color32::from_rgb(0x11, 0x18, 0x27),
    top_bar_bg: Color32::from_rgb(0x1F, 0x29, 0x37),
    card_bg: Color32::from_rgb(0x1F, 0x29, 0x37),
    card_stroke: Color32::from_rgb(0x37, 0x41, 0x51),
    text_primary: Color32::from_rgb(0xF9, 0xFA, 0xFB),
    text_secondary: Color32::from_rgb(0x9C, 0xA3, 0xAF),
    accent: Color32::from_rgb(0x3B, 0x82, 0xF6),
    accent_hover: Color32::from_rgb(0x60, 0xA5, 0xFA),
    danger: Color32::from_rgb(0xF8, 0x71, 0x71),
    success: Color32::from_rgb(0x4A, 0xDE, 0x80),
    star_filled: Color32::from_rgb(0xFB, 0xBF, 0x24),
    star_empty: Color32::from_rgb(0x4B, 0x55, 0x63),
    tag_bg: Color32::from_rgb(0x1E, 0x3A, 0x5F),
    input_bg: Color32::from_rgb(0x37, 0x41, 0x51),
};

/// The active palette for the given dark-mode flag.
pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
