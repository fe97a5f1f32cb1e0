//! Dark and light color palettes.

use egui::{Color32, Visuals};

pub const ACCENT: Color32 = Color32::from_rgb(0x4F, 0x8C, 0xFF);
const ACCENT_DIM: Color32 = Color32::from_rgb(0x2E, 0x54, 0x99);

// Dark palette
const DARK_PANEL_BG: Color32 = Color32::from_rgb(0x16, 0x18, 0x1D);
const DARK_CARD_BG: Color32 = Color32::from_rgb(0x1E, 0x21, 0x28);
const DARK_CHIP_BG: Color32 = Color32::from_rgb(0x2A, 0x2E, 0x37);

// Light palette
const LIGHT_PANEL_BG: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xF8);
const LIGHT_CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
const LIGHT_CHIP_BG: Color32 = Color32::from_rgb(0xEA, 0xEC, 0xF0);

pub fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = DARK_PANEL_BG;
    visuals.window_fill = DARK_CARD_BG;
    visuals.extreme_bg_color = DARK_CHIP_BG;
    visuals.faint_bg_color = DARK_CARD_BG;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT_DIM;
    visuals.widgets.noninteractive.bg_fill = DARK_CARD_BG;
    visuals.widgets.inactive.bg_fill = DARK_CHIP_BG;
    visuals
}

pub fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = LIGHT_PANEL_BG;
    visuals.window_fill = LIGHT_CARD_BG;
    visuals.extreme_bg_color = LIGHT_CHIP_BG;
    visuals.faint_bg_color = LIGHT_CARD_BG;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.noninteractive.bg_fill = LIGHT_CARD_BG;
    visuals.widgets.inactive.bg_fill = LIGHT_CHIP_BG;
    visuals
}

/// Background for skill and topic chips under the active theme.
pub fn chip_fill(visuals: &Visuals) -> Color32 {
    visuals.extreme_bg_color
}
