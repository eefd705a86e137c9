use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1B, 0x24, 0x30);
pub const BUTTON: Color32 = Color32::from_rgb(0x2E, 0x3B, 0x4E);
pub const SELECTION: Color32 = Color32::from_rgb(0x1E, 0x4F, 0xD8);
pub const ERROR: Color32 = Color32::from_rgb(0xE0, 0x6C, 0x75);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.widgets.inactive.weak_bg_fill = BUTTON;
    visuals.widgets.inactive.bg_fill = BUTTON;
    visuals.override_text_color = Some(Color32::WHITE);
    ctx.set_visuals(visuals);
}
