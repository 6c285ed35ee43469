use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

pub const SIZE_BUTTON_SIZE: Vec2 = Vec2::new(20.0, 20.0);

/// Light visuals with white panels behind the canvas and controls.
pub fn painter_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = Color32::WHITE;
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals
}

/// Round black size buttons with white labels that invert while hovered.
pub fn apply_size_button_style(style: &mut egui::Style) {
    let rounding = Rounding::same(SIZE_BUTTON_SIZE.x / 2.0);
    style.spacing.button_padding = Vec2::new(2.0, 1.0);

    let widgets = &mut style.visuals.widgets;
    widgets.inactive.weak_bg_fill = Color32::BLACK;
    widgets.inactive.bg_fill = Color32::BLACK;
    widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    widgets.inactive.bg_stroke = Stroke::new(2.0, Color32::WHITE);
    widgets.inactive.rounding = rounding;

    for state in [&mut widgets.hovered, &mut widgets.active] {
        state.weak_bg_fill = Color32::WHITE;
        state.bg_fill = Color32::WHITE;
        state.fg_stroke = Stroke::new(1.0, Color32::BLACK);
        state.bg_stroke = Stroke::new(2.0, Color32::BLACK);
        state.rounding = rounding;
        state.expansion = 0.0;
    }
}
