use crate::draw::{ToolState, PEN_WIDTH_PALETTE};
use crate::gui::theme::{apply_size_button_style, SIZE_BUTTON_SIZE};
use eframe::egui::{self, RichText};

/// Column of pen-width buttons, one per palette entry.
///
/// Holds no selection of its own; a click just writes the width into the
/// shared tool state.
pub struct SizeSelector {
    tools: ToolState,
}

impl SizeSelector {
    pub fn new(tools: ToolState) -> Self {
        Self { tools }
    }

    /// Applies palette entry `index`. Returns the width written, or `None` for
    /// an index past the palette.
    pub fn select(&self, index: usize) -> Option<u32> {
        let width = *PEN_WIDTH_PALETTE.get(index)?;
        self.tools.set_pen_width(width);
        Some(width)
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        ui.scope(|ui| {
            apply_size_button_style(ui.style_mut());
            ui.vertical_centered(|ui| {
                for (index, width) in PEN_WIDTH_PALETTE.iter().enumerate() {
                    let button = egui::Button::new(RichText::new(width.to_string()).size(12.0))
                        .min_size(SIZE_BUTTON_SIZE);
                    if ui.add(button).on_hover_text(format!("Pen width {width}")).clicked() {
                        let _ = self.select(index);
                    }
                }
            });
        });
    }
}
