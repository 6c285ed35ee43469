use crate::draw::{Color, ToolState};
use eframe::egui::{self, color_picker::Alpha, Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDialogResult {
    None,
    Chosen(Color),
    Cancelled,
}

/// Modal color chooser. While open, the rest of the window ignores input.
#[derive(Debug, Clone, Default)]
pub struct ColorDialog {
    open: bool,
    candidate: Color32,
    #[cfg(test)]
    button_rects: Option<(egui::Rect, egui::Rect)>,
}

impl ColorDialog {
    pub fn open_with(&mut self, current: Color) {
        self.candidate = current.into();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_candidate(&mut self, color: Color) {
        self.candidate = color.into();
    }

    pub fn confirm(&mut self) -> ColorDialogResult {
        if !self.open {
            return ColorDialogResult::None;
        }
        self.open = false;
        ColorDialogResult::Chosen(self.candidate.into())
    }

    pub fn cancel(&mut self) -> ColorDialogResult {
        if !self.open {
            return ColorDialogResult::None;
        }
        self.open = false;
        ColorDialogResult::Cancelled
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ColorDialogResult {
        if !self.open {
            return ColorDialogResult::None;
        }
        let mut result = ColorDialogResult::None;
        let mut open = true;
        egui::Window::new("Select color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(ui, &mut self.candidate, Alpha::Opaque);
                ui.separator();
                ui.horizontal(|ui| {
                    let ok = ui.button("OK");
                    let cancel = ui.button("Cancel");
                    #[cfg(test)]
                    {
                        self.button_rects = Some((ok.rect, cancel.rect));
                    }
                    if ok.clicked() {
                        result = self.confirm();
                    } else if cancel.clicked() {
                        result = self.cancel();
                    }
                });
            });
        self.finish(open, result)
    }

    /// Closing the window through its title-bar control counts as Cancel.
    fn finish(&mut self, window_open: bool, result: ColorDialogResult) -> ColorDialogResult {
        if !window_open && result == ColorDialogResult::None {
            return self.cancel();
        }
        result
    }

    #[cfg(test)]
    fn button_rects(&self) -> Option<(egui::Rect, egui::Rect)> {
        self.button_rects
    }
}

/// "Pick a color" button plus the dialog it opens.
pub struct ColorPicker {
    tools: ToolState,
    dialog: ColorDialog,
}

impl ColorPicker {
    pub fn new(tools: ToolState) -> Self {
        Self {
            tools,
            dialog: ColorDialog::default(),
        }
    }

    pub fn open(&mut self) {
        self.dialog.open_with(self.tools.pen().color);
        tracing::debug!("color dialog opened");
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn dialog_mut(&mut self) -> &mut ColorDialog {
        &mut self.dialog
    }

    /// Writes a chosen color into the tool state; a cancellation changes
    /// nothing.
    pub fn apply(&self, result: ColorDialogResult) {
        match result {
            ColorDialogResult::Chosen(color) => self.tools.set_pen_color(color),
            ColorDialogResult::Cancelled => tracing::debug!("color dialog cancelled"),
            ColorDialogResult::None => {}
        }
    }

    pub fn button_ui(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(RichText::new("Pick a color").color(Color32::WHITE))
            .fill(Color32::BLACK);
        if ui.add(button).clicked() {
            self.open();
        }
    }

    pub fn dialog_ui(&mut self, ctx: &egui::Context) {
        let result = self.dialog.ui(ctx);
        self.apply(result);
    }
}
