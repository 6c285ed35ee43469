mod canvas_view;
mod color_picker;
mod redraw;
mod size_selector;
pub mod theme;

pub use canvas_view::{apply_canvas_input, translate_pointer_event, CanvasInput, CanvasView};
pub use color_picker::{ColorDialog, ColorDialogResult, ColorPicker};
pub use redraw::{RedrawTicker, REDRAW_HZ};
pub use size_selector::SizeSelector;

use crate::draw::{StrokeCanvas, ToolState};
use crate::settings::Settings;
use eframe::egui::{self, Vec2};

pub const WINDOW_SIZE: Vec2 = Vec2::new(1280.0, 780.0);

/// Share of the window width given to each side panel; the canvas gets the
/// remaining four sixths.
const SIDE_PANEL_WIDTH: f32 = WINDOW_SIZE.x / 6.0;

pub fn native_options(settings: &Settings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE)
            .with_max_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    }
}

/// Composition root: canvas on the left, color panel, then the size column.
pub struct PainterApp {
    tools: ToolState,
    canvas: StrokeCanvas,
    view: CanvasView,
    color_picker: ColorPicker,
    size_selector: SizeSelector,
    ticker: RedrawTicker,
}

impl PainterApp {
    pub fn new(ctx: &egui::Context) -> Self {
        ctx.set_visuals(theme::painter_visuals());
        let tools = ToolState::default();
        tracing::info!(pen = ?tools.pen(), "painter ready");
        Self {
            canvas: StrokeCanvas::new(tools.clone()),
            view: CanvasView::default(),
            color_picker: ColorPicker::new(tools.clone()),
            size_selector: SizeSelector::new(tools.clone()),
            ticker: RedrawTicker::default(),
            tools,
        }
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn color_picker_mut(&mut self) -> &mut ColorPicker {
        &mut self.color_picker
    }

    pub fn view(&self) -> &CanvasView {
        &self.view
    }

    /// One frame of the window. Split out of `update` so it can run against a
    /// bare `egui::Context`.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let modal_open = self.color_picker.is_open();

        egui::SidePanel::right("size_selector")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| self.size_selector.ui(ui));
            });

        egui::SidePanel::right("color_picker")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    ui.vertical_centered(|ui| self.color_picker.button_ui(ui));
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.view.ui(ui, &mut self.canvas, !modal_open);
            });

        self.color_picker.dialog_ui(ctx);
        self.ticker.schedule(ctx);
    }
}

impl eframe::App for PainterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
