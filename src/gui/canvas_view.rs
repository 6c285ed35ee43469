use crate::draw::{Point, RasterSurface, StrokeCanvas};
use eframe::egui::{
    self, pos2, Color32, ColorImage, Event, PointerButton, Pos2, Rect, Sense, TextureHandle,
    TextureOptions, Vec2,
};

/// Pointer input already resolved against the canvas region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasInput {
    Press(Point),
    Move(Point),
    Release,
}

/// Maps a raw egui event onto canvas input.
///
/// Presses only count inside `visible`, the on-screen part of the canvas.
/// Moves and releases are accepted anywhere since the canvas keeps the
/// pointer grab for the length of a stroke.
pub fn translate_pointer_event(event: &Event, origin: Pos2, visible: Rect) -> Option<CanvasInput> {
    match event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            ..
        } if visible.contains(*pos) => Some(CanvasInput::Press(to_canvas_point(*pos, origin))),
        Event::PointerButton {
            button: PointerButton::Primary,
            pressed: false,
            ..
        } => Some(CanvasInput::Release),
        Event::PointerMoved(pos) => Some(CanvasInput::Move(to_canvas_point(*pos, origin))),
        _ => None,
    }
}

pub fn apply_canvas_input(canvas: &mut StrokeCanvas, input: CanvasInput) {
    match input {
        CanvasInput::Press(point) => canvas.begin_stroke(point),
        CanvasInput::Move(point) => canvas.extend_stroke(point),
        CanvasInput::Release => canvas.end_stroke(),
    }
}

fn to_canvas_point(pos: Pos2, origin: Pos2) -> Point {
    let local = pos - origin;
    (local.x.round() as i32, local.y.round() as i32)
}

/// On-screen region showing the canvas surface.
#[derive(Default)]
pub struct CanvasView {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl CanvasView {
    /// Feeds this frame's pointer events to `canvas`, rasterizes the working
    /// stroke and blits the whole surface into the panel.
    ///
    /// With `accept_input` false (a modal dialog is up) only releases are
    /// honoured, so a stroke can still finish but none can start.
    pub fn ui(&mut self, ui: &mut egui::Ui, canvas: &mut StrokeCanvas, accept_input: bool) {
        let (width, height) = canvas.surface().size();
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(width as f32, height as f32), Sense::click_and_drag());
        let visible = ui.clip_rect().intersect(rect);

        let inputs: Vec<CanvasInput> = ui.ctx().input(|i| {
            i.events
                .iter()
                .filter_map(|event| translate_pointer_event(event, rect.min, visible))
                .collect()
        });
        for input in inputs {
            if accept_input || input == CanvasInput::Release {
                apply_canvas_input(canvas, input);
            }
        }

        canvas.render();
        self.sync_texture(ui.ctx(), canvas.surface());

        if let Some(texture) = &self.texture {
            ui.painter().image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context, surface: &RasterSurface) {
        let revision = surface.revision();
        if self.texture.is_some() && self.uploaded_revision == Some(revision) {
            return;
        }
        let (width, height) = surface.size();
        let image = ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            surface.rgba_pixels(),
        );
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("paint-canvas", image, TextureOptions::NEAREST))
            }
        }
        self.uploaded_revision = Some(revision);
    }

    pub fn uploaded_revision(&self) -> Option<u64> {
        self.uploaded_revision
    }
}
