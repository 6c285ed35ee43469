use crate::draw::model::{Color, Point, CANVAS_SIZE};
use crate::draw::render::{LineRasterizer, RasterSurface};
use crate::draw::tools::ToolState;

/// Freehand canvas: the persistent surface plus the points of the stroke in
/// progress.
///
/// The canvas is either idle (no points) or stroking. Each `render` burns the
/// whole working polyline into the surface with the current pen; `end_stroke`
/// only drops the working points, the pixels stay.
#[derive(Debug)]
pub struct StrokeCanvas<R = RasterSurface> {
    surface: R,
    points: Vec<Point>,
    stroking: bool,
    tools: ToolState,
}

impl StrokeCanvas<RasterSurface> {
    /// A white 800x800 canvas drawing with `tools`.
    pub fn new(tools: ToolState) -> Self {
        Self::with_surface(RasterSurface::new(CANVAS_SIZE, Color::WHITE), tools)
    }
}

impl<R: LineRasterizer> StrokeCanvas<R> {
    pub fn with_surface(surface: R, tools: ToolState) -> Self {
        Self {
            surface,
            points: Vec::new(),
            stroking: false,
            tools,
        }
    }

    pub fn begin_stroke(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
        self.stroking = true;
        tracing::debug!(?point, "stroke started");
    }

    pub fn extend_stroke(&mut self, point: Point) {
        if self.stroking {
            self.points.push(point);
        }
    }

    pub fn end_stroke(&mut self) {
        if self.stroking {
            tracing::debug!(points = self.points.len(), "stroke finished");
        }
        self.points.clear();
        self.stroking = false;
    }

    /// Draws one segment per consecutive pair of points and returns how many
    /// were drawn.
    pub fn render(&mut self) -> usize {
        let pen = self.tools.pen();
        let mut segments = 0;
        for pair in self.points.windows(2) {
            self.surface.draw_line(pair[0], pair[1], pen);
            segments += 1;
        }
        segments
    }

    pub fn is_stroking(&self) -> bool {
        self.stroking
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::model::PenState;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        lines: Vec<(Point, Point, PenState)>,
    }

    impl LineRasterizer for RecordingSurface {
        fn draw_line(&mut self, start: Point, end: Point, pen: PenState) {
            self.lines.push((start, end, pen));
        }
    }

    fn recording_canvas() -> StrokeCanvas<RecordingSurface> {
        StrokeCanvas::with_surface(RecordingSurface::default(), ToolState::default())
    }

    #[test]
    fn full_gesture_leaves_canvas_idle() {
        let mut canvas = recording_canvas();
        canvas.begin_stroke((1, 1));
        for i in 0..25 {
            canvas.extend_stroke((i, i * 2));
        }
        assert!(canvas.is_stroking());
        assert_eq!(canvas.points().len(), 26);

        canvas.end_stroke();
        assert!(!canvas.is_stroking());
        assert!(canvas.points().is_empty());
    }

    #[test]
    fn extend_while_idle_is_ignored() {
        let mut canvas = recording_canvas();
        canvas.extend_stroke((5, 5));
        canvas.extend_stroke((6, 6));
        assert!(canvas.points().is_empty());

        canvas.begin_stroke((0, 0));
        canvas.end_stroke();
        canvas.extend_stroke((7, 7));
        assert!(canvas.points().is_empty());
    }

    #[test]
    fn begin_discards_previous_points() {
        let mut canvas = recording_canvas();
        canvas.begin_stroke((0, 0));
        canvas.extend_stroke((1, 1));
        canvas.begin_stroke((9, 9));
        assert_eq!(canvas.points(), &[(9, 9)]);
    }

    #[test]
    fn empty_and_single_point_render_nothing() {
        let mut canvas = recording_canvas();
        assert_eq!(canvas.render(), 0);

        canvas.begin_stroke((4, 4));
        assert_eq!(canvas.render(), 0);
        assert!(canvas.surface().lines.is_empty());
    }

    #[test]
    fn render_draws_consecutive_pairs() {
        let mut canvas = recording_canvas();
        let points = [(0, 0), (3, 1), (6, 4), (6, 9), (2, 12)];
        canvas.begin_stroke(points[0]);
        for point in &points[1..] {
            canvas.extend_stroke(*point);
        }

        assert_eq!(canvas.render(), points.len() - 1);
        let drawn: Vec<_> = canvas
            .surface()
            .lines
            .iter()
            .map(|(start, end, _)| (*start, *end))
            .collect();
        let expected: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn render_uses_pen_in_effect_at_render_time() {
        let mut canvas = recording_canvas();
        canvas.begin_stroke((0, 0));
        canvas.extend_stroke((10, 0));
        canvas.tools().set_pen_width(16);
        canvas.tools().set_pen_color(Color::rgba(0, 0, 255, 255));

        canvas.render();
        let (_, _, pen) = canvas.surface().lines[0];
        assert_eq!(pen.width, 16);
        assert_eq!(pen.color, Color::rgba(0, 0, 255, 255));
    }

    #[test]
    fn ending_a_stroke_keeps_rasterized_pixels() {
        let mut canvas = StrokeCanvas::new(ToolState::default());
        canvas.begin_stroke((10, 10));
        canvas.extend_stroke((30, 10));
        canvas.render();
        canvas.end_stroke();

        assert_eq!(canvas.render(), 0);
        assert_eq!(canvas.surface().pixel(20, 10), Some(Color::BLACK));
        assert_eq!(canvas.surface().size(), CANVAS_SIZE);
    }
}
