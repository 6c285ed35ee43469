use crate::draw::model::{Color, PenState, Point};
use std::collections::HashMap;

/// Pens at least this wide switch from dense Bresenham stamping to the
/// spaced-stamp or capsule paths.
const WIDE_STROKE_THRESHOLD: u32 = 10;

/// Target for straight line segments. The stroke canvas only ever talks to
/// its surface through this trait.
pub trait LineRasterizer {
    fn draw_line(&mut self, start: Point, end: Point, pen: PenState);
}

/// Persistent RGBA pixel buffer the strokes are burnt into.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    rgba: Vec<u8>,
    size: (u32, u32),
    revision: u64,
    masks: HashMap<u32, BrushMask>,
}

impl RasterSurface {
    pub fn new(size: (u32, u32), background: Color) -> Self {
        let len = (size.0 as usize)
            .saturating_mul(size.1 as usize)
            .saturating_mul(4);
        let mut rgba = vec![0; len];
        for px in rgba.chunks_exact_mut(4) {
            px.copy_from_slice(&background.to_array());
        }
        Self {
            rgba,
            size,
            revision: 0,
            masks: HashMap::new(),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn rgba_pixels(&self) -> &[u8] {
        &self.rgba
    }

    /// Bumped whenever a segment is written, so the display only re-uploads
    /// the surface when something changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.0 || y >= self.size.1 {
            return None;
        }
        let idx = ((y * self.size.0 + x) * 4) as usize;
        let px = self.rgba.get(idx..idx + 4)?;
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Widest pen worth rasterizing. A brush this wide stamped anywhere on
    /// the surface already covers all of it, so wider pens are clamped here.
    pub fn max_stroke_width(&self) -> u32 {
        let (width, height) = (f64::from(self.size.0), f64::from(self.size.1));
        let diagonal = (width * width + height * height).sqrt().ceil() as u32;
        diagonal.saturating_mul(2).saturating_add(2)
    }

    fn draw_segment(&mut self, start: Point, end: Point, color: Color, stroke_width: u32) {
        match select_segment_render_path(start, end, stroke_width) {
            SegmentRenderPath::Dense => {
                self.draw_segment_dense_stamped(start, end, color, stroke_width)
            }
            SegmentRenderPath::AdaptiveStamp => {
                self.draw_segment_adaptive_stamped(start, end, color, stroke_width)
            }
            SegmentRenderPath::Capsule => self.draw_segment_capsule(start, end, color, stroke_width),
        }
    }

    fn draw_segment_dense_stamped(
        &mut self,
        start: Point,
        end: Point,
        color: Color,
        stroke_width: u32,
    ) {
        let (mut x0, mut y0) = start;
        let (x1, y1) = end;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.draw_brush((x0, y0), color, stroke_width);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_segment_adaptive_stamped(
        &mut self,
        start: Point,
        end: Point,
        color: Color,
        stroke_width: u32,
    ) {
        let spacing = (stroke_width as f32 / 4.0).max(1.0);
        let dx = (end.0 - start.0) as f32;
        let dy = (end.1 - start.1) as f32;
        let distance = (dx * dx + dy * dy).sqrt();
        let steps = (distance / spacing).ceil().max(1.0) as i32;
        let mut last = (i32::MIN, i32::MIN);

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let point = (
                (start.0 as f32 + dx * t).round() as i32,
                (start.1 as f32 + dy * t).round() as i32,
            );
            if point == last {
                continue;
            }
            last = point;
            self.draw_brush(point, color, stroke_width);
        }
    }

    fn draw_segment_capsule(&mut self, start: Point, end: Point, color: Color, stroke_width: u32) {
        let radius = stroke_width as f32 / 2.0;
        let offset = sample_offset(stroke_width);
        let pad = (radius.ceil() as i32).saturating_add(1);
        let (width, height) = (self.size.0 as i32, self.size.1 as i32);
        let x0 = start.0.min(end.0).saturating_sub(pad).clamp(0, width);
        let x1 = start.0.max(end.0).saturating_add(pad).clamp(0, width);
        let y0 = start.1.min(end.1).saturating_sub(pad).clamp(0, height);
        let y1 = start.1.max(end.1).saturating_add(pad).clamp(0, height);

        let radius_sq = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let sample = (x as f32 + offset, y as f32 + offset);
                if point_segment_distance_sq(sample, start, end) <= radius_sq {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_brush(&mut self, center: Point, color: Color, stroke_width: u32) {
        let (width, height) = (self.size.0 as i32, self.size.1 as i32);
        let mask = self
            .masks
            .entry(stroke_width)
            .or_insert_with(|| BrushMask::new(stroke_width));

        for row in &mask.rows {
            let y = center.1.saturating_add(row.dy);
            if y < 0 || y >= height {
                continue;
            }
            let x0 = center.0.saturating_add(row.min_dx).max(0);
            let x1 = center.0.saturating_add(row.max_dx).min(width - 1);
            if x0 > x1 {
                continue;
            }
            let row_base = (y as usize) * (width as usize) * 4;
            for x in x0..=x1 {
                let idx = row_base + (x as usize) * 4;
                if let Some(px) = self.rgba.get_mut(idx..idx + 4) {
                    px.copy_from_slice(&color.to_array());
                }
            }
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.size.0 as i32 || y >= self.size.1 as i32 {
            return;
        }
        let idx = ((y as u32 * self.size.0 + x as u32) * 4) as usize;
        if let Some(px) = self.rgba.get_mut(idx..idx + 4) {
            px.copy_from_slice(&color.to_array());
        }
    }
}

impl LineRasterizer for RasterSurface {
    fn draw_line(&mut self, start: Point, end: Point, pen: PenState) {
        let width = pen.width.clamp(1, self.max_stroke_width());
        self.draw_segment(start, end, pen.color, width);
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(?start, ?end, width, "rasterized segment");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentRenderPath {
    Dense,
    AdaptiveStamp,
    Capsule,
}

fn select_segment_render_path(start: Point, end: Point, stroke_width: u32) -> SegmentRenderPath {
    if stroke_width < WIDE_STROKE_THRESHOLD {
        return SegmentRenderPath::Dense;
    }

    let dx = (end.0 - start.0) as i64;
    let dy = (end.1 - start.1) as i64;
    let length_sq = dx * dx + dy * dy;
    if length_sq <= 2 {
        return SegmentRenderPath::Dense;
    }

    if stroke_width >= 14 || length_sq >= (stroke_width as i64).saturating_mul(12) {
        SegmentRenderPath::Capsule
    } else {
        SegmentRenderPath::AdaptiveStamp
    }
}

/// Where a pixel is sampled relative to its integer coordinate. Odd widths
/// centre the pen on a pixel, even widths on a pixel corner, so that both
/// cover exactly `width` pixels across.
fn sample_offset(stroke_width: u32) -> f32 {
    if stroke_width % 2 == 0 {
        0.5
    } else {
        0.0
    }
}

fn point_segment_distance_sq(point: (f32, f32), start: Point, end: Point) -> f32 {
    let (px, py) = point;
    let (x0, y0) = (start.0 as f32, start.1 as f32);
    let (vx, vy) = (end.0 as f32 - x0, end.1 as f32 - y0);
    let (wx, wy) = (px - x0, py - y0);
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f32::EPSILON {
        return wx * wx + wy * wy;
    }
    let t = ((wx * vx + wy * vy) / len_sq).clamp(0.0, 1.0);
    let dx = px - (x0 + vx * t);
    let dy = py - (y0 + vy * t);
    dx * dx + dy * dy
}

/// Round brush footprint stored as one horizontal span per row.
#[derive(Debug, Clone)]
struct BrushMask {
    rows: Vec<BrushMaskRow>,
}

#[derive(Debug, Clone)]
struct BrushMaskRow {
    dy: i32,
    min_dx: i32,
    max_dx: i32,
}

impl BrushMask {
    fn new(stroke_width: u32) -> Self {
        let radius = f64::from(stroke_width) / 2.0;
        let offset = f64::from(sample_offset(stroke_width));
        let first = (-radius - offset).ceil() as i32;
        let last = (radius - offset).floor() as i32;

        let mut rows = Vec::new();
        for dy in first..=last {
            let y = f64::from(dy) + offset;
            let half = (radius * radius - y * y).max(0.0).sqrt();
            let min_dx = (-half - offset).ceil() as i32;
            let max_dx = (half - offset).floor() as i32;
            if min_dx <= max_dx {
                rows.push(BrushMaskRow { dy, min_dx, max_dx });
            }
        }
        Self { rows }
    }
}
