use eframe::egui::Color32;

/// Pen widths offered by the size selector, in display order.
pub const PEN_WIDTH_PALETTE: [u32; 13] = [1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 30, 50];

pub const DEFAULT_PEN_WIDTH: u32 = 4;

/// Dimensions of the paint surface in pixels. Fixed for the process lifetime.
pub const CANVAS_SIZE: (u32, u32) = (800, 800);

pub type Point = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenState {
    pub color: Color,
    pub width: u32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: DEFAULT_PEN_WIDTH,
        }
    }
}
