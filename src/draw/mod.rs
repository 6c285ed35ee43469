pub mod model;
pub mod render;
pub mod stroke;
pub mod tools;

pub use model::{Color, PenState, Point, CANVAS_SIZE, DEFAULT_PEN_WIDTH, PEN_WIDTH_PALETTE};
pub use render::{LineRasterizer, RasterSurface};
pub use stroke::StrokeCanvas;
pub use tools::ToolState;
