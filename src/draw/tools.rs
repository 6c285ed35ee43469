use crate::draw::model::{Color, PenState};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the pen state.
///
/// The canvas and both control panels each hold a clone; every clone sees the
/// same pen. Writes are last-write-wins and only happen on the UI thread.
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    pen: Rc<RefCell<PenState>>,
}

impl ToolState {
    pub fn new(pen: PenState) -> Self {
        Self {
            pen: Rc::new(RefCell::new(pen)),
        }
    }

    pub fn pen(&self) -> PenState {
        *self.pen.borrow()
    }

    pub fn set_pen_color(&self, color: Color) {
        self.pen.borrow_mut().color = color;
        tracing::debug!(?color, "pen color changed");
    }

    pub fn set_pen_width(&self, width: u32) {
        self.pen.borrow_mut().width = width;
        tracing::debug!(width, "pen width changed");
    }
}
