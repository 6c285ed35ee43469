use eframe::egui;
use std::time::Duration;

pub const REDRAW_HZ: u64 = 60;

/// Forces a repaint at a fixed cadence, independent of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawTicker {
    interval: Duration,
}

impl Default for RedrawTicker {
    fn default() -> Self {
        Self::from_hz(REDRAW_HZ)
    }
}

impl RedrawTicker {
    pub fn from_hz(hz: u64) -> Self {
        Self {
            interval: Duration::from_millis(1000 / hz.max(1)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Posts the next "redraw now" request. Called once per frame.
    pub fn schedule(&self, ctx: &egui::Context) {
        ctx.request_repaint_after(self.interval);
    }
}
