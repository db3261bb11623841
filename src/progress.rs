use crate::config::BAR_CYCLE;
use crate::display::{render_progress, DisplayPort};

/// Cycling progress bar, advanced only by the progress tick handler.
#[derive(Debug, Default)]
pub struct ProgressBar {
    length: u8,
}

impl ProgressBar {
    pub const fn new() -> Self {
        Self { length: 0 }
    }

    /// Cells drawn by the last tick, 0 before the first one.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Grow the bar by one cell, starting over at one after [`BAR_CYCLE`],
    /// and redraw it. Returns the new length.
    pub fn on_tick<D: DisplayPort>(&mut self, port: &mut D) -> Result<u8, D::Error> {
        if self.length >= BAR_CYCLE {
            self.length = 0;
        }
        self.length += 1;

        render_progress(port, self.length)?;
        Ok(self.length)
    }
}
