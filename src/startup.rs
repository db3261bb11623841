//! Start-up ordering.
//!
//! Glyph memory must be written, and addressing pointed back at character
//! memory, before either tick source is enabled. Otherwise the first clock
//! or bar write lands in a glyph pattern.

use crate::config::{CLOCK_TICK_PERIOD, LABEL_ORIGIN, PROGRESS_TICK_PERIOD};
use crate::display::DisplayPort;
use crate::glyphs::PARTIAL_BLOCKS;
use crate::tick::TickSource;

/// Upload the partial-block glyphs, return to text addressing and draw the
/// glyphs once as a static label.
pub fn prepare_display<D: DisplayPort>(port: &mut D) -> Result<(), D::Error> {
    port.enter_glyph_definition_mode()?;
    for row in PARTIAL_BLOCKS.iter().flatten() {
        port.write_char(*row)?;
    }
    port.enter_text_mode()?;

    let (column, row) = LABEL_ORIGIN;
    port.move_cursor(column, row)?;
    for code in 0..PARTIAL_BLOCKS.len() as u8 {
        port.write_char(code)?;
    }
    Ok(())
}

/// Configure the clock and progress sources and start both, clock first.
pub fn arm<A, B, E>(clock: &mut A, progress: &mut B) -> Result<(), E>
where
    A: TickSource<Error = E>,
    B: TickSource<Error = E>,
{
    clock.configure(CLOCK_TICK_PERIOD);
    progress.configure(PROGRESS_TICK_PERIOD);

    clock.enable()?;
    progress.enable()
}
