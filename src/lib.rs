//! Interrupt-driven stopwatch for a 16x2 character LCD.
//!
//! Two periodic tick sources drive two independent state machines that share
//! only the display:
//!
//! - [`Stopwatch`] counts 16 ms ticks into tenths, seconds and minutes and
//!   redraws `MM:SS.T` plus seconds squared on the first line every 100 ms.
//! - [`ProgressBar`] grows a 1..5 cell bar on the second line once a second.
//!
//! Everything here is hardware-independent. The RP2040 wiring lives in the
//! firmware binary.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod display;
pub mod glyphs;
pub mod lcd;
pub mod progress;
pub mod startup;
pub mod tick;

pub use clock::{Reading, Stopwatch};
pub use display::{DisplayPort, Frame, RenderError};
pub use lcd::Hd44780;
pub use progress::ProgressBar;
pub use tick::TickSource;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FULL_BLOCK, TICKS_PER_TENTH};

    #[test]
    fn test_interleaved_sources_keep_their_own_state() {
        let mut frame = Frame::new();
        startup::prepare_display(&mut frame).unwrap();
        let mut watch = Stopwatch::new();
        let mut bar = ProgressBar::new();

        // both sources pending together, in either order
        for round in 0..12 {
            if round % 2 == 0 {
                watch.on_tick(&mut frame).unwrap();
                bar.on_tick(&mut frame).unwrap();
            } else {
                bar.on_tick(&mut frame).unwrap();
                watch.on_tick(&mut frame).unwrap();
            }
        }

        assert_eq!(
            watch.reading(),
            Reading {
                minutes: 0,
                seconds: 0,
                tenths: 12 / TICKS_PER_TENTH,
                seconds_squared: 0,
            }
        );
        assert_eq!(bar.length(), 2);

        assert_eq!(frame.row(0), b" 00:00.2    0   ");
        assert_eq!(
            frame.row(1),
            &[
                FULL_BLOCK, FULL_BLOCK, FULL_BLOCK, FULL_BLOCK, FULL_BLOCK, b' ', b' ', 0, 1, 2, 3,
                b' ', b' ', b' ', b' ', b' '
            ]
        );
    }

    #[test]
    fn test_sixty_seconds_of_both_sources() {
        let mut frame = Frame::new();
        startup::prepare_display(&mut frame).unwrap();
        let mut watch = Stopwatch::new();
        let mut bar = ProgressBar::new();

        // a tenth is 6 x 16 ms = 96 ms, so the stopwatch runs ahead of wall time
        for tick in 1..=3750u32 {
            watch.on_tick(&mut frame).unwrap();
            if tick * 16 / 1000 != (tick - 1) * 16 / 1000 {
                bar.on_tick(&mut frame).unwrap();
            }
        }

        let reading = watch.reading();
        assert_eq!((reading.minutes, reading.seconds, reading.tenths), (1, 2, 5));
        assert_eq!(reading.seconds_squared, 4);
        assert_eq!(bar.length(), 5);
        assert_eq!(&frame.row(1)[7..11], &[0, 1, 2, 3]);
    }
}
