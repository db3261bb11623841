use crate::config::{MINUTES_PER_HOUR, SECONDS_PER_MINUTE, TENTHS_PER_SECOND, TICKS_PER_TENTH};
use crate::display::{render_clock, DisplayPort, RenderError};

/// Snapshot of the stopwatch counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Reading {
    pub minutes: u8,
    pub seconds: u8,
    pub tenths: u8,
    pub seconds_squared: u16,
}

/// Stopwatch state, advanced only by the clock tick handler.
#[derive(Debug, Default)]
pub struct Stopwatch {
    overflows: u8,
    tenths: u8,
    seconds: u8,
    minutes: u8,
    seconds_squared: u16,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            overflows: 0,
            tenths: 0,
            seconds: 0,
            minutes: 0,
            seconds_squared: 0,
        }
    }

    pub fn reading(&self) -> Reading {
        Reading {
            minutes: self.minutes,
            seconds: self.seconds,
            tenths: self.tenths,
            seconds_squared: self.seconds_squared,
        }
    }

    /// Handle one raw clock tick.
    ///
    /// Every [`TICKS_PER_TENTH`]th call advances the stopwatch by a tenth and
    /// redraws it, returning the new reading. The other calls only count.
    pub fn on_tick<D: DisplayPort>(
        &mut self,
        port: &mut D,
    ) -> Result<Option<Reading>, RenderError<D::Error>> {
        self.overflows += 1;
        if self.overflows < TICKS_PER_TENTH {
            return Ok(None);
        }
        self.overflows = 0;

        self.advance();
        let reading = self.reading();
        render_clock(port, &reading)?;
        Ok(Some(reading))
    }

    /// One tenth of a second.
    fn advance(&mut self) {
        self.tenths += 1;

        if self.tenths >= TENTHS_PER_SECOND {
            self.tenths = 0;
            self.seconds += 1;

            // refreshed on rollover only, while seconds may still read 60
            self.seconds_squared = match self.seconds {
                0 | SECONDS_PER_MINUTE => 0,
                s => u16::from(s) * u16::from(s),
            };
        }

        if self.seconds >= SECONDS_PER_MINUTE {
            self.seconds = 0;
            self.minutes += 1;
        }

        if self.minutes >= MINUTES_PER_HOUR {
            self.minutes = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Frame;

    fn at(minutes: u8, seconds: u8, tenths: u8) -> Stopwatch {
        let seconds_squared = u16::from(seconds) * u16::from(seconds);
        Stopwatch {
            overflows: 0,
            tenths,
            seconds,
            minutes,
            seconds_squared,
        }
    }

    /// Feed ticks until the next redraw.
    fn step(watch: &mut Stopwatch, frame: &mut Frame) -> Reading {
        for _ in 1..TICKS_PER_TENTH {
            assert_eq!(watch.on_tick(frame).unwrap(), None);
        }
        watch.on_tick(frame).unwrap().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let watch = Stopwatch::new();
        assert_eq!(watch.reading(), Reading::default());
    }

    #[test]
    fn test_tenths_increment_alone() {
        let mut frame = Frame::new();
        for tenths in 0..9 {
            let mut watch = at(3, 17, tenths);
            let reading = step(&mut watch, &mut frame);

            assert_eq!(reading.tenths, tenths + 1);
            assert_eq!(reading.seconds, 17);
            assert_eq!(reading.minutes, 3);
            assert_eq!(reading.seconds_squared, 289);
        }
    }

    #[test]
    fn test_tenths_rollover_carries_into_seconds() {
        let mut frame = Frame::new();
        let mut watch = at(0, 6, 9);
        watch.seconds_squared = 36;

        let reading = step(&mut watch, &mut frame);
        assert_eq!(reading.tenths, 0);
        assert_eq!(reading.seconds, 7);
        assert_eq!(reading.seconds_squared, 49);
    }

    #[test]
    fn test_seconds_squared_only_refreshed_on_rollover() {
        let mut frame = Frame::new();
        let mut watch = at(0, 8, 2);
        watch.seconds_squared = 0;

        let reading = step(&mut watch, &mut frame);
        assert_eq!(reading.seconds_squared, 0);
    }

    #[test]
    fn test_seconds_squared_bounds() {
        let mut frame = Frame::new();
        let mut watch = at(0, 58, 9);
        let reading = step(&mut watch, &mut frame);
        assert_eq!(reading.seconds, 59);
        assert_eq!(reading.seconds_squared, 3481);

        // across the minute boundary the square drops to zero, never stale
        watch.tenths = 9;
        let reading = step(&mut watch, &mut frame);
        assert_eq!(reading.seconds, 0);
        assert_eq!(reading.minutes, 1);
        assert_eq!(reading.seconds_squared, 0);

        watch.tenths = 9;
        let reading = step(&mut watch, &mut frame);
        assert_eq!(reading.seconds, 1);
        assert_eq!(reading.seconds_squared, 1);
    }

    #[test]
    fn test_minutes_wrap_without_carry() {
        let mut frame = Frame::new();
        let mut watch = at(59, 59, 9);

        let reading = step(&mut watch, &mut frame);
        assert_eq!(
            reading,
            Reading {
                minutes: 0,
                seconds: 0,
                tenths: 0,
                seconds_squared: 0,
            }
        );
    }

    #[test]
    fn test_renders_once_per_six_ticks() {
        let mut frame = Frame::new();
        let mut watch = Stopwatch::new();

        for _ in 1..TICKS_PER_TENTH {
            assert_eq!(watch.on_tick(&mut frame).unwrap(), None);
            assert_eq!(frame.row(0), b"                ");
        }
        assert!(watch.on_tick(&mut frame).unwrap().is_some());
        assert_eq!(&frame.row(0)[1..8], b"00:00.1");

        let renders = (0..TICKS_PER_TENTH as usize * 10)
            .filter(|_| watch.on_tick(&mut frame).unwrap().is_some())
            .count();
        assert_eq!(renders, 10);
    }

    #[test]
    fn test_ten_seconds_of_ticks() {
        let mut frame = Frame::new();
        let mut watch = Stopwatch::new();

        for _ in 0..600 {
            watch.on_tick(&mut frame).unwrap();
        }

        assert_eq!(frame.row(0), b" 00:10.0    100 ");
        assert_eq!(watch.reading().seconds_squared, 100);
    }

    #[test]
    fn test_rendered_text_matches_reading() {
        let mut frame = Frame::new();
        let mut watch = at(5, 7, 2);

        step(&mut watch, &mut frame);
        assert_eq!(&frame.row(0)[1..8], b"05:07.3");
    }
}
