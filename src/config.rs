//! Compile-time configuration: tick periods, wrap points and screen layout.

use fugit::MicrosDurationU32;

/// Period of the clock tick source (Tick Source A).
pub const CLOCK_TICK_PERIOD: MicrosDurationU32 = MicrosDurationU32::from_ticks(16_000);

/// Period of the progress tick source (Tick Source B).
pub const PROGRESS_TICK_PERIOD: MicrosDurationU32 = MicrosDurationU32::from_ticks(1_000_000);

/// Raw clock ticks per tenth of a second (6 x 16 ms ~ 100 ms).
pub const TICKS_PER_TENTH: u8 = 6;
pub const TENTHS_PER_SECOND: u8 = 10;
pub const SECONDS_PER_MINUTE: u8 = 60;
pub const MINUTES_PER_HOUR: u8 = 60;

/// Longest progress bar before it starts over at one cell.
pub const BAR_CYCLE: u8 = 5;

/// Values below these get a literal '0' in front of them.
pub const MINUTES_PAD_BELOW: u8 = 60;
pub const SECONDS_PAD_BELOW: u8 = 10;

/// (column, row) positions on the display.
pub const CLOCK_ORIGIN: (u8, u8) = (1, 0);
pub const SQUARE_ORIGIN: (u8, u8) = (12, 0);
pub const BAR_ORIGIN: (u8, u8) = (0, 1);
pub const LABEL_ORIGIN: (u8, u8) = (7, 1);

pub const LCD_COLUMNS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

/// Built-in HD44780 character code for a solid cell.
pub const FULL_BLOCK: u8 = 0xFF;

/// Pico on-board crystal.
pub const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;
