//! HD44780 character LCD, 4-bit parallel bus, write-only (RW tied low).
//!
//! With no busy flag to poll, every transfer is followed by a fixed wait
//! covering the controller's worst-case execution time.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::config::LCD_ROWS;
use crate::display::DisplayPort;

const CLEAR: u8 = 0x01;
const ENTRY_MODE: u8 = 0x04;
const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_CONTROL: u8 = 0x08;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_SET: u8 = 0x20;
const TWO_LINES: u8 = 0x08;
const SET_CGRAM: u8 = 0x40;
const SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first column of each line.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

const POWER_ON_US: u32 = 50_000;
const WAKE_US: u32 = 4_500;
const WAKE_SHORT_US: u32 = 150;
const EXECUTE_US: u32 = 50;
const CLEAR_US: u32 = 2_000;
const PULSE_US: u32 = 1;

pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
    row: u8,
}

impl<P, D, E> Hd44780<P, D>
where
    P: OutputPin<Error = E>,
    D: DelayUs<u32>,
{
    /// Take the bus pins, data lines ordered D4..D7. Call [`Hd44780::init`]
    /// before writing.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            row: 0,
        }
    }

    /// Power-on handshake into 4-bit mode, then two lines, display on with no
    /// cursor, cleared, left-to-right entry.
    pub fn init(&mut self) -> Result<(), E> {
        self.delay.delay_us(POWER_ON_US);
        self.rs.set_low()?;
        self.en.set_low()?;

        self.write_nibble(0x3)?;
        self.delay.delay_us(WAKE_US);
        self.write_nibble(0x3)?;
        self.delay.delay_us(WAKE_US);
        self.write_nibble(0x3)?;
        self.delay.delay_us(WAKE_SHORT_US);
        self.write_nibble(0x2)?;
        self.delay.delay_us(WAKE_SHORT_US);

        self.command(FUNCTION_SET | TWO_LINES)?;
        self.command(DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(ENTRY_MODE | ENTRY_INCREMENT)
    }

    pub fn clear(&mut self) -> Result<(), E> {
        self.command(CLEAR)?;
        self.delay.delay_us(CLEAR_US);
        self.row = 0;
        Ok(())
    }

    fn command(&mut self, byte: u8) -> Result<(), E> {
        self.rs.set_low()?;
        self.write_byte(byte)
    }

    fn data(&mut self, byte: u8) -> Result<(), E> {
        self.rs.set_high()?;
        self.write_byte(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0f)?;
        self.delay.delay_us(EXECUTE_US);
        Ok(())
    }

    /// Present the low four bits on D4..D7 and latch them on the falling edge
    /// of E.
    fn write_nibble(&mut self, nibble: u8) -> Result<(), E> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        self.en.set_high()?;
        self.delay.delay_us(PULSE_US);
        self.en.set_low()?;
        self.delay.delay_us(PULSE_US);
        Ok(())
    }
}

impl<P, D, E> DisplayPort for Hd44780<P, D>
where
    P: OutputPin<Error = E>,
    D: DelayUs<u32>,
{
    type Error = E;

    fn move_cursor(&mut self, column: u8, row: u8) -> Result<(), E> {
        self.row = row % LCD_ROWS;
        self.command(SET_DDRAM | (ROW_OFFSETS[self.row as usize] + column))
    }

    fn write_char(&mut self, byte: u8) -> Result<(), E> {
        self.data(byte)
    }

    /// `'\n'` moves to the start of the next line instead of printing.
    fn write_string(&mut self, text: &str) -> Result<(), E> {
        for byte in text.bytes() {
            if byte == b'\n' {
                self.move_cursor(0, self.row + 1)?;
            } else {
                self.data(byte)?;
            }
        }
        Ok(())
    }

    fn enter_glyph_definition_mode(&mut self) -> Result<(), E> {
        self.command(SET_CGRAM)
    }

    fn enter_text_mode(&mut self) -> Result<(), E> {
        self.row = 0;
        self.command(SET_DDRAM)
    }
}
