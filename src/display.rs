//! Display port capability and the two screen renderers.

use core::convert::Infallible;

use heapless::String;

use crate::clock::Reading;
use crate::config::{
    BAR_ORIGIN, CLOCK_ORIGIN, FULL_BLOCK, LCD_COLUMNS, MINUTES_PAD_BELOW, SECONDS_PAD_BELOW,
    SQUARE_ORIGIN,
};

/// Character display primitives the state machines draw through.
pub trait DisplayPort {
    type Error;

    /// Place the write cursor at `column`, `row` in character memory.
    fn move_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error>;

    /// Write one character code and advance the cursor.
    fn write_char(&mut self, byte: u8) -> Result<(), Self::Error>;

    fn write_string(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            self.write_char(byte)?;
        }
        Ok(())
    }

    /// Point subsequent writes at glyph pattern memory, address 0.
    fn enter_glyph_definition_mode(&mut self) -> Result<(), Self::Error>;

    /// Point subsequent writes back at character memory, address 0.
    fn enter_text_mode(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError<E> {
    /// The display port rejected a write
    Port(E),
    /// A number did not fit its conversion buffer
    Format,
}

/// Write `value` as unsigned decimal, no padding.
pub fn write_decimal<D: DisplayPort>(
    port: &mut D,
    value: u16,
) -> Result<(), RenderError<D::Error>> {
    let mut buf = [0u8; 5];
    let text = format_no_std::show(&mut buf, format_args!("{}", value))
        .map_err(|_| RenderError::Format)?;
    port.write_string(text).map_err(RenderError::Port)
}

/// Draw "MM:SS.T" at the clock origin and seconds squared at its own field.
///
/// Padding writes a single '0' when the value is under its threshold. For
/// minutes that threshold is 60, so minutes of 10 and above come out three
/// digits wide. Neither field is cleared first.
pub fn render_clock<D: DisplayPort>(
    port: &mut D,
    reading: &Reading,
) -> Result<(), RenderError<D::Error>> {
    let (column, row) = CLOCK_ORIGIN;
    port.move_cursor(column, row).map_err(RenderError::Port)?;

    if reading.minutes < MINUTES_PAD_BELOW {
        port.write_char(b'0').map_err(RenderError::Port)?;
        write_decimal(port, reading.minutes.into())?;
    } else {
        write_decimal(port, reading.minutes.into())?;
    }

    port.write_char(b':').map_err(RenderError::Port)?;

    if reading.seconds < SECONDS_PAD_BELOW {
        port.write_char(b'0').map_err(RenderError::Port)?;
    }
    write_decimal(port, reading.seconds.into())?;

    port.write_char(b'.').map_err(RenderError::Port)?;
    write_decimal(port, reading.tenths.into())?;

    let (column, row) = SQUARE_ORIGIN;
    port.move_cursor(column, row).map_err(RenderError::Port)?;
    write_decimal(port, reading.seconds_squared)
}

/// Draw `length` solid cells from the bar origin. Longer, older bars are left
/// standing past the new end.
pub fn render_progress<D: DisplayPort>(port: &mut D, length: u8) -> Result<(), D::Error> {
    let (column, row) = BAR_ORIGIN;
    port.move_cursor(column, row)?;
    for _ in 0..length {
        port.write_char(FULL_BLOCK)?;
    }
    Ok(())
}

const ROW_SPAN: usize = 40;
const CGRAM_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Text,
    Glyph,
}

/// In-memory model of a two-line HD44780: character memory, glyph memory and
/// the address counter. Used for host tests and the console preview.
#[derive(Debug, Clone)]
pub struct Frame {
    ddram: [[u8; ROW_SPAN]; 2],
    cgram: [u8; CGRAM_SIZE],
    target: Target,
    row: usize,
    address: usize,
}

impl Frame {
    /// A cleared display: all spaces, blank glyphs, cursor home.
    pub const fn new() -> Self {
        Self {
            ddram: [[b' '; ROW_SPAN]; 2],
            cgram: [0; CGRAM_SIZE],
            target: Target::Text,
            row: 0,
            address: 0,
        }
    }

    /// The visible character codes of `row`.
    pub fn row(&self, row: u8) -> &[u8] {
        &self.ddram[row as usize % 2][..LCD_COLUMNS as usize]
    }

    /// Pattern rows of custom glyph `code` (0..=7).
    pub fn glyph(&self, code: u8) -> [u8; 8] {
        let start = (code as usize % 8) * 8;
        let mut rows = [0u8; 8];
        rows.copy_from_slice(&self.cgram[start..start + 8]);
        rows
    }

    pub fn is_text_mode(&self) -> bool {
        self.target == Target::Text
    }

    /// Printable rendering of `row`. Custom glyphs become partial blocks and
    /// the full-block code becomes a solid block.
    pub fn row_text(&self, row: u8) -> String<64> {
        let mut text = String::new();
        for &code in self.row(row) {
            let shown = match code {
                0 => '▏',
                1 => '▎',
                2 => '▍',
                3 => '▌',
                FULL_BLOCK => '█',
                0x20..=0x7e => code as char,
                _ => '?',
            };
            // 16 columns of at most 3 bytes each always fit
            let _ = text.push(shown);
        }
        text
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for Frame {
    type Error = Infallible;

    fn move_cursor(&mut self, column: u8, row: u8) -> Result<(), Infallible> {
        self.target = Target::Text;
        self.row = row as usize % 2;
        self.address = column as usize % ROW_SPAN;
        Ok(())
    }

    fn write_char(&mut self, byte: u8) -> Result<(), Infallible> {
        match self.target {
            Target::Text => {
                self.ddram[self.row][self.address] = byte;
                self.address += 1;
                if self.address == ROW_SPAN {
                    // two-line mode runs from the end of one line into the other
                    self.address = 0;
                    self.row = (self.row + 1) % 2;
                }
            }
            Target::Glyph => {
                self.cgram[self.address] = byte & 0x1f;
                self.address = (self.address + 1) % CGRAM_SIZE;
            }
        }
        Ok(())
    }

    fn enter_glyph_definition_mode(&mut self) -> Result<(), Infallible> {
        self.target = Target::Glyph;
        self.address = 0;
        Ok(())
    }

    fn enter_text_mode(&mut self) -> Result<(), Infallible> {
        self.target = Target::Text;
        self.row = 0;
        self.address = 0;
        Ok(())
    }
}
