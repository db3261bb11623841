//! Custom character patterns uploaded to glyph memory at start-up.
//!
//! Each glyph is 8 rows of a 5-bit pattern, most significant bit leftmost.
//! Codes 0..=3 fill one to four of the five pixel columns.

pub const GLYPH_ROWS: usize = 8;

pub const PARTIAL_BLOCKS: [[u8; GLYPH_ROWS]; 4] = [
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000],
    [0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000],
    [0b11100, 0b11100, 0b11100, 0b11100, 0b11100, 0b11100, 0b11100, 0b11100],
    [0b11110, 0b11110, 0b11110, 0b11110, 0b11110, 0b11110, 0b11110, 0b11110],
];
