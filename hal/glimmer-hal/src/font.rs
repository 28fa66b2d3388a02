//! Font data provider
//!
//! Glyphs are 5×5 bit matrices owned by the provider. The rasterizer only
//! ever borrows them for the duration of a single draw.

/// Glyph width in columns
pub const GLYPH_WIDTH: u8 = 5;

/// Glyph height in rows
pub const GLYPH_HEIGHT: u8 = 5;

/// A 5×5 glyph bitmap
///
/// One byte per row, top row first. Within a row, bit 4 is the leftmost
/// column and bit 0 the rightmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(pub [u8; 5]);

impl Glyph {
    /// A glyph with no pixels set
    pub const BLANK: Glyph = Glyph([0; 5]);

    /// Create a glyph from five row bytes
    pub const fn new(rows: [u8; 5]) -> Self {
        Self(rows)
    }

    /// Check whether the pixel at (x, y) is lit
    ///
    /// Out-of-range coordinates read as unlit.
    pub const fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
            return false;
        }
        self.0[y as usize] & (0x10 >> x) != 0
    }

    /// Check whether any pixel in column `x` is lit
    pub fn column_non_blank(&self, x: u8) -> bool {
        (0..GLYPH_HEIGHT).any(|y| self.pixel(x, y))
    }
}

/// Provider of glyph bitmaps by character code
pub trait FontData {
    /// Look up the glyph for a character code
    ///
    /// Returns `None` if the font has no entry for `c`.
    fn glyph_bits(&self, c: u8) -> Option<&Glyph>;
}
