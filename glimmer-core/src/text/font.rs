//! Font rasterizer
//!
//! Maps a character code to a borrowed glyph and paints it into a
//! display-sized image. Set bits become `MAX_BRIGHTNESS`, clear bits 0.

use glimmer_hal::{FontData, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH, MAX_BRIGHTNESS};

use crate::error::{Error, Result};
use crate::image::{Image, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// First character code in the built-in table
const FIRST_CHAR: u8 = 0x20;

/// Last character code in the built-in table
const LAST_CHAR: u8 = 0x7E;

/// Character substituted for codes the font has no entry for
pub const REPLACEMENT_CHAR: u8 = b'?';

/// Built-in 5×5 font covering printable ASCII
///
/// Most glyphs occupy columns 0-3, leaving column 4 blank so proportional
/// scrolling can close the gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    /// Create the built-in font
    pub const fn new() -> Self {
        Self
    }
}

impl FontData for BuiltinFont {
    fn glyph_bits(&self, c: u8) -> Option<&Glyph> {
        if (FIRST_CHAR..=LAST_CHAR).contains(&c) {
            Some(&FONT_TABLE[(c - FIRST_CHAR) as usize])
        } else {
            None
        }
    }
}

/// Look up a glyph, substituting `'?'` for missing characters
///
/// A font without `'?'` either yields a blank glyph.
pub fn glyph_for<F: FontData + ?Sized>(font: &F, c: u8) -> &Glyph {
    font.glyph_bits(c)
        .or_else(|| font.glyph_bits(REPLACEMENT_CHAR))
        .unwrap_or(&Glyph::BLANK)
}

/// Paint the glyph for `c` over every pixel of a display-sized image
pub fn rasterize_into<F: FontData + ?Sized>(image: &mut Image, font: &F, c: u8) -> Result<()> {
    image.check_mutable()?;
    if image.width() != DISPLAY_WIDTH || image.height() != DISPLAY_HEIGHT {
        return Err(Error::SizeMismatch);
    }
    paint_glyph(image, glyph_for(font, c));
    Ok(())
}

/// Render a glyph into a fresh display-sized image
pub(crate) fn glyph_image(glyph: &Glyph) -> Image {
    let mut img = Image::blank();
    paint_glyph(&mut img, glyph);
    img
}

/// Overwrite a display-sized image with a glyph, ignoring the read-only flag
pub(crate) fn paint_glyph(image: &mut Image, glyph: &Glyph) {
    let stride = image.width() as usize;
    let pixels = image.pixels_mut();
    for y in 0..GLYPH_HEIGHT {
        for x in 0..GLYPH_WIDTH {
            let lit = glyph.pixel(x, y);
            pixels[y as usize * stride + x as usize] = if lit { MAX_BRIGHTNESS } else { 0 };
        }
    }
}

impl Image {
    /// Fresh display-sized image of the glyph for `c`
    pub fn for_char<F: FontData + ?Sized>(font: &F, c: u8) -> Image {
        glyph_image(glyph_for(font, c))
    }

    /// Build an image from a string
    ///
    /// A one-character string renders that character's glyph; anything
    /// else is parsed as a textual image description.
    pub fn from_text<F: FontData + ?Sized>(font: &F, s: &str) -> Result<Image> {
        match s.as_bytes() {
            [c] => Ok(Image::for_char(font, *c)),
            _ => Image::parse(s),
        }
    }
}

#[rustfmt::skip]
static FONT_TABLE: [Glyph; (LAST_CHAR - FIRST_CHAR + 1) as usize] = [
    Glyph::new([0x00, 0x00, 0x00, 0x00, 0x00]), // ' '
    Glyph::new([0x08, 0x08, 0x08, 0x00, 0x08]), // '!'
    Glyph::new([0x0A, 0x0A, 0x00, 0x00, 0x00]), // '"'
    Glyph::new([0x0A, 0x1F, 0x0A, 0x1F, 0x0A]), // '#'
    Glyph::new([0x0E, 0x19, 0x0E, 0x13, 0x0E]), // '$'
    Glyph::new([0x19, 0x12, 0x04, 0x09, 0x13]), // '%'
    Glyph::new([0x0C, 0x12, 0x0C, 0x12, 0x0D]), // '&'
    Glyph::new([0x08, 0x08, 0x00, 0x00, 0x00]), // '\''
    Glyph::new([0x04, 0x08, 0x08, 0x08, 0x04]), // '('
    Glyph::new([0x08, 0x04, 0x04, 0x04, 0x08]), // ')'
    Glyph::new([0x00, 0x0A, 0x04, 0x0A, 0x00]), // '*'
    Glyph::new([0x00, 0x04, 0x0E, 0x04, 0x00]), // '+'
    Glyph::new([0x00, 0x00, 0x00, 0x04, 0x08]), // ','
    Glyph::new([0x00, 0x00, 0x0E, 0x00, 0x00]), // '-'
    Glyph::new([0x00, 0x00, 0x00, 0x08, 0x00]), // '.'
    Glyph::new([0x01, 0x02, 0x04, 0x08, 0x10]), // '/'
    Glyph::new([0x0C, 0x12, 0x12, 0x12, 0x0C]), // '0'
    Glyph::new([0x04, 0x0C, 0x04, 0x04, 0x0E]), // '1'
    Glyph::new([0x1C, 0x02, 0x0C, 0x10, 0x1E]), // '2'
    Glyph::new([0x1E, 0x02, 0x04, 0x12, 0x0C]), // '3'
    Glyph::new([0x06, 0x0A, 0x12, 0x1F, 0x02]), // '4'
    Glyph::new([0x1F, 0x10, 0x1E, 0x01, 0x1E]), // '5'
    Glyph::new([0x02, 0x04, 0x0E, 0x11, 0x0E]), // '6'
    Glyph::new([0x1F, 0x02, 0x04, 0x08, 0x10]), // '7'
    Glyph::new([0x0E, 0x11, 0x0E, 0x11, 0x0E]), // '8'
    Glyph::new([0x0E, 0x11, 0x0E, 0x04, 0x08]), // '9'
    Glyph::new([0x00, 0x08, 0x00, 0x08, 0x00]), // ':'
    Glyph::new([0x00, 0x04, 0x00, 0x04, 0x08]), // ';'
    Glyph::new([0x02, 0x04, 0x08, 0x04, 0x02]), // '<'
    Glyph::new([0x00, 0x0E, 0x00, 0x0E, 0x00]), // '='
    Glyph::new([0x08, 0x04, 0x02, 0x04, 0x08]), // '>'
    Glyph::new([0x0E, 0x01, 0x06, 0x00, 0x04]), // '?'
    Glyph::new([0x0E, 0x11, 0x15, 0x13, 0x0C]), // '@'
    Glyph::new([0x0C, 0x12, 0x1E, 0x12, 0x12]), // 'A'
    Glyph::new([0x1C, 0x12, 0x1C, 0x12, 0x1C]), // 'B'
    Glyph::new([0x0E, 0x10, 0x10, 0x10, 0x0E]), // 'C'
    Glyph::new([0x1C, 0x12, 0x12, 0x12, 0x1C]), // 'D'
    Glyph::new([0x1E, 0x10, 0x1C, 0x10, 0x1E]), // 'E'
    Glyph::new([0x1E, 0x10, 0x1C, 0x10, 0x10]), // 'F'
    Glyph::new([0x0E, 0x10, 0x13, 0x11, 0x0E]), // 'G'
    Glyph::new([0x12, 0x12, 0x1E, 0x12, 0x12]), // 'H'
    Glyph::new([0x1C, 0x08, 0x08, 0x08, 0x1C]), // 'I'
    Glyph::new([0x1F, 0x02, 0x02, 0x12, 0x0C]), // 'J'
    Glyph::new([0x12, 0x14, 0x18, 0x14, 0x12]), // 'K'
    Glyph::new([0x10, 0x10, 0x10, 0x10, 0x1E]), // 'L'
    Glyph::new([0x11, 0x1B, 0x15, 0x11, 0x11]), // 'M'
    Glyph::new([0x11, 0x19, 0x15, 0x13, 0x11]), // 'N'
    Glyph::new([0x0C, 0x12, 0x12, 0x12, 0x0C]), // 'O'
    Glyph::new([0x1C, 0x12, 0x1C, 0x10, 0x10]), // 'P'
    Glyph::new([0x0C, 0x12, 0x12, 0x0C, 0x06]), // 'Q'
    Glyph::new([0x1C, 0x12, 0x1C, 0x12, 0x11]), // 'R'
    Glyph::new([0x0E, 0x10, 0x0C, 0x02, 0x1C]), // 'S'
    Glyph::new([0x1F, 0x04, 0x04, 0x04, 0x04]), // 'T'
    Glyph::new([0x12, 0x12, 0x12, 0x12, 0x0C]), // 'U'
    Glyph::new([0x11, 0x11, 0x11, 0x0A, 0x04]), // 'V'
    Glyph::new([0x11, 0x11, 0x15, 0x1B, 0x11]), // 'W'
    Glyph::new([0x12, 0x12, 0x0C, 0x12, 0x12]), // 'X'
    Glyph::new([0x11, 0x0A, 0x04, 0x04, 0x04]), // 'Y'
    Glyph::new([0x1E, 0x04, 0x08, 0x10, 0x1E]), // 'Z'
    Glyph::new([0x0E, 0x08, 0x08, 0x08, 0x0E]), // '['
    Glyph::new([0x10, 0x08, 0x04, 0x02, 0x01]), // '\\'
    Glyph::new([0x0E, 0x02, 0x02, 0x02, 0x0E]), // ']'
    Glyph::new([0x04, 0x0A, 0x00, 0x00, 0x00]), // '^'
    Glyph::new([0x00, 0x00, 0x00, 0x00, 0x1F]), // '_'
    Glyph::new([0x08, 0x04, 0x00, 0x00, 0x00]), // '`'
    Glyph::new([0x00, 0x0E, 0x12, 0x12, 0x0F]), // 'a'
    Glyph::new([0x10, 0x10, 0x1C, 0x12, 0x1C]), // 'b'
    Glyph::new([0x00, 0x0E, 0x10, 0x10, 0x0E]), // 'c'
    Glyph::new([0x02, 0x02, 0x0E, 0x12, 0x0E]), // 'd'
    Glyph::new([0x0C, 0x12, 0x1C, 0x10, 0x0E]), // 'e'
    Glyph::new([0x06, 0x08, 0x1C, 0x08, 0x08]), // 'f'
    Glyph::new([0x0E, 0x12, 0x0E, 0x02, 0x0C]), // 'g'
    Glyph::new([0x10, 0x10, 0x1C, 0x12, 0x12]), // 'h'
    Glyph::new([0x08, 0x00, 0x08, 0x08, 0x08]), // 'i'
    Glyph::new([0x02, 0x00, 0x02, 0x02, 0x0C]), // 'j'
    Glyph::new([0x10, 0x14, 0x18, 0x14, 0x12]), // 'k'
    Glyph::new([0x08, 0x08, 0x08, 0x08, 0x06]), // 'l'
    Glyph::new([0x00, 0x1B, 0x15, 0x15, 0x11]), // 'm'
    Glyph::new([0x00, 0x1C, 0x12, 0x12, 0x12]), // 'n'
    Glyph::new([0x00, 0x0C, 0x12, 0x12, 0x0C]), // 'o'
    Glyph::new([0x00, 0x1C, 0x12, 0x1C, 0x10]), // 'p'
    Glyph::new([0x00, 0x0E, 0x12, 0x0E, 0x02]), // 'q'
    Glyph::new([0x00, 0x0E, 0x10, 0x10, 0x10]), // 'r'
    Glyph::new([0x00, 0x06, 0x08, 0x04, 0x18]), // 's'
    Glyph::new([0x08, 0x08, 0x0E, 0x08, 0x07]), // 't'
    Glyph::new([0x00, 0x12, 0x12, 0x12, 0x0F]), // 'u'
    Glyph::new([0x00, 0x11, 0x11, 0x0A, 0x04]), // 'v'
    Glyph::new([0x00, 0x11, 0x15, 0x15, 0x0A]), // 'w'
    Glyph::new([0x00, 0x12, 0x0C, 0x0C, 0x12]), // 'x'
    Glyph::new([0x00, 0x11, 0x0A, 0x04, 0x18]), // 'y'
    Glyph::new([0x00, 0x1E, 0x04, 0x08, 0x1E]), // 'z'
    Glyph::new([0x06, 0x04, 0x0C, 0x04, 0x06]), // '{'
    Glyph::new([0x08, 0x08, 0x08, 0x08, 0x08]), // '|'
    Glyph::new([0x18, 0x08, 0x0C, 0x08, 0x18]), // '}'
    Glyph::new([0x00, 0x00, 0x0C, 0x03, 0x00]), // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Font with only a handful of entries
    struct SparseFont {
        glyphs: [(u8, Glyph); 2],
    }

    impl FontData for SparseFont {
        fn glyph_bits(&self, c: u8) -> Option<&Glyph> {
            self.glyphs.iter().find(|(k, _)| *k == c).map(|(_, g)| g)
        }
    }

    #[test]
    fn test_builtin_covers_printable_ascii() {
        let font = BuiltinFont::new();
        for c in 0x20u8..=0x7E {
            assert!(font.glyph_bits(c).is_some(), "missing glyph {}", c);
        }
        assert!(font.glyph_bits(0x1F).is_none());
        assert!(font.glyph_bits(0x7F).is_none());
    }

    #[test]
    fn test_glyph_for_falls_back_to_question_mark() {
        let font = BuiltinFont::new();
        assert_eq!(glyph_for(&font, 0xC3), glyph_for(&font, b'?'));
    }

    #[test]
    fn test_glyph_for_without_replacement_is_blank() {
        let font = SparseFont {
            glyphs: [(b'A', Glyph::new([0x1F; 5])), (b'B', Glyph::BLANK)],
        };
        assert_eq!(glyph_for(&font, b'Z'), &Glyph::BLANK);
        assert_eq!(glyph_for(&font, b'A'), &Glyph::new([0x1F; 5]));
    }

    #[test]
    fn test_rasterize_scales_bits() {
        let font = SparseFont {
            glyphs: [(b'|', Glyph::new([0x10; 5])), (b'?', Glyph::BLANK)],
        };
        let mut img = Image::blank();
        img.fill(3).unwrap();
        rasterize_into(&mut img, &font, b'|').unwrap();
        for y in 0..5 {
            assert_eq!(img.get_pixel(0, y), Ok(9));
            for x in 1..5 {
                assert_eq!(img.get_pixel(x, y), Ok(0));
            }
        }
    }

    #[test]
    fn test_rasterize_rejects_bad_target() {
        let font = BuiltinFont::new();
        let mut frozen = Image::blank().into_read_only();
        assert_eq!(rasterize_into(&mut frozen, &font, b'A'), Err(Error::Immutable));
        let mut small = Image::new(3, 3).unwrap();
        assert_eq!(rasterize_into(&mut small, &font, b'A'), Err(Error::SizeMismatch));
    }

    #[test]
    fn test_from_text_single_char_is_glyph() {
        let font = BuiltinFont::new();
        let img = Image::from_text(&font, "9").unwrap();
        assert_eq!((img.width(), img.height()), (5, 5));
        assert_eq!(img, Image::for_char(&font, b'9'));

        let parsed = Image::from_text(&font, "9:0").unwrap();
        assert_eq!((parsed.width(), parsed.height()), (1, 2));
    }
}
