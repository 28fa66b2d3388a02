//! Prebuilt icon library
//!
//! Icons are monochrome 5×5 bitmaps stored in the same row layout as font
//! glyphs. [`Icon::image`] renders one at full brightness into a read-only
//! [`Image`]; call [`Image::copy`] on it to get something writable.

use glimmer_hal::Glyph;

use crate::image::Image;
use crate::text::font::glyph_image;

/// A monochrome 5×5 icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Icon(Glyph);

impl Icon {
    /// Create an icon from five row masks, leftmost column in bit 4
    pub const fn new(rows: [u8; 5]) -> Self {
        Self(Glyph::new(rows))
    }

    /// Underlying bitmap
    pub const fn glyph(&self) -> &Glyph {
        &self.0
    }

    /// Render as a read-only display-sized image
    pub fn image(&self) -> Image {
        glyph_image(&self.0).into_read_only()
    }
}

/// Render a list of icons into an image sequence for animation
pub fn sequence<const N: usize>(icons: &[Icon; N]) -> [Image; N] {
    icons.map(|icon| icon.image())
}

// Faces and symbols
pub const HEART: Icon = Icon::new([0b01010, 0b11111, 0b11111, 0b01110, 0b00100]);
pub const HEART_SMALL: Icon = Icon::new([0b00000, 0b01010, 0b01110, 0b00100, 0b00000]);
pub const HAPPY: Icon = Icon::new([0b00000, 0b01010, 0b00000, 0b10001, 0b01110]);
pub const SMILE: Icon = Icon::new([0b00000, 0b00000, 0b00000, 0b10001, 0b01110]);
pub const SAD: Icon = Icon::new([0b00000, 0b01010, 0b00000, 0b01110, 0b10001]);
pub const CONFUSED: Icon = Icon::new([0b00000, 0b01010, 0b00000, 0b01010, 0b10101]);
pub const ANGRY: Icon = Icon::new([0b10001, 0b01010, 0b00000, 0b11111, 0b10101]);
pub const ASLEEP: Icon = Icon::new([0b00000, 0b11011, 0b00000, 0b01110, 0b00000]);
pub const SURPRISED: Icon = Icon::new([0b01010, 0b00000, 0b00100, 0b01010, 0b00100]);
pub const SILLY: Icon = Icon::new([0b10001, 0b00000, 0b11111, 0b00011, 0b00011]);
pub const FABULOUS: Icon = Icon::new([0b11111, 0b11011, 0b00000, 0b01010, 0b01110]);
pub const MEH: Icon = Icon::new([0b01010, 0b00000, 0b00010, 0b00100, 0b01000]);
pub const YES: Icon = Icon::new([0b00000, 0b00001, 0b00010, 0b10100, 0b01000]);
pub const NO: Icon = Icon::new([0b10001, 0b01010, 0b00100, 0b01010, 0b10001]);

// Clock faces
pub const CLOCK12: Icon = Icon::new([0b00100, 0b00100, 0b00100, 0b00000, 0b00000]);
pub const CLOCK1: Icon = Icon::new([0b00010, 0b00010, 0b00100, 0b00000, 0b00000]);
pub const CLOCK2: Icon = Icon::new([0b00000, 0b00011, 0b00100, 0b00000, 0b00000]);
pub const CLOCK3: Icon = Icon::new([0b00000, 0b00000, 0b00111, 0b00000, 0b00000]);
pub const CLOCK4: Icon = Icon::new([0b00000, 0b00000, 0b00100, 0b00011, 0b00000]);
pub const CLOCK5: Icon = Icon::new([0b00000, 0b00000, 0b00100, 0b00010, 0b00010]);
pub const CLOCK6: Icon = Icon::new([0b00000, 0b00000, 0b00100, 0b00100, 0b00100]);
pub const CLOCK7: Icon = Icon::new([0b00000, 0b00000, 0b00100, 0b01000, 0b01000]);
pub const CLOCK8: Icon = Icon::new([0b00000, 0b00000, 0b00100, 0b11000, 0b00000]);
pub const CLOCK9: Icon = Icon::new([0b00000, 0b00000, 0b11100, 0b00000, 0b00000]);
pub const CLOCK10: Icon = Icon::new([0b00000, 0b11000, 0b00100, 0b00000, 0b00000]);
pub const CLOCK11: Icon = Icon::new([0b01000, 0b01000, 0b00100, 0b00000, 0b00000]);

// Arrows
pub const ARROW_N: Icon = Icon::new([0b00100, 0b01110, 0b10101, 0b00100, 0b00100]);
pub const ARROW_NE: Icon = Icon::new([0b00111, 0b00011, 0b00101, 0b01000, 0b10000]);
pub const ARROW_E: Icon = Icon::new([0b00100, 0b00010, 0b11111, 0b00010, 0b00100]);
pub const ARROW_SE: Icon = Icon::new([0b10000, 0b01000, 0b00101, 0b00011, 0b00111]);
pub const ARROW_S: Icon = Icon::new([0b00100, 0b00100, 0b10101, 0b01110, 0b00100]);
pub const ARROW_SW: Icon = Icon::new([0b00001, 0b00010, 0b10100, 0b11000, 0b11100]);
pub const ARROW_W: Icon = Icon::new([0b00100, 0b01000, 0b11111, 0b01000, 0b00100]);
pub const ARROW_NW: Icon = Icon::new([0b11100, 0b11000, 0b10100, 0b00010, 0b00001]);

// Shapes, objects and animals
pub const TRIANGLE: Icon = Icon::new([0b00000, 0b00100, 0b01010, 0b11111, 0b00000]);
pub const TRIANGLE_LEFT: Icon = Icon::new([0b10000, 0b11000, 0b10100, 0b10010, 0b11111]);
pub const CHESSBOARD: Icon = Icon::new([0b01010, 0b10101, 0b01010, 0b10101, 0b01010]);
pub const DIAMOND: Icon = Icon::new([0b00100, 0b01010, 0b10001, 0b01010, 0b00100]);
pub const DIAMOND_SMALL: Icon = Icon::new([0b00000, 0b00100, 0b01010, 0b00100, 0b00000]);
pub const SQUARE: Icon = Icon::new([0b11111, 0b10001, 0b10001, 0b10001, 0b11111]);
pub const SQUARE_SMALL: Icon = Icon::new([0b00000, 0b01110, 0b01010, 0b01110, 0b00000]);
pub const RABBIT: Icon = Icon::new([0b10100, 0b10100, 0b11110, 0b11010, 0b11110]);
pub const COW: Icon = Icon::new([0b10001, 0b10001, 0b11111, 0b01110, 0b00100]);
pub const MUSIC_CROTCHET: Icon = Icon::new([0b00100, 0b00100, 0b00100, 0b11100, 0b11100]);
pub const MUSIC_QUAVER: Icon = Icon::new([0b00100, 0b00110, 0b00101, 0b11100, 0b11100]);
pub const MUSIC_QUAVERS: Icon = Icon::new([0b01111, 0b01001, 0b01001, 0b11011, 0b11011]);
pub const PITCHFORK: Icon = Icon::new([0b10101, 0b10101, 0b11111, 0b00100, 0b00100]);
pub const XMAS: Icon = Icon::new([0b00100, 0b01110, 0b00100, 0b01110, 0b11111]);
pub const PACMAN: Icon = Icon::new([0b01111, 0b11010, 0b11100, 0b11110, 0b01111]);
pub const TARGET: Icon = Icon::new([0b00100, 0b01110, 0b11011, 0b01110, 0b00100]);
pub const TSHIRT: Icon = Icon::new([0b11011, 0b11111, 0b01110, 0b01110, 0b01110]);
pub const ROLLERSKATE: Icon = Icon::new([0b00011, 0b00011, 0b11111, 0b11111, 0b01010]);
pub const DUCK: Icon = Icon::new([0b01100, 0b11100, 0b01111, 0b01110, 0b00000]);
pub const HOUSE: Icon = Icon::new([0b00100, 0b01110, 0b11111, 0b01110, 0b01010]);
pub const TORTOISE: Icon = Icon::new([0b00000, 0b01110, 0b11111, 0b01010, 0b00000]);
pub const BUTTERFLY: Icon = Icon::new([0b11011, 0b11111, 0b00100, 0b11111, 0b11011]);
pub const STICKFIGURE: Icon = Icon::new([0b00100, 0b11111, 0b00100, 0b01010, 0b10001]);
pub const GHOST: Icon = Icon::new([0b11111, 0b10101, 0b11111, 0b11111, 0b10101]);
pub const SWORD: Icon = Icon::new([0b00100, 0b00100, 0b00100, 0b01110, 0b00100]);
pub const GIRAFFE: Icon = Icon::new([0b11000, 0b01000, 0b01000, 0b01110, 0b01010]);
pub const SKULL: Icon = Icon::new([0b01110, 0b10101, 0b11111, 0b01110, 0b01110]);
pub const UMBRELLA: Icon = Icon::new([0b01110, 0b11111, 0b00100, 0b10100, 0b01100]);
pub const SNAKE: Icon = Icon::new([0b11000, 0b11011, 0b01010, 0b01110, 0b00000]);

/// Clock faces from 12 o'clock round to 11
pub const ALL_CLOCKS: [Icon; 12] = [
    CLOCK12, CLOCK1, CLOCK2, CLOCK3, CLOCK4, CLOCK5, CLOCK6, CLOCK7, CLOCK8, CLOCK9, CLOCK10,
    CLOCK11,
];

/// Arrows from north, clockwise
pub const ALL_ARROWS: [Icon; 8] = [
    ARROW_N, ARROW_NE, ARROW_E, ARROW_SE, ARROW_S, ARROW_SW, ARROW_W, ARROW_NW,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_heart_matches_description() {
        let parsed = Image::parse("09090:99999:99999:09990:00900").unwrap();
        assert_eq!(HEART.image(), parsed);
    }

    #[test]
    fn test_icon_image_is_read_only() {
        let mut img = HAPPY.image();
        assert!(img.is_read_only());
        assert_eq!(img.set_pixel(0, 0, 9), Err(Error::Immutable));
        assert!(!img.copy().is_read_only());
    }

    #[test]
    fn test_clock_sequence() {
        let frames = sequence(&ALL_CLOCKS);
        assert_eq!(frames.len(), 12);
        // Hand at 12 lights the top centre, at 6 the bottom centre
        assert_eq!(frames[0].get_pixel(2, 0), Ok(9));
        assert_eq!(frames[6].get_pixel(2, 4), Ok(9));
        assert_eq!(frames[6].get_pixel(2, 0), Ok(0));
    }

    #[test]
    fn test_arrows_distinct() {
        for (i, a) in ALL_ARROWS.iter().enumerate() {
            for b in &ALL_ARROWS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
