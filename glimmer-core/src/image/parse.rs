//! Textual image descriptions
//!
//! Rows are separated by `\n` or `:`. Within a row each character is a
//! digit `0`-`9` (brightness) or a space (brightness 0). A trailing row
//! without a terminator still counts, and short rows are zero-padded to
//! the widest row.

use super::Image;
use crate::error::{Error, ParseError, Result};

fn is_row_end(c: u8) -> bool {
    c == b'\n' || c == b':'
}

impl Image {
    /// Parse a textual image description such as `"09090:99999:09990"`
    pub fn parse(s: &str) -> Result<Image> {
        let bytes = s.as_bytes();

        // First pass: validate and measure
        let mut width = 0usize;
        let mut height = 0usize;
        let mut line_len = 0usize;
        for (index, &c) in bytes.iter().enumerate() {
            if is_row_end(c) {
                width = width.max(line_len);
                line_len = 0;
                height += 1;
            } else if c == b' ' || c.is_ascii_digit() {
                line_len += 1;
            } else {
                return Err(ParseError::UnexpectedCharacter { index }.into());
            }
        }
        if line_len > 0 {
            width = width.max(line_len);
            height += 1;
        }

        let width = u8::try_from(width).map_err(|_| Error::Capacity)?;
        let height = u8::try_from(height).map_err(|_| Error::Capacity)?;
        let mut img = Image::new(width, height)?;

        // Second pass: fill; padding is already zero
        let (mut x, mut y) = (0usize, 0usize);
        let stride = width as usize;
        for &c in bytes {
            if is_row_end(c) {
                x = 0;
                y += 1;
            } else {
                if c != b' ' {
                    img.pixels_mut()[y * stride + x] = c - b'0';
                }
                x += 1;
            }
        }
        Ok(img)
    }
}
