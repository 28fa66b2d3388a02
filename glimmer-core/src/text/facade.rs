//! Allocation-free string facade
//!
//! Presents a string as an indexable sequence of glyph images without
//! allocating per character. There is exactly one frame buffer, owned by
//! the facade; every access rasterizes into it and hands out a borrow.

use glimmer_hal::FontData;

use super::font::{glyph_for, paint_glyph, BuiltinFont};
use crate::error::{Error, IndexError, Result};
use crate::image::Image;

/// A string viewed as a sequence of single-character images
pub struct StringFacade<'a, F: FontData + ?Sized = BuiltinFont> {
    text: &'a [u8],
    font: &'a F,
    frame: Image,
}

impl<'a, F: FontData + ?Sized> StringFacade<'a, F> {
    /// Wrap a string
    pub fn new(text: &'a str, font: &'a F) -> Self {
        Self {
            text: text.as_bytes(),
            font,
            frame: Image::blank().into_read_only(),
        }
    }

    /// Number of characters (bytes)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether the string is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rasterize the character at `index` into the shared frame
    ///
    /// The frame is read-only and is overwritten by the next access.
    pub fn get(&mut self, index: usize) -> Result<&Image> {
        let &c = self
            .text
            .get(index)
            .ok_or(Error::OutOfBounds(IndexError::TooLarge))?;
        paint_glyph(&mut self.frame, glyph_for(self.font, c));
        Ok(&self.frame)
    }

    /// Cursor over every character's image in order
    pub fn frames(&mut self) -> FacadeFrames<'_, 'a, F> {
        FacadeFrames {
            facade: self,
            index: 0,
        }
    }
}

/// In-order cursor over a facade, reusing its frame buffer
pub struct FacadeFrames<'f, 'a, F: FontData + ?Sized> {
    facade: &'f mut StringFacade<'a, F>,
    index: usize,
}

impl<F: FontData + ?Sized> FacadeFrames<'_, '_, F> {
    /// Next character's image, or `None` past the end
    pub fn next_frame(&mut self) -> Option<&Image> {
        let i = self.index;
        if i >= self.facade.len() {
            return None;
        }
        self.index += 1;
        self.facade.get(i).ok()
    }
}
