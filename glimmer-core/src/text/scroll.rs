//! Scrolling text iterator
//!
//! Produces one display frame per step, sliding the text in from the
//! right one column at a time. All state lives in the iterator itself,
//! including the single frame buffer it hands out, so stepping never
//! allocates and is safe from a timer interrupt.
//!
//! Each step:
//!
//! 1. If the text is consumed and the trailing blank has fully scrolled
//!    in, either stop or (when repeating) restart with a cleared frame.
//! 2. Shift the frame left by one column and blank the rightmost column.
//! 3. While the current glyph still has columns to reveal, paint the next
//!    one into the rightmost column.
//! 4. Otherwise this step is the one-column gap between characters: move
//!    on to the next glyph, or to a blank trailing glyph after the last.

use glimmer_hal::{FontData, Glyph, GLYPH_HEIGHT, MAX_BRIGHTNESS};

use super::font::{glyph_for, BuiltinFont};
use crate::image::{Image, DISPLAY_WIDTH};

/// Columns a monospaced glyph (or the trailing blank) occupies
const FULL_WIDTH: i8 = DISPLAY_WIDTH as i8;

/// Offset limit of a glyph in proportional mode
///
/// Only columns 2-4 are examined: a glyph with ink in column 4 occupies
/// five columns, with ink in column 3 four, otherwise three.
pub fn kerning_limit(glyph: &Glyph) -> i8 {
    let rightmost = if glyph.column_non_blank(4) {
        4
    } else if glyph.column_non_blank(3) {
        3
    } else {
        2
    };
    rightmost + 1
}

/// Leading columns a proportional glyph skips (0 or 1)
fn leading_skip(glyph: &Glyph) -> i8 {
    if glyph.column_non_blank(0) {
        0
    } else {
        1
    }
}

/// Incremental scroll of a borrowed string across the display
pub struct ScrollingText<'a, F: FontData + ?Sized = BuiltinFont> {
    text: &'a [u8],
    font: &'a F,
    /// Index of the character currently being revealed; `text.len()` once
    /// only the trailing blank remains
    cursor: usize,
    current: &'a Glyph,
    offset: i8,
    limit: i8,
    frame: Image,
    monospace: bool,
    repeat: bool,
}

impl<'a, F: FontData + ?Sized> ScrollingText<'a, F> {
    /// Create an iterator over `text`
    ///
    /// Text is consumed byte-wise; bytes the font does not cover render as
    /// `'?'`.
    pub fn new(text: &'a str, font: &'a F, monospace: bool, repeat: bool) -> Self {
        let mut iter = Self {
            text: text.as_bytes(),
            font,
            cursor: 0,
            current: &Glyph::BLANK,
            offset: 0,
            limit: FULL_WIDTH,
            frame: Image::blank().into_read_only(),
            monospace,
            repeat,
        };
        iter.restart();
        iter
    }

    /// Rewind to the first frame with a blank display
    pub fn reset(&mut self) {
        self.restart();
        self.frame.pixels_mut().fill(0);
    }

    /// Whether the iterator loops forever
    pub fn is_repeating(&self) -> bool {
        self.repeat
    }

    /// The frame produced by the most recent step
    pub fn frame(&self) -> &Image {
        &self.frame
    }

    /// Number of frames in one full pass over the text
    pub fn pass_length(&self) -> usize {
        let mut glyphs = self.text.iter().map(|&c| glyph_for(self.font, c));
        let first = match glyphs.next() {
            Some(g) => self.limit_for(g) as usize + 1,
            None => return FULL_WIDTH as usize,
        };
        let rest: usize = glyphs
            .map(|g| (self.limit_for(g) - self.skip_for(g)) as usize + 1)
            .sum();
        // Trailing blank starts one column in after the final gap
        first + rest + FULL_WIDTH as usize - 1
    }

    /// Advance one step and return the frame
    ///
    /// Returns `None` once a non-repeating scroll is done. The returned
    /// frame is overwritten by the next step.
    pub fn next_frame(&mut self) -> Option<&Image> {
        if self.cursor == self.text.len() && self.offset == FULL_WIDTH {
            if !self.repeat {
                return None;
            }
            self.reset();
        }

        self.shift_in_column();

        if self.offset < self.limit {
            self.paint_column(self.offset as u8);
        } else if self.offset == self.limit {
            self.cursor += 1;
            match self.text.get(self.cursor) {
                None => {
                    self.current = &Glyph::BLANK;
                    self.limit = FULL_WIDTH;
                    self.offset = 0;
                }
                Some(&c) => {
                    let glyph = glyph_for(self.font, c);
                    self.current = glyph;
                    // Lands on the first revealed column after the increment below
                    self.offset = self.skip_for(glyph) - 1;
                    self.limit = self.limit_for(glyph);
                }
            }
        }
        self.offset += 1;
        Some(&self.frame)
    }

    fn restart(&mut self) {
        self.cursor = 0;
        self.offset = 0;
        match self.text.first() {
            Some(&c) => {
                let glyph = glyph_for(self.font, c);
                self.current = glyph;
                self.limit = self.limit_for(glyph);
            }
            None => {
                self.current = &Glyph::BLANK;
                self.limit = FULL_WIDTH;
            }
        }
    }

    fn limit_for(&self, glyph: &Glyph) -> i8 {
        if self.monospace {
            FULL_WIDTH
        } else {
            kerning_limit(glyph)
        }
    }

    fn skip_for(&self, glyph: &Glyph) -> i8 {
        if self.monospace {
            0
        } else {
            leading_skip(glyph)
        }
    }

    fn shift_in_column(&mut self) {
        let width = DISPLAY_WIDTH as usize;
        for row in self.frame.pixels_mut().chunks_mut(width) {
            row.copy_within(1.., 0);
            row[width - 1] = 0;
        }
    }

    fn paint_column(&mut self, column: u8) {
        let width = DISPLAY_WIDTH as usize;
        let glyph = self.current;
        let pixels = self.frame.pixels_mut();
        for y in 0..GLYPH_HEIGHT {
            if glyph.pixel(column, y) {
                pixels[y as usize * width + width - 1] = MAX_BRIGHTNESS;
            }
        }
    }
}
