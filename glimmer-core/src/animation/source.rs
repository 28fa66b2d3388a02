//! Frame producers
//!
//! Everything the driver can animate is resolved once, at the API
//! boundary, into a [`FrameProducer`]. The driver then only ever calls
//! [`FrameSource::next_frame`] on it.

use glimmer_hal::FontData;

use crate::image::Image;
use crate::text::{BuiltinFont, ScrollingText, StringFacade};

/// Pull-based source of animation frames
pub trait FrameSource {
    /// Produce the next frame, or `None` when the sequence is done
    ///
    /// The returned frame may be a shared buffer that the next call
    /// overwrites.
    fn next_frame(&mut self) -> Option<&Image>;
}

/// Random-access frame sequence
///
/// Required by [`Cycle`], which must be able to rewind to index 0.
pub trait IndexedFrames {
    /// Number of frames
    fn frame_count(&self) -> usize;

    /// Frame at `index`, or `None` past the end
    fn frame_at(&mut self, index: usize) -> Option<&Image>;
}

/// A borrowed slice of images
#[derive(Debug, Clone, Copy)]
pub struct ImageList<'a> {
    images: &'a [Image],
}

impl<'a> ImageList<'a> {
    /// Wrap a slice of images
    pub const fn new(images: &'a [Image]) -> Self {
        Self { images }
    }
}

impl IndexedFrames for ImageList<'_> {
    fn frame_count(&self) -> usize {
        self.images.len()
    }

    fn frame_at(&mut self, index: usize) -> Option<&Image> {
        self.images.get(index)
    }
}

impl<F: FontData + ?Sized> IndexedFrames for StringFacade<'_, F> {
    fn frame_count(&self) -> usize {
        self.len()
    }

    fn frame_at(&mut self, index: usize) -> Option<&Image> {
        self.get(index).ok()
    }
}

impl<F: FontData + ?Sized> FrameSource for ScrollingText<'_, F> {
    fn next_frame(&mut self) -> Option<&Image> {
        ScrollingText::next_frame(self)
    }
}

/// Play an indexed source once, front to back
pub struct Sequential<S> {
    inner: S,
    index: usize,
}

impl<S: IndexedFrames> Sequential<S> {
    /// Start at the first frame
    pub fn new(inner: S) -> Self {
        Self { inner, index: 0 }
    }
}

impl<S: IndexedFrames> FrameSource for Sequential<S> {
    fn next_frame(&mut self) -> Option<&Image> {
        if self.index >= self.inner.frame_count() {
            return None;
        }
        let i = self.index;
        self.index += 1;
        self.inner.frame_at(i)
    }
}

/// Play an indexed source forever, wrapping to index 0 after the last frame
///
/// An empty source ends immediately.
pub struct Cycle<S> {
    inner: S,
    index: usize,
}

impl<S: IndexedFrames> Cycle<S> {
    /// Start at the first frame
    pub fn new(inner: S) -> Self {
        Self { inner, index: 0 }
    }
}

impl<S: IndexedFrames> FrameSource for Cycle<S> {
    fn next_frame(&mut self) -> Option<&Image> {
        let count = self.inner.frame_count();
        if count == 0 {
            return None;
        }
        if self.index >= count {
            self.index = 0;
        }
        let i = self.index;
        self.index += 1;
        self.inner.frame_at(i)
    }
}

/// Indexed sources the driver can sequence or cycle
pub enum Indexed<'a, F: FontData + ?Sized = BuiltinFont> {
    /// Caller-owned images
    Images(ImageList<'a>),
    /// One glyph per character
    Characters(StringFacade<'a, F>),
}

impl<F: FontData + ?Sized> IndexedFrames for Indexed<'_, F> {
    fn frame_count(&self) -> usize {
        match self {
            Indexed::Images(list) => list.frame_count(),
            Indexed::Characters(facade) => facade.frame_count(),
        }
    }

    fn frame_at(&mut self, index: usize) -> Option<&Image> {
        match self {
            Indexed::Images(list) => list.frame_at(index),
            Indexed::Characters(facade) => facade.frame_at(index),
        }
    }
}

/// The normalized frame source of a running animation
pub enum FrameProducer<'a, F: FontData + ?Sized = BuiltinFont> {
    /// Play once
    Once(Sequential<Indexed<'a, F>>),
    /// Repeat indefinitely
    Looping(Cycle<Indexed<'a, F>>),
    /// Scrolling text; loops if the iterator repeats
    Scroll(ScrollingText<'a, F>),
}

impl<'a, F: FontData + ?Sized> FrameProducer<'a, F> {
    /// Play or cycle an indexed source
    pub fn indexed(source: Indexed<'a, F>, looping: bool) -> Self {
        if looping {
            FrameProducer::Looping(Cycle::new(source))
        } else {
            FrameProducer::Once(Sequential::new(source))
        }
    }
}

impl<F: FontData + ?Sized> FrameSource for FrameProducer<'_, F> {
    fn next_frame(&mut self) -> Option<&Image> {
        match self {
            FrameProducer::Once(s) => s.next_frame(),
            FrameProducer::Looping(c) => c.next_frame(),
            FrameProducer::Scroll(t) => t.next_frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(v: u8) -> Image {
        let mut img = Image::blank();
        img.fill(v).unwrap();
        img
    }

    fn brightness(frame: Option<&Image>) -> Option<u8> {
        frame.map(|f| f.pixels()[0])
    }

    #[test]
    fn test_sequential_plays_once() {
        let images = [solid(1), solid(2)];
        let mut seq = Sequential::new(ImageList::new(&images));
        assert_eq!(brightness(seq.next_frame()), Some(1));
        assert_eq!(brightness(seq.next_frame()), Some(2));
        assert_eq!(brightness(seq.next_frame()), None);
        assert_eq!(brightness(seq.next_frame()), None);
    }

    #[test]
    fn test_cycle_wraps_to_start() {
        let images = [solid(1), solid(2), solid(3)];
        let mut cycle = Cycle::new(ImageList::new(&images));
        let seen: [Option<u8>; 7] = core::array::from_fn(|_| brightness(cycle.next_frame()));
        assert_eq!(
            seen,
            [Some(1), Some(2), Some(3), Some(1), Some(2), Some(3), Some(1)]
        );
    }

    #[test]
    fn test_cycle_empty_ends() {
        let images: [Image; 0] = [];
        let mut cycle = Cycle::new(ImageList::new(&images));
        assert!(cycle.next_frame().is_none());
    }

    #[test]
    fn test_cycle_over_facade() {
        let font = BuiltinFont::new();
        let mut cycle = Cycle::new(StringFacade::new("ab", &font));
        let a = Image::for_char(&font, b'a');
        let b = Image::for_char(&font, b'b');
        assert_eq!(cycle.next_frame(), Some(&a));
        assert_eq!(cycle.next_frame(), Some(&b));
        assert_eq!(cycle.next_frame(), Some(&a));
    }

    #[test]
    fn test_producer_scroll_ends() {
        let font = BuiltinFont::new();
        let mut producer: FrameProducer<'_, BuiltinFont> =
            FrameProducer::Scroll(ScrollingText::new("", &font, false, false));
        let mut n = 0;
        while producer.next_frame().is_some() {
            n += 1;
        }
        assert_eq!(n, 5);
    }

    #[test]
    fn test_producer_indexed_looping() {
        let images = [solid(4)];
        let mut producer: FrameProducer<'_, BuiltinFont> =
            FrameProducer::indexed(Indexed::Images(ImageList::new(&images)), true);
        for _ in 0..10 {
            assert_eq!(brightness(producer.next_frame()), Some(4));
        }
    }
}
