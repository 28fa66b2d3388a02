//! Greyscale image buffer
//!
//! An [`Image`] is a row-major grid of brightness values in
//! `0..=MAX_BRIGHTNESS`, backed by a fixed-capacity `heapless::Vec` so it
//! never touches a heap. Images carry a read-only flag: icon constants and
//! frozen frames reject every write with [`Error::Immutable`].

mod compose;
mod parse;

use core::fmt;

use heapless::Vec;

use glimmer_hal::MAX_BRIGHTNESS;

use crate::error::{check_brightness, check_index, Error, Result};

pub use compose::{blit, combine};

/// Display width in columns
pub const DISPLAY_WIDTH: u8 = 5;

/// Display height in rows
pub const DISPLAY_HEIGHT: u8 = 5;

/// Pixel count of a display-sized image
pub const DISPLAY_PIXELS: usize = DISPLAY_WIDTH as usize * DISPLAY_HEIGHT as usize;

/// Largest pixel count an image can hold
pub const MAX_IMAGE_PIXELS: usize = 512;

const _: () = assert!(DISPLAY_PIXELS <= MAX_IMAGE_PIXELS);

/// Greyscale image
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Image {
    width: u8,
    height: u8,
    pixels: Vec<u8, MAX_IMAGE_PIXELS>,
    read_only: bool,
}

impl Image {
    /// Create a zero-filled image
    ///
    /// Fails with [`Error::Capacity`] if `width × height` exceeds
    /// [`MAX_IMAGE_PIXELS`].
    pub fn new(width: u8, height: u8) -> Result<Self> {
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels.resize(len, 0).map_err(|_| Error::Capacity)?;
        Ok(Self {
            width,
            height,
            pixels,
            read_only: false,
        })
    }

    /// Create a blank display-sized (5×5) image
    pub fn blank() -> Self {
        let mut pixels = Vec::new();
        // Always fits, see the assertion above
        let _ = pixels.resize(DISPLAY_PIXELS, 0);
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            pixels,
            read_only: false,
        }
    }

    /// Create an image from raw bytes, row-major
    ///
    /// Each byte is clamped to `MAX_BRIGHTNESS`.
    pub fn from_bytes(width: u8, height: u8, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != width as usize * height as usize {
            return Err(Error::SizeMismatch);
        }
        let mut img = Self::new(width, height)?;
        for (dst, &src) in img.pixels.iter_mut().zip(bytes) {
            *dst = src.min(MAX_BRIGHTNESS);
        }
        Ok(img)
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Row-major pixel values
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Check whether writes are rejected
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Freeze the image so every later write fails
    pub fn into_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Read a pixel
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u8> {
        let x = check_index(x, self.width)?;
        let y = check_index(y, self.height)?;
        Ok(self.pixels[y * self.width as usize + x])
    }

    /// Write a pixel
    ///
    /// Checks mutability, then the index, then the brightness. Nothing is
    /// written unless every check passes.
    pub fn set_pixel(&mut self, x: i32, y: i32, brightness: u8) -> Result<()> {
        self.check_mutable()?;
        let x = check_index(x, self.width)?;
        let y = check_index(y, self.height)?;
        let brightness = check_brightness(brightness)?;
        self.pixels[y * self.width as usize + x] = brightness;
        Ok(())
    }

    /// Set every pixel to the same brightness
    pub fn fill(&mut self, brightness: u8) -> Result<()> {
        self.check_mutable()?;
        let brightness = check_brightness(brightness)?;
        self.pixels.iter_mut().for_each(|p| *p = brightness);
        Ok(())
    }

    /// Independent, mutable copy
    ///
    /// Unlike `clone`, the copy is writable even if `self` is read-only.
    pub fn copy(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            read_only: false,
        }
    }

    /// New image with every brightness mirrored (`MAX_BRIGHTNESS - v`)
    pub fn invert(&self) -> Self {
        let mut out = self.copy();
        out.pixels.iter_mut().for_each(|p| *p = MAX_BRIGHTNESS - *p);
        out
    }

    pub(crate) fn check_mutable(&self) -> Result<()> {
        if self.read_only {
            Err(Error::Immutable)
        } else {
            Ok(())
        }
    }

    /// Pixel value with out-of-bounds reads as 0
    pub(crate) fn pixel_or_blank(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Write a pixel, silently skipping out-of-bounds coordinates
    ///
    /// Caller has already validated mutability and brightness.
    pub(crate) fn put_clipped(&mut self, x: i32, y: i32, brightness: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = brightness;
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::blank()
    }
}

/// Images compare by dimensions and pixels; the read-only flag is ignored
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl Eq for Image {}

/// Formats as `Image('09090:99999:...:')`, one colon-terminated row each
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Image('")?;
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            for &p in row {
                fmt::Write::write_char(f, (b'0' + p) as char)?;
            }
            f.write_str(":")?;
        }
        f.write_str("')")
    }
}
