//! Frame buffer
//!
//! Holds the frame currently on the matrix. The scanner reads it; the
//! rendering core writes it through [`PixelSink`].

use glimmer_hal::{DeviceError, PixelSink, MAX_BRIGHTNESS};

/// Rows on the standard matrix
pub const MATRIX_ROWS: usize = 5;

/// Columns on the standard matrix
pub const MATRIX_COLS: usize = 5;

/// One greyscale frame of a `W × H` matrix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer<const W: usize = MATRIX_COLS, const H: usize = MATRIX_ROWS> {
    /// Brightness per pixel, row-major
    pixels: [[u8; W]; H],
    /// Whether the scanner should drive any LEDs
    enabled: bool,
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a blank, disabled frame buffer
    pub const fn new() -> Self {
        Self {
            pixels: [[0; W]; H],
            enabled: false,
        }
    }

    /// Brightness values of one row
    pub fn row(&self, y: usize) -> Option<&[u8; W]> {
        self.pixels.get(y)
    }

    fn slot(&self, x: u8, y: u8) -> Result<(usize, usize), DeviceError> {
        let (x, y) = (x as usize, y as usize);
        if x < W && y < H {
            Ok((x, y))
        } else {
            Err(DeviceError::OutOfBounds)
        }
    }
}

impl<const W: usize, const H: usize> PixelSink for FrameBuffer<W, H> {
    fn width(&self) -> u8 {
        W as u8
    }

    fn height(&self) -> u8 {
        H as u8
    }

    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<(), DeviceError> {
        if brightness > MAX_BRIGHTNESS {
            return Err(DeviceError::InvalidBrightness);
        }
        let (x, y) = self.slot(x, y)?;
        self.pixels[y][x] = brightness;
        Ok(())
    }

    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, DeviceError> {
        let (x, y) = self.slot(x, y)?;
        Ok(self.pixels[y][x])
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        self.pixels = [[0; W]; H];
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
