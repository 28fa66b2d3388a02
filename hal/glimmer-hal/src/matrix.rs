//! LED matrix pixel sink
//!
//! The rendering core never touches LED hardware directly. Every frame it
//! produces is pushed pixel by pixel through a [`PixelSink`], which may be
//! a multiplexed matrix, a shift-register chain, or a test recorder.

/// Highest brightness level a pixel can hold (0 is off)
pub const MAX_BRIGHTNESS: u8 = 9;

/// Errors reported by a pixel sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Coordinate outside the sink's width/height
    OutOfBounds,
    /// Brightness above [`MAX_BRIGHTNESS`]
    InvalidBrightness,
    /// The underlying hardware rejected the write
    Hardware,
}

/// Trait for a physical (or simulated) LED matrix
///
/// Coordinates are `[0, width) × [0, height)` with the origin at the
/// top-left LED. Brightness is `0..=MAX_BRIGHTNESS`.
pub trait PixelSink {
    /// Number of columns
    fn width(&self) -> u8;

    /// Number of rows
    fn height(&self) -> u8;

    /// Set a single pixel
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<(), DeviceError>;

    /// Read back a single pixel
    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, DeviceError>;

    /// Turn every pixel off
    fn clear(&mut self) -> Result<(), DeviceError> {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x, y, 0)?;
            }
        }
        Ok(())
    }

    /// Enable or disable the matrix output
    ///
    /// A disabled sink keeps its pixel contents but drives no LEDs.
    fn set_enabled(&mut self, enabled: bool);

    /// Check whether the matrix output is enabled
    fn is_enabled(&self) -> bool;
}
