//! Error types for the rendering core

use glimmer_hal::{DeviceError, TimerError};

use crate::pins::PinMode;

/// Which side of the valid range an index fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndexError {
    /// Index below zero
    Negative,
    /// Index at or beyond the dimension
    TooLarge,
}

/// Which quantity was out of its legal range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// Brightness above `MAX_BRIGHTNESS`
    Brightness,
    /// Negative, zero-divisor or non-finite scale factor
    ScaleFactor,
    /// Negative blit width or height
    Size,
}

/// Malformed textual image description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Character other than a digit, space, newline or colon
    UnexpectedCharacter {
        /// Byte offset into the description
        index: usize,
    },
}

/// Errors reported by the rendering core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Pixel or element index outside the valid range
    OutOfBounds(IndexError),
    /// Brightness, scale factor or size outside the legal range
    OutOfRange(RangeError),
    /// Write attempted on a read-only image
    Immutable,
    /// Operation between images of different dimensions
    SizeMismatch,
    /// Malformed image description
    Parse(ParseError),
    /// Image too large for the fixed pixel store
    Capacity,
    /// Pin committed to a mode that cannot be released
    ResourceConflict {
        /// Pin number
        pin: u8,
        /// Mode currently holding the pin
        mode: PinMode,
    },
    /// Pixel sink failure
    Device(DeviceError),
    /// Timer service failure
    Timer(TimerError),
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Error::Device(e)
    }
}

impl From<TimerError> for Error {
    fn from(e: TimerError) -> Self {
        Error::Timer(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

/// Validate a signed index against a dimension
pub(crate) fn check_index(i: i32, len: u8) -> Result<usize> {
    if i < 0 {
        Err(Error::OutOfBounds(IndexError::Negative))
    } else if i >= len as i32 {
        Err(Error::OutOfBounds(IndexError::TooLarge))
    } else {
        Ok(i as usize)
    }
}

/// Validate a brightness value
pub(crate) fn check_brightness(v: u8) -> Result<u8> {
    if v > glimmer_hal::MAX_BRIGHTNESS {
        Err(Error::OutOfRange(RangeError::Brightness))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_distinguishes_sides() {
        assert_eq!(check_index(-1, 5), Err(Error::OutOfBounds(IndexError::Negative)));
        assert_eq!(check_index(5, 5), Err(Error::OutOfBounds(IndexError::TooLarge)));
        assert_eq!(check_index(4, 5), Ok(4));
        assert_eq!(check_index(0, 0), Err(Error::OutOfBounds(IndexError::TooLarge)));
    }

    #[test]
    fn test_check_brightness() {
        assert_eq!(check_brightness(9), Ok(9));
        assert_eq!(check_brightness(10), Err(Error::OutOfRange(RangeError::Brightness)));
    }

    #[test]
    fn test_device_error_converts() {
        let e: Error = DeviceError::Hardware.into();
        assert_eq!(e, Error::Device(DeviceError::Hardware));
    }
}
