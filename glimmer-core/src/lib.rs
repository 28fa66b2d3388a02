//! Board-agnostic rendering core for 5×5 LED matrix firmware
//!
//! This crate contains everything between "show this" and "set this LED"
//! that does not depend on specific hardware:
//!
//! - Greyscale image buffer with compositing (blit, shift, crop, dim, combine)
//! - Font rasterizer and prebuilt icon library
//! - Allocation-free scrolling text iterator and per-character facade
//! - Animation driver pacing frame producers through a timer service
//! - Pin-mode arbiter guarding the matrix pins
//! - Software timer queue
//! - Display configuration types
//!
//! Frame production never allocates: every producer owns one frame buffer
//! carved out at construction and mutates it in place.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the macros are visible to every module
mod fmt;

pub mod animation;
pub mod config;
pub mod error;
pub mod icons;
pub mod image;
pub mod pins;
pub mod text;
pub mod timer;

pub use animation::{Content, Display, ScrollOptions, ShowOptions};
pub use error::{Error, IndexError, ParseError, RangeError, Result};
pub use image::{Image, DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_IMAGE_PIXELS};
pub use pins::{PinArbiter, PinMode};
pub use text::{BuiltinFont, ScrollingText, StringFacade};

pub use glimmer_hal::MAX_BRIGHTNESS;
