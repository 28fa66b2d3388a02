//! Glimmer Hardware Abstraction Layer
//!
//! This crate defines the contracts the rendering core consumes from the
//! outside world: a pixel sink for the LED matrix, a font data provider,
//! a timer service that paces animations, and digital output pins for
//! matrix drivers. Board crates implement them; the core only ever talks
//! to these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (glimmer-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glimmer-core (images, text, animation) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glimmer-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ glimmer-matrix│       │  board timer  │
//! │ (pixel sink)  │       │  (firmware)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`matrix::PixelSink`] - Set/get pixels on the physical display
//! - [`font::FontData`] - Glyph bitmaps by character code
//! - [`timer::TimerService`], [`timer::Clock`] - Animation pacing
//! - [`gpio::OutputPin`] - Digital output

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod gpio;
pub mod matrix;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use font::{FontData, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use gpio::OutputPin;
pub use matrix::{DeviceError, PixelSink, MAX_BRIGHTNESS};
pub use timer::{Clock, TimerError, TimerHandle, TimerMode, TimerService};
