//! Frame buffer and scan driver for multiplexed LED matrices
//!
//! This crate provides:
//! - `FrameBuffer`, a [`PixelSink`] holding one greyscale frame
//! - `MatrixScanner`, which multiplexes a frame buffer onto row and column
//!   lines with software PWM
//!
//! # Architecture
//!
//! The rendering core writes frames into a `FrameBuffer`. A periodic task
//! calls [`MatrixScanner::scan_step`] at a fixed rate; each step lights one
//! row for one PWM phase. With `ROWS` rows and nine brightness levels a
//! full refresh takes `ROWS * 9` steps.
//!
//! Rows are driven active-high, columns active-low.
//!
//! [`PixelSink`]: glimmer_hal::PixelSink

#![no_std]

pub mod buffer;
pub mod scan;

// Re-export key types
pub use buffer::{FrameBuffer, MATRIX_COLS, MATRIX_ROWS};
pub use scan::MatrixScanner;
