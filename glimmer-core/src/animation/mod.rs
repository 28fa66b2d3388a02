//! Animation
//!
//! Frame producers and the driver that paces them onto the display.

pub mod driver;
pub mod source;

pub use driver::{Content, Display, ScrollOptions, ShowOptions};
pub use source::{Cycle, FrameProducer, FrameSource, ImageList, Indexed, IndexedFrames, Sequential};
