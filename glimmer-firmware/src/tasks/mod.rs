//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod animation;
pub mod demo;
pub mod scan;

pub use animation::{animation_task, MatrixDisplay};
pub use demo::demo_task;
pub use scan::{scan_task, Scanner};
