//! Pin-mode arbitration
//!
//! Tracks which subsystem owns each GPIO pin so that enabling the display
//! cannot silently steal pins from a bus or a button.

mod arbiter;

pub use arbiter::{PinArbiter, PinMode, Release};
