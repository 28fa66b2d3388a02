//! Timer queue
//!
//! A fixed-capacity software timer implementing [`TimerService`] on top
//! of any millisecond [`Clock`]. Boards with a hardware alarm can
//! implement the service directly instead.
//!
//! [`TimerService`]: glimmer_hal::TimerService
//! [`Clock`]: glimmer_hal::Clock

mod soft;

pub use soft::{ticks_diff, SoftTimer};
