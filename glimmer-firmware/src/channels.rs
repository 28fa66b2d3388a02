//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use glimmer_core::{Content, ScrollOptions, ShowOptions};

/// Channel capacity for display commands
const DISPLAY_CHANNEL_SIZE: usize = 4;

/// Requests for the animation task
///
/// Content must live forever because the driver keeps borrowing it for
/// the lifetime of the animation.
#[derive(Debug, Clone, Copy)]
pub enum DisplayCommand {
    /// Show an image, string or image sequence
    Show(Content<'static>, ShowOptions),
    /// Scroll text across the matrix
    Scroll(&'static str, ScrollOptions),
    /// Stop any animation and blank the matrix
    Clear,
}

/// Display commands from application tasks
pub static DISPLAY_CMD: Channel<CriticalSectionRawMutex, DisplayCommand, DISPLAY_CHANNEL_SIZE> =
    Channel::new();

/// Signal that the running animation has finished
pub static ANIMATION_DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
