//! Timer service abstractions
//!
//! Animations are paced by an external timer. The driver registers one
//! periodic entry per animation and pulls expiries from the service; it
//! never installs callbacks, so the same core runs under an interrupt,
//! an async executor, or a test loop.

/// Opaque handle identifying a scheduled timer entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle(pub u32);

/// How an entry behaves once it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerMode {
    /// Fire once, then the entry is removed
    OneShot,
    /// Fire every period until cancelled
    Periodic,
}

/// Errors from the timer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// No free slot for another entry
    Full,
    /// Period of zero is not schedulable
    InvalidPeriod,
}

/// Monotonic millisecond clock
pub trait Clock {
    /// Current time in milliseconds (wrapping)
    fn now_ms(&self) -> u32;

    /// Yield to the surrounding scheduler until something may have changed
    ///
    /// On hardware this is typically a wait-for-interrupt; in tests it
    /// advances a simulated clock.
    fn idle(&mut self);
}

/// Timer service consumed by the animation driver
pub trait TimerService {
    /// Schedule an entry that first expires `period_ms` from now
    fn schedule(&mut self, period_ms: u32, mode: TimerMode) -> Result<TimerHandle, TimerError>;

    /// Remove an entry
    ///
    /// Returns `true` if the entry was pending.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Pop one entry that has expired at `now_ms`
    ///
    /// Periodic entries are re-armed before being returned. Call
    /// repeatedly until `None` to drain all expiries.
    fn poll_expired(&mut self, now_ms: u32) -> Option<TimerHandle>;

    /// Current time in milliseconds
    fn now_ms(&self) -> u32;

    /// Yield until the next expiry may be due
    fn idle(&mut self);
}
