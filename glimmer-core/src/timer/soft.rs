//! Software timer queue

use heapless::Vec;

use glimmer_hal::{Clock, TimerError, TimerHandle, TimerMode, TimerService};

/// Signed difference `t1 - t0` between two wrapping millisecond stamps
///
/// Correct as long as the stamps are less than 2^31 ms apart.
pub fn ticks_diff(t1: u32, t0: u32) -> i32 {
    t1.wrapping_sub(t0) as i32
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Entry {
    handle: TimerHandle,
    expiry_ms: u32,
    period_ms: u32,
    mode: TimerMode,
}

/// Fixed-capacity timer queue over a millisecond clock
///
/// Holds up to `N` pending entries. Expiries are delivered earliest
/// first; periodic entries are re-armed by their period, so a late poll
/// catches up one expiry per call.
pub struct SoftTimer<C: Clock, const N: usize> {
    clock: C,
    entries: Vec<Entry, N>,
    next_id: u32,
    paused: bool,
}

impl<C: Clock, const N: usize> SoftTimer<C, N> {
    /// Create an empty queue
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            entries: Vec::new(),
            next_id: 1,
            paused: false,
        }
    }

    /// Number of pending entries
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Check whether an entry is pending
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Suspend or resume expiry delivery
    ///
    /// While paused, entries keep their deadlines; on resume, every overdue
    /// entry is delivered by subsequent polls.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Check whether delivery is suspended
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Milliseconds until the earliest entry is due (0 if overdue)
    ///
    /// Returns `None` when the queue is empty.
    pub fn ms_to_next_expiry(&self, now_ms: u32) -> Option<u32> {
        self.earliest()
            .map(|i| ticks_diff(self.entries[i].expiry_ms, now_ms).max(0) as u32)
    }

    /// Access the underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the underlying clock
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn earliest(&self) -> Option<usize> {
        let first = self.entries.first()?;
        let mut best = 0;
        let mut best_expiry = first.expiry_ms;
        for (i, e) in self.entries.iter().enumerate().skip(1) {
            if ticks_diff(e.expiry_ms, best_expiry) < 0 {
                best = i;
                best_expiry = e.expiry_ms;
            }
        }
        Some(best)
    }
}

impl<C: Clock, const N: usize> TimerService for SoftTimer<C, N> {
    fn schedule(&mut self, period_ms: u32, mode: TimerMode) -> Result<TimerHandle, TimerError> {
        if period_ms == 0 && mode == TimerMode::Periodic {
            return Err(TimerError::InvalidPeriod);
        }
        let handle = TimerHandle(self.next_id);
        let entry = Entry {
            handle,
            expiry_ms: self.clock.now_ms().wrapping_add(period_ms),
            period_ms,
            mode,
        };
        self.entries.push(entry).map_err(|_| TimerError::Full)?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.entries.iter().position(|e| e.handle == handle) {
            Some(i) => {
                self.entries.swap_remove(i);
                true
            }
            None => false,
        }
    }

    fn poll_expired(&mut self, now_ms: u32) -> Option<TimerHandle> {
        if self.paused {
            return None;
        }
        let i = self.earliest()?;
        let entry = self.entries[i];
        if ticks_diff(entry.expiry_ms, now_ms) > 0 {
            return None;
        }
        match entry.mode {
            TimerMode::OneShot => {
                self.entries.swap_remove(i);
            }
            TimerMode::Periodic => {
                self.entries[i].expiry_ms = entry.expiry_ms.wrapping_add(entry.period_ms);
            }
        }
        Some(entry.handle)
    }

    fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    fn idle(&mut self) {
        self.clock.idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::ManualClock;

    fn timer() -> SoftTimer<ManualClock, 4> {
        SoftTimer::new(ManualClock::new(1000, 10))
    }

    #[test]
    fn test_ticks_diff_wraps() {
        assert_eq!(ticks_diff(5, u32::MAX - 4), 10);
        assert_eq!(ticks_diff(u32::MAX - 4, 5), -10);
        assert_eq!(ticks_diff(100, 100), 0);
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut t = timer();
        let h = t.schedule(50, TimerMode::OneShot).unwrap();
        assert_eq!(t.poll_expired(1049), None);
        assert_eq!(t.poll_expired(1050), Some(h));
        assert_eq!(t.poll_expired(2000), None);
        assert_eq!(t.pending(), 0);
    }

    #[test]
    fn test_periodic_rearms_and_catches_up() {
        let mut t = timer();
        let h = t.schedule(100, TimerMode::Periodic).unwrap();
        assert_eq!(t.poll_expired(1100), Some(h));
        assert_eq!(t.poll_expired(1100), None);
        // Two periods late: two expiries, then nothing
        assert_eq!(t.poll_expired(1300), Some(h));
        assert_eq!(t.poll_expired(1300), Some(h));
        assert_eq!(t.poll_expired(1300), None);
        assert!(t.is_pending(h));
    }

    #[test]
    fn test_earliest_first() {
        let mut t = timer();
        let slow = t.schedule(300, TimerMode::OneShot).unwrap();
        let fast = t.schedule(100, TimerMode::OneShot).unwrap();
        assert_eq!(t.poll_expired(2000), Some(fast));
        assert_eq!(t.poll_expired(2000), Some(slow));
    }

    #[test]
    fn test_cancel() {
        let mut t = timer();
        let h = t.schedule(10, TimerMode::Periodic).unwrap();
        assert!(t.cancel(h));
        assert!(!t.cancel(h));
        assert_eq!(t.poll_expired(5000), None);
    }

    #[test]
    fn test_capacity_and_invalid_period() {
        let mut t = timer();
        for _ in 0..4 {
            t.schedule(10, TimerMode::OneShot).unwrap();
        }
        assert_eq!(t.schedule(10, TimerMode::OneShot), Err(TimerError::Full));
        let mut t = timer();
        assert_eq!(
            t.schedule(0, TimerMode::Periodic),
            Err(TimerError::InvalidPeriod)
        );
    }

    #[test]
    fn test_handles_unique() {
        let mut t = timer();
        let a = t.schedule(10, TimerMode::OneShot).unwrap();
        t.cancel(a);
        let b = t.schedule(10, TimerMode::OneShot).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pause_suppresses_then_catches_up() {
        let mut t = timer();
        let h = t.schedule(10, TimerMode::OneShot).unwrap();
        t.set_paused(true);
        assert_eq!(t.poll_expired(5000), None);
        t.set_paused(false);
        assert_eq!(t.poll_expired(5000), Some(h));
    }

    #[test]
    fn test_ms_to_next_expiry() {
        let mut t = timer();
        assert_eq!(t.ms_to_next_expiry(1000), None);
        t.schedule(40, TimerMode::OneShot).unwrap();
        assert_eq!(t.ms_to_next_expiry(1010), Some(30));
        assert_eq!(t.ms_to_next_expiry(1100), Some(0));
    }

    #[test]
    fn test_expiry_across_wrap() {
        let mut t: SoftTimer<ManualClock, 2> = SoftTimer::new(ManualClock::new(u32::MAX - 5, 1));
        let h = t.schedule(10, TimerMode::OneShot).unwrap();
        assert_eq!(t.poll_expired(u32::MAX), None);
        assert_eq!(t.poll_expired(4), Some(h));
    }

    #[test]
    fn test_idle_advances_clock() {
        let mut t = timer();
        t.idle();
        assert_eq!(t.now_ms(), 1010);
    }
}
