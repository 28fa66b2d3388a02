//! Board glue
//!
//! Adapts embassy-rp outputs and the embassy time driver to the Glimmer
//! HAL traits, and holds the frame buffer shared between the animation
//! and scan tasks.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{block_for, Duration, Instant};
use embedded_hal::digital;

use glimmer_hal::{Clock, DeviceError, OutputPin, PixelSink};
use glimmer_matrix::{FrameBuffer, MATRIX_COLS, MATRIX_ROWS};

/// Frame currently on the matrix
///
/// Written by the animation task, read by the scan task. Each access holds
/// a short critical section.
pub static FRAME: Mutex<CriticalSectionRawMutex, RefCell<FrameBuffer>> =
    Mutex::new(RefCell::new(FrameBuffer::new()));

/// Any embedded-hal output as a matrix line
///
/// Remembers the last level driven, so reading it back needs no hardware
/// access.
pub struct MatrixLine<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> MatrixLine<P> {
    /// Wrap an output already driven to `high`
    pub fn new(pin: P, high: bool) -> Self {
        Self { pin, high }
    }
}

impl<P: digital::OutputPin> OutputPin for MatrixLine<P> {
    fn set_high(&mut self) {
        // embassy-rp outputs are infallible
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Pixel sink writing into [`FRAME`]
pub struct SharedFrame;

impl PixelSink for SharedFrame {
    fn width(&self) -> u8 {
        MATRIX_COLS as u8
    }

    fn height(&self) -> u8 {
        MATRIX_ROWS as u8
    }

    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<(), DeviceError> {
        FRAME.lock(|f| f.borrow_mut().set_pixel(x, y, brightness))
    }

    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, DeviceError> {
        FRAME.lock(|f| f.borrow().get_pixel(x, y))
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        FRAME.lock(|f| f.borrow_mut().clear())
    }

    fn set_enabled(&mut self, enabled: bool) {
        FRAME.lock(|f| f.borrow_mut().set_enabled(enabled));
    }

    fn is_enabled(&self) -> bool {
        FRAME.lock(|f| f.borrow().is_enabled())
    }
}

/// Millisecond clock on the embassy time driver
///
/// Wraps after about 49 days; the timer queue compares times with
/// wrapping arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn idle(&mut self) {
        block_for(Duration::from_millis(1));
    }
}
