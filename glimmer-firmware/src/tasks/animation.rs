//! Animation task
//!
//! Owns the display driver. Commands arrive over [`DISPLAY_CMD`]; between
//! commands the task sleeps until the next frame is due and then lets the
//! driver advance.
//!
//! The driver is never asked to block: every request is issued with
//! `wait` cleared, and completion is reported through [`ANIMATION_DONE`].

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Timer;

use glimmer_core::timer::SoftTimer;
use glimmer_core::{Display, PinArbiter, ScrollOptions, ShowOptions};
use glimmer_hal::TimerService;

use crate::board::{EmbassyClock, SharedFrame};
use crate::channels::{DisplayCommand, ANIMATION_DONE, DISPLAY_CMD};

/// Timer entries available to the driver
const TIMER_SLOTS: usize = 2;

/// How long to sleep when no frame is pending
const IDLE_POLL_MS: u32 = 1000;

/// GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// The display driver as wired on this board
pub type MatrixDisplay = Display<'static, SharedFrame, SoftTimer<EmbassyClock, TIMER_SLOTS>>;

/// Animation task - applies display commands and paces frames
#[embassy_executor::task]
pub async fn animation_task(mut display: MatrixDisplay, mut pins: PinArbiter<GPIO_COUNT>) {
    info!("Animation task started");

    match display.on(&mut pins) {
        Ok(()) => info!("Display on"),
        Err(e) => error!("Display pins unavailable: {:?}", e),
    }

    loop {
        let now = display.timer().now_ms();
        let sleep_ms = display
            .timer()
            .ms_to_next_expiry(now)
            .unwrap_or(IDLE_POLL_MS);

        let was_animating = display.is_animating();
        match select(DISPLAY_CMD.receive(), Timer::after_millis(sleep_ms as u64)).await {
            Either::First(cmd) => {
                if let Err(e) = apply(&mut display, cmd) {
                    warn!("Display command failed: {:?}", e);
                }
            }
            Either::Second(()) => {
                if let Err(e) = display.poll() {
                    warn!("Animation aborted: {:?}", e);
                }
            }
        }

        if was_animating && !display.is_animating() {
            ANIMATION_DONE.signal(());
        }
    }
}

/// Issue a command without blocking
fn apply(display: &mut MatrixDisplay, cmd: DisplayCommand) -> glimmer_core::Result<()> {
    match cmd {
        DisplayCommand::Show(content, options) => display.show(
            content,
            ShowOptions {
                wait: false,
                ..options
            },
        ),
        DisplayCommand::Scroll(text, options) => display.scroll(
            text,
            ScrollOptions {
                wait: false,
                ..options
            },
        ),
        DisplayCommand::Clear => display.clear(),
    }
}
