//! Matrix scan task
//!
//! Multiplexes the shared frame buffer onto the row and column lines at a
//! fixed step rate.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use glimmer_matrix::{MatrixScanner, MATRIX_COLS, MATRIX_ROWS};

use crate::board::{MatrixLine, FRAME};
use crate::config::SCAN_STEP_US;

/// Scanner over the board's matrix lines
pub type Scanner =
    MatrixScanner<MatrixLine<Output<'static>>, MatrixLine<Output<'static>>, MATRIX_ROWS, MATRIX_COLS>;

/// Scan task - one row, one PWM phase per step
#[embassy_executor::task]
pub async fn scan_task(mut scanner: Scanner) {
    info!(
        "Scan task started ({} us/step, {} steps/frame)",
        SCAN_STEP_US,
        Scanner::STEPS_PER_FRAME
    );

    let mut ticker = Ticker::every(Duration::from_micros(SCAN_STEP_US));

    loop {
        ticker.next().await;
        FRAME.lock(|f| scanner.scan_step(&f.borrow()));
    }
}
