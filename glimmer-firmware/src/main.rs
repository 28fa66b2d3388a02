//! Glimmer - LED Matrix Firmware
//!
//! Main firmware binary for RP2040 boards driving a 5x5 LED matrix.
//! Shows images, scrolls text and plays frame animations.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use glimmer_core::timer::SoftTimer;
use glimmer_core::{BuiltinFont, Display, PinArbiter, PinMode};
use glimmer_matrix::MatrixScanner;

use crate::board::{EmbassyClock, MatrixLine, SharedFrame};
use crate::tasks::animation::GPIO_COUNT;

mod board;
mod channels;
mod config;
mod tasks;

/// Font used for all text rendering
static FONT: BuiltinFont = BuiltinFont::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glimmer firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Matrix lines are board-specific: rows on GPIO2-6 (active high),
    // columns on GPIO7-11 (active low). display.toml lists the same GPIOs
    // so `on` claims every one of them from the arbiter.
    let rows = [
        MatrixLine::new(Output::new(p.PIN_2, Level::Low), false),
        MatrixLine::new(Output::new(p.PIN_3, Level::Low), false),
        MatrixLine::new(Output::new(p.PIN_4, Level::Low), false),
        MatrixLine::new(Output::new(p.PIN_5, Level::Low), false),
        MatrixLine::new(Output::new(p.PIN_6, Level::Low), false),
    ];
    let cols = [
        MatrixLine::new(Output::new(p.PIN_7, Level::High), true),
        MatrixLine::new(Output::new(p.PIN_8, Level::High), true),
        MatrixLine::new(Output::new(p.PIN_9, Level::High), true),
        MatrixLine::new(Output::new(p.PIN_10, Level::High), true),
        MatrixLine::new(Output::new(p.PIN_11, Level::High), true),
    ];
    let scanner = MatrixScanner::new(rows, cols);
    info!("Matrix initialized");

    // The user button on GPIO12 is hard-wired and never released
    let mut pins: PinArbiter<GPIO_COUNT> = PinArbiter::new();
    if let Err(e) = pins.set_initial_mode(12, PinMode::Button) {
        warn!("Button pin setup failed: {:?}", e);
    }

    let timer = SoftTimer::new(EmbassyClock);
    let display = Display::with_config(SharedFrame, timer, &FONT, config);

    spawner.spawn(tasks::scan_task(scanner)).unwrap();
    spawner.spawn(tasks::animation_task(display, pins)).unwrap();
    spawner.spawn(tasks::demo_task()).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
