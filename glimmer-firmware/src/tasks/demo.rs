//! Demo task
//!
//! Cycles through the display features: a static icon, scrolling text,
//! a clock-face animation and a per-character flash.

use defmt::*;
use embassy_time::Timer;
use static_cell::StaticCell;

use glimmer_core::icons;
use glimmer_core::{Content, Image, ScrollOptions, ShowOptions};

use crate::channels::{DisplayCommand, ANIMATION_DONE, DISPLAY_CMD};

/// Clock-face frames, built once at startup
static CLOCK_FRAMES: StaticCell<[Image; 12]> = StaticCell::new();

/// Heart icon image
static HEART: StaticCell<Image> = StaticCell::new();

/// Message scrolled by the demo
const GREETING: &str = "Hello from Glimmer!";

/// Demo task - loops over a fixed script forever
#[embassy_executor::task]
pub async fn demo_task() {
    info!("Demo task started");

    let clocks: &'static [Image] = CLOCK_FRAMES.init(icons::sequence(&icons::ALL_CLOCKS));
    let heart: &'static Image = HEART.init(icons::HEART.image());

    loop {
        info!("Demo: heart");
        send(DisplayCommand::Show(Content::Image(heart), ShowOptions::default())).await;
        Timer::after_secs(2).await;

        info!("Demo: scroll");
        send(DisplayCommand::Scroll(GREETING, ScrollOptions::default())).await;
        ANIMATION_DONE.wait().await;

        info!("Demo: clock");
        let options = ShowOptions {
            delay_ms: Some(100),
            looping: true,
            ..ShowOptions::default()
        };
        send(DisplayCommand::Show(Content::Images(clocks), options)).await;
        Timer::after_secs(4).await;

        info!("Demo: characters");
        send(DisplayCommand::Show(Content::Characters("5x5"), ShowOptions::default())).await;
        ANIMATION_DONE.wait().await;

        send(DisplayCommand::Clear).await;
        Timer::after_secs(1).await;
    }
}

async fn send(cmd: DisplayCommand) {
    // A stale completion from an earlier animation must not satisfy the next wait
    ANIMATION_DONE.reset();
    DISPLAY_CMD.send(cmd).await;
}
