//! Display configuration
//!
//! Settings come from display.toml, validated by the build script and
//! compiled in as constants.

use defmt::*;
use heapless::Vec;

use glimmer_core::config::DisplayConfig;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
}

pub use generated::SCAN_STEP_US;

/// Build the driver configuration from the compiled-in settings
///
/// Falls back to the defaults if the settings do not form a valid
/// configuration.
pub fn load() -> DisplayConfig {
    let pins: Vec<u8, { glimmer_core::config::MAX_DISPLAY_PINS }> =
        match Vec::from_slice(generated::DISPLAY_PINS) {
            Ok(pins) => pins,
            Err(()) => {
                warn!("Too many display pins, using defaults");
                return DisplayConfig::default();
            }
        };

    let config = DisplayConfig {
        show_delay_ms: generated::SHOW_DELAY_MS,
        scroll_delay_ms: generated::SCROLL_DELAY_MS,
        display_pins: pins,
        ..DisplayConfig::default()
    };

    match config.validate() {
        Ok(()) => {
            info!(
                "Display config: show={}ms scroll={}ms pins={}",
                config.show_delay_ms,
                config.scroll_delay_ms,
                config.display_pins.as_slice()
            );
            config
        }
        Err(e) => {
            warn!("Invalid display config ({:?}), using defaults", e);
            DisplayConfig::default()
        }
    }
}
