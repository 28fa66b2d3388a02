//! Configuration type definitions

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magic number identifying serialized display configuration
pub const CONFIG_MAGIC: u32 = 0x474C_4D52; // "GLMR"

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum number of matrix pins (rows plus columns)
pub const MAX_DISPLAY_PINS: usize = 16;

/// Largest serialized configuration
pub const MAX_CONFIG_SIZE: usize = 40;

/// Default per-frame delay for `show`
pub const DEFAULT_SHOW_DELAY_MS: u32 = 400;

/// Default per-column delay for `scroll`
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 150;

/// Default matrix pins claimed when the display is switched on
pub const DEFAULT_DISPLAY_PINS: [u8; 5] = [3, 4, 6, 7, 10];

/// Errors from configuration handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A delay of zero would never advance
    ZeroDelay,
    /// The same pin is listed twice
    DuplicatePin(u8),
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed (corrupt data)
    Deserialize,
    /// Magic or version mismatch
    InvalidFormat,
}

/// Animation driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Format version
    pub version: u8,
    /// Per-frame delay used by `show` when none is given
    pub show_delay_ms: u32,
    /// Per-column delay used by `scroll` when none is given
    pub scroll_delay_ms: u32,
    /// Pins driving the matrix rows and columns
    pub display_pins: Vec<u8, MAX_DISPLAY_PINS>,
}

impl DisplayConfig {
    /// Check magic and version
    pub fn is_valid(&self) -> bool {
        self.magic == CONFIG_MAGIC && self.version == CONFIG_VERSION
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_valid() {
            return Err(ConfigError::InvalidFormat);
        }
        if self.show_delay_ms == 0 || self.scroll_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        for (i, &pin) in self.display_pins.iter().enumerate() {
            if self.display_pins[i + 1..].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }
        Ok(())
    }

    /// Serialize into `buf` with postcard
    #[cfg(feature = "serde")]
    pub fn to_bytes<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: DisplayConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            show_delay_ms: DEFAULT_SHOW_DELAY_MS,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            display_pins: DEFAULT_DISPLAY_PINS.into_iter().collect(),
        }
    }
}
