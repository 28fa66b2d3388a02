//! Pin-mode arbiter
//!
//! Each pin is in exactly one [`PinMode`]. Moving a pin to a new mode
//! first releases the old one, and some modes refuse to be released.

use crate::error::{Error, IndexError, Result};

/// What a pin is currently used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Not claimed by anything
    Unused,
    /// Digital input
    ReadDigital,
    /// Digital output
    WriteDigital,
    /// PWM output
    WriteAnalog,
    /// LED matrix row/column line
    Display,
    /// Hard-wired button input
    Button,
    /// Tone generation
    Music,
    /// Sample playback
    AudioPlay,
    /// Capacitive touch input
    Touch,
    /// I2C bus line
    I2c,
    /// SPI bus line
    Spi,
}

/// How a mode behaves when another mode claims its pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Release {
    /// Always gives the pin up
    Free,
    /// Gives the pin up only while no audio is playing
    WhenAudioIdle,
    /// Never gives the pin up
    Never,
}

impl PinMode {
    /// Release rule of this mode
    pub const fn release(self) -> Release {
        match self {
            PinMode::Unused
            | PinMode::ReadDigital
            | PinMode::WriteDigital
            | PinMode::WriteAnalog
            | PinMode::Touch => Release::Free,
            PinMode::Music | PinMode::AudioPlay => Release::WhenAudioIdle,
            PinMode::Display | PinMode::Button | PinMode::I2c | PinMode::Spi => Release::Never,
        }
    }

    /// Lowercase name for diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            PinMode::Unused => "unused",
            PinMode::ReadDigital => "read_digital",
            PinMode::WriteDigital => "write_digital",
            PinMode::WriteAnalog => "write_analog",
            PinMode::Display => "display",
            PinMode::Button => "button",
            PinMode::Music => "music",
            PinMode::AudioPlay => "audio",
            PinMode::Touch => "touch",
            PinMode::I2c => "i2c",
            PinMode::Spi => "spi",
        }
    }
}

/// Fixed table of `N` pins and their current modes
#[derive(Debug, Clone)]
pub struct PinArbiter<const N: usize> {
    modes: [PinMode; N],
    audio_active: bool,
}

impl<const N: usize> PinArbiter<N> {
    /// Create an arbiter with every pin unused
    pub const fn new() -> Self {
        Self {
            modes: [PinMode::Unused; N],
            audio_active: false,
        }
    }

    /// Create an arbiter with board-specific initial modes
    ///
    /// Typically marks hard-wired button pins as [`PinMode::Button`].
    pub const fn with_modes(modes: [PinMode; N]) -> Self {
        Self {
            modes,
            audio_active: false,
        }
    }

    /// Set a pin's mode unconditionally (board setup only)
    pub fn set_initial_mode(&mut self, pin: u8, mode: PinMode) -> Result<()> {
        let i = Self::index(pin)?;
        self.modes[i] = mode;
        Ok(())
    }

    /// Tell the arbiter whether music or audio is currently playing
    pub fn set_audio_active(&mut self, active: bool) {
        self.audio_active = active;
    }

    /// Current mode of a pin
    pub fn mode(&self, pin: u8) -> Result<PinMode> {
        Ok(self.modes[Self::index(pin)?])
    }

    /// Check whether the pin's current owner would give it up
    pub fn can_be_acquired(&self, pin: u8) -> Result<bool> {
        let current = self.mode(pin)?;
        Ok(self.releasable(current))
    }

    /// Validate that `mode` could claim `pin`, without changing anything
    pub fn check_acquire(&self, pin: u8, mode: PinMode) -> Result<()> {
        let current = self.mode(pin)?;
        if current == mode || self.is_button_read(current, mode) || self.releasable(current) {
            Ok(())
        } else {
            Err(Error::ResourceConflict { pin, mode: current })
        }
    }

    /// Move `pin` into `mode`
    ///
    /// Returns `Ok(true)` if the mode changed and `Ok(false)` if the pin
    /// was already usable in that mode (a button pin satisfies a digital
    /// read). Fails with [`Error::ResourceConflict`] if the current owner
    /// cannot release the pin.
    pub fn acquire(&mut self, pin: u8, mode: PinMode) -> Result<bool> {
        self.check_acquire(pin, mode)?;
        let i = Self::index(pin)?;
        let current = self.modes[i];
        if current == mode || self.is_button_read(current, mode) {
            return Ok(false);
        }
        self.modes[i] = mode;
        Ok(true)
    }

    /// Return a pin to [`PinMode::Unused`]
    pub fn free(&mut self, pin: u8) -> Result<()> {
        let i = Self::index(pin)?;
        self.modes[i] = PinMode::Unused;
        Ok(())
    }

    fn releasable(&self, mode: PinMode) -> bool {
        match mode.release() {
            Release::Free => true,
            Release::WhenAudioIdle => !self.audio_active,
            Release::Never => false,
        }
    }

    fn is_button_read(&self, current: PinMode, requested: PinMode) -> bool {
        current == PinMode::Button && requested == PinMode::ReadDigital
    }

    fn index(pin: u8) -> Result<usize> {
        if (pin as usize) < N {
            Ok(pin as usize)
        } else {
            Err(Error::OutOfBounds(IndexError::TooLarge))
        }
    }
}

impl<const N: usize> Default for PinArbiter<N> {
    fn default() -> Self {
        Self::new()
    }
}
