// Configuration management
//
// Handles APU configuration and settings persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::apu::components::SequencerWrap;
use crate::apu::constants::DEFAULT_STREAM_CAPACITY;
use crate::audio::MixMode;
use crate::error::ConfigError;

/// APU configuration
///
/// Every section is optional in the TOML file; missing keys take their
/// default values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApuConfig {
    /// Output stream settings
    pub stream: StreamConfig,

    /// Frame sequencer settings
    pub sequencer: SequencerConfig,

    /// Mixer settings
    pub mixer: MixerConfig,
}

/// Output stream configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Samples buffered before `push_sample` blocks
    pub capacity: usize,
}

/// Frame sequencer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Behavior when the countdown reaches zero
    pub wrap: SequencerWrap,

    /// Let the square length-disable bit stop length counter decrements
    pub length_halt: bool,
}

/// Mixer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Channels included in the output mix
    pub mode: MixMode,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            capacity: DEFAULT_STREAM_CAPACITY,
        }
    }
}

impl ApuConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use nes_apu::config::ApuConfig;
    ///
    /// let config = ApuConfig::from_toml_str("[stream]\ncapacity = 256\n").unwrap();
    /// assert_eq!(config.stream.capacity, 256);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ApuConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every setting is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stream.capacity == 0 {
            return Err(ConfigError::Invalid(
                "stream.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from file
    ///
    /// # Returns
    ///
    /// Result containing the configuration or an error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Save configuration to file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_apu::config::ApuConfig;
    ///
    /// let config = ApuConfig::default();
    /// config.save("apu_config.toml").expect("Failed to save configuration");
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = self.to_toml_string()?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from file or fall back to defaults
    ///
    /// If the file cannot be read or parsed, the default configuration is
    /// written in its place.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!("Could not load APU config ({}), using defaults", e);
            let config = Self::default();
            if let Err(e) = config.save(&path) {
                log::warn!("Could not save default APU config: {}", e);
            }
            config
        })
    }
}
