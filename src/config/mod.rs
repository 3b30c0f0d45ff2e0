//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{TourError, TourResult};

/// Speed presets exposed by the UI (interval = base / preset).
pub const SPEED_PRESETS: [u32; 4] = [1, 2, 4, 8];

/// Top-level tour configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TourConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Board side length (the board is `board_size` × `board_size`).
    #[validate(range(min = 4, max = 64))]
    #[serde(default = "default_board_size")]
    pub board_size: u8,

    /// Master seed for the knight's starting square.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Tick interval at 1× speed, in milliseconds.
    #[validate(range(min = 1))]
    #[serde(default = "default_base_interval_ms")]
    pub base_interval_ms: u64,

    /// Speed multiplier; the effective interval is `base_interval_ms / speed`.
    #[validate(range(min = 1, max = 64))]
    #[serde(default = "default_speed")]
    pub speed: u32,

    /// Whether the UI emits a sound cue per move.
    #[serde(default)]
    pub sound: bool,

    /// Whether the UI draws the directional guide to the next square.
    #[serde(default)]
    pub guide: bool,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

const fn default_board_size() -> u8 {
    8
}

const fn default_seed() -> u64 {
    42
}

const fn default_base_interval_ms() -> u64 {
    2000
}

const fn default_speed() -> u32 {
    1
}

impl TourConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> TourResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TourResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> TourConfigBuilder {
        TourConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> TourResult<()> {
        if self.base_interval_ms / u64::from(self.speed) == 0 {
            return Err(TourError::config(format!(
                "Speed {} reduces the {} ms base interval below 1 ms",
                self.speed, self.base_interval_ms
            )));
        }
        Ok(())
    }

    /// Effective tick interval in milliseconds at the configured speed.
    /// Clamped to at least 1 ms; a zero speed is treated as 1×.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        (self.base_interval_ms / u64::from(self.speed.max(1))).max(1)
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            board_size: default_board_size(),
            seed: default_seed(),
            base_interval_ms: default_base_interval_ms(),
            speed: default_speed(),
            sound: false,
            guide: false,
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct TourConfigBuilder {
    board_size: Option<u8>,
    seed: Option<u64>,
    base_interval_ms: Option<u64>,
    speed: Option<u32>,
    sound: Option<bool>,
    guide: Option<bool>,
}

impl TourConfigBuilder {
    /// Set the board side length.
    #[must_use]
    pub const fn board_size(mut self, size: u8) -> Self {
        self.board_size = Some(size);
        self
    }

    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the 1× tick interval in milliseconds.
    #[must_use]
    pub const fn base_interval_ms(mut self, ms: u64) -> Self {
        self.base_interval_ms = Some(ms);
        self
    }

    /// Set the speed multiplier.
    #[must_use]
    pub const fn speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Enable or disable the sound cue.
    #[must_use]
    pub const fn sound(mut self, on: bool) -> Self {
        self.sound = Some(on);
        self
    }

    /// Enable or disable the directional guide.
    #[must_use]
    pub const fn guide(mut self, on: bool) -> Self {
        self.guide = Some(on);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> TourConfig {
        let defaults = TourConfig::default();
        TourConfig {
            schema_version: defaults.schema_version,
            board_size: self.board_size.unwrap_or(defaults.board_size),
            seed: self.seed.unwrap_or(defaults.seed),
            base_interval_ms: self
                .base_interval_ms
                .unwrap_or(defaults.base_interval_ms),
            speed: self.speed.unwrap_or(defaults.speed),
            sound: self.sound.unwrap_or(defaults.sound),
            guide: self.guide.unwrap_or(defaults.guide),
        }
    }
}
