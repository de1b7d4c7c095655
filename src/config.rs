//! Screen configuration parameters
//!
//! Tunables for the converter screen and its terminal host.
//! Loaded once at startup through a [`ConfigPort`](crate::app::ports::ConfigPort);
//! every field falls back to its default when absent from the source.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Upper bound on fraction digits shown in the label.
pub const MAX_FRACTION_DIGITS: u8 = 6;

/// Upper bound on the unit suffix length, in chars.
pub const MAX_SUFFIX_CHARS: usize = 8;

/// Core screen configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    // --- Label formatting ---
    /// Digits after the decimal point in the Fahrenheit label (0-6)
    pub fraction_digits: u8,
    /// Text appended after the number
    pub unit_suffix: String,

    // --- Terminal host ---
    /// Feed every char prefix of an input line as its own keystroke
    pub replay_keystrokes: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            fraction_digits: 2,
            unit_suffix: String::from("\u{00b0}"),
            replay_keystrokes: false,
        }
    }
}

impl ScreenConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::ValidationFailed(
                "fraction_digits must be in 0..=6",
            ));
        }
        if self.unit_suffix.chars().count() > MAX_SUFFIX_CHARS {
            return Err(ConfigError::ValidationFailed(
                "unit_suffix must be at most 8 chars",
            ));
        }
        if self.unit_suffix.chars().any(char::is_control) {
            return Err(ConfigError::ValidationFailed(
                "unit_suffix must not contain control characters",
            ));
        }
        Ok(())
    }

    /// The label format this config describes.
    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            fraction_digits: self.fraction_digits,
            unit_suffix: self.unit_suffix.clone(),
        }
    }
}

/// How a Fahrenheit value is rendered into label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    pub fraction_digits: u8,
    pub unit_suffix: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        ScreenConfig::default().display_format()
    }
}
