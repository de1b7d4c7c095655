//! Port traits: the hexagonal boundary between the screen logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ScreenService (domain)
//! ```
//!
//! Driven adapters (display, event sinks, config sources) implement these
//! traits.  The [`ScreenService`](super::service::ScreenService) consumes
//! them via generics at each call site, so the core never touches a
//! terminal or a file directly.

use crate::config::ScreenConfig;

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → UI widgets)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two widgets on the screen.
///
/// Neither call returns an acknowledgement.  Adapters that can fail
/// (terminals, sockets) log and carry on.
pub trait DisplayPort {
    /// Replace the Celsius text field contents.  Only called when the
    /// view is (re)bound or cleared, never echoing a keystroke back.
    fn set_input_text(&mut self, text: &str);

    /// Replace the Fahrenheit label text.
    fn set_output_text(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: config source → domain)
// ───────────────────────────────────────────────────────────────

/// Loads the screen configuration.
///
/// Implementations MUST run [`ScreenConfig::validate`] before returning a
/// config.  Out-of-range values are rejected with
/// [`ConfigError::ValidationFailed`], not clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<ScreenConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found at the source.
    NotFound,
    /// Stored config failed to deserialize.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the config source.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
