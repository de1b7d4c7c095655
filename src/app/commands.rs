//! Inbound commands to the screen service.
//!
//! These represent what the UI text field reports to the
//! [`ScreenService`](super::service::ScreenService), one per change, in
//! typed order.

/// Commands that the input adapter sends into the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// The Celsius field now holds this text (full contents, not a delta).
    TextChanged(String),

    /// Empty the Celsius field.
    Clear,
}
