//! Outbound application events.
//!
//! The [`ScreenService`](super::service::ScreenService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters decide what
//! to do with them.

/// Structured events emitted by the screen core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The screen was created and its view model built.
    Created,

    /// CelsiusInput was written; carries its length in chars.
    InputChanged { chars: usize },

    /// FahrenheitDisplay was recomputed and delivered to the label.
    DisplayUpdated(String),

    /// A new view was attached to the retained view model.
    Rebound,

    /// The screen was torn down after `changes` input changes.
    Destroyed { changes: u64 },
}
