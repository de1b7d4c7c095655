//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured screen events through
//! the `log` facade.  Per-keystroke events go out at debug level so an
//! info-level run only shows lifecycle transitions.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Created => {
                info!("SCREEN | created");
            }
            AppEvent::InputChanged { chars } => {
                debug!("INPUT | chars={}", chars);
            }
            AppEvent::DisplayUpdated(text) => {
                debug!("LABEL | {:?}", text);
            }
            AppEvent::Rebound => {
                info!("SCREEN | rebound");
            }
            AppEvent::Destroyed { changes } => {
                info!("SCREEN | destroyed, changes={}", changes);
            }
        }
    }
}
