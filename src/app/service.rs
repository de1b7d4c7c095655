//! Screen service: the hexagonal core.
//!
//! [`ConverterViewModel`] owns CelsiusInput and the FahrenheitDisplay
//! derived from it.  [`ScreenService`] owns the view model for the lifetime
//! of one screen and pushes every change out through port traits injected
//! at call sites, so the whole thing is testable with mock adapters.
//!
//! ```text
//!  AppCommand ──▶ ┌─────────────────────────┐ ──▶ DisplayPort
//!                 │      ScreenService       │
//!                 │  ConverterViewModel      │ ──▶ EventSink
//!                 └─────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::{DisplayFormat, ScreenConfig};
use crate::convert::convert_with;
use crate::reactive::{Derived, LiveValue, ObserverCursor};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink};

// ───────────────────────────────────────────────────────────────
// ConverterViewModel
// ───────────────────────────────────────────────────────────────

/// Input state holder plus its derived Fahrenheit text.
#[derive(Debug)]
pub struct ConverterViewModel {
    conversion: Derived<String, String>,
}

impl ConverterViewModel {
    pub fn new(format: DisplayFormat) -> Self {
        let conversion = Derived::new(String::new(), move |celsius: &String| {
            convert_with(celsius, &format)
        });
        Self { conversion }
    }

    /// Write CelsiusInput; FahrenheitDisplay is recomputed before this
    /// returns.
    pub fn set_celsius(&mut self, text: impl Into<String>) {
        self.conversion.set_source(text.into());
    }

    pub fn celsius(&self) -> &str {
        self.conversion.source().get()
    }

    pub fn fahrenheit(&self) -> &str {
        self.conversion.value().get()
    }

    pub fn celsius_live(&self) -> &LiveValue<String> {
        self.conversion.source()
    }

    pub fn fahrenheit_live(&self) -> &LiveValue<String> {
        self.conversion.value()
    }
}

impl Default for ConverterViewModel {
    fn default() -> Self {
        Self::new(DisplayFormat::default())
    }
}

// ───────────────────────────────────────────────────────────────
// ScreenService
// ───────────────────────────────────────────────────────────────

/// Where the screen is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, no view model yet.
    Initialized,
    /// View model live; commands are accepted.
    Created,
    /// Torn down.  Terminal.
    Destroyed,
}

/// Owns one screen's view model and delivers its changes to the display.
#[derive(Debug)]
pub struct ScreenService {
    lifecycle: Lifecycle,
    vm: Option<ConverterViewModel>,
    /// Field observer; only advanced on bind, so typing is never echoed.
    input_cursor: ObserverCursor,
    /// Label observer; reset on rebind so the new view gets the value.
    output_cursor: ObserverCursor,
    change_count: u64,
}

impl ScreenService {
    /// Does **not** build the view model; call [`create`](Self::create) next.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Initialized,
            vm: None,
            input_cursor: ObserverCursor::new(),
            output_cursor: ObserverCursor::new(),
            change_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Build the view model and bind it to `display`.
    pub fn create(
        &mut self,
        config: &ScreenConfig,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        if self.lifecycle != Lifecycle::Initialized {
            warn!("create ignored in {:?}", self.lifecycle);
            return;
        }

        self.vm = Some(ConverterViewModel::new(config.display_format()));
        self.input_cursor = ObserverCursor::new();
        self.output_cursor = ObserverCursor::new();
        self.lifecycle = Lifecycle::Created;
        self.deliver_input(display);

        sink.emit(&AppEvent::Created);
        info!("Screen created");
        self.deliver_output(display, sink);
    }

    /// Attach a replacement view to the retained view model.
    ///
    /// Both widgets get the current values again; no recomputation happens.
    pub fn rebind(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        if self.vm.is_none() {
            warn!("rebind ignored in {:?}", self.lifecycle);
            return;
        }

        self.input_cursor.reset();
        self.output_cursor.reset();
        self.deliver_input(display);

        sink.emit(&AppEvent::Rebound);
        info!("Screen rebound");
        self.deliver_output(display, sink);
    }

    /// Drop the view model.  No state survives this call.
    pub fn destroy(&mut self, sink: &mut impl EventSink) {
        if self.lifecycle == Lifecycle::Destroyed {
            warn!("destroy ignored, already destroyed");
            return;
        }

        self.vm = None;
        self.lifecycle = Lifecycle::Destroyed;
        sink.emit(&AppEvent::Destroyed {
            changes: self.change_count,
        });
        info!("Screen destroyed after {} changes", self.change_count);
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one change reported by the text field.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        let Some(vm) = self.vm.as_mut() else {
            warn!("{:?} dropped in {:?}", cmd, self.lifecycle);
            return;
        };

        let text = match cmd {
            AppCommand::TextChanged(text) => text,
            AppCommand::Clear => {
                display.set_input_text("");
                String::new()
            }
        };

        let chars = text.chars().count();
        vm.set_celsius(text);
        self.change_count += 1;

        sink.emit(&AppEvent::InputChanged { chars });
        self.deliver_output(display, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Input changes handled since create.
    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    /// Current CelsiusInput, while the screen is live.
    pub fn celsius(&self) -> Option<&str> {
        self.vm.as_ref().map(ConverterViewModel::celsius)
    }

    /// Current FahrenheitDisplay, while the screen is live.
    pub fn fahrenheit(&self) -> Option<&str> {
        self.vm.as_ref().map(ConverterViewModel::fahrenheit)
    }

    // ── Internal ──────────────────────────────────────────────

    /// Push the field text to a freshly bound view.
    fn deliver_input(&mut self, display: &mut impl DisplayPort) {
        let Some(vm) = &self.vm else {
            return;
        };
        if let Some(text) = vm.celsius_live().observe(&mut self.input_cursor) {
            display.set_input_text(text);
        }
    }

    /// Push the label text if it changed since the last delivery.
    fn deliver_output(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        let Some(vm) = &self.vm else {
            return;
        };
        if let Some(text) = vm.fahrenheit_live().observe(&mut self.output_cursor) {
            debug!("celsius={:?} -> fahrenheit={:?}", vm.celsius(), text);
            display.set_output_text(text);
            sink.emit(&AppEvent::DisplayUpdated(text.clone()));
        }
    }
}

impl Default for ScreenService {
    fn default() -> Self {
        Self::new()
    }
}
