//! Line-oriented terminal adapters.
//!
//! [`TerminalHost`] plays the UI text field: every input line is the full
//! field contents after one change.  [`TerminalDisplay`] plays both widgets
//! by writing tagged lines to any `io::Write`:
//!
//! ```text
//!   stdin  "37.5"   ──▶ TextChanged("37.5")
//!   stdout "= 99.50°"   (label)
//!   stdout "> "         (field, on create / rebind / clear)
//! ```

use std::io::{BufRead, Write};

use log::warn;

use crate::app::commands::AppCommand;
use crate::app::ports::{DisplayPort, EventSink};
use crate::app::service::ScreenService;
use crate::config::ScreenConfig;
use crate::error::Result;

/// Line that clears the field instead of being typed into it.
pub const CLEAR_DIRECTIVE: &str = ":clear";

// ───────────────────────────────────────────────────────────────
// Display
// ───────────────────────────────────────────────────────────────

/// [`DisplayPort`] over a writer.  Write failures are logged, never
/// returned; the port has no acknowledgement path.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_tagged(&mut self, tag: char, text: &str) {
        if let Err(e) = writeln!(self.out, "{} {}", tag, text).and_then(|()| self.out.flush()) {
            warn!("Display write failed: {}", e);
        }
    }
}

impl<W: Write> DisplayPort for TerminalDisplay<W> {
    fn set_input_text(&mut self, text: &str) {
        self.write_tagged('>', text);
    }

    fn set_output_text(&mut self, text: &str) {
        self.write_tagged('=', text);
    }
}

// ───────────────────────────────────────────────────────────────
// Host
// ───────────────────────────────────────────────────────────────

/// Feeds text-change commands from a line reader into a [`ScreenService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost {
    replay_keystrokes: bool,
}

impl TerminalHost {
    pub fn new(replay_keystrokes: bool) -> Self {
        Self { replay_keystrokes }
    }

    /// Full screen lifetime: create, feed until EOF, destroy.
    ///
    /// The screen is destroyed even when reading fails; the read error is
    /// returned afterwards.
    pub fn run_session(
        &self,
        reader: impl BufRead,
        config: &ScreenConfig,
        service: &mut ScreenService,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> Result<u64> {
        service.create(config, display, sink);
        let outcome = self.run(reader, service, display, sink);
        service.destroy(sink);
        outcome
    }

    /// Read until EOF.  Returns the number of commands sent.
    ///
    /// The service must already be created; lifecycle calls stay with the
    /// caller.
    pub fn run(
        &self,
        reader: impl BufRead,
        service: &mut ScreenService,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> Result<u64> {
        let mut sent = 0u64;
        let mut send = |cmd: AppCommand| {
            service.handle_command(cmd, display, sink);
            sent += 1;
        };

        for line in reader.lines() {
            let line = line?;

            if line == CLEAR_DIRECTIVE {
                send(AppCommand::Clear);
                continue;
            }

            if self.replay_keystrokes {
                for (end, _) in line.char_indices().skip(1) {
                    send(AppCommand::TextChanged(line[..end].to_owned()));
                }
            }
            send(AppCommand::TextChanged(line));
        }

        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_tags_each_widget() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_input_text("12");
        display.set_output_text("53.60°");
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "> 12\n= 53.60°\n");
    }

    #[test]
    fn failing_writer_is_swallowed() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut display = TerminalDisplay::new(Broken);
        display.set_output_text("32.00°");
    }
}
