//! Console event sink adapter.
//!
//! Implements [`EventSink`] by printing the user-facing events (advisories
//! and state snapshots) to a writer, stdout in the binary, and logging
//! every event through the `log` facade.

use std::io::Write;

use log::{info, warn};

use crate::app::events::RangeEvent;
use crate::app::ports::EventSink;

/// Adapter that prints advisories and snapshots, one per line.
pub struct ConsoleEventSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("console write failed: {}", e);
        }
    }
}

impl ConsoleEventSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> EventSink for ConsoleEventSink<W> {
    fn emit(&mut self, event: &RangeEvent) {
        match event {
            RangeEvent::Started(s) => {
                info!(
                    "START | burners={:?} | oven_on={} | T={}\u{00b0}C",
                    s.burners, s.oven_on, s.oven_temp_c
                );
            }
            RangeEvent::BurnersChanged(levels) => {
                info!("BURNERS | {:?}", levels);
            }
            RangeEvent::OvenSwitched { on } => {
                info!("OVEN | {}", if *on { "ON" } else { "OFF" });
            }
            RangeEvent::OvenTempChanged(celsius) => {
                info!("OVEN | T={}\u{00b0}C", celsius);
            }
            RangeEvent::Advisory(text) => {
                warn!("ADVISORY | {}", text);
                self.print_line(text);
            }
            RangeEvent::Snapshot(text) => {
                info!("STATUS | {}", text);
                self.print_line(text);
            }
        }
    }
}
