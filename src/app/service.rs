//! Range service — the core that console commands flow through.
//!
//! [`RangeService`] owns a [`Range`] implementation and turns each
//! [`RangeCommand`] into calls on it, reporting the outcome as a
//! [`RangeEvent`] through an injected [`EventSink`].
//!
//! ```text
//!  RangeCommand ──▶ ┌──────────────┐ ──▶ EventSink
//!                   │ RangeService │
//!                   └──────┬───────┘
//!                          ▼
//!                    Range (KitchenRange)
//! ```
//!
//! Rejected commands never escape this layer: they become
//! [`RangeEvent::Advisory`] and the range is left unchanged.

use log::{info, warn};

use crate::config::RangeConfig;
use crate::range::{KitchenRange, RangeSnapshot};

use super::commands::RangeCommand;
use super::events::RangeEvent;
use super::ports::{EventSink, Range};

// ───────────────────────────────────────────────────────────────
// RangeService
// ───────────────────────────────────────────────────────────────

pub struct RangeService<R: Range = KitchenRange> {
    range: R,
    command_count: u64,
}

impl RangeService<KitchenRange> {
    /// Build a service around a fresh [`KitchenRange`].
    pub fn from_config(config: &RangeConfig) -> Self {
        Self::new(KitchenRange::new(config))
    }
}

impl<R: Range> RangeService<R> {
    pub fn new(range: R) -> Self {
        Self {
            range,
            command_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let snapshot = self.range.snapshot();
        sink.emit(&RangeEvent::Started(snapshot));
        info!("RangeService started: {}", self.range.describe());
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one command to the range. Never fails; rejections are
    /// reported to `sink` as advisories.
    pub fn handle_command(&mut self, cmd: RangeCommand, sink: &mut impl EventSink) {
        self.command_count += 1;

        match cmd {
            RangeCommand::SetBurners(levels) => {
                self.range.set_burners(levels);
                sink.emit(&RangeEvent::BurnersChanged(levels));
            }
            RangeCommand::OvenOn => {
                self.range.turn_oven_on();
                sink.emit(&RangeEvent::OvenSwitched { on: true });
            }
            RangeCommand::OvenOff => {
                self.range.turn_oven_off();
                sink.emit(&RangeEvent::OvenSwitched { on: false });
            }
            RangeCommand::SetOvenTimer { hours, minutes } => {
                self.range.set_oven_timer(hours, minutes);
            }
            RangeCommand::SetOvenTemp(celsius) => match self.range.set_oven_temp(celsius) {
                Ok(()) => sink.emit(&RangeEvent::OvenTempChanged(celsius)),
                Err(e) => {
                    warn!("Rejected oven temperature {}: {}", celsius, e);
                    sink.emit(&RangeEvent::Advisory(e.advisory()));
                }
            },
            RangeCommand::Describe => {
                sink.emit(&RangeEvent::Snapshot(self.range.describe()));
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn snapshot(&self) -> RangeSnapshot {
        self.range.snapshot()
    }

    pub fn describe(&self) -> String {
        self.range.describe()
    }

    /// Commands handled since construction, rejected ones included.
    pub fn command_count(&self) -> u64 {
        self.command_count
    }

    pub fn range(&self) -> &R {
        &self.range
    }
}
