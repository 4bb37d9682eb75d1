//! Outbound range events.
//!
//! The [`RangeService`](super::service::RangeService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. The console adapter
//! prints advisories and snapshots; everything is logged.

use crate::config::BURNER_COUNT;
use crate::range::RangeSnapshot;

/// Structured events emitted by the range service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeEvent {
    /// The service has started (carries the initial state).
    Started(RangeSnapshot),

    /// All burner levels were replaced.
    BurnersChanged([i32; BURNER_COUNT]),

    /// The oven was switched on or off.
    OvenSwitched { on: bool },

    /// The oven temperature was accepted.
    OvenTempChanged(i32),

    /// A command was rejected; the text is meant for the user.
    Advisory(&'static str),

    /// Human-readable state description requested by the user.
    Snapshot(String),
}
