//! Port traits — the boundary between the range service and the outside world.
//!
//! ```text
//!   Console ──▶ RangeService ──▶ Range (appliance state)
//!                    │
//!                    └────────▶ EventSink (stdout / log)
//! ```
//!
//! The [`RangeService`](super::service::RangeService) consumes both ports
//! via generics, so the service never prints anything itself.

use crate::config::BURNER_COUNT;
use crate::error::RangeError;
use crate::range::RangeSnapshot;

// ───────────────────────────────────────────────────────────────
// Range port (domain → appliance state)
// ───────────────────────────────────────────────────────────────

/// Command surface of a kitchen range.
pub trait Range {
    /// Replace every burner level at once. Levels are not validated.
    fn set_burners(&mut self, levels: [i32; BURNER_COUNT]);

    /// Energise the oven element.
    fn turn_oven_on(&mut self);

    /// De-energise the oven element and restore the ambient temperature.
    fn turn_oven_off(&mut self);

    /// Accepted and ignored.
    fn set_oven_timer(&mut self, hours: u32, minutes: u32);

    /// Set the oven temperature.
    ///
    /// Fails with [`RangeError::OvenOff`] while the oven is off, leaving
    /// the temperature untouched.
    fn set_oven_temp(&mut self, celsius: i32) -> Result<(), RangeError>;

    /// Human-readable snapshot of all fields.
    fn describe(&self) -> String;

    /// Structured copy of all fields.
    fn snapshot(&self) -> RangeSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → console / logging)
// ───────────────────────────────────────────────────────────────

/// The service emits structured [`RangeEvent`](super::events::RangeEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::RangeEvent);
}
