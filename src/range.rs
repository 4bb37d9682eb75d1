//! Kitchen range state model.
//!
//! `KitchenRange` holds the burner levels, the oven on/off switch and the
//! oven temperature. It is the only implementer of the
//! [`Range`](crate::app::ports::Range) port.
//!
//! ## Oven invariant
//!
//! The temperature only changes while the oven is on. Turning the oven
//! off restores the ambient temperature from [`RangeConfig`].

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::app::ports::Range;
use crate::config::{BURNER_COUNT, RangeConfig};
use crate::error::RangeError;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A point-in-time copy of every range field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub burners: [i32; BURNER_COUNT],
    pub oven_on: bool,
    pub oven_temp_c: i32,
}

// ---------------------------------------------------------------------------
// KitchenRange
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct KitchenRange {
    /// Burner levels, nominally 0-10.
    burners: [i32; BURNER_COUNT],
    oven_on: bool,
    oven_temp_c: i32,
    ambient_temp_c: i32,
}

impl KitchenRange {
    /// All burners at 0, oven off, ambient temperature.
    pub fn new(config: &RangeConfig) -> Self {
        Self {
            burners: [0; BURNER_COUNT],
            oven_on: false,
            oven_temp_c: config.ambient_temp_c,
            ambient_temp_c: config.ambient_temp_c,
        }
    }

    pub fn burners(&self) -> [i32; BURNER_COUNT] {
        self.burners
    }

    pub fn is_oven_on(&self) -> bool {
        self.oven_on
    }

    pub fn oven_temp_c(&self) -> i32 {
        self.oven_temp_c
    }
}

impl Default for KitchenRange {
    fn default() -> Self {
        Self::new(&RangeConfig::default())
    }
}

impl Range for KitchenRange {
    fn set_burners(&mut self, levels: [i32; BURNER_COUNT]) {
        self.burners = levels;
    }

    fn turn_oven_on(&mut self) {
        self.oven_on = true;
    }

    fn turn_oven_off(&mut self) {
        self.oven_on = false;
        self.oven_temp_c = self.ambient_temp_c;
    }

    fn set_oven_timer(&mut self, hours: u32, minutes: u32) {
        // The range has no timer hardware yet.
        debug!("oven timer {}h{:02}m ignored", hours, minutes);
    }

    fn set_oven_temp(&mut self, celsius: i32) -> Result<(), RangeError> {
        if !self.oven_on {
            return Err(RangeError::OvenOff);
        }
        self.oven_temp_c = celsius;
        Ok(())
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            burners: self.burners,
            oven_on: self.oven_on,
            oven_temp_c: self.oven_temp_c,
        }
    }
}

impl fmt::Display for KitchenRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "burners:{:?} oven on:{} oven temperature:{}",
            self.burners, self.oven_on, self.oven_temp_c
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cold_and_off() {
        let r = KitchenRange::default();
        assert_eq!(r.burners(), [0, 0, 0, 0]);
        assert!(!r.is_oven_on());
        assert_eq!(r.oven_temp_c(), 23);
    }

    #[test]
    fn describe_reflects_burner_levels() {
        let mut r = KitchenRange::default();
        r.set_burners([3, 7, 0, 10]);
        assert_eq!(
            r.describe(),
            "burners:[3, 7, 0, 10] oven on:false oven temperature:23"
        );
    }

    #[test]
    fn burner_levels_are_not_clamped() {
        let mut r = KitchenRange::default();
        r.set_burners([11, -1, 300, i32::MAX]);
        assert_eq!(r.burners(), [11, -1, 300, i32::MAX]);
        assert_eq!(
            r.describe(),
            "burners:[11, -1, 300, 2147483647] oven on:false oven temperature:23"
        );
    }

    #[test]
    fn temperature_set_while_on() {
        let mut r = KitchenRange::default();
        r.turn_oven_on();
        assert_eq!(r.set_oven_temp(200), Ok(()));
        assert_eq!(r.oven_temp_c(), 200);
    }

    #[test]
    fn temperature_rejected_while_off() {
        let mut r = KitchenRange::default();
        assert_eq!(r.set_oven_temp(200), Err(RangeError::OvenOff));
        assert_eq!(r.oven_temp_c(), 23);
    }

    #[test]
    fn turning_off_restores_ambient() {
        let mut r = KitchenRange::default();
        r.turn_oven_on();
        r.set_oven_temp(180).unwrap();
        r.turn_oven_off();
        assert!(!r.is_oven_on());
        assert_eq!(r.oven_temp_c(), 23);
    }

    #[test]
    fn oven_switch_is_idempotent() {
        let mut r = KitchenRange::default();
        r.turn_oven_on();
        r.turn_oven_on();
        assert!(r.is_oven_on());
        r.turn_oven_off();
        r.turn_oven_off();
        assert!(!r.is_oven_on());
        assert_eq!(r.oven_temp_c(), 23);
    }

    #[test]
    fn timer_changes_nothing() {
        let mut r = KitchenRange::default();
        r.set_burners([1, 2, 3, 4]);
        r.turn_oven_on();
        r.set_oven_temp(150).unwrap();
        let before = r.snapshot();
        r.set_oven_timer(1, 30);
        assert_eq!(r.snapshot(), before);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let mut r = KitchenRange::default();
        r.set_burners([3, -2, 0, 400]);
        r.turn_oven_on();
        r.set_oven_temp(190).unwrap();
        let json = serde_json::to_string(&r.snapshot()).unwrap();
        assert_eq!(
            json,
            r#"{"burners":[3,-2,0,400],"oven_on":true,"oven_temp_c":190}"#
        );
        let back: RangeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r.snapshot());
    }

    #[test]
    fn ambient_comes_from_config() {
        let config = RangeConfig {
            ambient_temp_c: 18,
            ..Default::default()
        };
        let mut r = KitchenRange::new(&config);
        assert_eq!(r.oven_temp_c(), 18);
        r.turn_oven_on();
        r.set_oven_temp(220).unwrap();
        r.turn_oven_off();
        assert_eq!(r.oven_temp_c(), 18);
    }
}
