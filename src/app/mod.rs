//! Application core — pure range logic, zero I/O.
//!
//! Console input arrives as [`commands::RangeCommand`]s, the
//! [`service::RangeService`] applies them to a [`ports::Range`], and the
//! results leave as [`events::RangeEvent`]s through [`ports::EventSink`].

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
