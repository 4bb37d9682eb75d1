//! Kitchen range controller library.
//!
//! Four stovetop burners, an oven element and its temperature, driven
//! through a small command interface. The console binary is a thin
//! wrapper around [`app::service::RangeService`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod range;
