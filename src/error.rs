//! Error types for the kitchen range controller.
//!
//! Hand-written enums with `Display` impls, all `Copy` so they can be
//! passed through the service layer without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Range errors
// ---------------------------------------------------------------------------

/// A command the range refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A temperature was requested while the oven element is off.
    OvenOff,
}

impl RangeError {
    /// User-facing advisory text for this rejection.
    pub const fn advisory(self) -> &'static str {
        match self {
            Self::OvenOff => "Turn oven on, prior to setting temperature.",
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OvenOff => write!(f, "oven temperature set while oven is off"),
        }
    }
}

impl std::error::Error for RangeError {}

// ---------------------------------------------------------------------------
// Console command parse errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandParseError {
    /// The line had no tokens.
    Empty,
    /// The first token is not a known command keyword.
    UnknownCommand,
    /// The command was given the wrong number of arguments.
    WrongArity { expected: usize, got: usize },
    /// An argument could not be parsed as an integer of the right width.
    InvalidNumber,
    /// `oven` was followed by something other than `on` / `off`.
    InvalidOvenSwitch,
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand => write!(f, "unknown command"),
            Self::WrongArity { expected, got } => {
                write!(f, "expected {expected} argument(s), got {got}")
            }
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::InvalidOvenSwitch => write!(f, "expected `oven on` or `oven off`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The config document could not be deserialized.
    Corrupted,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
        }
    }
}

impl std::error::Error for ConfigError {}
