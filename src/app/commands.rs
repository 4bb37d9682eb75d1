//! Inbound commands to the range service.
//!
//! These come from the console, one per line, and are interpreted by
//! [`RangeService`](super::service::RangeService).

use core::str::FromStr;

use crate::config::BURNER_COUNT;
use crate::error::CommandParseError;

/// Commands that the console can send into the range service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCommand {
    /// `burners 3 7 0 10`
    SetBurners([i32; BURNER_COUNT]),

    /// `oven on`
    OvenOn,

    /// `oven off`
    OvenOff,

    /// `timer 1 30`
    SetOvenTimer { hours: u32, minutes: u32 },

    /// `temp 200`
    SetOvenTemp(i32),

    /// `describe` or `status`
    Describe,
}

impl FromStr for RangeCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(CommandParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match keyword.to_ascii_lowercase().as_str() {
            "burners" => {
                expect_arity(&args, BURNER_COUNT)?;
                let mut levels = [0i32; BURNER_COUNT];
                for (slot, arg) in levels.iter_mut().zip(&args) {
                    *slot = parse_number(arg)?;
                }
                Ok(Self::SetBurners(levels))
            }
            "oven" => {
                expect_arity(&args, 1)?;
                match args[0].to_ascii_lowercase().as_str() {
                    "on" => Ok(Self::OvenOn),
                    "off" => Ok(Self::OvenOff),
                    _ => Err(CommandParseError::InvalidOvenSwitch),
                }
            }
            "timer" => {
                expect_arity(&args, 2)?;
                Ok(Self::SetOvenTimer {
                    hours: parse_number(args[0])?,
                    minutes: parse_number(args[1])?,
                })
            }
            "temp" => {
                expect_arity(&args, 1)?;
                Ok(Self::SetOvenTemp(parse_number(args[0])?))
            }
            "describe" | "status" => {
                expect_arity(&args, 0)?;
                Ok(Self::Describe)
            }
            _ => Err(CommandParseError::UnknownCommand),
        }
    }
}

fn expect_arity(args: &[&str], expected: usize) -> Result<(), CommandParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandParseError::WrongArity {
            expected,
            got: args.len(),
        })
    }
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, CommandParseError> {
    token.parse().map_err(|_| CommandParseError::InvalidNumber)
}
