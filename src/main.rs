//! Kitchen range console — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  stdin ──▶ RangeCommand ──▶ RangeService ──▶ stdout   │
//! │                                 │                    │
//! │                           KitchenRange               │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! One command per line (`burners 3 7 0 10`, `oven on`, `temp 200`,
//! `timer 1 30`, `oven off`, `describe`). Blank lines and `#` comments
//! are skipped.

#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use log::{info, warn};

use kitchen_range::adapters::console_sink::ConsoleEventSink;
use kitchen_range::app::commands::RangeCommand;
use kitchen_range::app::service::RangeService;
use kitchen_range::config::RangeConfig;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    info!("Kitchen range v{}", env!("CARGO_PKG_VERSION"));

    let config = RangeConfig::default();
    let mut service = RangeService::from_config(&config);
    let mut sink = ConsoleEventSink::stdout();
    service.start(&mut sink);

    let stdin = io::stdin();
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.with_context(|| format!("reading stdin line {}", lineno + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<RangeCommand>() {
            Ok(cmd) => service.handle_command(cmd, &mut sink),
            Err(e) => warn!("line {}: `{}`: {}", lineno + 1, line, e),
        }
    }

    info!("stdin closed after {} command(s)", service.command_count());
    Ok(())
}
