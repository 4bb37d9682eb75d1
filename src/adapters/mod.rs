//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter        | Implements | Connects to          |
//! |----------------|------------|----------------------|
//! | `console_sink` | EventSink  | stdout + `log`       |

pub mod console_sink;
