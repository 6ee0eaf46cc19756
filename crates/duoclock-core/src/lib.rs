//! Duoclock core crate.
//!
//! Platform-free domain logic for the dual-format clock: wall-clock
//! timestamps, the two text formatters, and the tick scheduling policy.
//! The GUI crate consumes this; nothing here touches windowing or the GPU.

pub mod format;
pub mod tick;
pub mod timestamp;

pub use format::{PLACEHOLDER_12H, PLACEHOLDER_24H, format_12h, format_24h};
pub use tick::{TICK_INTERVAL, TickSchedule};
pub use timestamp::{Clock, SystemClock, Timestamp};
