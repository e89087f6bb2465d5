//! Elapsed-time tracking for in-flight backend requests.
//!
//! `ElapsedTimer` is the state machine, `spawn_ticker` the once-per-second
//! recomputation task, and `SharedTimer` the handle shared between them
//! and any display loop. The tracker itself performs no I/O; it is driven
//! entirely by `start()`, ticks, and the caller's loading flag.

mod ticker;
mod tracker;

pub use ticker::{TickerGuard, spawn_ticker};
pub use tracker::{ElapsedTimer, TimerPhase};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Tracker handle shared between the runner, the ticker task and display
/// code.
pub type SharedTimer = Arc<Mutex<ElapsedTimer>>;

/// Render a second count for humans: `42s`, `2m 3s`.
pub fn format_duration(secs: u64) -> String {
    let mins = secs / 60;
    let rem = secs % 60;
    if mins > 0 {
        format!("{}m {}s", mins, rem)
    } else {
        format!("{}s", rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(42), "42s");
    }

    #[test]
    fn test_format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(123), "2m 3s");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "0s");
    }
}
