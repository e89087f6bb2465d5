use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use super::SharedTimer;

/// Handle to a running ticker task.
///
/// Dropping the guard aborts the task, so a ticker can never outlive the
/// scope that spawned it. The task also exits on its own the first time it
/// finds the tracker out of the running phase, whichever comes first.
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the once-per-`period` recomputation task for a shared tracker.
///
/// Each timing session gets a fresh ticker; starting a new session replaces
/// the previous guard, which cancels any ticker still attached to the old
/// session. The lock is held only for the duration of one `tick()` call.
pub fn spawn_ticker(timer: SharedTimer, period: Duration) -> TickerGuard {
    let handle = tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick resolves immediately; consume it so the loop
        // recomputes on the period boundaries.
        interval.tick().await;
        loop {
            interval.tick().await;
            let mut tracker = timer.lock().await;
            if !tracker.is_running() {
                break;
            }
            tracker.tick();
        }
        debug!("ticker task finished: tracker left the running phase");
    });

    TickerGuard { handle }
}
