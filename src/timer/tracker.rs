use tokio::time::Instant;

/// Where a tracker currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// No session running and no completed duration held.
    Idle,
    /// A session is being timed.
    Running,
    /// The last session completed; its duration is frozen in `final_secs`.
    Completed,
}

/// Elapsed-time tracker for one in-flight operation.
///
/// Driven by three inputs: `start()` when the operation begins, `tick()`
/// once per second while it runs, and `observe()` with the caller's
/// loading flag. The elapsed count is recomputed from the start instant on
/// every tick rather than incremented, so a late or missed tick cannot
/// drift it.
///
/// At any point the tracker is in exactly one of three phases: running
/// (`started_at` set), completed (`final_secs` set), or idle (neither).
#[derive(Debug, Clone, Default)]
pub struct ElapsedTimer {
    started_at: Option<Instant>,
    elapsed_secs: u64,
    final_secs: Option<u64>,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh tracker behind the shared handle consumers pass around.
    pub fn shared() -> super::SharedTimer {
        std::sync::Arc::new(tokio::sync::Mutex::new(Self::new()))
    }

    /// Begin a new timing session.
    ///
    /// Supersedes any session in flight: the elapsed count restarts at
    /// zero and a previously frozen duration is cleared. Callable at any
    /// time; cannot fail.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.elapsed_secs = 0;
        self.final_secs = None;
    }

    /// Recompute the elapsed whole seconds since `start()`.
    ///
    /// The only place the elapsed count changes. No-op unless a session is
    /// running.
    pub fn tick(&mut self) {
        if let Some(started_at) = self.started_at {
            self.elapsed_secs = started_at.elapsed().as_secs();
        }
    }

    /// Feed the external loading flag to the tracker.
    ///
    /// When the flag drops to false while a session is running, the
    /// session ends and the last ticked count is frozen as the final
    /// duration — unless not even one whole second was ticked, in which
    /// case the session is discarded without a final time and the tracker
    /// returns to idle. That zero-elapsed case mirrors the long-standing
    /// behavior of the inline timers this module replaced; a sub-second
    /// completion reports no duration at all. `observe(true)` changes
    /// nothing.
    pub fn observe(&mut self, loading: bool) {
        if loading {
            return;
        }
        if self.started_at.take().is_some() && self.elapsed_secs > 0 {
            self.final_secs = Some(self.elapsed_secs);
        }
    }

    /// Force the tracker back to idle, dropping any session and any
    /// frozen duration.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed_secs = 0;
        self.final_secs = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whole seconds ticked so far; meaningful only while running.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Frozen duration of the most recently completed session.
    pub fn final_secs(&self) -> Option<u64> {
        self.final_secs
    }

    pub fn phase(&self) -> TimerPhase {
        if self.started_at.is_some() {
            TimerPhase::Running
        } else if self.final_secs.is_some() {
            TimerPhase::Completed
        } else {
            TimerPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_idle() {
        let timer = ElapsedTimer::new();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_secs(), 0);
        assert_eq!(timer.final_secs(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_enters_running_with_clean_counters() {
        let mut timer = ElapsedTimer::new();
        timer.start();
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert_eq!(timer.elapsed_secs(), 0);
        assert_eq!(timer.final_secs(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observe_true_changes_nothing() {
        let mut timer = ElapsedTimer::new();
        timer.start();
        tokio::time::advance(std::time::Duration::from_secs(2)).await;
        timer.tick();
        timer.observe(true);
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert_eq!(timer.elapsed_secs(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_a_completed_session() {
        let mut timer = ElapsedTimer::new();
        timer.start();
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        timer.tick();
        timer.observe(false);
        assert_eq!(timer.final_secs(), Some(1));

        timer.reset();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.final_secs(), None);
        assert_eq!(timer.elapsed_secs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_is_a_noop_when_not_running() {
        let mut timer = ElapsedTimer::new();
        tokio::time::advance(std::time::Duration::from_secs(5)).await;
        timer.tick();
        assert_eq!(timer.elapsed_secs(), 0);
    }
}
