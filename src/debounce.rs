//! Debounce timer for filter input.
//!
//! A burst of rapid edits collapses into one filter application: every edit
//! overwrites the pending deadline (schedule-with-cancel-previous), and the
//! timer only fires after a quiet period with no further edits. Built on the
//! tokio clock so tests drive it with paused time.

use std::future::pending;
use tokio::time::{sleep_until, Duration, Instant};

/// Default quiet period before a filter edit is applied.
pub const DEBOUNCE_DELAY_MS: u64 = 300;

/// Single-deadline debounce timer.
///
/// This is the only cancellation semantic in the system: scheduling replaces
/// any pending deadline, and [`expired`](Debouncer::expired) resolves only
/// when the latest deadline passes untouched.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn with_default_delay() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_DELAY_MS))
    }

    /// Schedule (or reschedule) the deadline `delay` from now, cancelling any
    /// previously pending one.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve once the pending deadline passes; pends forever when nothing
    /// is scheduled. Intended for use inside `select!`; the future is
    /// recreated each loop iteration, so a reschedule between iterations
    /// always takes effect.
    pub async fn expired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let start = Instant::now();
        debouncer.schedule();
        debouncer.expired().await;

        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let start = Instant::now();

        debouncer.schedule();
        advance(Duration::from_millis(200)).await;
        debouncer.schedule();
        debouncer.expired().await;

        // The first deadline (at 300ms) must not fire; only the second
        // (at 200 + 300 = 500ms) does.
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_single_firing() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for _ in 0..5 {
            debouncer.schedule();
            advance(Duration::from_millis(100)).await;
        }
        debouncer.expired().await;
        assert!(!debouncer.is_pending());

        // Nothing left to fire afterwards
        let idle = timeout(Duration::from_secs(1), debouncer.expired()).await;
        assert!(idle.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_clears_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule();
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());

        let idle = timeout(Duration::from_secs(1), debouncer.expired()).await;
        assert!(idle.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::with_default_delay();
        tokio::select! {
            _ = debouncer.expired() => panic!("idle debouncer fired"),
            _ = sleep(Duration::from_secs(5)) => {}
        }
    }
}
