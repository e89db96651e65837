use tokio::time::{sleep_until, Duration, Instant};

/// Restartable quiet-period timer stored as an explicit deadline.
///
/// Every [`schedule`](Debounce::schedule) pushes the deadline out to one
/// full delay from now, so a burst of edits collapses into the single run
/// that happens once the form goes quiet. The owner chooses how to drain
/// it: [`fire_if_due`](Debounce::fire_if_due) for opportunistic polling,
/// [`flush`](Debounce::flush) to run early, or
/// [`settle`](Debounce::settle) to wait the deadline out.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Restarts the quiet period from now.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drops a pending run without executing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Clears and reports a deadline that has already passed.
    pub fn fire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Clears a pending deadline without waiting, reporting whether one
    /// was set.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Waits out a pending deadline and clears it. Returns immediately
    /// when nothing is scheduled.
    pub async fn settle(&mut self) -> bool {
        match self.deadline.take() {
            Some(deadline) => {
                sleep_until(deadline).await;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn schedule_restarts_the_quiet_period() {
        let mut timer = Debounce::from_millis(200);
        timer.schedule();
        advance(Duration::from_millis(150)).await;
        assert!(!timer.fire_if_due());

        timer.schedule();
        advance(Duration::from_millis(150)).await;
        assert!(!timer.fire_if_due());

        advance(Duration::from_millis(60)).await;
        assert!(timer.fire_if_due());
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn settle_waits_out_the_deadline() {
        let mut timer = Debounce::from_millis(200);
        timer.schedule();

        let before = Instant::now();
        assert!(timer.settle().await);
        assert!(Instant::now() - before >= Duration::from_millis(200));
        assert!(!timer.is_pending());

        assert!(!timer.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn flush_clears_without_waiting() {
        let mut timer = Debounce::from_millis(200);
        assert!(!timer.flush());

        timer.schedule();
        assert!(timer.flush());
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_the_pending_run() {
        let mut timer = Debounce::from_millis(200);
        timer.schedule();
        timer.cancel();

        advance(Duration::from_millis(300)).await;
        assert!(!timer.fire_if_due());
    }
}
