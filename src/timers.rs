use std::time::{Duration, Instant};

/// One-shot delayed task. Arming again replaces the pending deadline. A delay
/// too large to represent as an `Instant` never comes due.
#[derive(Debug, Clone)]
pub struct Timeout {
    delay: Duration,
    due: Option<Instant>,
}

impl Timeout {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    pub fn armed(delay: Duration, now: Instant) -> Self {
        let mut timeout = Self::new(delay);
        timeout.arm(now);
        timeout
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn arm(&mut self, now: Instant) {
        self.due = now.checked_add(self.delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Armed and not yet due at `now`.
    pub fn is_waiting(&self, now: Instant) -> bool {
        self.due.is_some_and(|due| now < due)
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Periodic task. `poll` reports how many periods elapsed since the last poll.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
        }
    }

    pub fn started(period: Duration, now: Instant) -> Self {
        let mut interval = Self::new(period);
        interval.restart(now);
        interval
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn restart(&mut self, now: Instant) {
        self.next = now.checked_add(self.period);
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }
        let behind = now.duration_since(next).as_nanos() / self.period.as_nanos();
        let ticks = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
        self.next = self
            .period
            .checked_mul(ticks)
            .and_then(|elapsed| next.checked_add(elapsed));
        ticks
    }
}
