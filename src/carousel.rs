use std::time::{Duration, Instant};

use crate::timers::{Interval, Timeout};

pub const GALLERY_PERIOD: Duration = Duration::from_secs(5);
pub const GALLERY_RESUME: Duration = Duration::from_secs(5);
pub const SIDEBAR_PERIOD: Duration = Duration::from_secs(8);

/// Auto-advancing slide index. Manual selection pauses the rotation until
/// the resume delay passes without further input.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    advance: Interval,
    resume: Timeout,
}

impl Carousel {
    pub fn new(len: usize, period: Duration, resume_after: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            advance: Interval::started(period, now),
            resume: Timeout::new(resume_after),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.resume.is_pending()
    }

    pub fn tick(&mut self, now: Instant) {
        if self.resume.fire(now) {
            self.advance.restart(now);
        }
        let steps = self.advance.poll(now) as usize;
        if steps > 0 && self.len > 0 {
            self.index = (self.index + steps) % self.len;
        }
    }

    pub fn select(&mut self, index: usize, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.index = index % self.len;
        self.advance.cancel();
        self.resume.arm(now);
    }

    pub fn next(&mut self, now: Instant) {
        self.select(self.index + 1, now);
    }

    pub fn prev(&mut self, now: Instant) {
        let prev = if self.index == 0 {
            self.len.saturating_sub(1)
        } else {
            self.index - 1
        };
        self.select(prev, now);
    }

    /// Stop all timers, e.g. when the owning page goes away.
    pub fn stop(&mut self) {
        self.advance.cancel();
        self.resume.cancel();
    }
}
