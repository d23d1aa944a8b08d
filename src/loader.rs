use std::time::{Duration, Instant};

use rand::Rng;

use crate::timers::{Interval, Timeout};

const HOLD: Duration = Duration::from_millis(500);
const FADE: Duration = Duration::from_millis(800);
pub const DEFAULT_LINK_SPEED_MBPS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStage {
    Filling,
    Holding,
    Fading,
    Done,
}

/// Splash screen with a simulated progress bar; faster links fill it faster.
#[derive(Debug, Clone)]
pub struct InitialLoader {
    progress: f64,
    speed_mbps: f64,
    ticker: Interval,
    hold: Timeout,
    fade: Timeout,
    stage: LoaderStage,
}

impl InitialLoader {
    pub fn new(speed_mbps: f64, now: Instant) -> Self {
        let speed_mbps = if speed_mbps.is_finite() && speed_mbps > 0.0 {
            speed_mbps
        } else {
            DEFAULT_LINK_SPEED_MBPS
        };
        let step_ms = (1000.0 / speed_mbps).clamp(20.0, 200.0);
        Self {
            progress: 0.0,
            speed_mbps,
            ticker: Interval::started(Duration::from_millis(step_ms as u64), now),
            hold: Timeout::new(HOLD),
            fade: Timeout::new(FADE),
            stage: LoaderStage::Filling,
        }
    }

    pub fn finished() -> Self {
        Self {
            progress: 100.0,
            speed_mbps: DEFAULT_LINK_SPEED_MBPS,
            ticker: Interval::new(Duration::from_millis(200)),
            hold: Timeout::new(HOLD),
            fade: Timeout::new(FADE),
            stage: LoaderStage::Done,
        }
    }

    pub fn step_interval(&self) -> Duration {
        self.ticker.period()
    }

    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        match self.stage {
            LoaderStage::Filling => {
                let max_step = if self.speed_mbps > 5.0 { 5.0 } else { 2.0 };
                for _ in 0..self.ticker.poll(now) {
                    let increment = rng.gen_range(0.0..max_step) + 1.0;
                    self.progress = (self.progress + increment).min(100.0);
                    if self.progress >= 100.0 {
                        self.ticker.cancel();
                        self.hold.arm(now);
                        self.stage = LoaderStage::Holding;
                        break;
                    }
                }
            }
            LoaderStage::Holding => {
                if self.hold.fire(now) {
                    self.fade.arm(now);
                    self.stage = LoaderStage::Fading;
                }
            }
            LoaderStage::Fading => {
                if self.fade.fire(now) {
                    self.stage = LoaderStage::Done;
                }
            }
            LoaderStage::Done => {}
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress.floor() as u8
    }

    pub fn stage(&self) -> LoaderStage {
        self.stage
    }

    pub fn is_done(&self) -> bool {
        self.stage == LoaderStage::Done
    }
}
