use std::time::{Duration, Instant};

use rand::Rng;
use rand::distributions::Alphanumeric;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(6000);
pub const EXIT_ANIMATION: Duration = Duration::from_millis(500);
const ID_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub duration: Duration,
    shown_at: Instant,
    dismissed_at: Option<Instant>,
}

impl Notification {
    pub fn phase(&self) -> NotificationPhase {
        if self.dismissed_at.is_some() {
            NotificationPhase::Dismissed
        } else {
            NotificationPhase::Visible
        }
    }

    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.duration
    }

    /// Fraction of the display duration still left, for the countdown bar.
    pub fn remaining_fraction(&self, now: Instant) -> f64 {
        if self.dismissed_at.is_some() || self.duration.is_zero() {
            return 0.0;
        }
        let left = self.expires_at().saturating_duration_since(now);
        (left.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn gone(&self, now: Instant) -> bool {
        self.dismissed_at
            .is_some_and(|at| now.saturating_duration_since(at) >= EXIT_ANIMATION)
    }
}

/// Transient messages in insertion order. Producers that delay a message
/// (the welcome scheduler) hold it in their own timer until it is pushed;
/// from then on it is visible until it expires or is closed, and lingers for
/// the exit animation before it leaves the render list.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        icon: Option<String>,
        duration: Option<Duration>,
        now: Instant,
    ) -> String {
        let id = self.fresh_id();
        self.items.push(Notification {
            id: id.clone(),
            title: title.into(),
            body: body.into(),
            icon,
            duration: duration.unwrap_or(DEFAULT_DURATION),
            shown_at: now,
            dismissed_at: None,
        });
        id
    }

    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(ID_LEN)
                .map(|b| char::from(b).to_ascii_lowercase())
                .collect();
            if !self.items.iter().any(|n| n.id == id) {
                return id;
            }
        }
    }

    /// User close. Returns false when the id is unknown or already closing.
    pub fn dismiss(&mut self, id: &str, now: Instant) -> bool {
        match self
            .items
            .iter_mut()
            .find(|n| n.id == id && n.dismissed_at.is_none())
        {
            Some(n) => {
                n.dismissed_at = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn dismiss_latest(&mut self, now: Instant) -> bool {
        let Some(id) = self.visible().last().map(|n| n.id.clone()) else {
            return false;
        };
        self.dismiss(&id, now)
    }

    /// Expire elapsed notifications and drop those whose exit animation ended.
    pub fn tick(&mut self, now: Instant) {
        for n in &mut self.items {
            if n.dismissed_at.is_none() && now >= n.expires_at() {
                n.dismissed_at = Some(n.expires_at());
            }
        }
        self.items.retain(|n| !n.gone(now));
    }

    pub fn visible(&self) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.phase() == NotificationPhase::Visible)
            .collect()
    }

    /// Everything still on screen, including notifications playing their exit.
    pub fn rendered(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_lowercase_alphanumeric() {
        let mut q = NotificationQueue::new();
        let id = q.push("t", "b", None, None, Instant::now());
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn remaining_fraction_counts_down() {
        let start = Instant::now();
        let mut q = NotificationQueue::new();
        let id = q.push("t", "b", None, Some(Duration::from_secs(4)), start);
        let n = q.get(&id).unwrap();
        assert_eq!(n.remaining_fraction(start), 1.0);
        assert!((n.remaining_fraction(start + Duration::from_secs(1)) - 0.75).abs() < 1e-9);
        assert_eq!(n.remaining_fraction(start + Duration::from_secs(9)), 0.0);
    }
}
