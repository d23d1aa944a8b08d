use std::time::{Duration, Instant};

use chrono::{DateTime, Duration as ChronoDuration, Utc};

use crate::data::Fixture;
use crate::i18n::welcome_template;
use crate::notify::NotificationQueue;
use crate::timers::Timeout;

/// First fixture in dataset order that kicks off no earlier than
/// `now - grace`; a match that started a moment ago still counts. Falls back
/// to the last fixture when nothing qualifies. A grace reaching past the
/// earliest representable date admits every fixture.
pub fn select_featured_fixture(
    fixtures: &[Fixture],
    now: DateTime<Utc>,
    grace: Duration,
) -> Option<&Fixture> {
    let cutoff = ChronoDuration::from_std(grace)
        .ok()
        .and_then(|grace| now.checked_sub_signed(grace));
    fixtures
        .iter()
        .find(|f| cutoff.is_none_or(|cutoff| f.kickoff >= cutoff))
        .or_else(|| fixtures.last())
}

pub fn welcome_text(language: &str, fixture: &Fixture) -> (String, String) {
    let template = welcome_template(language);
    let body = template.message.replace("{opponent}", &fixture.opponent);
    (template.title.to_string(), body)
}

#[derive(Debug, Clone)]
pub struct WelcomeScheduler {
    timeout: Timeout,
    grace: Duration,
    display: Duration,
    language: Option<String>,
}

impl WelcomeScheduler {
    pub fn new(delay: Duration, grace: Duration, display: Duration) -> Self {
        Self {
            timeout: Timeout::new(delay),
            grace,
            display,
            language: None,
        }
    }

    /// Arm the delayed welcome for `language`. A pending one is replaced.
    pub fn schedule(&mut self, language: &str, now: Instant) {
        self.language = Some(language.to_string());
        self.timeout.arm(now);
    }

    /// Reschedules only when the language actually differs from the last one.
    pub fn language_changed(&mut self, language: &str, now: Instant) -> bool {
        if self.language.as_deref() == Some(language) {
            return false;
        }
        self.schedule(language, now);
        true
    }

    pub fn cancel(&mut self) {
        self.timeout.cancel();
    }

    pub fn is_scheduled(&self) -> bool {
        self.timeout.is_pending()
    }

    /// Enqueue the welcome once its delay elapsed; returns the new id.
    pub fn poll(
        &mut self,
        now: Instant,
        wall_now: DateTime<Utc>,
        fixtures: &[Fixture],
        queue: &mut NotificationQueue,
    ) -> Option<String> {
        if !self.timeout.fire(now) {
            return None;
        }
        let fixture = select_featured_fixture(fixtures, wall_now, self.grace)?;
        let language = self.language.as_deref().unwrap_or("en");
        let (title, body) = welcome_text(language, fixture);
        Some(queue.push(
            title,
            body,
            Some(fixture.opponent_logo.clone()),
            Some(self.display),
            now,
        ))
    }
}
