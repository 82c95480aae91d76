//! Quiescence debouncing for search input.

use std::time::{Duration, Instant};

/// Default quiescence window before a search commits.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Coalesces rapid keystrokes into a single committed search.
///
/// Every `input` restarts the quiescence clock; `poll` hands the text
/// back exactly once, after the clock has run out. Time comes in from
/// the caller as explicit instants, so the commit point is deterministic
/// under test.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_SEARCH_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        SearchDebouncer {
            delay,
            pending: None,
        }
    }

    /// Record a keystroke, restarting the quiescence clock.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Commit the pending text if the clock has run out. Returns the
    /// text at most once per commit.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let ready = match &self.pending {
            Some((_, at)) => now.saturating_duration_since(*at) >= self.delay,
            None => false,
        };
        if ready {
            self.pending.take().map(|(text, _)| text)
        } else {
            None
        }
    }

    /// Commit the pending text immediately, e.g. on explicit submit.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }

    /// Drop the pending text without committing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
