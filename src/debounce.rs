//! Edit coalescing for section-field changes.
//!
//! Rapid keystrokes in the section form would otherwise trigger a full
//! layout regeneration per character. Each qualifying edit re-arms a
//! single deadline; only once the window elapses with no further edits
//! does the deferred pass run. Pure `Instant` arithmetic — the engine's
//! `tick` supplies the clock, so tests drive time explicitly.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::{Duration, Instant};

use crate::consts::DEBOUNCE_MS;

/// Coalesces bursts of edits into one trailing-edge firing.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// A debouncer with the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, deadline: None }
    }

    /// Record an edit at `now`, cancelling any pending deadline and
    /// arming a new one.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Returns `true` exactly once per armed deadline, when `now` has
    /// reached it. Clears the deadline on firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any armed deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}
