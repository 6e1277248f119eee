//! Auto-refresh scheduling.
//!
//! The controller owns at most one pending deadline. It never sleeps or spawns
//! anything itself; the event loop asks it with [`AutoRefresh::poll`] whether a
//! reload is due and how long it may block with [`AutoRefresh::time_until_due`].

use std::time::{Duration, Instant};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Whether the dashboard is currently in front of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct AutoRefresh {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoRefresh {
    /// A stopped controller
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the timer. Does nothing when already running.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// True when a reload is due. Re-arms one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// None while stopped
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Apply a visibility change. Returns true when an immediate reload is due.
    pub fn on_visibility(&mut self, visibility: Visibility, now: Instant) -> bool {
        match visibility {
            Visibility::Hidden => {
                self.stop();
                false
            }
            Visibility::Visible => {
                self.start(now);
                true
            }
        }
    }
}

impl Default for AutoRefresh {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}
