//! Demo sequence for manual/visual verification
//!
//! Schedules one toast per severity, staggered a fixed interval apart, and
//! fires them from the event loop without blocking.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::notifier::Notifier;
use crate::toast::Severity;

/// The canonical demo script, in firing order
const SCRIPT: [(Severity, &str); 4] = [
    (Severity::Success, "Operation completed successfully!"),
    (Severity::Error, "Operation failed!"),
    (Severity::Warning, "Heads up: this is a warning!"),
    (Severity::Info, "Info: operation still in progress..."),
];

#[derive(Debug, Clone)]
struct DemoEntry {
    due: Instant,
    severity: Severity,
    message: &'static str,
}

/// Pending demo toasts, ticked from the event loop
#[derive(Debug)]
pub struct DemoState {
    stagger: Duration,
    pending: VecDeque<DemoEntry>,
}

impl DemoState {
    pub fn new(stagger: Duration) -> Self {
        Self {
            stagger,
            pending: VecDeque::new(),
        }
    }

    /// Schedule the full demo script starting at `now`.
    ///
    /// Restarting replaces any entries still pending from a previous run.
    pub fn start(&mut self, now: Instant) {
        #[cfg(debug_assertions)]
        log::debug!("demo started, stagger {:?}", self.stagger);

        self.pending = SCRIPT
            .iter()
            .enumerate()
            .map(|(i, (severity, message))| DemoEntry {
                due: now + self.stagger * i as u32,
                severity: *severity,
                message,
            })
            .collect();
    }

    /// Fire every entry that has come due. Returns the number fired.
    pub fn tick(&mut self, now: Instant, notifier: &mut Notifier) -> usize {
        let mut fired = 0;
        while self.pending.front().is_some_and(|entry| entry.due <= now) {
            if let Some(entry) = self.pending.pop_front() {
                notifier.show_message_at(entry.message, entry.severity, now);
                fired += 1;
            }
        }
        fired
    }

    /// True when no demo toasts remain to be fired
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod demo_tests;
