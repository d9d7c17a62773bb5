//! Toast lifecycle state machine
//!
//! A toast moves through Entering -> Visible -> Fading -> Removed. The phase
//! is a pure function of a caller-supplied instant, so the timing contract is
//! directly testable without sleeping.

use std::time::{Duration, Instant};

use super::severity::Severity;

/// Unique identifier for a toast within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Durations of the three timed stages of a toast's life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Entrance slide duration
    pub enter: Duration,
    /// How long the toast stays fully on screen
    pub display: Duration,
    /// Exit slide duration, after which the toast is retired
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            enter: Duration::from_millis(400),
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(400),
        }
    }
}

/// Lifecycle stage of a toast at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in from off-screen; already part of the visible set
    Entering,
    /// Fully on screen
    Visible,
    /// Sliding out, dimmed
    Fading,
    /// Past its exit deadline; no longer rendered and dropped on next tick
    Removed,
}

/// A single toast with message, severity, and timing
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    severity: Severity,
    timings: Timings,
    shown_at: Instant,
}

impl Toast {
    /// Create a toast shown now
    pub fn new(message: impl Into<String>, severity: Severity, timings: Timings) -> Self {
        Self::new_at(message, severity, timings, Instant::now())
    }

    /// Create a toast with an explicit show instant
    pub fn new_at(
        message: impl Into<String>,
        severity: Severity,
        timings: Timings,
        shown_at: Instant,
    ) -> Self {
        Self {
            id: ToastId::next(),
            message: message.into(),
            severity,
            timings,
            shown_at,
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Lifecycle phase at `now`.
    ///
    /// Checked newest-deadline-first so the progression stays monotonic even
    /// for degenerate timing configurations (e.g. display shorter than enter).
    pub fn phase(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.shown_at);
        let deadline = self.timings.display + self.timings.exit;

        if age >= deadline {
            Phase::Removed
        } else if age >= self.timings.display {
            Phase::Fading
        } else if age < self.timings.enter {
            Phase::Entering
        } else {
            Phase::Visible
        }
    }

    /// Fraction of the toast that is off-screen at `now`, in `0.0..=1.0`.
    ///
    /// 1.0 means fully off-screen (start of entrance, end of exit), 0.0 means
    /// resting on screen.
    pub fn offset_ratio(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.shown_at);
        match self.phase(now) {
            Phase::Entering => {
                if self.timings.enter.is_zero() {
                    0.0
                } else {
                    1.0 - (age.as_secs_f32() / self.timings.enter.as_secs_f32()).min(1.0)
                }
            }
            Phase::Visible => 0.0,
            Phase::Fading => {
                if self.timings.exit.is_zero() {
                    1.0
                } else {
                    let into_exit = age.saturating_sub(self.timings.display);
                    (into_exit.as_secs_f32() / self.timings.exit.as_secs_f32()).min(1.0)
                }
            }
            Phase::Removed => 1.0,
        }
    }
}

/// The set of live toasts, ordered oldest first
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast to the stack. Each display call owns exactly one entry.
    pub fn push(&mut self, toast: Toast) {
        #[cfg(debug_assertions)]
        log::debug!(
            "toast {:?} shown: [{}] {}",
            toast.id(),
            toast.severity().label(),
            toast.message()
        );
        self.toasts.push(toast);
    }

    /// Drop every toast whose phase is `Removed` at `now`.
    /// Returns the number of toasts retired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.phase(now) != Phase::Removed);
        before - self.toasts.len()
    }

    /// Remove a toast by id.
    ///
    /// Idempotent: removing an id that is no longer present is a no-op and
    /// returns `false`.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
            self.toasts.remove(pos);
            true
        } else {
            false
        }
    }

    /// Iterate live toasts, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
