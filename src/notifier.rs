//! The notifier service
//!
//! An explicit, constructed service (no ambient global) with a one-time
//! backend choice made at construction: either delegate every message to a
//! richer external notification system, or render toasts with the built-in
//! stack. The choice is never re-evaluated per call.

use std::time::{Duration, Instant};

use crate::toast::{Severity, Timings, Toast, ToastStack};

/// A pre-existing richer notification system the notifier can defer to.
///
/// When a notifier is constructed with an external delegate, every display
/// call is forwarded here with the configured display duration and no toast
/// is constructed locally.
pub trait ExternalNotify {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration);
}

enum Backend {
    Builtin(ToastStack),
    External(Box<dyn ExternalNotify>),
}

/// Displays transient messages, either via the built-in toast stack or a
/// delegate chosen once at construction
pub struct Notifier {
    backend: Backend,
    timings: Timings,
}

impl Notifier {
    /// Notifier that renders with the built-in toast stack
    pub fn builtin(timings: Timings) -> Self {
        Self {
            backend: Backend::Builtin(ToastStack::new()),
            timings,
        }
    }

    /// Notifier that forwards every message to `delegate`
    pub fn external(delegate: impl ExternalNotify + 'static, timings: Timings) -> Self {
        Self {
            backend: Backend::External(Box::new(delegate)),
            timings,
        }
    }

    /// Display a message with the default `Info` severity
    pub fn show(&mut self, message: &str) {
        self.show_message(message, Severity::Info);
    }

    /// Display a message with the given severity.
    ///
    /// Never fails; the worst a caller can do is pass a message that is
    /// awkward to read.
    pub fn show_message(&mut self, message: &str, severity: Severity) {
        self.show_message_at(message, severity, Instant::now());
    }

    /// Display a message with an explicit show instant
    pub fn show_message_at(&mut self, message: &str, severity: Severity, now: Instant) {
        match &mut self.backend {
            Backend::External(delegate) => {
                #[cfg(debug_assertions)]
                log::debug!("forwarding [{}] {} to delegate", severity.label(), message);
                delegate.notify(message, severity, self.timings.display);
            }
            Backend::Builtin(stack) => {
                stack.push(Toast::new_at(message, severity, self.timings, now));
            }
        }
    }

    /// Retire expired toasts. No-op for the external backend.
    pub fn tick(&mut self, now: Instant) {
        if let Backend::Builtin(stack) = &mut self.backend {
            stack.tick(now);
        }
    }

    /// Number of live toasts owned by the built-in stack
    pub fn active_count(&self) -> usize {
        match &self.backend {
            Backend::Builtin(stack) => stack.len(),
            Backend::External(_) => 0,
        }
    }

    /// The built-in toast stack, if that backend was chosen
    pub fn stack(&self) -> Option<&ToastStack> {
        match &self.backend {
            Backend::Builtin(stack) => Some(stack),
            Backend::External(_) => None,
        }
    }

    /// Mutable access to the built-in toast stack
    pub fn stack_mut(&mut self) -> Option<&mut ToastStack> {
        match &mut self.backend {
            Backend::Builtin(stack) => Some(stack),
            Backend::External(_) => None,
        }
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod notifier_tests;
