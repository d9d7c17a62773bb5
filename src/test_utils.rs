//! Shared test utilities for ttoast
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::notifier::ExternalNotify;
    use crate::toast::{Severity, Timings};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// The default timings used throughout the tests (400/5000/400 ms)
    pub fn test_timings() -> Timings {
        Timings::default()
    }

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Recorded arguments of one `ExternalNotify::notify` call
    pub type NotifyCall = (String, Severity, Duration);

    /// External delegate that records every call for later assertions
    pub struct RecordingNotify {
        calls: Rc<RefCell<Vec<NotifyCall>>>,
    }

    impl RecordingNotify {
        pub fn new() -> (Self, Rc<RefCell<Vec<NotifyCall>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl ExternalNotify for RecordingNotify {
        fn notify(&mut self, message: &str, severity: Severity, duration: Duration) {
            self.calls
                .borrow_mut()
                .push((message.to_string(), severity, duration));
        }
    }
}
