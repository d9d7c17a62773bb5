use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::error::TtoastError;
use crate::toast::Severity;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> Result<(), TtoastError> {
        self.tick(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_key_event_at(key, Instant::now());
    }

    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) {
        let ctrl_shift = key.modifiers.contains(KeyModifiers::CONTROL)
            && key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            // Terminals report the shifted letter as uppercase, so match both
            KeyCode::Char('n') | KeyCode::Char('N') if ctrl_shift => {
                self.demo.start(now);
            }

            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            // Sample toasts, one per severity
            KeyCode::Char('s') => {
                self.notifier
                    .show_message_at("Saved successfully", Severity::Success, now);
            }
            KeyCode::Char('e') => {
                self.notifier
                    .show_message_at("Something went wrong", Severity::Error, now);
            }
            KeyCode::Char('w') => {
                self.notifier
                    .show_message_at("Careful with that", Severity::Warning, now);
            }
            KeyCode::Char('i') => {
                self.notifier
                    .show_message_at("For your information", Severity::Info, now);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
