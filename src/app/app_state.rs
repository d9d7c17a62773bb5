use std::time::{Duration, Instant};

use crate::config::{Config, Corner};
use crate::demo::DemoState;
use crate::notifier::Notifier;
use crate::toast::Timings;

pub struct App {
    pub notifier: Notifier,
    pub demo: DemoState,
    pub corner: Corner,
    pub should_quit: bool,
    /// Exit once every toast has retired (one-shot CLI invocations)
    pub one_shot: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let timings = Timings {
            enter: Duration::from_millis(config.toast.enter_ms),
            display: Duration::from_millis(config.toast.display_ms),
            exit: Duration::from_millis(config.toast.exit_ms),
        };

        Self {
            notifier: Notifier::builtin(timings),
            demo: DemoState::new(Duration::from_millis(config.demo.stagger_ms)),
            corner: config.toast.corner,
            should_quit: false,
            one_shot: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance timers: fire due demo entries, retire expired toasts, and in
    /// one-shot mode quit once nothing is left to show.
    pub fn tick(&mut self, now: Instant) {
        self.demo.tick(now, &mut self.notifier);
        self.notifier.tick(now);

        if self.one_shot && self.demo.is_idle() && self.notifier.active_count() == 0 {
            self.should_quit = true;
        }
    }
}
