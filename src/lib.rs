//! ttoast library - Transient toast notifications for terminal UIs
//!
//! This library exposes the notifier service and toast lifecycle machinery
//! so they can be embedded in other ratatui applications and tested.

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod notifier;
pub mod toast;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notifier::{ExternalNotify, Notifier};
pub use toast::{Phase, Severity, Timings, Toast, ToastStack};
