//! Toast module for ttoast
//!
//! Provides the toast lifecycle state machine and overlay rendering.
//! Any component in an application can push toasts through this module.

mod severity;
mod toast_render;
mod toast_state;

pub use severity::{Severity, ToastStyle};
pub use toast_render::render_toasts;
pub use toast_state::{Phase, Timings, Toast, ToastId, ToastStack};
