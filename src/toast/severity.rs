//! Severity levels and their visual presentation
//!
//! Every severity has exactly one style entry; unknown severity names
//! degrade to `Info` rather than failing.

use ratatui::style::Color;

/// Severity tag - determines the presentation of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue)
    #[default]
    Info,
    /// Operation succeeded (green)
    Success,
    /// Non-blocking warning (yellow)
    Warning,
    /// Something went wrong (red)
    Error,
}

impl Severity {
    /// Parse a severity name, degrading to `Info` for anything unrecognized.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Get the style for this severity
    pub fn style(self) -> ToastStyle {
        match self {
            Severity::Info => ToastStyle {
                bg: Color::Blue,
                accent: Color::LightBlue,
                fg: Color::White,
                icon: "ℹ",
            },
            Severity::Success => ToastStyle {
                bg: Color::Green,
                accent: Color::LightGreen,
                fg: Color::Black,
                icon: "✔",
            },
            Severity::Warning => ToastStyle {
                bg: Color::Yellow,
                accent: Color::LightYellow,
                fg: Color::Black,
                icon: "⚠",
            },
            Severity::Error => ToastStyle {
                bg: Color::Red,
                accent: Color::LightRed,
                fg: Color::White,
                icon: "✖",
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub bg: Color,
    pub accent: Color,
    pub fg: Color,
    pub icon: &'static str,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Severity::Info.style()
    }
}
