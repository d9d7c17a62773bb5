// Configuration type definitions

use serde::Deserialize;

/// Screen corner the toast stack is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    BottomRight,
    TopRight,
}

/// Toast timing and placement section
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_enter_ms")]
    pub enter_ms: u64,
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
    #[serde(default)]
    pub corner: Corner,
}

fn default_enter_ms() -> u64 {
    400
}

fn default_display_ms() -> u64 {
    5000
}

fn default_exit_ms() -> u64 {
    400
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            enter_ms: default_enter_ms(),
            display_ms: default_display_ms(),
            exit_ms: default_exit_ms(),
            corner: Corner::default(),
        }
    }
}

/// Demo sequence section
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

fn default_stagger_ms() -> u64 {
    1000
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            stagger_ms: default_stagger_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}
