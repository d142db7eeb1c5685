// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

fn default_true() -> bool {
    true
}

fn default_slide_duration_ms() -> u64 {
    400
}

/// Presentation configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Shift the focused window toward the mouse pointer
    #[serde(default = "default_true")]
    pub parallax: bool,
    /// Start with the status bar collapsed
    #[serde(default)]
    pub status_bar_collapsed: bool,
    /// How long the slide indicator stays after next/previous
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,
}

impl UiConfig {
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_duration_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            parallax: true,
            status_bar_collapsed: false,
            slide_duration_ms: default_slide_duration_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}
