//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-10000).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dockview".into(),
            width: 1280,
            height: 800,
        }
    }
}
