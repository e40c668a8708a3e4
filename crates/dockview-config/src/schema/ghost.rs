//! Drag ghost timing and appearance.

use serde::{Deserialize, Serialize};

/// Drag preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Duration of anchor / float transitions in ms (valid range: 0-1000).
    pub anchor_duration_ms: u64,
    /// Fade-in when a drag starts, in ms (valid range: 0-1000).
    pub fade_in_duration_ms: u64,
    /// Fade-out before the preview is removed, in ms (valid range: 0-1000).
    pub fade_out_duration_ms: u64,
    /// Opacity while free-floating (valid range: 0.0-1.0).
    pub floating_opacity: f64,
    /// Opacity while locked to a drop anchor (valid range: 0.0-1.0).
    pub anchored_opacity: f64,
    /// Tick interval of async teardown in ms (valid range: 1-100).
    pub frame_interval_ms: u64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            anchor_duration_ms: 150,
            fade_in_duration_ms: 200,
            fade_out_duration_ms: 100,
            floating_opacity: 0.3,
            anchored_opacity: 0.3,
            frame_interval_ms: 16,
        }
    }
}
