//! Frame hit-testing and embedded-content layering.

use serde::{Deserialize, Serialize};

/// Frame settings shared by drop checks and embedded content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Height of the title / tab strip in pixels (valid range: 0-100).
    pub title_height: f64,
    /// Fraction of a frame's width or height treated as a split edge
    /// (valid range: 0.05-0.5).
    pub edge_fraction: f64,
    /// Stacking layer of embedded content not in a floating window.
    pub layer_base: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            title_height: 24.0,
            edge_fraction: 0.25,
            layer_base: 1,
        }
    }
}
