//! Split layout configuration.

use serde::{Deserialize, Serialize};

/// Split layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between frames in pixels (valid range: 0-20).
    pub gap: u32,
    /// Padding around the docker root in pixels (valid range: 0-40).
    pub outer_padding: u32,
    /// Smallest width or height a split may leave a frame with.
    pub min_pane_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 6,
            outer_padding: 0,
            min_pane_size: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.gap, 6);
        assert_eq!(config.outer_padding, 0);
        assert!((config.min_pane_size - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn layout_config_partial_toml() {
        let config: LayoutConfig = toml::from_str("gap = 12").unwrap();
        assert_eq!(config.gap, 12);
        assert_eq!(config.outer_padding, 0);
    }
}
