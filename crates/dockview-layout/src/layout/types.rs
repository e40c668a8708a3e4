//! Layout engine types and configuration.

use dockview_config::schema::LayoutConfig;

/// Configuration for the layout engine that computes frame positions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    /// Gap in pixels between frames.
    pub gap: u32,
    /// Outer padding in pixels around the docker root.
    pub outer_padding: u32,
    /// Minimum size for any frame dimension.
    pub min_pane_size: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for LayoutEngine {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            gap: config.gap,
            outer_padding: config.outer_padding,
            min_pane_size: config.min_pane_size,
        }
    }
}
