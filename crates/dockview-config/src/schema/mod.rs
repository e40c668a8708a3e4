//! Configuration schema types for Dockview.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod frame;
mod ghost;
mod layout;
mod system;
mod window;

pub use frame::*;
pub use ghost::*;
pub use layout::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DockviewConfig {
    pub ghost: GhostConfig,
    pub frame: FrameConfig,
    pub layout: LayoutConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: DockviewConfig = toml::from_str("").unwrap();
        assert_eq!(config.ghost.anchor_duration_ms, 150);
        assert_eq!(config.window.title, "Dockview");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_override_independently() {
        let config: DockviewConfig = toml::from_str(
            r#"
[ghost]
fade_out_duration_ms = 250

[window]
width = 1600
"#,
        )
        .unwrap();
        assert_eq!(config.ghost.fade_out_duration_ms, 250);
        assert_eq!(config.ghost.anchor_duration_ms, 150);
        assert_eq!(config.window.width, 1600);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.layout.gap, 6);
    }
}
