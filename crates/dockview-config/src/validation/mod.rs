//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod ghost;
mod helpers;
mod layout;


use crate::schema::DockviewConfig;
use dockview_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DockviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    ghost::validate_ghost(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_frame(&mut errors, config);
    layout::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
