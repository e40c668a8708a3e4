//! Dockview configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{DockviewConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use dockview_common::ConfigError;

/// Load config from `path` if given, else from the platform default path,
/// and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<DockviewConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}
