use std::path::PathBuf;

use crate::types::{FrameId, PanelId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error("unknown panel: {0}")]
    UnknownPanel(PanelId),

    #[error("unknown frame: {0}")]
    UnknownFrame(FrameId),

    #[error("invalid drop: {0}")]
    InvalidDrop(String),

    #[error("cannot remove the last panel")]
    LastPanel,

    #[error("panel {0} is not moveable")]
    NotMoveable(PanelId),

    #[error("panel {0} is not closeable")]
    NotCloseable(PanelId),

    #[error("panel {0} is not a persistent drawer")]
    NotPersistent(PanelId),
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("no docker found for {0}")]
    DockerUnresolved(PanelId),

    #[error("no container found for {0}")]
    ContainerUnresolved(PanelId),

    #[error("surface error: {0}")]
    Surface(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dock(#[from] DockError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
