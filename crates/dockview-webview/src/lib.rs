//! Embedded content for dockview panels.
//!
//! - `frame`: wrappers that keep a surface overlaid on a panel's container
//!   (absolute, iframe and web-view variants) and the registry routing
//!   docker events to them
//! - `manager`: `wry` webviews backing those surfaces, with IPC, page-load
//!   and navigation handlers
//! - `content`: panel pages served from disk over `dockview://`

pub mod content;
pub mod events;
pub mod frame;
pub mod ipc;
pub mod manager;

pub use content::{Asset, AssetError, PanelAssets};
pub use events::{PageLoadState, WebViewEvent};
pub use frame::{
    AbsoluteContainer, Content, EmbeddedContent, FrameClasses, FrameOverlay, FrameRegistry,
    FrameRequest, FrameSurface, IFrameContainer, WebViewContainer,
};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
