pub mod errors;
pub mod events;
pub mod host;
pub mod types;

pub use errors::{ConfigError, DockError, DockviewError, FrameError};
pub use events::{ListenerId, PanelEvent, PanelEventBus, PanelEventKind, Subscription};
pub use host::{PanelHost, PanelState};
pub use types::{
    Anchor, DockLocation, DropItem, FrameId, PanelId, PanelKind, Point, Rect, Size,
    TabOrientation,
};

pub type Result<T> = std::result::Result<T, DockviewError>;
