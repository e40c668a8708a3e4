//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Distance in logical pixels the mouse must travel with the button held
/// before a title-strip press turns into a drag.
pub(super) const DRAG_THRESHOLD: f64 = 4.0;
