//! IPC between Rust and the pages hosted in wrapper webviews.
//!
//! - **JS -> Rust**: pages call `window.dockview.ipc.send(kind, payload)`,
//!   which posts a JSON `IpcMessage` to the webview's IPC handler.
//! - **Rust -> JS**: scripts built here are run with `evaluate_script`.

use serde::{Deserialize, Serialize};

use crate::frame::FrameClasses;

/// Message kind the init script uses to report pointer enter/leave.
pub const HOVER_KIND: &str = "hover";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    pub payload: IpcPayload,
}

/// Payload of an IPC message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Bool(bool),
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// `Some(hovering)` for a hover report.
    pub fn hover_state(&self) -> Option<bool> {
        match (&*self.kind, &self.payload) {
            (HOVER_KIND, IpcPayload::Bool(hovering)) => Some(*hovering),
            _ => None,
        }
    }
}

/// Injected into every wrapper webview before any page script runs.
///
/// Sets up the IPC bridge, reports pointer enter/leave as `hover`
/// messages and turns off pointer input while the frame is `moving`.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.dockview = window.dockview || {};
    window.dockview.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        }
    };

    var root = document.documentElement;
    root.addEventListener('mouseenter', function() {
        window.dockview.ipc.send('hover', true);
    });
    root.addEventListener('mouseleave', function() {
        window.dockview.ipc.send('hover', false);
    });

    document.addEventListener('DOMContentLoaded', function() {
        var style = document.createElement('style');
        style.textContent = 'html.dockview-moving, html.dockview-moving * { pointer-events: none !important; }';
        document.head.appendChild(style);
    });
})();
"#;

/// CSS classes on the page's root element mirroring `classes`.
pub fn class_names(classes: FrameClasses) -> Vec<&'static str> {
    [
        (FrameClasses::HIDDEN, "dockview-hidden"),
        (FrameClasses::FLOATING, "dockview-floating"),
        (FrameClasses::FLOATING_FOCUS, "dockview-floating-focus"),
        (FrameClasses::MOVING, "dockview-moving"),
        (FrameClasses::PERSISTENT, "dockview-persistent"),
    ]
    .into_iter()
    .filter(|(flag, _)| classes.contains(*flag))
    .map(|(_, name)| name)
    .collect()
}

/// Generate a JS snippet that replaces the root element's dockview classes.
pub fn js_apply_classes(classes: FrameClasses) -> String {
    let names = serde_json::to_string(&class_names(classes)).unwrap_or_else(|_| "[]".to_string());
    format!(
        "(function(n){{var c=document.documentElement.classList;\
         Array.from(c).filter(function(k){{return k.indexOf('dockview-')===0;}})\
         .forEach(function(k){{c.remove(k);}});n.forEach(function(k){{c.add(k);}});}})({names});"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hover_message() {
        let msg = IpcMessage::from_json(r#"{"kind":"hover","payload":true}"#).unwrap();
        assert_eq!(msg.hover_state(), Some(true));
        let msg = IpcMessage::from_json(r#"{"kind":"hover","payload":false}"#).unwrap();
        assert_eq!(msg.hover_state(), Some(false));
    }

    #[test]
    fn other_kinds_are_not_hover() {
        let msg = IpcMessage::from_json(r#"{"kind":"title","payload":"x"}"#).unwrap();
        assert_eq!(msg.hover_state(), None);
        assert!(matches!(msg.payload, IpcPayload::Text(ref t) if t == "x"));
    }

    #[test]
    fn null_payload_parses() {
        let msg = IpcMessage::from_json(r#"{"kind":"ping","payload":null}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::None | IpcPayload::Json(_)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn init_script_posts_hover_reports() {
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
        assert!(IPC_INIT_SCRIPT.contains(&format!("send('{HOVER_KIND}', true)")));
        assert!(IPC_INIT_SCRIPT.contains(&format!("send('{HOVER_KIND}', false)")));
    }

    #[test]
    fn class_names_follow_flags() {
        assert!(class_names(FrameClasses::empty()).is_empty());
        assert_eq!(
            class_names(FrameClasses::FLOATING | FrameClasses::MOVING),
            vec!["dockview-floating", "dockview-moving"]
        );
        assert!(js_apply_classes(FrameClasses::HIDDEN).contains(r#"["dockview-hidden"]"#));
    }
}
