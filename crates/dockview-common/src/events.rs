//! Typed panel lifecycle events and the subscription bus that carries them.
//!
//! The docker emits `PanelEvent`s for a panel; anything that wants to react
//! subscribes per `(panel, kind)` and gets a `Subscription` back. Dropping
//! interest means handing that subscription back to `unsubscribe`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::PanelId;

/// Discriminant of a `PanelEvent`, used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelEventKind {
    VisibilityChanged,
    BeginDock,
    EndDock,
    MoveStarted,
    MoveEnded,
    ResizeStarted,
    ResizeEnded,
    Moved,
    Resized,
    Attached,
    Detached,
    GainFocus,
    LostFocus,
    PersistentOpened,
    PersistentClosed,
    Closed,
    OrderChanged,
}

impl PanelEventKind {
    pub const ALL: [PanelEventKind; 17] = [
        Self::VisibilityChanged,
        Self::BeginDock,
        Self::EndDock,
        Self::MoveStarted,
        Self::MoveEnded,
        Self::ResizeStarted,
        Self::ResizeEnded,
        Self::Moved,
        Self::Resized,
        Self::Attached,
        Self::Detached,
        Self::GainFocus,
        Self::LostFocus,
        Self::PersistentOpened,
        Self::PersistentClosed,
        Self::Closed,
        Self::OrderChanged,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelEvent {
    VisibilityChanged,
    BeginDock,
    EndDock,
    MoveStarted,
    MoveEnded,
    ResizeStarted,
    ResizeEnded,
    Moved,
    Resized,
    Attached,
    Detached,
    GainFocus,
    LostFocus,
    PersistentOpened,
    PersistentClosed,
    Closed,
    /// The panel's floating window moved to stacking layer `layer`.
    OrderChanged { layer: u32 },
}

impl PanelEvent {
    pub fn kind(&self) -> PanelEventKind {
        match self {
            Self::VisibilityChanged => PanelEventKind::VisibilityChanged,
            Self::BeginDock => PanelEventKind::BeginDock,
            Self::EndDock => PanelEventKind::EndDock,
            Self::MoveStarted => PanelEventKind::MoveStarted,
            Self::MoveEnded => PanelEventKind::MoveEnded,
            Self::ResizeStarted => PanelEventKind::ResizeStarted,
            Self::ResizeEnded => PanelEventKind::ResizeEnded,
            Self::Moved => PanelEventKind::Moved,
            Self::Resized => PanelEventKind::Resized,
            Self::Attached => PanelEventKind::Attached,
            Self::Detached => PanelEventKind::Detached,
            Self::GainFocus => PanelEventKind::GainFocus,
            Self::LostFocus => PanelEventKind::LostFocus,
            Self::PersistentOpened => PanelEventKind::PersistentOpened,
            Self::PersistentClosed => PanelEventKind::PersistentClosed,
            Self::Closed => PanelEventKind::Closed,
            Self::OrderChanged { .. } => PanelEventKind::OrderChanged,
        }
    }
}

/// Identifies whoever registered a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

/// Proof of a live subscription. Not `Clone`: each one is handed back to
/// `PanelEventBus::unsubscribe` exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    panel: PanelId,
    kind: PanelEventKind,
    listener: ListenerId,
}

impl Subscription {
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn kind(&self) -> PanelEventKind {
        self.kind
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: u64,
    panel: PanelId,
    kind: PanelEventKind,
    listener: ListenerId,
}

/// Subscription table for panel events. Delivery order is subscription
/// order.
#[derive(Debug, Default)]
pub struct PanelEventBus {
    entries: Vec<Entry>,
    next_id: u64,
}

impl PanelEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        panel: PanelId,
        kind: PanelEventKind,
        listener: ListenerId,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            panel,
            kind,
            listener,
        });
        trace!(%panel, ?kind, ?listener, "subscribed");
        Subscription {
            id,
            panel,
            kind,
            listener,
        }
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != subscription.id);
        let removed = self.entries.len() != before;
        if removed {
            trace!(panel = %subscription.panel, kind = ?subscription.kind, "unsubscribed");
        }
        removed
    }

    /// Listeners interested in `event` on `panel`, in subscription order.
    pub fn listeners(&self, panel: PanelId, event: &PanelEvent) -> Vec<ListenerId> {
        let kind = event.kind();
        self.entries
            .iter()
            .filter(|e| e.panel == panel && e.kind == kind)
            .map(|e| e.listener)
            .collect()
    }

    pub fn subscription_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(PanelEvent::Moved.kind(), PanelEventKind::Moved);
        assert_eq!(
            PanelEvent::OrderChanged { layer: 3 }.kind(),
            PanelEventKind::OrderChanged
        );
    }

    #[test]
    fn all_kinds_are_distinct() {
        use std::collections::HashSet;
        let set: HashSet<_> = PanelEventKind::ALL.iter().collect();
        assert_eq!(set.len(), PanelEventKind::ALL.len());
    }

    #[test]
    fn listeners_follow_subscription_order() {
        let mut bus = PanelEventBus::new();
        let panel = PanelId(1);
        let _a = bus.subscribe(panel, PanelEventKind::Moved, ListenerId(2));
        let _b = bus.subscribe(panel, PanelEventKind::Moved, ListenerId(1));
        let _c = bus.subscribe(panel, PanelEventKind::Resized, ListenerId(3));

        assert_eq!(
            bus.listeners(panel, &PanelEvent::Moved),
            vec![ListenerId(2), ListenerId(1)]
        );
        assert_eq!(
            bus.listeners(panel, &PanelEvent::Resized),
            vec![ListenerId(3)]
        );
    }

    #[test]
    fn listeners_are_scoped_to_panel() {
        let mut bus = PanelEventBus::new();
        let _a = bus.subscribe(PanelId(1), PanelEventKind::Closed, ListenerId(1));
        assert!(bus.listeners(PanelId(2), &PanelEvent::Closed).is_empty());
    }

    #[test]
    fn unsubscribe_removes_entry_once() {
        let mut bus = PanelEventBus::new();
        let sub = bus.subscribe(PanelId(1), PanelEventKind::Moved, ListenerId(1));
        let twin = Subscription {
            id: sub.id,
            panel: sub.panel,
            kind: sub.kind,
            listener: sub.listener,
        };
        assert_eq!(bus.subscription_count(), 1);
        assert!(bus.unsubscribe(sub));
        assert_eq!(bus.subscription_count(), 0);
        assert!(!bus.unsubscribe(twin));
    }

    #[test]
    fn listeners_keep_subscription_order() {
        let mut bus = PanelEventBus::new();
        for kind in PanelEventKind::ALL {
            let _ = bus.subscribe(PanelId(1), kind, ListenerId(9));
        }
        let _ = bus.subscribe(PanelId(1), PanelEventKind::Moved, ListenerId(4));
        assert_eq!(bus.subscription_count(), PanelEventKind::ALL.len() + 1);
        assert_eq!(
            bus.listeners(PanelId(1), &PanelEvent::Moved),
            vec![ListenerId(9), ListenerId(4)]
        );
        assert!(bus.listeners(PanelId(2), &PanelEvent::Moved).is_empty());
    }

    #[test]
    fn event_serializes_tagged() {
        let json = serde_json::to_string(&PanelEvent::OrderChanged { layer: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"OrderChanged","data":{"layer":2}}"#);
        let back: PanelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PanelEvent::OrderChanged { layer: 2 });
    }
}
