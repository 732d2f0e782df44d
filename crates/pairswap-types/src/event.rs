//! Lifecycle events emitted by the swap engine.
//!
//! Every successful open, close, or cancel produces one [`SwapEvent`].
//! Events form an append-only trail consumed by audit and UI
//! collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, SwapId};

/// The kind of lifecycle transition an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapEventKind {
    /// A swap was opened; party one's leg is in custody.
    Opened,
    /// A swap was closed; both legs settled.
    Closed,
    /// A swap was cancelled; party one's leg was returned.
    Cancelled,
}

impl std::fmt::Display for SwapEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opened => write!(f, "OPENED"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A single lifecycle event: which swap, which parties, when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapEvent {
    /// What happened.
    pub kind: SwapEventKind,
    /// The party that opened the swap.
    pub party_one: AccountId,
    /// The counterparty designated to close it.
    pub party_two: AccountId,
    /// The swap this event belongs to.
    pub swap_id: SwapId,
    /// When the event was emitted.
    pub at: DateTime<Utc>,
}

impl SwapEvent {
    /// Build an event stamped with the current time.
    #[must_use]
    pub fn now(
        kind: SwapEventKind,
        party_one: AccountId,
        party_two: AccountId,
        swap_id: SwapId,
    ) -> Self {
        Self {
            kind,
            party_one,
            party_two,
            swap_id,
            at: Utc::now(),
        }
    }
}

impl std::fmt::Display for SwapEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} party_one={} party_two={}",
            self.kind, self.swap_id, self.party_one, self.party_two
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", SwapEventKind::Opened), "OPENED");
        assert_eq!(format!("{}", SwapEventKind::Closed), "CLOSED");
        assert_eq!(format!("{}", SwapEventKind::Cancelled), "CANCELLED");
    }

    #[test]
    fn event_display_names_swap_and_parties() {
        let event = SwapEvent::now(
            SwapEventKind::Opened,
            AccountId::from_name("alice"),
            AccountId::from_name("bob"),
            SwapId(9),
        );
        let msg = format!("{event}");
        assert!(msg.starts_with("OPENED swap:9"));
        assert!(msg.contains("party_one="));
    }

    #[test]
    fn serde_roundtrip() {
        let event = SwapEvent::now(
            SwapEventKind::Closed,
            AccountId::new(),
            AccountId::new(),
            SwapId(1),
        );
        let json = serde_json::to_string(&event).unwrap();
        let back: SwapEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event.kind, back.kind);
        assert_eq!(event.swap_id, back.swap_id);
    }
}
