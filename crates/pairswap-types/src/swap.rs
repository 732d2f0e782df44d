//! The swap record and its lifecycle state machine.
//!
//! ```text
//!   ┌──────┐   close    ┌────────┐
//!   │ OPEN ├───────────▶│ CLOSED │
//!   └──┬───┘            └────────┘
//!      │ cancel
//!      ▼
//!   ┌───────────┐
//!   │ CANCELLED │
//!   └───────────┘
//! ```
//!
//! Closed and Cancelled are terminal. Swaps are never destroyed; settled
//! ones remain in the ledger as historical entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AssetRef, SwapId, SwapTerms};

/// The lifecycle state of a swap.
///
/// Transitions are monotonic: `Open → Closed` (settlement) and
/// `Open → Cancelled` (party one reclaims its escrow). Each happens at
/// most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapStatus {
    /// Party one's leg is in custody; waiting for party two to close.
    Open,
    /// Both legs settled. Terminal.
    Closed,
    /// Party one's escrow was returned. Terminal.
    Cancelled,
}

impl SwapStatus {
    /// Can a swap in this status transition to the given target status?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Open, Self::Closed | Self::Cancelled))
    }

    /// Returns `true` if this status accepts no further transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// One swap: the terms, both asset bundles, and the lifecycle status.
///
/// While a swap is Open, `items_one` (and `value_one`, if any) are held by
/// the engine's custody account and owned by no external party. The total
/// value entering escrow at open is exactly what leaves at close or
/// cancel: no reference is dropped, duplicated, or substituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swap {
    /// Sequential id assigned at creation, never reused.
    pub id: SwapId,
    /// The agreement, immutable after open.
    pub terms: SwapTerms,
    /// Party one's bundle, escrowed at open time.
    pub items_one: Vec<AssetRef>,
    /// Party two's bundle, recorded at open as the close-time expectation.
    pub items_two: Vec<AssetRef>,
    /// Current lifecycle status.
    pub status: SwapStatus,
    /// When the swap was opened.
    pub opened_at: DateTime<Utc>,
    /// When the swap reached a terminal status, if it has.
    pub settled_at: Option<DateTime<Utc>>,
}

impl Swap {
    /// Returns `true` if the swap is still awaiting close or cancel.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == SwapStatus::Open
    }
}
