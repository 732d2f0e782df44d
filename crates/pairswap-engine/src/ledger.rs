//! The swap ledger: append-only, id-addressed storage for swap records.
//!
//! Ids are assigned in strict call-arrival order, giving a total order
//! over swap creation. Records are never removed; terminal swaps remain
//! as historical entries for audit and UI collaborators.

use std::collections::BTreeMap;

use chrono::Utc;
use pairswap_types::{AssetRef, Result, Swap, SwapError, SwapId, SwapStatus, SwapTerms};

/// Append-only mapping from swap id to swap record.
#[derive(Debug, Default)]
pub struct SwapLedger {
    swaps: BTreeMap<SwapId, Swap>,
    next_id: SwapId,
}

impl SwapLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new Open swap and return its id.
    pub fn create(
        &mut self,
        terms: SwapTerms,
        items_one: Vec<AssetRef>,
        items_two: Vec<AssetRef>,
    ) -> SwapId {
        let id = self.next_id;
        self.next_id = id.next();
        self.swaps.insert(
            id,
            Swap {
                id,
                terms,
                items_one,
                items_two,
                status: SwapStatus::Open,
                opened_at: Utc::now(),
                settled_at: None,
            },
        );
        id
    }

    /// Look up a swap by id.
    ///
    /// # Errors
    /// Returns `SwapNotFound` if no swap has this id.
    pub fn get(&self, id: SwapId) -> Result<&Swap> {
        self.swaps.get(&id).ok_or(SwapError::SwapNotFound(id))
    }

    /// Move a swap to a terminal status.
    ///
    /// # Errors
    /// - `SwapNotFound` if no swap has this id
    /// - `InvalidTransition` if the current status is not Open, or the
    ///   target is not a terminal status
    pub fn set_status(&mut self, id: SwapId, to: SwapStatus) -> Result<()> {
        let swap = self.swaps.get_mut(&id).ok_or(SwapError::SwapNotFound(id))?;
        if !swap.status.can_transition_to(to) {
            return Err(SwapError::InvalidTransition {
                id,
                from: swap.status,
                to,
            });
        }
        swap.status = to;
        swap.settled_at = Some(Utc::now());
        Ok(())
    }

    /// Number of swaps ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    /// All swaps in id (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = &Swap> {
        self.swaps.values()
    }
}
