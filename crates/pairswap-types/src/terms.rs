//! Swap terms: the immutable agreement fixed when a swap is opened.

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// The agreement between the two parties, immutable after open.
///
/// `aux_tag` and `nonce` are opaque integers carried through unchanged.
/// They are serialized and returned on query but never interpreted by the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapTerms {
    /// Native value owed by party one, attached at open time.
    pub value_one: u128,
    /// Native value owed by party two, attached at close time.
    pub value_two: u128,
    /// Opaque tag reserved for future use. Never interpreted.
    pub aux_tag: u64,
    /// The party that opens the swap. Must match the caller of `open_swap`.
    pub party_one: AccountId,
    /// The only party allowed to close the swap.
    pub party_two: AccountId,
    /// Opaque integer carried through unchanged.
    pub nonce: u64,
}

impl SwapTerms {
    /// Terms with no native value on either side.
    #[must_use]
    pub fn token_only(party_one: AccountId, party_two: AccountId) -> Self {
        Self {
            value_one: 0,
            value_two: 0,
            aux_tag: 0,
            party_one,
            party_two,
            nonce: 0,
        }
    }
}

/// Dummy terms for testing.
#[cfg(any(test, feature = "test-helpers"))]
impl SwapTerms {
    /// Terms between two parties with the given native values and a random
    /// nonce.
    pub fn dummy(
        party_one: AccountId,
        party_two: AccountId,
        value_one: u128,
        value_two: u128,
    ) -> Self {
        Self {
            value_one,
            value_two,
            aux_tag: 0,
            party_one,
            party_two,
            nonce: rand::random::<u64>(),
        }
    }
}
