//! Identifiers used throughout PairSwap.
//!
//! Accounts and asset contracts use UUIDv7; the nil UUID on a
//! [`ContractId`] is the sentinel for "no token on this leg".
//! Swap ids are plain sequential integers assigned by the ledger.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for a party (a user account or the engine's own
/// custody account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Deterministic `AccountId` derived from a human-readable name.
    ///
    /// Two calls with the same name always produce the same id, which keeps
    /// fixtures and audit logs stable across runs.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"pairswap:account:v1:");
        hasher.update(name.as_bytes());
        let hash = hasher.finalize();
        let bytes: [u8; 16] = hash[..16].try_into().expect("SHA-256 produces 32 bytes");
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ContractId
// ---------------------------------------------------------------------------

/// Identifier of an asset contract registered with the transfer adapter.
///
/// The nil UUID is the sentinel value: an asset reference carrying it
/// denotes "native value only" and is skipped by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ContractId(pub Uuid);

impl ContractId {
    /// The sentinel "no-asset" contract reference.
    pub const NONE: Self = Self(Uuid::nil());

    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Deterministic `ContractId` derived from a human-readable name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"pairswap:contract:v1:");
        hasher.update(name.as_bytes());
        let hash = hasher.finalize();
        let bytes: [u8; 16] = hash[..16].try_into().expect("SHA-256 produces 32 bytes");
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns `true` if this is the sentinel "no-asset" reference.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "contract:none")
        } else {
            write!(f, "contract:{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// SwapId
// ---------------------------------------------------------------------------

/// Sequential identifier for a swap, assigned by the ledger at creation.
///
/// Ids are unique, monotonically increasing, and never reused; they give a
/// total order over swap creation for enumeration and auditing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SwapId(pub u64);

impl SwapId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SwapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
