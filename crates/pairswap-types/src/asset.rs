//! The asset model: one [`AssetRef`] describes one unit of value to move.
//!
//! Both legs of a swap are ordered sequences of asset references. The
//! transfer adapter dispatches on [`AssetStandard`], so adding a standard
//! is a compile-time-checked change, not a runtime surprise.

use serde::{Deserialize, Serialize};

use crate::ContractId;

/// The token standard an [`AssetRef`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStandard {
    /// Native currency only. No contract is involved; the value rides on
    /// the swap terms, not on the asset reference.
    Native,
    /// A non-fungible token: `token_id` identifies a unique unit.
    NonFungible,
    /// A semi-fungible token: `amount` units of `token_id` are
    /// interchangeable.
    SemiFungible,
}

impl std::fmt::Display for AssetStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "NATIVE"),
            Self::NonFungible => write!(f, "NON_FUNGIBLE"),
            Self::SemiFungible => write!(f, "SEMI_FUNGIBLE"),
        }
    }
}

/// A reference to one unit of value to move between two parties.
///
/// The sentinel reference (nil [`ContractId`]) means "this leg carries no
/// token, only native value"; the adapter skips it rather than attempting
/// a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// The asset contract, or [`ContractId::NONE`] for the sentinel.
    pub contract: ContractId,
    /// Which standard governs the transfer.
    pub standard: AssetStandard,
    /// Token identifier. Meaningful only for token standards.
    pub token_id: u64,
    /// Unit count. Meaningful only for `SemiFungible`; must be zero for
    /// `NonFungible`.
    pub amount: u128,
}

impl AssetRef {
    /// The sentinel "no token on this leg" reference.
    #[must_use]
    pub fn sentinel() -> Self {
        Self {
            contract: ContractId::NONE,
            standard: AssetStandard::Native,
            token_id: 0,
            amount: 0,
        }
    }

    /// A non-fungible token reference.
    #[must_use]
    pub fn non_fungible(contract: ContractId, token_id: u64) -> Self {
        Self {
            contract,
            standard: AssetStandard::NonFungible,
            token_id,
            amount: 0,
        }
    }

    /// A semi-fungible token reference for `amount` units of `token_id`.
    #[must_use]
    pub fn semi_fungible(contract: ContractId, token_id: u64, amount: u128) -> Self {
        Self {
            contract,
            standard: AssetStandard::SemiFungible,
            token_id,
            amount,
        }
    }

    /// Returns `true` if this is the sentinel reference.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.contract.is_none()
    }
}

/// Returns `true` if the bundle commits at least one real (non-sentinel)
/// asset reference.
#[must_use]
pub fn bundle_has_assets(bundle: &[AssetRef]) -> bool {
    bundle.iter().any(|asset| !asset.is_sentinel())
}
