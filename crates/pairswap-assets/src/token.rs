//! The collaborator boundary between the engine and token contracts.
//!
//! Token contracts keep their own bookkeeping; the engine only needs the
//! operations below. Contract failures are their own type, distinct from
//! [`pairswap_types::SwapError`], so the adapter can map them to the
//! engine's `TransferDenied` / `InsufficientBalance` conditions.

use pairswap_types::{AccountId, AssetStandard};
use thiserror::Error;

/// Failures surfaced by a token contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token id has never been minted.
    #[error("token {token_id} does not exist")]
    UnknownToken { token_id: u64 },

    /// A token already exists under this id.
    #[error("token {token_id} already exists")]
    AlreadyExists { token_id: u64 },

    /// The given account does not own the token.
    #[error("token {token_id} is not owned by the sending account")]
    NotOwner { token_id: u64 },

    /// The operator holds neither a per-token nor a blanket approval.
    #[error("operator is not approved to move token {token_id}")]
    NotApproved { token_id: u64 },

    /// The sender holds fewer units than the transfer requires.
    #[error("insufficient units of token {token_id}: need {needed}, have {available}")]
    InsufficientUnits {
        token_id: u64,
        needed: u128,
        available: u128,
    },
}

/// The operations every token collaborator must expose.
///
/// `transfer_from` performs the full ownership and approval check for the
/// given `operator`; `force_transfer` skips the approval check and exists
/// solely so the adapter can unwind a partially executed bundle (the
/// adapter just moved those tokens, so no fresh approval can exist for the
/// reverse direction).
pub trait TokenContract {
    /// Which standard this contract implements.
    fn standard(&self) -> AssetStandard;

    /// The owner of `token_id`, if the standard has single owners.
    /// Semi-fungible contracts return `None`.
    fn owner_of(&self, token_id: u64) -> Option<AccountId>;

    /// Units of `token_id` held by `owner` (0 or 1 for non-fungibles).
    fn balance_of(&self, owner: AccountId, token_id: u64) -> u128;

    /// Whether `operator` may move `token_id` on behalf of `owner`,
    /// either per-token or via blanket approval.
    fn is_approved(&self, owner: AccountId, operator: AccountId, token_id: u64) -> bool;

    /// Grant or revoke blanket approval for `operator` over all of
    /// `owner`'s tokens.
    fn set_approval_for_all(&mut self, owner: AccountId, operator: AccountId, approved: bool);

    /// Move `amount` units of `token_id` from `from` to `to`, verifying
    /// ownership and that `operator` is approved (or is `from` itself).
    fn transfer_from(
        &mut self,
        operator: AccountId,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: u128,
    ) -> Result<(), TokenError>;

    /// Move units without an approval check. Unwind path only.
    fn force_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: u128,
    ) -> Result<(), TokenError>;
}
