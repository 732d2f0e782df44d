//! In-memory semi-fungible token contract.
//!
//! Units of the same token id are interchangeable in quantity; balances
//! are tracked per (token id, holder). Approvals are blanket only —
//! per-token approvals make no sense when units are fungible.

use std::collections::{HashMap, HashSet};

use pairswap_types::{AccountId, AssetStandard};

use crate::token::{TokenContract, TokenError};

/// A semi-fungible token ledger: `amount` units of `token_id` per holder.
#[derive(Debug, Default)]
pub struct SftContract {
    /// (token id, holder) -> unit balance.
    balances: HashMap<(u64, AccountId), u128>,
    /// token ids that have been minted at least once.
    minted: HashSet<u64>,
    /// (owner, operator) pairs with blanket approval.
    operator_approvals: HashSet<(AccountId, AccountId)>,
}

impl SftContract {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` units of `token_id` to `owner`.
    pub fn mint(&mut self, owner: AccountId, token_id: u64, amount: u128) {
        *self.balances.entry((token_id, owner)).or_insert(0) += amount;
        self.minted.insert(token_id);
    }

    /// Total units of `token_id` across all holders.
    #[must_use]
    pub fn total_supply(&self, token_id: u64) -> u128 {
        self.balances
            .iter()
            .filter(|((id, _), _)| *id == token_id)
            .map(|(_, amount)| amount)
            .sum()
    }

    fn move_units(
        &mut self,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: u128,
    ) -> Result<(), TokenError> {
        if !self.minted.contains(&token_id) {
            return Err(TokenError::UnknownToken { token_id });
        }
        let available = self.balances.get(&(token_id, from)).copied().unwrap_or(0);
        if available < amount {
            return Err(TokenError::InsufficientUnits {
                token_id,
                needed: amount,
                available,
            });
        }
        self.balances.insert((token_id, from), available - amount);
        *self.balances.entry((token_id, to)).or_insert(0) += amount;
        Ok(())
    }
}

impl TokenContract for SftContract {
    fn standard(&self) -> AssetStandard {
        AssetStandard::SemiFungible
    }

    fn owner_of(&self, _token_id: u64) -> Option<AccountId> {
        // Semi-fungibles have no single owner.
        None
    }

    fn balance_of(&self, owner: AccountId, token_id: u64) -> u128 {
        self.balances.get(&(token_id, owner)).copied().unwrap_or(0)
    }

    fn is_approved(&self, owner: AccountId, operator: AccountId, _token_id: u64) -> bool {
        self.operator_approvals.contains(&(owner, operator))
    }

    fn set_approval_for_all(&mut self, owner: AccountId, operator: AccountId, approved: bool) {
        if approved {
            self.operator_approvals.insert((owner, operator));
        } else {
            self.operator_approvals.remove(&(owner, operator));
        }
    }

    fn transfer_from(
        &mut self,
        operator: AccountId,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: u128,
    ) -> Result<(), TokenError> {
        if operator != from && !self.is_approved(from, operator, token_id) {
            return Err(TokenError::NotApproved { token_id });
        }
        self.move_units(from, to, token_id, amount)
    }

    fn force_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: u128,
    ) -> Result<(), TokenError> {
        self.move_units(from, to, token_id, amount)
    }
}
