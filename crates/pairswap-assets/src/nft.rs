//! In-memory non-fungible token contract.
//!
//! One owner per token id, per-token approvals plus blanket operator
//! approvals. A successful transfer clears the per-token approval, so a
//! stale approval can never move the token a second time.

use std::collections::{HashMap, HashSet};

use pairswap_types::{AccountId, AssetStandard};

use crate::token::{TokenContract, TokenError};

/// A non-fungible token ledger: each `token_id` has exactly one owner.
#[derive(Debug, Default)]
pub struct NftContract {
    /// token id -> current owner.
    owners: HashMap<u64, AccountId>,
    /// token id -> account approved for that single token.
    token_approvals: HashMap<u64, AccountId>,
    /// (owner, operator) pairs with blanket approval.
    operator_approvals: HashSet<(AccountId, AccountId)>,
}

impl NftContract {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `token_id` to `owner`.
    ///
    /// # Errors
    /// Returns `AlreadyExists` if the id was minted before.
    pub fn mint(&mut self, owner: AccountId, token_id: u64) -> Result<(), TokenError> {
        if self.owners.contains_key(&token_id) {
            return Err(TokenError::AlreadyExists { token_id });
        }
        self.owners.insert(token_id, owner);
        Ok(())
    }

    /// Approve `operator` for the single token `token_id`.
    ///
    /// # Errors
    /// Returns `UnknownToken` / `NotOwner` if `owner` cannot grant it.
    pub fn approve(
        &mut self,
        owner: AccountId,
        operator: AccountId,
        token_id: u64,
    ) -> Result<(), TokenError> {
        match self.owners.get(&token_id) {
            None => Err(TokenError::UnknownToken { token_id }),
            Some(actual) if *actual != owner => Err(TokenError::NotOwner { token_id }),
            Some(_) => {
                self.token_approvals.insert(token_id, operator);
                Ok(())
            }
        }
    }

    /// Number of tokens currently owned by `owner`.
    #[must_use]
    pub fn owned_count(&self, owner: AccountId) -> usize {
        self.owners.values().filter(|o| **o == owner).count()
    }

    /// Total number of minted tokens.
    #[must_use]
    pub fn total_minted(&self) -> usize {
        self.owners.len()
    }
}

impl TokenContract for NftContract {
    fn standard(&self) -> AssetStandard {
        AssetStandard::NonFungible
    }

    fn owner_of(&self, token_id: u64) -> Option<AccountId> {
        self.owners.get(&token_id).copied()
    }

    fn balance_of(&self, owner: AccountId, token_id: u64) -> u128 {
        u128::from(self.owners.get(&token_id) == Some(&owner))
    }

    fn is_approved(&self, owner: AccountId, operator: AccountId, token_id: u64) -> bool {
        self.token_approvals.get(&token_id) == Some(&operator)
            || self.operator_approvals.contains(&(owner, operator))
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
        _amount: u128,
    ) -> Result<(), TokenError> {
        let owner = self
            .owners
            .get(&token_id)
            .copied()
            .ok_or(TokenError::UnknownToken { token_id })?;
        if owner != from {
            return Err(TokenError::NotOwner { token_id });
        }
        if operator != from && !self.is_approved(from, operator, token_id) {
            return Err(TokenError::NotApproved { token_id });
        }
        self.owners.insert(token_id, to);
        self.token_approvals.remove(&token_id);
        Ok(())
    }

    fn force_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        _amount: u128,
    ) -> Result<(), TokenError> {
        let owner = self
            .owners
            .get(&token_id)
            .copied()
            .ok_or(TokenError::UnknownToken { token_id })?;
        if owner != from {
            return Err(TokenError::NotOwner { token_id });
        }
        self.owners.insert(token_id, to);
        self.token_approvals.remove(&token_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parties() -> (AccountId, AccountId, AccountId) {
        (
            AccountId::from_name("alice"),
            AccountId::from_name("bob"),
            AccountId::from_name("custodian"),
        )
    }

    #[test]
    fn mint_assigns_owner() {
        let (alice, _, _) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 0).unwrap();
        assert_eq!(nft.owner_of(0), Some(alice));
        assert_eq!(nft.balance_of(alice, 0), 1);
        assert_eq!(nft.owned_count(alice), 1);
    }

    #[test]
    fn double_mint_rejected() {
        let (alice, bob, _) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 0).unwrap();
        let err = nft.mint(bob, 0).unwrap_err();
        assert_eq!(err, TokenError::AlreadyExists { token_id: 0 });
        assert_eq!(nft.owner_of(0), Some(alice));
    }

    #[test]
    fn owner_moves_own_token() {
        let (alice, bob, _) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 5).unwrap();
        nft.transfer_from(alice, alice, bob, 5, 0).unwrap();
        assert_eq!(nft.owner_of(5), Some(bob));
    }

    #[test]
    fn operator_needs_approval() {
        let (alice, bob, custodian) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();

        let err = nft.transfer_from(custodian, alice, bob, 1, 0).unwrap_err();
        assert_eq!(err, TokenError::NotApproved { token_id: 1 });
        assert_eq!(nft.owner_of(1), Some(alice));
    }

    #[test]
    fn per_token_approval_allows_transfer() {
        let (alice, bob, custodian) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        nft.approve(alice, custodian, 1).unwrap();
        assert!(nft.is_approved(alice, custodian, 1));

        nft.transfer_from(custodian, alice, bob, 1, 0).unwrap();
        assert_eq!(nft.owner_of(1), Some(bob));
        // Approval is consumed by the transfer.
        assert!(!nft.is_approved(bob, custodian, 1));
    }

    #[test]
    fn blanket_approval_allows_transfer() {
        let (alice, bob, custodian) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        nft.mint(alice, 2).unwrap();
        nft.set_approval_for_all(alice, custodian, true);

        nft.transfer_from(custodian, alice, bob, 1, 0).unwrap();
        nft.transfer_from(custodian, alice, bob, 2, 0).unwrap();
        assert_eq!(nft.owned_count(bob), 2);
    }

    #[test]
    fn blanket_approval_can_be_revoked() {
        let (alice, bob, custodian) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        nft.set_approval_for_all(alice, custodian, true);
        nft.set_approval_for_all(alice, custodian, false);

        let err = nft.transfer_from(custodian, alice, bob, 1, 0).unwrap_err();
        assert_eq!(err, TokenError::NotApproved { token_id: 1 });
    }

    #[test]
    fn transfer_from_non_owner_rejected() {
        let (alice, bob, custodian) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        nft.set_approval_for_all(bob, custodian, true);

        // Bob does not own token 1.
        let err = nft.transfer_from(custodian, bob, alice, 1, 0).unwrap_err();
        assert_eq!(err, TokenError::NotOwner { token_id: 1 });
    }

    #[test]
    fn unknown_token_rejected() {
        let (alice, bob, _) = parties();
        let mut nft = NftContract::new();
        let err = nft.transfer_from(alice, alice, bob, 9, 0).unwrap_err();
        assert_eq!(err, TokenError::UnknownToken { token_id: 9 });
    }

    #[test]
    fn force_transfer_skips_approval() {
        let (alice, bob, _) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        nft.force_transfer(alice, bob, 1, 0).unwrap();
        assert_eq!(nft.owner_of(1), Some(bob));
    }

    #[test]
    fn force_transfer_still_checks_ownership() {
        let (alice, bob, custodian) = parties();
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        let err = nft.force_transfer(custodian, bob, 1, 0).unwrap_err();
        assert_eq!(err, TokenError::NotOwner { token_id: 1 });
    }
}
