//! Native currency ledger.
//!
//! Tracks per-account balances of the base unit of value. The engine's
//! custody account is an ordinary entry here, so escrowed value is
//! visible in the same ledger and total supply is conserved across every
//! operation.

use std::collections::HashMap;

use pairswap_types::{AccountId, Result, SwapError};

/// Per-account native currency balances.
///
/// All mutations are atomic: either the full transfer succeeds or no
/// balance changes.
#[derive(Debug, Default)]
pub struct NativeLedger {
    balances: HashMap<AccountId, u128>,
}

impl NativeLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `account` (external funding).
    pub fn deposit(&mut self, account: AccountId, amount: u128) {
        *self.balances.entry(account).or_insert(0) += amount;
    }

    /// The balance of `account`.
    #[must_use]
    pub fn balance(&self, account: AccountId) -> u128 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Move `amount` from one account to another.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if `from` holds less than `amount`.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: u128) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let available = self.balance(from);
        if available < amount {
            return Err(SwapError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.balances.insert(from, available - amount);
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }

    /// Sum of all balances. Transfers never change it.
    #[must_use]
    pub fn total_supply(&self) -> u128 {
        self.balances.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_credits_balance() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::from_name("alice");
        ledger.deposit(alice, 1_000);
        assert_eq!(ledger.balance(alice), 1_000);
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn transfer_moves_value() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::from_name("alice");
        let bob = AccountId::from_name("bob");
        ledger.deposit(alice, 1_000);

        ledger.transfer(alice, bob, 400).unwrap();
        assert_eq!(ledger.balance(alice), 600);
        assert_eq!(ledger.balance(bob), 400);
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn transfer_insufficient_fails_unchanged() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::from_name("alice");
        let bob = AccountId::from_name("bob");
        ledger.deposit(alice, 100);

        let err = ledger.transfer(alice, bob, 200).unwrap_err();
        assert!(matches!(
            err,
            SwapError::InsufficientBalance {
                needed: 200,
                available: 100,
            }
        ));
        assert_eq!(ledger.balance(alice), 100);
        assert_eq!(ledger.balance(bob), 0);
    }

    #[test]
    fn zero_transfer_is_noop() {
        let mut ledger = NativeLedger::new();
        let alice = AccountId::from_name("alice");
        let bob = AccountId::from_name("bob");
        // Works even when neither account has an entry.
        ledger.transfer(alice, bob, 0).unwrap();
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn unknown_account_has_zero_balance() {
        let ledger = NativeLedger::new();
        assert_eq!(ledger.balance(AccountId::new()), 0);
    }
}
