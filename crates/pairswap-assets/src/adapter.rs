//! The transfer adapter: one polymorphic operation over all asset
//! standards, plus the all-or-nothing bundle move.
//!
//! The adapter owns the registry of token contracts and always acts as
//! the custody operator. Sentinel references are skipped, never
//! attempted. A bundle transfer keeps a journal of executed legs and
//! unwinds them in reverse order if any later leg fails, so no partial
//! bundle movement is ever observable.

use std::collections::HashMap;

use pairswap_types::{AccountId, AssetRef, AssetStandard, ContractId, Result, SwapError};

use crate::token::{TokenContract, TokenError};

/// Moves asset references between parties on behalf of the engine.
pub struct TransferAdapter {
    /// Registered token contracts.
    contracts: HashMap<ContractId, Box<dyn TokenContract>>,
    /// The engine's custody account; used as the operator for every move.
    custody: AccountId,
}

impl TransferAdapter {
    /// Create an adapter acting for the given custody account.
    #[must_use]
    pub fn new(custody: AccountId) -> Self {
        Self {
            contracts: HashMap::new(),
            custody,
        }
    }

    /// The custody account this adapter operates as.
    #[must_use]
    pub fn custody(&self) -> AccountId {
        self.custody
    }

    /// Register a token contract under `id`.
    ///
    /// # Errors
    /// Returns `Configuration` if `id` is the sentinel or already taken.
    pub fn register(&mut self, id: ContractId, contract: Box<dyn TokenContract>) -> Result<()> {
        if id.is_none() {
            return Err(SwapError::Configuration(
                "cannot register a contract under the sentinel id".into(),
            ));
        }
        if self.contracts.contains_key(&id) {
            return Err(SwapError::Configuration(format!(
                "{id} is already registered"
            )));
        }
        self.contracts.insert(id, contract);
        Ok(())
    }

    /// Look up a registered contract.
    #[must_use]
    pub fn contract(&self, id: ContractId) -> Option<&dyn TokenContract> {
        self.contracts.get(&id).map(AsRef::as_ref)
    }

    /// Look up a registered contract for mutation (approvals, minting
    /// fixtures).
    pub fn contract_mut(&mut self, id: ContractId) -> Option<&mut (dyn TokenContract + 'static)> {
        self.contracts.get_mut(&id).map(AsMut::as_mut)
    }

    /// Move one asset reference from `from` to `to`.
    ///
    /// Sentinel references are a no-op: native value is handled outside
    /// this call.
    ///
    /// # Errors
    /// - `TransferDenied` on malformed references, unknown contracts,
    ///   standard mismatches, or ownership/approval failures
    /// - `InsufficientBalance` when a semi-fungible leg is short of units
    pub fn transfer(&mut self, asset: &AssetRef, from: AccountId, to: AccountId) -> Result<()> {
        if asset.is_sentinel() {
            return Ok(());
        }
        match asset.standard {
            AssetStandard::Native => {
                return Err(SwapError::TransferDenied {
                    reason: format!(
                        "native-standard reference must be the sentinel, got {}",
                        asset.contract
                    ),
                });
            }
            AssetStandard::NonFungible if asset.amount != 0 => {
                return Err(SwapError::TransferDenied {
                    reason: format!(
                        "non-fungible reference to token {} must carry zero amount",
                        asset.token_id
                    ),
                });
            }
            AssetStandard::NonFungible | AssetStandard::SemiFungible => {}
        }

        let custody = self.custody;
        let contract = self.contracts.get_mut(&asset.contract).ok_or_else(|| {
            SwapError::TransferDenied {
                reason: format!("unknown contract {}", asset.contract),
            }
        })?;
        if contract.standard() != asset.standard {
            return Err(SwapError::TransferDenied {
                reason: format!(
                    "{} implements {}, reference claims {}",
                    asset.contract,
                    contract.standard(),
                    asset.standard
                ),
            });
        }

        contract
            .transfer_from(custody, from, to, asset.token_id, asset.amount)
            .map_err(map_token_error)
    }

    /// Move an ordered bundle from `from` to `to`, all-or-nothing.
    ///
    /// On any leg failure the previously executed legs are unwound in
    /// reverse order before the error is returned; the caller observes
    /// either the whole bundle moved or nothing.
    pub fn transfer_bundle(
        &mut self,
        bundle: &[AssetRef],
        from: AccountId,
        to: AccountId,
    ) -> Result<()> {
        let mut executed: Vec<&AssetRef> = Vec::with_capacity(bundle.len());
        for asset in bundle {
            if let Err(err) = self.transfer(asset, from, to) {
                self.unwind(&executed, from, to);
                return Err(err);
            }
            if !asset.is_sentinel() {
                executed.push(asset);
            }
        }
        Ok(())
    }

    /// Reverse the already executed legs of a failed bundle.
    fn unwind(&mut self, executed: &[&AssetRef], from: AccountId, to: AccountId) {
        for asset in executed.iter().rev() {
            tracing::warn!(
                contract = %asset.contract,
                token_id = asset.token_id,
                "unwinding bundle leg after failed transfer"
            );
            let reverted = self
                .contracts
                .get_mut(&asset.contract)
                .map(|contract| contract.force_transfer(to, from, asset.token_id, asset.amount));
            if let Some(Err(err)) = reverted {
                // Custody invariant breach: the leg we just executed
                // cannot be moved back.
                tracing::error!(
                    contract = %asset.contract,
                    token_id = asset.token_id,
                    %err,
                    "failed to unwind executed bundle leg"
                );
            }
        }
    }
}

fn map_token_error(err: TokenError) -> SwapError {
    match err {
        TokenError::InsufficientUnits {
            needed, available, ..
        } => SwapError::InsufficientBalance { needed, available },
        other => SwapError::TransferDenied {
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nft::NftContract;
    use crate::sft::SftContract;

    fn parties() -> (AccountId, AccountId, AccountId) {
        (
            AccountId::from_name("alice"),
            AccountId::from_name("bob"),
            AccountId::from_name("custody"),
        )
    }

    fn adapter_with_nft(custody: AccountId, owner: AccountId, tokens: &[u64]) -> (TransferAdapter, ContractId) {
        let mut nft = NftContract::new();
        for token_id in tokens {
            nft.mint(owner, *token_id).unwrap();
        }
        nft.set_approval_for_all(owner, custody, true);

        let contract_id = ContractId::from_name("nft");
        let mut adapter = TransferAdapter::new(custody);
        adapter.register(contract_id, Box::new(nft)).unwrap();
        (adapter, contract_id)
    }

    #[test]
    fn sentinel_is_skipped() {
        let (alice, bob, custody) = parties();
        let mut adapter = TransferAdapter::new(custody);
        adapter
            .transfer(&AssetRef::sentinel(), alice, bob)
            .unwrap();
    }

    #[test]
    fn register_rejects_sentinel_id() {
        let (_, _, custody) = parties();
        let mut adapter = TransferAdapter::new(custody);
        let err = adapter
            .register(ContractId::NONE, Box::new(NftContract::new()))
            .unwrap_err();
        assert!(matches!(err, SwapError::Configuration(_)));
    }

    #[test]
    fn register_rejects_duplicate() {
        let (_, _, custody) = parties();
        let id = ContractId::from_name("nft");
        let mut adapter = TransferAdapter::new(custody);
        adapter.register(id, Box::new(NftContract::new())).unwrap();
        let err = adapter
            .register(id, Box::new(NftContract::new()))
            .unwrap_err();
        assert!(matches!(err, SwapError::Configuration(_)));
    }

    #[test]
    fn nft_transfer_via_blanket_approval() {
        let (alice, bob, custody) = parties();
        let (mut adapter, contract_id) = adapter_with_nft(custody, alice, &[1]);

        adapter
            .transfer(&AssetRef::non_fungible(contract_id, 1), alice, bob)
            .unwrap();
        assert_eq!(adapter.contract(contract_id).unwrap().owner_of(1), Some(bob));
    }

    #[test]
    fn unknown_contract_denied() {
        let (alice, bob, custody) = parties();
        let mut adapter = TransferAdapter::new(custody);
        let asset = AssetRef::non_fungible(ContractId::from_name("ghost"), 1);
        let err = adapter.transfer(&asset, alice, bob).unwrap_err();
        assert!(matches!(err, SwapError::TransferDenied { .. }));
    }

    #[test]
    fn native_standard_with_contract_denied() {
        let (alice, bob, custody) = parties();
        let (mut adapter, contract_id) = adapter_with_nft(custody, alice, &[1]);
        let asset = AssetRef {
            contract: contract_id,
            standard: AssetStandard::Native,
            token_id: 0,
            amount: 0,
        };
        let err = adapter.transfer(&asset, alice, bob).unwrap_err();
        assert!(matches!(err, SwapError::TransferDenied { .. }));
    }

    #[test]
    fn nft_reference_with_amount_denied() {
        let (alice, bob, custody) = parties();
        let (mut adapter, contract_id) = adapter_with_nft(custody, alice, &[1]);
        let mut asset = AssetRef::non_fungible(contract_id, 1);
        asset.amount = 5;
        let err = adapter.transfer(&asset, alice, bob).unwrap_err();
        assert!(matches!(err, SwapError::TransferDenied { .. }));
        // Token did not move.
        assert_eq!(adapter.contract(contract_id).unwrap().owner_of(1), Some(alice));
    }

    #[test]
    fn standard_mismatch_denied() {
        let (alice, bob, custody) = parties();
        let (mut adapter, contract_id) = adapter_with_nft(custody, alice, &[1]);
        // Claims semi-fungible against a non-fungible contract.
        let asset = AssetRef::semi_fungible(contract_id, 1, 1);
        let err = adapter.transfer(&asset, alice, bob).unwrap_err();
        assert!(matches!(err, SwapError::TransferDenied { .. }));
    }

    #[test]
    fn sft_short_balance_maps_to_insufficient() {
        let (alice, bob, custody) = parties();
        let mut sft = SftContract::new();
        sft.mint(alice, 7, 10);
        sft.set_approval_for_all(alice, custody, true);

        let contract_id = ContractId::from_name("sft");
        let mut adapter = TransferAdapter::new(custody);
        adapter.register(contract_id, Box::new(sft)).unwrap();

        let err = adapter
            .transfer(&AssetRef::semi_fungible(contract_id, 7, 11), alice, bob)
            .unwrap_err();
        assert!(matches!(
            err,
            SwapError::InsufficientBalance {
                needed: 11,
                available: 10,
            }
        ));
    }

    #[test]
    fn bundle_moves_all_legs() {
        let (alice, bob, custody) = parties();
        let (mut adapter, contract_id) = adapter_with_nft(custody, alice, &[1, 2, 3]);

        let bundle = vec![
            AssetRef::non_fungible(contract_id, 1),
            AssetRef::sentinel(),
            AssetRef::non_fungible(contract_id, 2),
            AssetRef::non_fungible(contract_id, 3),
        ];
        adapter.transfer_bundle(&bundle, alice, bob).unwrap();

        let contract = adapter.contract(contract_id).unwrap();
        for token_id in [1, 2, 3] {
            assert_eq!(contract.owner_of(token_id), Some(bob));
        }
    }

    #[test]
    fn failed_bundle_unwinds_executed_legs() {
        let (alice, bob, custody) = parties();
        // Token 3 belongs to bob, so the third leg fails after two moves.
        let mut nft = NftContract::new();
        nft.mint(alice, 1).unwrap();
        nft.mint(alice, 2).unwrap();
        nft.mint(bob, 3).unwrap();
        nft.set_approval_for_all(alice, custody, true);

        let contract_id = ContractId::from_name("nft");
        let mut adapter = TransferAdapter::new(custody);
        adapter.register(contract_id, Box::new(nft)).unwrap();

        let bundle = vec![
            AssetRef::non_fungible(contract_id, 1),
            AssetRef::non_fungible(contract_id, 2),
            AssetRef::non_fungible(contract_id, 3),
        ];
        let err = adapter.transfer_bundle(&bundle, alice, bob).unwrap_err();
        assert!(matches!(err, SwapError::TransferDenied { .. }));

        // Everything back where it started.
        let contract = adapter.contract(contract_id).unwrap();
        assert_eq!(contract.owner_of(1), Some(alice));
        assert_eq!(contract.owner_of(2), Some(alice));
        assert_eq!(contract.owner_of(3), Some(bob));
    }

    #[test]
    fn mixed_bundle_unwinds_sft_units() {
        let (alice, bob, custody) = parties();
        let mut sft = SftContract::new();
        sft.mint(alice, 7, 50);
        sft.set_approval_for_all(alice, custody, true);
        let sft_id = ContractId::from_name("sft");

        let mut nft = NftContract::new();
        nft.mint(bob, 1).unwrap(); // alice does not own this
        let nft_id = ContractId::from_name("nft");

        let mut adapter = TransferAdapter::new(custody);
        adapter.register(sft_id, Box::new(sft)).unwrap();
        adapter.register(nft_id, Box::new(nft)).unwrap();

        let bundle = vec![
            AssetRef::semi_fungible(sft_id, 7, 50),
            AssetRef::non_fungible(nft_id, 1),
        ];
        adapter.transfer_bundle(&bundle, alice, bob).unwrap_err();

        // The 50 units went out and came back.
        assert_eq!(adapter.contract(sft_id).unwrap().balance_of(alice, 7), 50);
        assert_eq!(adapter.contract(sft_id).unwrap().balance_of(bob, 7), 0);
    }
}
