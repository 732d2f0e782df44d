//! The swap engine: the two-phase open/close state machine plus the
//! cancellation path.
//!
//! Every entry point validates fully before any asset moves, and every
//! fallible movement happens before the ledger mutates, so a failed call
//! leaves ledger and custody exactly as they were. Execution is a single
//! logical thread per call (`&mut self`); no two operations ever
//! interleave against the same swap.

use pairswap_assets::{NativeLedger, TransferAdapter};
use pairswap_types::{
    bundle_has_assets, constants::MAX_ITEMS_PER_LEG, AccountId, AssetRef, EngineConfig, Result,
    Swap, SwapError, SwapEvent, SwapEventKind, SwapId, SwapStatus, SwapTerms,
};

use crate::fee::FeePolicy;
use crate::ledger::SwapLedger;

/// The neutral custodian: owns the swap ledger, the native ledger, the
/// transfer adapter, and the engine's custody account.
pub struct SwapEngine {
    ledger: SwapLedger,
    adapter: TransferAdapter,
    native: NativeLedger,
    fee: FeePolicy,
    custody: AccountId,
    events: Vec<SwapEvent>,
}

impl SwapEngine {
    /// An engine with no fee policy.
    #[must_use]
    pub fn new() -> Self {
        let custody = AccountId::new();
        Self {
            ledger: SwapLedger::new(),
            adapter: TransferAdapter::new(custody),
            native: NativeLedger::new(),
            fee: FeePolicy::disabled(),
            custody,
            events: Vec::new(),
        }
    }

    /// An engine with the given configuration.
    ///
    /// # Errors
    /// Returns `Configuration` if the fee rate is out of range.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        let mut engine = Self::new();
        engine.fee = FeePolicy::from_config(config)?;
        Ok(engine)
    }

    /// The engine's custody account. Token approvals must name it.
    #[must_use]
    pub fn custody(&self) -> AccountId {
        self.custody
    }

    /// The swap ledger, for audit and UI queries.
    #[must_use]
    pub fn ledger(&self) -> &SwapLedger {
        &self.ledger
    }

    /// Look up a swap by id.
    pub fn swap(&self, id: SwapId) -> Result<&Swap> {
        self.ledger.get(id)
    }

    /// The transfer adapter, for registering token contracts and setting
    /// up approvals.
    pub fn adapter_mut(&mut self) -> &mut TransferAdapter {
        &mut self.adapter
    }

    #[must_use]
    pub fn adapter(&self) -> &TransferAdapter {
        &self.adapter
    }

    /// Fund an account's native balance (external deposit).
    pub fn deposit_native(&mut self, account: AccountId, amount: u128) {
        self.native.deposit(account, amount);
    }

    /// An account's native balance.
    #[must_use]
    pub fn native_balance(&self, account: AccountId) -> u128 {
        self.native.balance(account)
    }

    /// Total native supply across all accounts, custody included.
    #[must_use]
    pub fn native_supply(&self) -> u128 {
        self.native.total_supply()
    }

    /// Lifecycle events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    /// Take all pending events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<SwapEvent> {
        std::mem::take(&mut self.events)
    }

    /// Open a swap: validate the terms, take custody of party one's leg,
    /// and record the swap as Open.
    ///
    /// `attached` is the native value the caller sends with the call; it
    /// must equal `terms.value_one` exactly.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not `terms.party_one`
    /// - `ValuesMismatched` if `attached != terms.value_one`
    /// - `EmptyOffer` if a side commits neither value nor tokens
    /// - `OfferTooLarge` if a bundle exceeds the per-leg cap
    /// - `InsufficientBalance` / `TransferDenied` if an escrow move fails
    ///
    /// On any error nothing is escrowed and no swap is recorded.
    pub fn open_swap(
        &mut self,
        caller: AccountId,
        terms: SwapTerms,
        items_one: Vec<AssetRef>,
        items_two: Vec<AssetRef>,
        attached: u128,
    ) -> Result<SwapId> {
        if caller != terms.party_one {
            return Err(SwapError::Unauthorized {
                expected: terms.party_one,
                caller,
            });
        }
        if attached != terms.value_one {
            return Err(SwapError::ValuesMismatched {
                expected: terms.value_one,
                attached,
            });
        }
        for bundle in [&items_one, &items_two] {
            if bundle.len() > MAX_ITEMS_PER_LEG {
                return Err(SwapError::OfferTooLarge {
                    len: bundle.len(),
                    max: MAX_ITEMS_PER_LEG,
                });
            }
        }
        if !bundle_has_assets(&items_one) && terms.value_one == 0 {
            return Err(SwapError::EmptyOffer);
        }
        if !bundle_has_assets(&items_two) && terms.value_two == 0 {
            return Err(SwapError::EmptyOffer);
        }
        // Check the attached value up front so the native debit after the
        // token escrow cannot fail and force an unwind.
        let available = self.native.balance(caller);
        if available < attached {
            return Err(SwapError::InsufficientBalance {
                needed: attached,
                available,
            });
        }

        self.adapter
            .transfer_bundle(&items_one, terms.party_one, self.custody)?;
        self.native.transfer(terms.party_one, self.custody, attached)?;

        let party_one = terms.party_one;
        let party_two = terms.party_two;
        let id = self.ledger.create(terms, items_one, items_two);

        tracing::info!(%id, %party_one, %party_two, value = attached, "swap opened");
        self.events.push(SwapEvent::now(
            SwapEventKind::Opened,
            party_one,
            party_two,
            id,
        ));
        Ok(id)
    }

    /// Close an Open swap: move party two's leg to party one, then
    /// release party one's escrowed leg to party two, net of fees.
    ///
    /// `attached` must equal `terms.value_two` exactly. Party two must
    /// have approved the custody account on its token contracts before
    /// calling.
    ///
    /// # Errors
    /// - `SwapNotFound` / `SwapNotOpen` for a missing or settled swap
    /// - `Unauthorized` if `caller` is not `terms.party_two`
    /// - `ValuesMismatched` if `attached != terms.value_two`
    /// - `InsufficientBalance` / `TransferDenied` if party two's leg
    ///   cannot move — the swap then stays Open for a future retry
    pub fn close_swap(&mut self, caller: AccountId, id: SwapId, attached: u128) -> Result<()> {
        let swap = self.ledger.get(id)?;
        if !swap.is_open() {
            return Err(SwapError::SwapNotOpen {
                id,
                status: swap.status,
            });
        }
        if caller != swap.terms.party_two {
            return Err(SwapError::Unauthorized {
                expected: swap.terms.party_two,
                caller,
            });
        }
        if attached != swap.terms.value_two {
            return Err(SwapError::ValuesMismatched {
                expected: swap.terms.value_two,
                attached,
            });
        }
        let party_one = swap.terms.party_one;
        let party_two = swap.terms.party_two;
        let value_one = swap.terms.value_one;
        let items_one = swap.items_one.clone();
        let items_two = swap.items_two.clone();

        let available = self.native.balance(party_two);
        if available < attached {
            return Err(SwapError::InsufficientBalance {
                needed: attached,
                available,
            });
        }

        // Party two's tokens first: this is the leg that may legitimately
        // fail (missing approval, spent balance), and it must fail before
        // anything leaves custody.
        self.adapter
            .transfer_bundle(&items_two, party_two, party_one)?;

        // Party two's value to party one, net of fee.
        self.native.transfer(party_two, self.custody, attached)?;
        let (net_two, fee_two) = self.fee.split(attached);
        self.native.transfer(self.custody, party_one, net_two)?;
        self.pay_fee(fee_two)?;

        // Release party one's escrow to party two.
        self.adapter
            .transfer_bundle(&items_one, self.custody, party_two)?;
        let (net_one, fee_one) = self.fee.split(value_one);
        self.native.transfer(self.custody, party_two, net_one)?;
        self.pay_fee(fee_one)?;

        self.ledger.set_status(id, SwapStatus::Closed)?;

        tracing::info!(%id, %party_one, %party_two, "swap closed");
        self.events.push(SwapEvent::now(
            SwapEventKind::Closed,
            party_one,
            party_two,
            id,
        ));
        Ok(())
    }

    /// Cancel an Open swap, returning party one's escrowed leg and value
    /// in full. Only party one may cancel, and only while Open.
    ///
    /// # Errors
    /// - `SwapNotFound` / `SwapNotOpen` for a missing or settled swap
    /// - `Unauthorized` if `caller` is not `terms.party_one`
    pub fn cancel_swap(&mut self, caller: AccountId, id: SwapId) -> Result<()> {
        let swap = self.ledger.get(id)?;
        if !swap.is_open() {
            return Err(SwapError::SwapNotOpen {
                id,
                status: swap.status,
            });
        }
        if caller != swap.terms.party_one {
            return Err(SwapError::Unauthorized {
                expected: swap.terms.party_one,
                caller,
            });
        }
        let party_one = swap.terms.party_one;
        let party_two = swap.terms.party_two;
        let value_one = swap.terms.value_one;
        let items_one = swap.items_one.clone();

        self.adapter
            .transfer_bundle(&items_one, self.custody, party_one)?;
        self.native.transfer(self.custody, party_one, value_one)?;

        self.ledger.set_status(id, SwapStatus::Cancelled)?;

        tracing::info!(%id, %party_one, "swap cancelled");
        self.events.push(SwapEvent::now(
            SwapEventKind::Cancelled,
            party_one,
            party_two,
            id,
        ));
        Ok(())
    }

    fn pay_fee(&mut self, fee: u128) -> Result<()> {
        if fee == 0 {
            return Ok(());
        }
        // split() only returns a nonzero fee when a collector is set.
        let collector = self
            .fee
            .collector()
            .ok_or_else(|| SwapError::Configuration("fee taken without a collector".into()))?;
        self.native.transfer(self.custody, collector, fee)
    }
}

impl Default for SwapEngine {
    fn default() -> Self {
        Self::new()
    }
}
