//! Error types for the PairSwap escrow engine.
//!
//! All errors use the `PS_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Authorization and offer validation
//! - 2xx: Native value errors
//! - 3xx: Token transfer / custody errors
//! - 4xx: Swap ledger errors
//! - 9xx: General / configuration errors
//!
//! Every validation failure aborts the whole call with no state mutation:
//! the caller sees exactly one of these named conditions and may resubmit
//! a corrected call.

use thiserror::Error;

use crate::{AccountId, SwapId, SwapStatus};

/// Central error enum for all PairSwap operations.
#[derive(Debug, Error)]
pub enum SwapError {
    // =================================================================
    // Authorization / offer errors (1xx)
    // =================================================================
    /// The caller does not hold the role required for this operation.
    #[error("PS_ERR_100: Unauthorized: caller {caller} is not {expected}")]
    Unauthorized {
        expected: AccountId,
        caller: AccountId,
    },

    /// A side of the swap contributes neither native value nor tokens.
    #[error("PS_ERR_101: Empty offer: a side must commit native value or at least one token")]
    EmptyOffer,

    /// An asset bundle exceeds the per-leg size cap.
    #[error("PS_ERR_102: Offer too large: {len} items, max {max}")]
    OfferTooLarge { len: usize, max: usize },

    // =================================================================
    // Native value errors (2xx)
    // =================================================================
    /// Attached native value does not exactly equal the expected value.
    /// Excess is rejected, not refunded.
    #[error("PS_ERR_200: Values mismatched: expected {expected}, attached {attached}")]
    ValuesMismatched { expected: u128, attached: u128 },

    /// Not enough native or semi-fungible balance for the operation.
    #[error("PS_ERR_201: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    // =================================================================
    // Token transfer / custody errors (3xx)
    // =================================================================
    /// An ownership or approval check failed on a token leg.
    #[error("PS_ERR_300: Transfer denied: {reason}")]
    TransferDenied { reason: String },

    // =================================================================
    // Swap ledger errors (4xx)
    // =================================================================
    /// No swap with this id exists in the ledger.
    #[error("PS_ERR_400: Swap not found: {0}")]
    SwapNotFound(SwapId),

    /// The swap exists but is no longer Open.
    #[error("PS_ERR_401: Swap not open: {id} is {status}")]
    SwapNotOpen { id: SwapId, status: SwapStatus },

    /// A status change was attempted that the state machine forbids.
    #[error("PS_ERR_402: Invalid transition for {id}: {from} -> {to}")]
    InvalidTransition {
        id: SwapId,
        from: SwapStatus,
        to: SwapStatus,
    },

    // =================================================================
    // General / configuration (9xx)
    // =================================================================
    /// Configuration error (invalid fee rate, missing collector, etc.).
    #[error("PS_ERR_900: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SwapError>;
