//! # pairswap-engine
//!
//! **Swap Plane**: the append-only swap ledger, the fee policy, and the
//! [`SwapEngine`] state machine exposing `open_swap` / `close_swap` /
//! `cancel_swap`.
//!
//! ## Lifecycle
//!
//! ```text
//! open_swap:  validate -> escrow party one's leg -> record Open -> Opened event
//! close_swap: validate -> party two's leg to party one
//!                      -> release escrow to party two (net of fee)
//!                      -> Closed + Closed event
//! cancel_swap: validate -> return escrow to party one -> Cancelled
//! ```
//!
//! Every call either fully commits or fully reverts: a failed leg unwinds
//! any partial movement before the error reaches the caller, and the
//! ledger is only touched after all fallible transfers succeed.

pub mod engine;
pub mod fee;
pub mod ledger;

pub use engine::SwapEngine;
pub use fee::FeePolicy;
pub use ledger::SwapLedger;
