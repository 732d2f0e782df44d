//! # pairswap-types
//!
//! Shared types, errors, and configuration for the **PairSwap** two-party
//! escrow engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`ContractId`] (nil = sentinel), [`SwapId`]
//! - **Asset model**: [`AssetRef`], [`AssetStandard`]
//! - **Swap model**: [`Swap`], [`SwapStatus`], [`SwapTerms`]
//! - **Events**: [`SwapEvent`], [`SwapEventKind`]
//! - **Configuration**: [`EngineConfig`], [`FeeConfig`]
//! - **Errors**: [`SwapError`] with `PS_ERR_` prefix codes
//! - **Constants**: per-leg bundle cap and engine identity

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod swap;
pub mod terms;

// Re-export all primary types at crate root for ergonomic imports:
//   use pairswap_types::{AssetRef, Swap, SwapTerms, SwapError, ...};

pub use asset::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use swap::*;
pub use terms::*;

// Constants are accessed via `pairswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
