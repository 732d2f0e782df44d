//! # pairswap-assets
//!
//! **Custody Plane**: the native currency ledger, the token collaborator
//! boundary, and the atomic transfer adapter.
//!
//! ## Architecture
//!
//! The custody plane sits between the swap engine and the asset state:
//! 1. **NativeLedger**: per-account native currency balances
//! 2. **TokenContract** (trait): the collaborator interface every token
//!    contract exposes (`owner_of` / `balance_of` / approvals /
//!    `transfer_from`)
//! 3. **NftContract** / **SftContract**: in-memory non-fungible and
//!    semi-fungible implementations
//! 4. **TransferAdapter**: one polymorphic `transfer` over all standards
//!    plus the all-or-nothing `transfer_bundle`
//!
//! Token contract failures ([`TokenError`]) are distinct from engine
//! errors; the adapter maps them to `TransferDenied` /
//! `InsufficientBalance` so integrators can present accurate messages.

pub mod adapter;
pub mod native;
pub mod nft;
pub mod sft;
pub mod token;

pub use adapter::TransferAdapter;
pub use native::NativeLedger;
pub use nft::NftContract;
pub use sft::SftContract;
pub use token::{TokenContract, TokenError};
