//! System-wide constants for the PairSwap engine.

/// Maximum asset references allowed in one leg of a swap.
pub const MAX_ITEMS_PER_LEG: usize = 32;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "PairSwap";
