//! Configuration types for the swap engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Result, SwapError};

/// Fee configuration: a fixed-point rate applied to both native value legs
/// at close time, diverted to the collector account.
///
/// Fees never alter which token legs move; they only scale the native
/// currency legs. No fee configuration means rate zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// The rate as a decimal fraction, `0 <= rate < 1` (e.g. `0.025` for
    /// 2.5%).
    pub rate: Decimal,
    /// The protocol-controlled account that receives the fee.
    pub collector: AccountId,
}

impl FeeConfig {
    /// Validate the rate bounds.
    ///
    /// # Errors
    /// Returns `Configuration` if the rate is negative or not below one.
    pub fn validate(&self) -> Result<()> {
        if self.rate < Decimal::ZERO || self.rate >= Decimal::ONE {
            return Err(SwapError::Configuration(format!(
                "fee rate {} out of range [0, 1)",
                self.rate
            )));
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Optional fee policy. `None` means no fee is taken.
    pub fee: Option<FeeConfig>,
}

impl EngineConfig {
    /// Configuration with no fee.
    #[must_use]
    pub fn no_fee() -> Self {
        Self { fee: None }
    }

    /// Configuration with the given fee rate and collector.
    #[must_use]
    pub fn with_fee(rate: Decimal, collector: AccountId) -> Self {
        Self {
            fee: Some(FeeConfig { rate, collector }),
        }
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(fee) = &self.fee {
            fee.validate()?;
        }
        Ok(())
    }
}
