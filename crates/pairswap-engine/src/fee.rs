//! Fee policy: an optional deduction applied to the native value legs at
//! close time.
//!
//! The fee only scales native currency; it never alters which token legs
//! move. Absent configuration means rate zero.

use pairswap_types::{AccountId, EngineConfig, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// A fixed-point fee rate and the account that collects it.
#[derive(Debug, Clone)]
pub struct FeePolicy {
    rate: Decimal,
    collector: Option<AccountId>,
}

impl FeePolicy {
    /// A policy that takes nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            rate: Decimal::ZERO,
            collector: None,
        }
    }

    /// Build the policy from engine configuration.
    ///
    /// # Errors
    /// Returns `Configuration` if the configured rate is out of `[0, 1)`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(match &config.fee {
            None => Self::disabled(),
            Some(fee) => Self {
                rate: fee.rate,
                collector: Some(fee.collector),
            },
        })
    }

    /// The account receiving fees, if any.
    #[must_use]
    pub fn collector(&self) -> Option<AccountId> {
        self.collector
    }

    /// Split a native value leg into `(net, fee)`.
    ///
    /// The fee is floored, so `net + fee == value` always holds and the
    /// fee never exceeds the leg. Values beyond `Decimal`'s 96-bit
    /// mantissa take no fee rather than failing settlement.
    #[must_use]
    pub fn split(&self, value: u128) -> (u128, u128) {
        if self.collector.is_none() || self.rate.is_zero() || value == 0 {
            return (value, 0);
        }
        let fee = Decimal::from_u128(value)
            .map(|v| (v * self.rate).floor())
            .and_then(|d| d.to_u128())
            .unwrap_or(0)
            .min(value);
        (value - fee, fee)
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
