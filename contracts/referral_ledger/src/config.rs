//! Ledger configuration: investment floor, default return tiers, default term.
//!
//! Stored in `instance()` storage under `DataKey::Config`. Until an admin calls
//! `set_config`, [`LedgerConfig::default`] applies.

use ledger_errors::ContractError;
use soroban_sdk::{contracttype, Env};

use crate::types::DataKey;

/// Minor units per whole token unit (7 decimals, Stellar asset convention).
pub const UNIT: i128 = 10_000_000;

/// Fixed-point scale for percentage rates: `1 %` is stored as `RATE_SCALE`.
pub const RATE_SCALE: i128 = 1_000_000_000;

/// Monthly rates are converted to daily rates over a 30-day month.
pub const DAYS_PER_MONTH: i128 = 30;

pub const SECONDS_PER_DAY: u64 = 86_400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Smallest accepted amount when no package is selected.
    pub min_investment_floor: i128,
    /// Amounts strictly below this use the low monthly tier.
    pub tier_threshold: i128,
    /// Monthly return below `tier_threshold`, scaled by `RATE_SCALE`.
    pub low_tier_monthly_rate: i128,
    /// Monthly return at or above `tier_threshold`, scaled by `RATE_SCALE`.
    pub high_tier_monthly_rate: i128,
    /// Term applied when no package (or an unresolvable package) is linked.
    pub default_duration_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_investment_floor: 500 * UNIT,
            tier_threshold: 100_000 * UNIT,
            low_tier_monthly_rate: RATE_SCALE,
            high_tier_monthly_rate: RATE_SCALE * 3 / 2,
            default_duration_days: 365,
        }
    }
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.min_investment_floor <= 0
            || self.tier_threshold <= 0
            || self.low_tier_monthly_rate <= 0
            || self.high_tier_monthly_rate <= 0
            || self.default_duration_days == 0
        {
            return Err(ContractError::InvalidConfig);
        }
        // Crossing the threshold must never lower the rate.
        if self.high_tier_monthly_rate < self.low_tier_monthly_rate {
            return Err(ContractError::InvalidConfig);
        }
        Ok(())
    }

    /// Daily return (scaled percent) for an investment made without a package.
    pub fn default_daily_return(&self, amount: i128) -> i128 {
        let monthly = if amount < self.tier_threshold {
            self.low_tier_monthly_rate
        } else {
            self.high_tier_monthly_rate
        };
        monthly / DAYS_PER_MONTH
    }
}

pub fn get(e: &Env) -> LedgerConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_default()
}

pub fn set(e: &Env, config: &LedgerConfig) -> Result<(), ContractError> {
    config.validate()?;
    e.storage().instance().set(&DataKey::Config, config);
    Ok(())
}
