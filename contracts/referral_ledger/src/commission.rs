//! Upline commission table.
//!
//! Index 0 is the direct sponsor. Values are basis points of the investment
//! amount: 5 %, 2 %, 1 %, 1 %, 1 %, 1 %, 7.5 %, 5 %, 2.5 %, 2.5 % (28.5 % total).
//! The level-income report reads the same table, so payouts and reported
//! expected income cannot diverge.

use ledger_errors::ContractError;
use soroban_sdk::{Env, Vec};

use crate::math;

/// Deepest upline level that earns a commission.
pub const MAX_LEVELS: u32 = 10;

pub const LEVEL_COMMISSION_BPS: [u32; MAX_LEVELS as usize] =
    [500, 200, 100, 100, 100, 100, 750, 500, 250, 250];

/// Commission for a 0-indexed depth, `None` past the last level.
pub fn level_bps(level: u32) -> Option<u32> {
    LEVEL_COMMISSION_BPS.get(level as usize).copied()
}

/// Commission owed at `level` on `amount`. Zero past the last level.
pub fn level_income(amount: i128, level: u32) -> Result<i128, ContractError> {
    match level_bps(level) {
        Some(rate) => math::bps(amount, rate),
        None => Ok(0),
    }
}

pub fn as_vec(e: &Env) -> Vec<u32> {
    Vec::from_array(e, LEVEL_COMMISSION_BPS)
}
