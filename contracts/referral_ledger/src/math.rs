//! Overflow-safe arithmetic helpers for ledger calculations.
//!
//! Every helper returns `ContractError::Overflow` instead of wrapping, so callers
//! can propagate with `?` before any storage write happens.

use ledger_errors::ContractError;

use crate::config::{RATE_SCALE, SECONDS_PER_DAY};

/// Checked `u64` addition.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `u64` multiplication.
#[inline]
pub fn mul_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` division. Division by zero is reported as overflow.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// Basis-point share of an amount: `amount * bps / 10_000`, rounded toward zero.
#[inline]
pub fn bps(amount: i128, bps: u32) -> Result<i128, ContractError> {
    div_i128(mul_i128(amount, bps as i128)?, 10_000)
}

/// Share of `amount` at a scaled percentage rate:
/// `amount * rate / (100 * RATE_SCALE)`, rounded toward zero.
#[inline]
pub fn scaled_percent(amount: i128, rate: i128) -> Result<i128, ContractError> {
    div_i128(mul_i128(amount, rate)?, 100 * RATE_SCALE)
}

/// Whole days to ledger seconds.
#[inline]
pub fn days_to_secs(days: u32) -> Result<u64, ContractError> {
    mul_u64(days as u64, SECONDS_PER_DAY)
}
