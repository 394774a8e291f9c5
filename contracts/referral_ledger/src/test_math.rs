#![cfg(test)]

use crate::config::{RATE_SCALE, UNIT};
use crate::math::*;
use ledger_errors::ContractError;

#[test]
fn test_checked_add_and_mul() {
    assert_eq!(add_u64(1, 2), Ok(3));
    assert_eq!(add_u64(u64::MAX, 1), Err(ContractError::Overflow));
    assert_eq!(mul_u64(u64::MAX, 2), Err(ContractError::Overflow));
    assert_eq!(add_i128(i128::MAX, 1), Err(ContractError::Overflow));
    assert_eq!(mul_i128(i128::MAX, 2), Err(ContractError::Overflow));
}

#[test]
fn test_div_by_zero_is_overflow() {
    assert_eq!(div_i128(10, 0), Err(ContractError::Overflow));
    assert_eq!(div_i128(10, 3), Ok(3));
}

#[test]
fn test_bps_rounds_down() {
    assert_eq!(bps(10_000, 500), Ok(500));
    assert_eq!(bps(199, 100), Ok(1));
    assert_eq!(bps(99, 100), Ok(0));
    assert_eq!(bps(i128::MAX, 750), Err(ContractError::Overflow));
}

#[test]
fn test_scaled_percent() {
    // 1/30 % of 1000 units.
    assert_eq!(scaled_percent(1_000 * UNIT, RATE_SCALE / 30), Ok(3_333_333));
    // 1 % of 1 unit.
    assert_eq!(scaled_percent(UNIT, RATE_SCALE), Ok(UNIT / 100));
    assert_eq!(scaled_percent(i128::MAX, RATE_SCALE), Err(ContractError::Overflow));
}

#[test]
fn test_days_to_secs() {
    assert_eq!(days_to_secs(0), Ok(0));
    assert_eq!(days_to_secs(365), Ok(31_536_000));
    assert_eq!(days_to_secs(u32::MAX), Ok(u32::MAX as u64 * 86_400));
}
