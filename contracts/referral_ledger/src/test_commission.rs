#![cfg(test)]

use crate::commission::*;
use crate::test_helpers::{setup, units};
use soroban_sdk::Env;

#[test]
fn test_table_totals_twenty_eight_and_a_half_percent() {
    assert_eq!(LEVEL_COMMISSION_BPS.iter().sum::<u32>(), 2_850);
    assert_eq!(LEVEL_COMMISSION_BPS.len(), MAX_LEVELS as usize);
}

#[test]
fn test_level_bps_lookup() {
    assert_eq!(level_bps(0), Some(500));
    assert_eq!(level_bps(6), Some(750));
    assert_eq!(level_bps(9), Some(250));
    assert_eq!(level_bps(10), None);
}

#[test]
fn test_level_income() {
    let amount = units(10_000);
    assert_eq!(level_income(amount, 0), Ok(units(500)));
    assert_eq!(level_income(amount, 1), Ok(units(200)));
    assert_eq!(level_income(amount, 6), Ok(units(750)));
    assert_eq!(level_income(amount, 10), Ok(0));
}

#[test]
fn test_commission_table_entrypoint() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let table = client.commission_table();
    assert_eq!(table.len(), MAX_LEVELS);
    assert_eq!(table.get(0), Some(500));
    assert_eq!(table.iter().sum::<u32>(), 2_850);
}
