#![cfg(test)]

use crate::hashes::{bonus_hash, fallback_transaction_id};
use soroban_sdk::{Env, String};

#[test]
fn test_bonus_hash_format() {
    let e = Env::default();
    assert_eq!(bonus_hash(&e, 1, 7), String::from_str(&e, "LEVEL1-7"));
    assert_eq!(bonus_hash(&e, 10, 12_345), String::from_str(&e, "LEVEL10-12345"));
    assert_eq!(bonus_hash(&e, 3, 0), String::from_str(&e, "LEVEL3-0"));
}

#[test]
fn test_bonus_hash_fits_widest_values() {
    let e = Env::default();
    assert_eq!(
        bonus_hash(&e, u32::MAX, u64::MAX),
        String::from_str(&e, "LEVEL4294967295-18446744073709551615")
    );
}

#[test]
fn test_fallback_transaction_id() {
    let e = Env::default();
    assert_eq!(
        fallback_transaction_id(&e, 1_700_000_000),
        String::from_str(&e, "INV1700000000")
    );
    assert_eq!(fallback_transaction_id(&e, 0), String::from_str(&e, "INV0"));
}
