#![cfg(test)]

extern crate std;

use crate::config::LedgerConfig;
use crate::investment::resolve_terms;
use crate::test_helpers::{invest, register, s, set_time, setup, units, ONE_DAY, START_TIME};
use crate::types::Package;
use crate::{ContractError, InvestmentStatus, TransactionStatus, TransactionType, RATE_SCALE};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

fn package(e: &Env, min: i128, max: Option<i128>, active: bool) -> Package {
    Package {
        id: 1,
        name: s(e, "Starter"),
        min_investment: min,
        max_investment: max,
        daily_return: RATE_SCALE / 2,
        duration_days: 30,
        active,
        created_at: 0,
    }
}

// ─── Term resolution ──────────────────────────────────────────────────────

#[test]
fn test_default_tiers() {
    let cfg = LedgerConfig::default();

    let low = resolve_terms(&cfg, None, units(1_000)).unwrap();
    assert_eq!(low.daily_return, 33_333_333);
    assert_eq!(low.duration_days, 365);

    let high = resolve_terms(&cfg, None, units(100_000)).unwrap();
    assert_eq!(high.daily_return, 50_000_000);

    // Just under the threshold still uses the low tier.
    let edge = resolve_terms(&cfg, None, units(100_000) - 1).unwrap();
    assert_eq!(edge.daily_return, 33_333_333);
}

#[test]
fn test_floor_only_applies_without_package() {
    let e = Env::default();
    let cfg = LedgerConfig::default();
    let pkg = package(&e, units(100), Some(units(1_000)), true);

    assert_eq!(
        resolve_terms(&cfg, None, units(100)),
        Err(ContractError::AmountBelowMinimum)
    );
    let terms = resolve_terms(&cfg, Some(&pkg), units(100)).unwrap();
    assert_eq!(terms.daily_return, RATE_SCALE / 2);
    assert_eq!(terms.duration_days, 30);
}

#[test]
fn test_package_bounds() {
    let e = Env::default();
    let cfg = LedgerConfig::default();
    let bounded = package(&e, units(100), Some(units(1_000)), true);
    let unbounded = package(&e, units(100), None, true);

    assert!(resolve_terms(&cfg, Some(&bounded), units(1_000)).is_ok());
    assert_eq!(
        resolve_terms(&cfg, Some(&bounded), units(1_000) + 1),
        Err(ContractError::AmountOutOfPackageBounds)
    );
    assert_eq!(
        resolve_terms(&cfg, Some(&bounded), units(99)),
        Err(ContractError::AmountOutOfPackageBounds)
    );
    assert!(resolve_terms(&cfg, Some(&unbounded), units(10_000_000)).is_ok());
}

#[test]
fn test_inactive_package_rejected() {
    let e = Env::default();
    let cfg = LedgerConfig::default();
    let closed = package(&e, units(100), None, false);
    assert_eq!(
        resolve_terms(&cfg, Some(&closed), units(500)),
        Err(ContractError::PackageInactive)
    );
}

#[test]
fn test_non_positive_amount() {
    let cfg = LedgerConfig::default();
    assert_eq!(resolve_terms(&cfg, None, 0), Err(ContractError::InvalidAmount));
    assert_eq!(resolve_terms(&cfg, None, -5), Err(ContractError::InvalidAmount));
}

// ─── Submission through the contract ──────────────────────────────────────

#[test]
fn test_submit_without_package() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let user = register(&e, &client, None);

    let inv = invest(&client, &user, units(1_000));

    assert_eq!(inv.id, 1);
    assert_eq!(inv.status, InvestmentStatus::Pending);
    assert_eq!(inv.package, None);
    assert_eq!(inv.daily_return, 33_333_333);
    assert_eq!(inv.daily_return_amount, 3_333_333);
    assert_eq!(inv.start_date, START_TIME);
    assert_eq!(inv.end_date, START_TIME + 365 * ONE_DAY);
    assert_eq!(inv.transaction_id, s(&e, "INV1700000000"));
    assert_eq!(client.get_investment(&inv.id), inv);

    // Nothing is credited until approval.
    assert_eq!(client.get_user(&user).total_investment, 0);

    let txs = client.get_user_transactions(&user);
    assert_eq!(txs.len(), 1);
    let tx = txs.get(0).unwrap();
    assert_eq!(tx.tx_type, TransactionType::Investment);
    assert_eq!(tx.status, TransactionStatus::Pending);
    assert_eq!(tx.amount, units(1_000));
    assert_eq!(tx.hash, inv.transaction_id);
}

#[test]
fn test_submit_uses_caller_references() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let user = register(&e, &client, None);

    let inv = client.submit_investment(
        &user,
        &units(600),
        &None,
        &Some(s(&e, "PAY-123")),
        &Some(s(&e, "GSPONSORWALLET")),
    );
    assert_eq!(inv.transaction_id, s(&e, "PAY-123"));
    assert_eq!(inv.sponsor_id, s(&e, "GSPONSORWALLET"));

    let tx = client.get_user_transactions(&user).get(0).unwrap();
    assert_eq!(tx.hash, s(&e, "PAY-123"));
}

#[test]
fn test_empty_reference_falls_back() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let user = register(&e, &client, None);
    set_time(&e, START_TIME + 42);

    let inv = client.submit_investment(&user, &units(600), &None, &Some(s(&e, "")), &None);
    assert_eq!(inv.transaction_id, s(&e, "INV1700000042"));
    assert_eq!(inv.sponsor_id, s(&e, ""));
}

#[test]
fn test_below_floor_writes_nothing() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let user = register(&e, &client, None);

    let res = client.try_submit_investment(&user, &units(100), &None, &None, &None);
    assert_eq!(res, Err(Ok(ContractError::AmountBelowMinimum)));
    assert_eq!(client.get_user_investments(&user).len(), 0);
    assert_eq!(client.get_user_transactions(&user).len(), 0);
}

#[test]
fn test_submit_with_package() {
    let e = Env::default();
    let (client, admin, _) = setup(&e);
    let user = register(&e, &client, None);
    let pkg = client.create_package(
        &admin,
        &s(&e, "Starter"),
        &units(100),
        &Some(units(1_000)),
        &(RATE_SCALE / 2),
        &30,
    );

    let inv = client.submit_investment(&user, &units(100), &Some(pkg.id), &None, &None);
    assert_eq!(inv.package, Some(pkg.id));
    assert_eq!(inv.daily_return, RATE_SCALE / 2);
    assert_eq!(inv.daily_return_amount, units(1) / 2);
    assert_eq!(inv.end_date, START_TIME + 30 * ONE_DAY);

    let res = client.try_submit_investment(&user, &(units(1_000) + 1), &Some(pkg.id), &None, &None);
    assert_eq!(res, Err(Ok(ContractError::AmountOutOfPackageBounds)));

    client.set_package_active(&admin, &pkg.id, &false);
    let res = client.try_submit_investment(&user, &units(500), &Some(pkg.id), &None, &None);
    assert_eq!(res, Err(Ok(ContractError::PackageInactive)));
}

#[test]
fn test_unknown_package_and_user() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let user = register(&e, &client, None);

    let res = client.try_submit_investment(&user, &units(1_000), &Some(42), &None, &None);
    assert_eq!(res, Err(Ok(ContractError::PackageNotFound)));

    let stranger = Address::generate(&e);
    let res = client.try_submit_investment(&stranger, &units(1_000), &None, &None, &None);
    assert_eq!(res, Err(Ok(ContractError::UserNotFound)));
}

#[test]
fn test_ids_are_sequential_per_ledger() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let alice = register(&e, &client, None);
    let bob = register(&e, &client, None);

    let first = invest(&client, &alice, units(500));
    let second = invest(&client, &bob, units(500));
    let third = invest(&client, &alice, units(700));

    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    let ids: std::vec::Vec<u64> = client
        .get_user_investments(&alice)
        .iter()
        .map(|inv| inv.id)
        .collect();
    assert_eq!(ids, std::vec![1, 3]);
}
