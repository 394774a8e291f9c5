#![cfg(test)]

use crate::test_helpers::{invest, register, setup, units};
use crate::{ContractError, InvestmentStatus, LedgerConfig, RATE_SCALE};
use soroban_sdk::Env;

#[test]
fn test_default_config() {
    let e = Env::default();
    let (client, _admin, _) = setup(&e);
    let cfg = client.get_config();
    assert_eq!(cfg, LedgerConfig::default());
    assert_eq!(cfg.min_investment_floor, units(500));
    assert_eq!(cfg.tier_threshold, units(100_000));
    assert_eq!(cfg.low_tier_monthly_rate, RATE_SCALE);
    assert_eq!(cfg.high_tier_monthly_rate, RATE_SCALE * 3 / 2);
    assert_eq!(cfg.default_duration_days, 365);
}

#[test]
fn test_set_config_changes_floor_and_rates() {
    let e = Env::default();
    let (client, admin, _) = setup(&e);
    let user = register(&e, &client, None);

    let cfg = LedgerConfig {
        min_investment_floor: units(50),
        low_tier_monthly_rate: RATE_SCALE * 3,
        high_tier_monthly_rate: RATE_SCALE * 3,
        default_duration_days: 90,
        ..LedgerConfig::default()
    };
    client.set_config(&admin, &cfg);
    assert_eq!(client.get_config(), cfg);

    let inv = invest(&client, &user, units(100));
    assert_eq!(inv.status, InvestmentStatus::Pending);
    assert_eq!(inv.daily_return, RATE_SCALE / 10);
    assert_eq!(inv.end_date - inv.start_date, 90 * 86_400);
}

#[test]
fn test_invalid_config_rejected() {
    let e = Env::default();
    let (client, admin, _) = setup(&e);

    let zero_floor = LedgerConfig {
        min_investment_floor: 0,
        ..LedgerConfig::default()
    };
    assert_eq!(
        client.try_set_config(&admin, &zero_floor),
        Err(Ok(ContractError::InvalidConfig))
    );

    let zero_term = LedgerConfig {
        default_duration_days: 0,
        ..LedgerConfig::default()
    };
    assert_eq!(
        client.try_set_config(&admin, &zero_term),
        Err(Ok(ContractError::InvalidConfig))
    );
    assert_eq!(client.get_config(), LedgerConfig::default());
}

#[test]
fn test_inverted_tiers_rejected() {
    let e = Env::default();
    let (client, admin, _) = setup(&e);

    let inverted = LedgerConfig {
        low_tier_monthly_rate: RATE_SCALE * 2,
        high_tier_monthly_rate: RATE_SCALE,
        ..LedgerConfig::default()
    };
    assert_eq!(
        client.try_set_config(&admin, &inverted),
        Err(Ok(ContractError::InvalidConfig))
    );
    assert_eq!(client.get_config(), LedgerConfig::default());

    // Equal rates are a flat schedule and are accepted.
    let flat = LedgerConfig {
        high_tier_monthly_rate: RATE_SCALE,
        ..LedgerConfig::default()
    };
    client.set_config(&admin, &flat);
    assert_eq!(client.get_config(), flat);
}
