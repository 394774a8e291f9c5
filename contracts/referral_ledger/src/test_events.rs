#![cfg(test)]

use crate::store::{ContractStore, LedgerStore};
use crate::test_helpers::{invest, invest_approved, register, register_chain, s, setup, units};
use crate::{Decision, InvestmentStatus, LedgerConfig, ReferralLedger, ReferralLedgerClient};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Address, Env, FromVal, IntoVal, Symbol, TryFromVal, Val, Vec};

/// Whether the last invocation emitted an event from `contract_id` with the
/// given topics and data.
fn emitted<D>(e: &Env, contract_id: &Address, topics: Vec<Val>, data: D) -> bool
where
    D: TryFromVal<Env, Val> + PartialEq,
{
    e.events().all().iter().any(|evt| {
        evt.0 == *contract_id
            && evt.1 == topics
            && D::try_from_val(e, &evt.2)
                .map(|d| d == data)
                .unwrap_or(false)
    })
}

#[test]
fn test_initialize_event() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(ReferralLedger, ());
    let client = ReferralLedgerClient::new(&e, &contract_id);
    let admin = Address::generate(&e);

    client.initialize(&admin);

    let events = e.events().all();
    let last = events.iter().rev().find(|ev| ev.0 == contract_id).unwrap();
    let topic = Symbol::from_val(&e, &last.1.get(0).unwrap());
    assert_eq!(topic, Symbol::new(&e, "ledger_initialized"));
    assert_eq!(Address::from_val(&e, &last.2), admin);
}

#[test]
fn test_submission_event() {
    let e = Env::default();
    let (client, _admin, contract_id) = setup(&e);
    let chain = register_chain(&e, &client, 1);
    let user = &chain[0];

    let inv = invest(&client, user, units(1_000));

    let topics = Vec::from_array(
        &e,
        [
            Symbol::new(&e, "investment_submitted").into_val(&e),
            user.clone().into_val(&e),
        ],
    );
    assert!(
        emitted(&e, &contract_id, topics, (inv.id, units(1_000), 3_333_333_i128)),
        "expected investment_submitted event not found"
    );
}

#[test]
fn test_approval_events() {
    let e = Env::default();
    let (client, admin, contract_id) = setup(&e);
    let chain = register_chain(&e, &client, 3);
    let inv = invest(&client, &chain[2], units(10_000));

    client.decide_investment(&admin, &inv.id, &Decision::Approve);

    let level_one = Vec::from_array(
        &e,
        [
            Symbol::new(&e, "level_income").into_val(&e),
            chain[1].clone().into_val(&e),
        ],
    );
    assert!(emitted(&e, &contract_id, level_one, (1_u32, units(500), inv.id)));

    let level_two = Vec::from_array(
        &e,
        [
            Symbol::new(&e, "level_income").into_val(&e),
            chain[0].clone().into_val(&e),
        ],
    );
    assert!(emitted(&e, &contract_id, level_two, (2_u32, units(200), inv.id)));

    let decided = Vec::from_array(
        &e,
        [
            Symbol::new(&e, "investment_decided").into_val(&e),
            inv.id.into_val(&e),
        ],
    );
    assert!(emitted(
        &e,
        &contract_id,
        decided,
        (Decision::Approve, InvestmentStatus::Active, 2_u32)
    ));
}


#[test]
fn test_admin_and_wallet_events() {
    let e = Env::default();
    let (client, admin, contract_id) = setup(&e);
    let user = register(&e, &client, None);

    client.set_config(&admin, &LedgerConfig::default());
    let config = Vec::from_array(&e, [Symbol::new(&e, "config_updated").into_val(&e)]);
    assert!(emitted(&e, &contract_id, config, admin.clone()));

    client.set_wallet(&user, &s(&e, "GWALLET"));
    let wallet = Vec::from_array(
        &e,
        [
            Symbol::new(&e, "wallet_set").into_val(&e),
            user.clone().into_val(&e),
        ],
    );
    assert!(emitted(&e, &contract_id, wallet, ()));
}

#[test]
fn test_reconcile_event_carries_old_and_new_totals() {
    let e = Env::default();
    let (client, admin, contract_id) = setup(&e);
    let user = register(&e, &client, None);
    invest_approved(&client, &admin, &user, units(1_000));

    e.as_contract(&contract_id, || {
        let store = ContractStore::new(&e);
        let mut record = store.find_user_by_id(&user).unwrap().unwrap();
        record.total_investment = units(9);
        store.save_user(&record).unwrap();
    });

    client.reconcile_user(&admin, &user);
    let topics = Vec::from_array(
        &e,
        [
            Symbol::new(&e, "total_reconciled").into_val(&e),
            user.clone().into_val(&e),
        ],
    );
    assert!(emitted(&e, &contract_id, topics, (units(9), units(1_000))));
}
