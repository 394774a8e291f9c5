//! Recompute `total_investment` from investment records.
//!
//! `User::total_investment` is a cached sum. The source of truth is the set
//! of the user's investments in `Active` or `Completed` status; these helpers
//! rebuild the cache from it and repair any drift.

use ledger_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::events;
use crate::math;
use crate::store::LedgerStore;
use crate::types::ReconcileEntry;

/// Sum of credited investment amounts for `user`.
pub fn credited_total<S: LedgerStore>(store: &S, user: &Address) -> Result<i128, ContractError> {
    let mut total: i128 = 0;
    for inv in store.user_investments(user)?.iter() {
        if inv.status.is_credited() {
            total = math::add_i128(total, inv.amount)?;
        }
    }
    Ok(total)
}

/// Recompute one user's total and repair it if it drifted.
pub fn reconcile_user<S: LedgerStore>(
    e: &Env,
    store: &S,
    user: &Address,
) -> Result<ReconcileEntry, ContractError> {
    let mut record = store
        .find_user_by_id(user)?
        .ok_or(ContractError::UserNotFound)?;
    let correct_total = credited_total(store, user)?;
    let entry = ReconcileEntry {
        user: user.clone(),
        old_total: record.total_investment,
        correct_total,
    };

    if entry.old_total != entry.correct_total {
        record.total_investment = correct_total;
        store.save_user(&record)?;
        events::emit_total_reconciled(e, &entry);
    }
    Ok(entry)
}

/// Reconcile every registered user. Returns only the users that were repaired.
pub fn reconcile_all<S: LedgerStore>(
    e: &Env,
    store: &S,
) -> Result<Vec<ReconcileEntry>, ContractError> {
    let mut repaired = Vec::new(e);
    for user in store.all_users()?.iter() {
        let entry = reconcile_user(e, store, &user)?;
        if entry.old_total != entry.correct_total {
            repaired.push_back(entry);
        }
    }
    Ok(repaired)
}
