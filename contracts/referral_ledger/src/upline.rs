//! Upline walker: pays level income up the sponsor chain.
//!
//! Starting from the investor, each step follows `referred_by` one level up
//! and creates a completed `Bonus` transaction for that sponsor. The walk
//! stops at the first missing link, at a sponsor already visited in this walk,
//! or after `MAX_LEVELS` payouts. The investor never pays themself.

use ledger_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::commission::{self, MAX_LEVELS};
use crate::events;
use crate::hashes;
use crate::math;
use crate::store::LedgerStore;
use crate::types::{NewTransaction, TransactionStatus, TransactionType, User};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkStop {
    /// The last visited user has no sponsor.
    NoReferrer,
    /// `referred_by` points at an address with no user record.
    MissingReferrer,
    /// The chain loops back to a user already visited.
    Cycle,
    /// Every commission level was reached.
    MaxDepth,
    /// The store failed; payouts made before the failure stand.
    Failed(ContractError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WalkSummary {
    /// Bonus transactions created.
    pub levels_paid: u32,
    /// Levels skipped because their bonus hash was already recorded.
    pub duplicates: u32,
    pub total_paid: i128,
    pub stop: WalkStop,
}

impl WalkSummary {
    /// A walk that has paid nothing yet.
    pub fn empty() -> Self {
        Self {
            levels_paid: 0,
            duplicates: 0,
            total_paid: 0,
            stop: WalkStop::MaxDepth,
        }
    }

    fn stopped(mut self, stop: WalkStop) -> Self {
        self.stop = stop;
        self
    }
}

/// Distribute level income for an approved investment of `amount` made by
/// `investor`. Store failures end the walk and are reported in the summary
/// rather than returned, so the caller can tell how far the walk got.
pub fn distribute_level_income<S: LedgerStore>(
    e: &Env,
    store: &S,
    investor: &User,
    amount: i128,
    investment_id: u64,
) -> WalkSummary {
    let mut summary = WalkSummary::empty();
    let mut visited: Vec<Address> = Vec::new(e);
    visited.push_back(investor.address.clone());
    let mut current = investor.clone();

    for level in 0..MAX_LEVELS {
        let Some(sponsor_id) = current.referred_by.clone() else {
            return summary.stopped(WalkStop::NoReferrer);
        };
        if visited.contains(&sponsor_id) {
            return summary.stopped(WalkStop::Cycle);
        }
        let sponsor = match store.find_user_by_id(&sponsor_id) {
            Ok(Some(user)) => user,
            Ok(None) => return summary.stopped(WalkStop::MissingReferrer),
            Err(err) => return summary.stopped(WalkStop::Failed(err)),
        };

        let income = match commission::level_income(amount, level) {
            Ok(income) => income,
            Err(err) => return summary.stopped(WalkStop::Failed(err)),
        };
        let bonus = NewTransaction {
            user: sponsor_id.clone(),
            tx_type: TransactionType::Bonus,
            amount: income,
            status: TransactionStatus::Completed,
            hash: hashes::bonus_hash(e, level + 1, investment_id),
        };
        match store.create_transaction(bonus) {
            Ok(_) => {
                summary.levels_paid += 1;
                summary.total_paid = match math::add_i128(summary.total_paid, income) {
                    Ok(total) => total,
                    Err(err) => return summary.stopped(WalkStop::Failed(err)),
                };
                events::emit_level_income(e, &sponsor_id, level + 1, income, investment_id);
            }
            // Already paid for this level; leave it as it is.
            Err(ContractError::DuplicateHash) => summary.duplicates += 1,
            Err(err) => return summary.stopped(WalkStop::Failed(err)),
        }

        visited.push_back(sponsor_id);
        current = sponsor;
    }

    summary
}
