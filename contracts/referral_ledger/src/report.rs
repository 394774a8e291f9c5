//! Downline level-income report.
//!
//! Walks a user's downline breadth-first, one commission level at a time,
//! and prices each level's business volume with the same commission table
//! the upline walker pays from.

use ledger_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::commission::{self, MAX_LEVELS};
use crate::math;
use crate::store::LedgerStore;
use crate::types::{LevelReport, LevelStat};

pub fn level_report<S: LedgerStore>(
    e: &Env,
    store: &S,
    root: &Address,
) -> Result<LevelReport, ContractError> {
    if store.find_user_by_id(root)?.is_none() {
        return Err(ContractError::UserNotFound);
    }

    let mut report = LevelReport {
        levels: Vec::new(e),
        total_members: 0,
        total_business: 0,
        total_income: 0,
        active_levels: 0,
    };
    let mut seen: Vec<Address> = Vec::new(e);
    seen.push_back(root.clone());
    let mut frontier = store.direct_referrals(root)?;

    for level in 0..MAX_LEVELS {
        let mut members: u32 = 0;
        let mut business: i128 = 0;
        let mut next: Vec<Address> = Vec::new(e);

        for member in frontier.iter() {
            if seen.contains(&member) {
                continue;
            }
            seen.push_back(member.clone());
            let Some(user) = store.find_user_by_id(&member)? else {
                continue;
            };
            members += 1;
            business = math::add_i128(business, user.total_investment)?;
            next.append(&store.direct_referrals(&member)?);
        }

        let income = commission::level_income(business, level)?;
        report.levels.push_back(LevelStat {
            level: level + 1,
            members,
            business,
            commission_bps: commission::level_bps(level).unwrap_or(0),
            income,
        });
        report.total_members += members;
        report.total_business = math::add_i128(report.total_business, business)?;
        report.total_income = math::add_i128(report.total_income, income)?;
        if members > 0 {
            report.active_levels += 1;
        }
        frontier = next;
    }

    Ok(report)
}
