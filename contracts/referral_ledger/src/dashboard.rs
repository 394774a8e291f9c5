//! Admin dashboard reads: the paged investment list and ledger-wide totals.
//!
//! Both reads are bounded. The list touches at most `MAX_PAGE_SIZE`
//! investments and the totals come from running sums kept by the store.

use ledger_errors::ContractError;
use soroban_sdk::{Env, Vec};

use crate::math;
use crate::store::LedgerStore;
use crate::types::{Investment, LedgerStats};

/// Largest page `list_investments` returns.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of every investment, newest first.
///
/// `page` is 1-based; `0` is read as the first page. `limit` is capped at
/// `MAX_PAGE_SIZE`. A page past the end is empty.
pub fn list_investments<S: LedgerStore>(
    e: &Env,
    store: &S,
    page: u32,
    limit: u32,
) -> Result<Vec<Investment>, ContractError> {
    let limit = limit.min(MAX_PAGE_SIZE);
    let skip = math::mul_u64(u64::from(page.max(1) - 1), u64::from(limit))?;
    let newest = store.investment_count()?;

    let mut out = Vec::new(e);
    if skip >= newest {
        return Ok(out);
    }
    let mut id = newest - skip;
    while id > 0 && out.len() < limit {
        if let Some(inv) = store.find_investment_by_id(id)? {
            out.push_back(inv);
        }
        id -= 1;
    }
    Ok(out)
}

pub fn ledger_stats<S: LedgerStore>(store: &S) -> Result<LedgerStats, ContractError> {
    store.stats()
}
