//! Approval engine: `Pending -> Active` or `Pending -> Rejected`.
//!
//! ## Ordering
//!
//! 1. Read and validate everything that can fail without side effects:
//!    the investment, its owner, the credited total, the new term.
//! 2. Flip the status with a compare-and-swap. Losing the swap means another
//!    decision already won: return `RaceLost` having written nothing.
//! 3. Follow-up steps (credit, level income, paired transaction). A failure
//!    here is not rolled back; it is reported as `DecisionStatus::Partial`.
//!
//! Only a decision observed on a `Pending` investment has effects. Deciding an
//! investment in any other status returns `DecisionStatus::Unchanged`.

use ledger_errors::ContractError;
use soroban_sdk::{Env, String};

use crate::config;
use crate::events;
use crate::math;
use crate::store::LedgerStore;
use crate::types::{
    ApprovalStep, Decision, DecisionOutcome, DecisionStatus, Investment, InvestmentStatus,
    TransactionStatus, TransactionType, TxFilter, TxPatch,
};
use crate::upline::{self, WalkStop, WalkSummary};

pub fn decide<S: LedgerStore>(
    e: &Env,
    store: &S,
    investment_id: u64,
    decision: Decision,
) -> Result<DecisionOutcome, ContractError> {
    let current = store
        .find_investment_by_id(investment_id)?
        .ok_or(ContractError::InvestmentNotFound)?;

    if current.status != InvestmentStatus::Pending {
        return Ok(unchanged(e, current));
    }

    match decision {
        Decision::Approve => approve(e, store, current),
        Decision::Reject => reject(e, store, current),
    }
}

fn approve<S: LedgerStore>(
    e: &Env,
    store: &S,
    current: Investment,
) -> Result<DecisionOutcome, ContractError> {
    let mut investor = store
        .find_user_by_id(&current.user)?
        .ok_or(ContractError::UserNotFound)?;
    let credited_total = math::add_i128(investor.total_investment, current.amount)?;

    let cfg = config::get(e);
    let duration_days = match current.package {
        Some(id) => store
            .find_package_by_id(id)?
            .map_or(cfg.default_duration_days, |pkg| pkg.duration_days),
        None => cfg.default_duration_days,
    };
    let now = e.ledger().timestamp();
    let end_date = math::add_u64(now, math::days_to_secs(duration_days)?)?;

    let mut next = current;
    next.start_date = now;
    next.end_date = end_date;
    next.status = InvestmentStatus::Active;
    if !store.replace_investment_if(InvestmentStatus::Pending, &next)? {
        return Err(ContractError::RaceLost);
    }

    investor.total_investment = credited_total;
    if let Err(err) = store.save_user(&investor) {
        return Ok(partial(
            e,
            Decision::Approve,
            next,
            ApprovalStep::Credit,
            err,
            &WalkSummary::empty(),
        ));
    }

    let walk = upline::distribute_level_income(e, store, &investor, next.amount, next.id);
    if let WalkStop::Failed(err) = walk.stop {
        return Ok(partial(
            e,
            Decision::Approve,
            next,
            ApprovalStep::LevelIncome,
            err,
            &walk,
        ));
    }

    let patch = TxPatch {
        status: TransactionStatus::Completed,
    };
    if let Err(err) = store.update_transaction_matching(&paired_transaction(&next), &patch) {
        return Ok(partial(
            e,
            Decision::Approve,
            next,
            ApprovalStep::TransactionUpdate,
            err,
            &walk,
        ));
    }

    events::emit_investment_decided(
        e,
        next.id,
        Decision::Approve,
        next.status,
        walk.levels_paid,
    );
    Ok(DecisionOutcome {
        investment: next,
        message: String::from_str(e, "Investment approved successfully"),
        status: DecisionStatus::Applied,
        levels_paid: walk.levels_paid,
        levels_skipped: walk.duplicates,
        bonus_paid: walk.total_paid,
    })
}

fn reject<S: LedgerStore>(
    e: &Env,
    store: &S,
    current: Investment,
) -> Result<DecisionOutcome, ContractError> {
    let mut next = current;
    next.status = InvestmentStatus::Rejected;
    if !store.replace_investment_if(InvestmentStatus::Pending, &next)? {
        return Err(ContractError::RaceLost);
    }

    let patch = TxPatch {
        status: TransactionStatus::Failed,
    };
    if let Err(err) = store.update_transaction_matching(&paired_transaction(&next), &patch) {
        return Ok(partial(
            e,
            Decision::Reject,
            next,
            ApprovalStep::TransactionUpdate,
            err,
            &WalkSummary::empty(),
        ));
    }

    events::emit_investment_decided(e, next.id, Decision::Reject, next.status, 0);
    Ok(DecisionOutcome {
        investment: next,
        message: String::from_str(e, "Investment rejected successfully"),
        status: DecisionStatus::Applied,
        levels_paid: 0,
        levels_skipped: 0,
        bonus_paid: 0,
    })
}

/// The pending transaction created alongside `investment`. Matching on the
/// hash as well as `{user, type, amount}` keeps two same-amount requests from
/// settling each other's transaction.
fn paired_transaction(investment: &Investment) -> TxFilter {
    TxFilter {
        user: investment.user.clone(),
        tx_type: TransactionType::Investment,
        amount: investment.amount,
        status: TransactionStatus::Pending,
        hash: Some(investment.transaction_id.clone()),
    }
}

fn unchanged(e: &Env, investment: Investment) -> DecisionOutcome {
    let message = match investment.status {
        InvestmentStatus::Pending => "Investment is pending",
        InvestmentStatus::Active => "Investment is already active",
        InvestmentStatus::Completed => "Investment is already completed",
        InvestmentStatus::Terminated => "Investment is already terminated",
        InvestmentStatus::Rejected => "Investment is already rejected",
    };
    DecisionOutcome {
        investment,
        message: String::from_str(e, message),
        status: DecisionStatus::Unchanged,
        levels_paid: 0,
        levels_skipped: 0,
        bonus_paid: 0,
    }
}

fn partial(
    e: &Env,
    decision: Decision,
    investment: Investment,
    step: ApprovalStep,
    err: ContractError,
    walk: &WalkSummary,
) -> DecisionOutcome {
    let code = err as u32;
    events::emit_partial_failure(e, investment.id, step, code);
    events::emit_investment_decided(
        e,
        investment.id,
        decision,
        investment.status,
        walk.levels_paid,
    );
    DecisionOutcome {
        investment,
        message: String::from_str(e, "Decision recorded; follow-up step failed"),
        status: DecisionStatus::Partial(step, code),
        levels_paid: walk.levels_paid,
        levels_skipped: walk.duplicates,
        bonus_paid: walk.total_paid,
    }
}
