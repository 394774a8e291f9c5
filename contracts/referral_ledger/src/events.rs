use soroban_sdk::{Address, Env, Symbol};

use crate::types::{ApprovalStep, Decision, InvestmentStatus, ReconcileEntry};

/// Emitted once when the ledger is initialized.
///
/// # Topics
/// * `Symbol` - "ledger_initialized"
///
/// # Data
/// * `Address` - The admin
pub fn emit_ledger_initialized(e: &Env, admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "ledger_initialized"),), admin.clone());
}

/// Emitted when the admin replaces the ledger configuration.
///
/// # Topics
/// * `Symbol` - "config_updated"
///
/// # Data
/// * `Address` - The admin who made the change
pub fn emit_config_updated(e: &Env, admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "config_updated"),), admin.clone());
}

/// Emitted when a user registers.
///
/// # Topics
/// * `Symbol` - "user_registered"
/// * `Address` - The new user
///
/// # Data
/// * `Option<Address>` - The direct sponsor, if any
pub fn emit_user_registered(e: &Env, user: &Address, referrer: &Option<Address>) {
    let topics = (Symbol::new(e, "user_registered"), user.clone());
    e.events().publish(topics, referrer.clone());
}

/// Emitted the one time a user records their payout wallet.
///
/// # Topics
/// * `Symbol` - "wallet_set"
/// * `Address` - The user
///
/// # Data
/// * `()` - Nothing; the wallet itself stays off the event stream
pub fn emit_wallet_set(e: &Env, user: &Address) {
    e.events()
        .publish((Symbol::new(e, "wallet_set"), user.clone()), ());
}

/// Emitted when a package is created or toggled.
///
/// # Topics
/// * `Symbol` - "package_created" or "package_updated"
///
/// # Data
/// * `u64` - Package id
/// * `bool` - Whether the package accepts new investments
pub fn emit_package_updated(e: &Env, package_id: u64, active: bool, created: bool) {
    let name = if created {
        "package_created"
    } else {
        "package_updated"
    };
    e.events()
        .publish((Symbol::new(e, name),), (package_id, active));
}

/// Emitted when an investment request is recorded as pending.
///
/// # Topics
/// * `Symbol` - "investment_submitted"
/// * `Address` - The investor
///
/// # Data
/// * `u64` - Investment id
/// * `i128` - Amount
/// * `i128` - Daily return amount
pub fn emit_investment_submitted(
    e: &Env,
    user: &Address,
    investment_id: u64,
    amount: i128,
    daily_return_amount: i128,
) {
    let topics = (Symbol::new(e, "investment_submitted"), user.clone());
    e.events()
        .publish(topics, (investment_id, amount, daily_return_amount));
}

/// Emitted when a pending investment is approved or rejected.
///
/// # Topics
/// * `Symbol` - "investment_decided"
/// * `u64` - Investment id
///
/// # Data
/// * `Decision` - What the admin decided
/// * `InvestmentStatus` - Resulting status
/// * `u32` - Bonus transactions created
pub fn emit_investment_decided(
    e: &Env,
    investment_id: u64,
    decision: Decision,
    status: InvestmentStatus,
    levels_paid: u32,
) {
    let topics = (Symbol::new(e, "investment_decided"), investment_id);
    e.events().publish(topics, (decision, status, levels_paid));
}

/// Emitted when a decision committed its status transition but a later step
/// failed. Off-chain repair keys on this event.
///
/// # Topics
/// * `Symbol` - "partial_failure"
/// * `u64` - Investment id
///
/// # Data
/// * `ApprovalStep` - The failed step
/// * `u32` - `ContractError` code
pub fn emit_partial_failure(e: &Env, investment_id: u64, step: ApprovalStep, code: u32) {
    let topics = (Symbol::new(e, "partial_failure"), investment_id);
    e.events().publish(topics, (step, code));
}

/// Emitted for every bonus paid to an upline sponsor.
///
/// # Topics
/// * `Symbol` - "level_income"
/// * `Address` - The sponsor receiving the bonus
///
/// # Data
/// * `u32` - 1-based level
/// * `i128` - Bonus amount
/// * `u64` - Source investment id
pub fn emit_level_income(e: &Env, sponsor: &Address, level: u32, amount: i128, investment_id: u64) {
    let topics = (Symbol::new(e, "level_income"), sponsor.clone());
    e.events().publish(topics, (level, amount, investment_id));
}

/// Emitted for each user whose stored total was repaired.
///
/// # Topics
/// * `Symbol` - "total_reconciled"
/// * `Address` - The user
///
/// # Data
/// * `i128` - Total before the repair
/// * `i128` - Recomputed total now stored
pub fn emit_total_reconciled(e: &Env, entry: &ReconcileEntry) {
    let topics = (Symbol::new(e, "total_reconciled"), entry.user.clone());
    e.events()
        .publish(topics, (entry.old_total, entry.correct_total));
}
