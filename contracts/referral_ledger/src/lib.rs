//! Referral Investment Ledger Contract
//!
//! Users register under a sponsor and submit investment requests. An admin
//! approves or rejects each request. Approval credits the investor exactly
//! once and pays level income up to ten sponsors above them.
//!
//! ## Key design decisions
//!
//! - **Pending until decided**: a request writes a `Pending` investment and a
//!   paired `Pending` transaction. Nothing is credited at submission.
//! - **CAS-gated decisions**: the status flip is a compare-and-swap, so two
//!   concurrent approvals credit and pay out once.
//! - **Partial outcomes are reported, not reverted**: once the status flip
//!   lands, a failing follow-up step comes back as `DecisionStatus::Partial`.
//! - **Cached totals**: `User::total_investment` can be rebuilt from the
//!   investment records with `reconcile_user` / `reconcile_all`.

#![no_std]

mod approval;
mod commission;
mod config;
mod dashboard;
mod events;
mod hashes;
mod investment;
mod math;
mod packages;
mod reconcile;
mod registry;
mod report;
mod store;
mod types;
mod upline;

pub use config::{LedgerConfig, RATE_SCALE, UNIT};
pub use ledger_errors::{ContractError, ErrorCategory, ErrorExt};
pub use types::{
    ApprovalStep, Decision, DecisionOutcome, DecisionStatus, Investment, InvestmentStatus,
    LedgerStats, LevelReport, LevelStat, Package, ReconcileEntry, Transaction, TransactionStatus,
    TransactionType, User,
};
pub use dashboard::MAX_PAGE_SIZE;

use investment::InvestmentRequest;
use packages::PackageParams;
use store::{ContractStore, LedgerStore};
use types::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};


#[cfg(test)]
mod test_commission;
#[cfg(test)]
mod test_config;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_hashes;
#[cfg(test)]
mod test_investment;
#[cfg(test)]
mod test_math;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn stored_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

fn require_initialized(e: &Env) -> Result<(), ContractError> {
    stored_admin(e).map(|_| ())
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if stored_admin(e)? != *caller {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct ReferralLedger;

#[contractimpl]
impl ReferralLedger {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores `admin`; the default config applies
    /// until `set_config` is called.
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        events::emit_ledger_initialized(&e, &admin);
        Ok(())
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        stored_admin(&e)
    }

    pub fn set_config(e: Env, admin: Address, cfg: LedgerConfig) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        config::set(&e, &cfg)?;
        events::emit_config_updated(&e, &admin);
        Ok(())
    }

    pub fn get_config(e: Env) -> LedgerConfig {
        config::get(&e)
    }

    // ── Users ──────────────────────────────────────────────────────────────

    /// Register `user` under an already registered `referrer`.
    pub fn register_user(
        e: Env,
        user: Address,
        referrer: Option<Address>,
        sponsor_wallet: Option<String>,
    ) -> Result<User, ContractError> {
        require_initialized(&e)?;
        user.require_auth();
        registry::register(&e, &ContractStore::new(&e), user, referrer, sponsor_wallet)
    }

    /// Set the payout wallet. Write-once.
    pub fn set_wallet(e: Env, user: Address, wallet: String) -> Result<User, ContractError> {
        user.require_auth();
        registry::set_wallet(&e, &ContractStore::new(&e), &user, wallet)
    }

    pub fn get_user(e: Env, user: Address) -> Result<User, ContractError> {
        ContractStore::new(&e)
            .find_user_by_id(&user)?
            .ok_or(ContractError::UserNotFound)
    }

    // ── Packages ───────────────────────────────────────────────────────────

    pub fn create_package(
        e: Env,
        admin: Address,
        name: String,
        min_investment: i128,
        max_investment: Option<i128>,
        daily_return: i128,
        duration_days: u32,
    ) -> Result<Package, ContractError> {
        require_admin(&e, &admin)?;
        let params = PackageParams {
            name,
            min_investment,
            max_investment,
            daily_return,
            duration_days,
        };
        packages::create(&e, &ContractStore::new(&e), params)
    }

    pub fn set_package_active(
        e: Env,
        admin: Address,
        package_id: u64,
        active: bool,
    ) -> Result<Package, ContractError> {
        require_admin(&e, &admin)?;
        packages::set_active(&e, &ContractStore::new(&e), package_id, active)
    }

    pub fn get_package(e: Env, package_id: u64) -> Result<Package, ContractError> {
        ContractStore::new(&e)
            .find_package_by_id(package_id)?
            .ok_or(ContractError::PackageNotFound)
    }

    // ── Investments ────────────────────────────────────────────────────────

    /// Record a pending investment request for `user`.
    ///
    /// With `package_id` the package's bounds, rate and term apply. Without it
    /// the configured floor and tiered default rate apply. An empty or missing
    /// `transaction_ref` is replaced by `INV{timestamp}`.
    pub fn submit_investment(
        e: Env,
        user: Address,
        amount: i128,
        package_id: Option<u64>,
        transaction_ref: Option<String>,
        sponsor_ref: Option<String>,
    ) -> Result<Investment, ContractError> {
        require_initialized(&e)?;
        user.require_auth();
        let request = InvestmentRequest {
            user,
            amount,
            package_id,
            transaction_ref,
            sponsor_ref,
        };
        investment::submit(&e, &ContractStore::new(&e), request)
    }

    /// Approve or reject a pending investment.
    ///
    /// Deciding an investment that is no longer pending is a no-op and comes
    /// back with `DecisionStatus::Unchanged`.
    pub fn decide_investment(
        e: Env,
        admin: Address,
        investment_id: u64,
        decision: Decision,
    ) -> Result<DecisionOutcome, ContractError> {
        require_admin(&e, &admin)?;
        approval::decide(&e, &ContractStore::new(&e), investment_id, decision)
    }

    pub fn get_investment(e: Env, investment_id: u64) -> Result<Investment, ContractError> {
        ContractStore::new(&e)
            .find_investment_by_id(investment_id)?
            .ok_or(ContractError::InvestmentNotFound)
    }

    pub fn get_user_investments(e: Env, user: Address) -> Result<Vec<Investment>, ContractError> {
        ContractStore::new(&e).user_investments(&user)
    }

    pub fn get_transaction(e: Env, transaction_id: u64) -> Result<Transaction, ContractError> {
        ContractStore::new(&e)
            .find_transaction_by_id(transaction_id)?
            .ok_or(ContractError::TransactionNotFound)
    }

    pub fn get_user_transactions(
        e: Env,
        user: Address,
    ) -> Result<Vec<Transaction>, ContractError> {
        ContractStore::new(&e).user_transactions(&user)
    }

    /// Every investment, newest first, `limit` (at most `MAX_PAGE_SIZE`)
    /// per 1-based `page`.
    pub fn get_all_investments(
        e: Env,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Investment>, ContractError> {
        dashboard::list_investments(&e, &ContractStore::new(&e), page, limit)
    }

    // ── Maintenance & reporting ────────────────────────────────────────────

    pub fn reconcile_user(
        e: Env,
        admin: Address,
        user: Address,
    ) -> Result<ReconcileEntry, ContractError> {
        require_admin(&e, &admin)?;
        reconcile::reconcile_user(&e, &ContractStore::new(&e), &user)
    }

    /// Repair every drifted total. Returns the repaired users only.
    pub fn reconcile_all(e: Env, admin: Address) -> Result<Vec<ReconcileEntry>, ContractError> {
        require_admin(&e, &admin)?;
        reconcile::reconcile_all(&e, &ContractStore::new(&e))
    }

    pub fn get_level_report(e: Env, user: Address) -> Result<LevelReport, ContractError> {
        report::level_report(&e, &ContractStore::new(&e), &user)
    }

    /// User and investment counts plus the sums of completed investment,
    /// withdrawal and bonus transactions.
    pub fn get_stats(e: Env) -> Result<LedgerStats, ContractError> {
        dashboard::ledger_stats(&ContractStore::new(&e))
    }

    /// Upline commission rates in basis points, direct sponsor first.
    pub fn commission_table(e: Env) -> Vec<u32> {
        commission::as_vec(&e)
    }
}
