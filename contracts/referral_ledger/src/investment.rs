//! Investment requests.
//!
//! A request only records intent: it creates a `Pending` investment and a
//! paired `Pending` transaction. Nothing is credited until an admin approves
//! it (see `approval`). Every validation runs before the first write.

use ledger_errors::ContractError;
use soroban_sdk::{Address, Env, String};

use crate::config::{self, LedgerConfig};
use crate::events;
use crate::hashes;
use crate::math;
use crate::store::LedgerStore;
use crate::types::{
    Investment, InvestmentStatus, NewTransaction, Package, TransactionStatus, TransactionType,
};

/// Caller-supplied fields of an investment request.
#[derive(Clone, Debug)]
pub struct InvestmentRequest {
    pub user: Address,
    pub amount: i128,
    pub package_id: Option<u64>,
    pub transaction_ref: Option<String>,
    pub sponsor_ref: Option<String>,
}

/// Rate and term resolved for a request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Terms {
    /// Scaled by `RATE_SCALE`.
    pub daily_return: i128,
    pub duration_days: u32,
}

/// Resolve the daily return and term for `amount`, either from `package` or
/// from the configured no-package defaults.
pub fn resolve_terms(
    cfg: &LedgerConfig,
    package: Option<&Package>,
    amount: i128,
) -> Result<Terms, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    match package {
        Some(pkg) => {
            if !pkg.active {
                return Err(ContractError::PackageInactive);
            }
            let above_max = pkg.max_investment.map_or(false, |max| amount > max);
            if amount < pkg.min_investment || above_max {
                return Err(ContractError::AmountOutOfPackageBounds);
            }
            Ok(Terms {
                daily_return: pkg.daily_return,
                duration_days: pkg.duration_days,
            })
        }
        None => {
            if amount < cfg.min_investment_floor {
                return Err(ContractError::AmountBelowMinimum);
            }
            Ok(Terms {
                daily_return: cfg.default_daily_return(amount),
                duration_days: cfg.default_duration_days,
            })
        }
    }
}

/// Record a pending investment request and its pending transaction.
pub fn submit<S: LedgerStore>(
    e: &Env,
    store: &S,
    request: InvestmentRequest,
) -> Result<Investment, ContractError> {
    if store.find_user_by_id(&request.user)?.is_none() {
        return Err(ContractError::UserNotFound);
    }

    let package = match request.package_id {
        Some(id) => Some(
            store
                .find_package_by_id(id)?
                .ok_or(ContractError::PackageNotFound)?,
        ),
        None => None,
    };

    let cfg = config::get(e);
    let terms = resolve_terms(&cfg, package.as_ref(), request.amount)?;

    let now = e.ledger().timestamp();
    let end_date = math::add_u64(now, math::days_to_secs(terms.duration_days)?)?;
    let daily_return_amount = math::scaled_percent(request.amount, terms.daily_return)?;

    let transaction_id = request
        .transaction_ref
        .filter(|r| r.len() > 0)
        .unwrap_or_else(|| hashes::fallback_transaction_id(e, now));

    let investment = Investment {
        id: store.next_investment_id()?,
        user: request.user.clone(),
        package: request.package_id,
        amount: request.amount,
        daily_return: terms.daily_return,
        daily_return_amount,
        start_date: now,
        end_date,
        status: InvestmentStatus::Pending,
        transaction_id: transaction_id.clone(),
        sponsor_id: request
            .sponsor_ref
            .unwrap_or_else(|| String::from_str(e, "")),
        created_at: now,
    };
    store.save_investment(&investment)?;

    store.create_transaction(NewTransaction {
        user: request.user,
        tx_type: TransactionType::Investment,
        amount: request.amount,
        status: TransactionStatus::Pending,
        hash: transaction_id,
    })?;

    events::emit_investment_submitted(
        e,
        &investment.user,
        investment.id,
        investment.amount,
        investment.daily_return_amount,
    );
    Ok(investment)
}
