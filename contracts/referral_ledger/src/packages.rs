//! Package catalogue: admin-defined rate and term templates.

use ledger_errors::ContractError;
use soroban_sdk::{Env, String};

use crate::events;
use crate::store::LedgerStore;
use crate::types::Package;

/// Parameters of a new package.
#[derive(Clone, Debug)]
pub struct PackageParams {
    pub name: String,
    pub min_investment: i128,
    pub max_investment: Option<i128>,
    pub daily_return: i128,
    pub duration_days: u32,
}

impl PackageParams {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.min_investment <= 0 || self.daily_return <= 0 || self.duration_days == 0 {
            return Err(ContractError::InvalidPackage);
        }
        if let Some(max) = self.max_investment {
            if max < self.min_investment {
                return Err(ContractError::InvalidPackage);
            }
        }
        Ok(())
    }
}

pub fn create<S: LedgerStore>(
    e: &Env,
    store: &S,
    params: PackageParams,
) -> Result<Package, ContractError> {
    params.validate()?;
    let package = Package {
        id: store.next_package_id()?,
        name: params.name,
        min_investment: params.min_investment,
        max_investment: params.max_investment,
        daily_return: params.daily_return,
        duration_days: params.duration_days,
        active: true,
        created_at: e.ledger().timestamp(),
    };
    store.save_package(&package)?;

    events::emit_package_updated(e, package.id, package.active, true);
    Ok(package)
}

/// Open or close a package to new investments. Existing investments keep
/// their link and term.
pub fn set_active<S: LedgerStore>(
    e: &Env,
    store: &S,
    package_id: u64,
    active: bool,
) -> Result<Package, ContractError> {
    let mut package = store
        .find_package_by_id(package_id)?
        .ok_or(ContractError::PackageNotFound)?;
    package.active = active;
    store.save_package(&package)?;

    events::emit_package_updated(e, package_id, active, false);
    Ok(package)
}
