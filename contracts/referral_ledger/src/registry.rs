//! User registration and the write-once wallet.

use ledger_errors::ContractError;
use soroban_sdk::{Address, Env, String};

use crate::events;
use crate::store::LedgerStore;
use crate::types::User;

/// Register `user`, optionally under `referrer`. The referrer must already be
/// registered, which keeps every sponsor chain acyclic for well-behaved stores.
pub fn register<S: LedgerStore>(
    e: &Env,
    store: &S,
    user: Address,
    referrer: Option<Address>,
    sponsor_wallet: Option<String>,
) -> Result<User, ContractError> {
    if store.find_user_by_id(&user)?.is_some() {
        return Err(ContractError::UserAlreadyRegistered);
    }
    if let Some(sponsor) = &referrer {
        if *sponsor == user {
            return Err(ContractError::SelfReferral);
        }
        if store.find_user_by_id(sponsor)?.is_none() {
            return Err(ContractError::ReferrerNotFound);
        }
    }

    let record = User {
        address: user,
        referred_by: referrer,
        sponsor_wallet: sponsor_wallet.unwrap_or_else(|| String::from_str(e, "")),
        wallet: None,
        total_investment: 0,
        registered_at: e.ledger().timestamp(),
    };
    store.save_user(&record)?;

    events::emit_user_registered(e, &record.address, &record.referred_by);
    Ok(record)
}

/// Set the user's wallet. Once set it can never change.
pub fn set_wallet<S: LedgerStore>(
    e: &Env,
    store: &S,
    user: &Address,
    wallet: String,
) -> Result<User, ContractError> {
    if wallet.len() == 0 {
        return Err(ContractError::InvalidWallet);
    }
    let mut record = store
        .find_user_by_id(user)?
        .ok_or(ContractError::UserNotFound)?;
    if record.wallet.is_some() {
        return Err(ContractError::WalletAlreadySet);
    }
    record.wallet = Some(wallet);
    store.save_user(&record)?;

    events::emit_wallet_set(e, user);
    Ok(record)
}
