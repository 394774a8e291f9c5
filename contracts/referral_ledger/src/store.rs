//! Ledger store: the persistence contract the engine consumes, and its
//! Soroban-storage implementation.
//!
//! ## Storage Layout
//!
//! | Key                                  | Tier          | Lifecycle          |
//! |--------------------------------------|---------------|--------------------|
//! | `DataKey::*Counter`, `Totals`        | `instance()`  | Entire contract    |
//! | `DataKey::User(addr)`, `UserAt(n)`   | `persistent()`| Per user           |
//! | `DataKey::Package(id)`               | `persistent()`| Per package        |
//! | `DataKey::Investment(id)`            | `persistent()`| Per investment     |
//! | `DataKey::Transaction(id)`           | `persistent()`| Per transaction    |
//! | `DataKey::UserTx*` / `UserInvestment*` / `Downline*` | `persistent()` | Per index item |
//! | `DataKey::BonusHash(hash)`           | `persistent()`| Per bonus payout   |
//!
//! Instance storage only holds fixed-size values: it is loaded on every call.
//! Every list is a `*Count` entry plus one persistent entry per item, so a
//! write touches a constant number of entries however long the list is.
//! Every persistent read or write bumps the entry's TTL.

use ledger_errors::ContractError;
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::math;
use crate::types::{
    CompletedTotals, DataKey, Investment, InvestmentStatus, LedgerStats, NewTransaction, Package,
    Transaction, TransactionStatus, TransactionType, TxFilter, TxPatch, User,
};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

/// Single-record reads and writes used by the ledger engine.
///
/// Implementations must make each method atomic on its own. Nothing spans
/// several records: multi-step sequences are the engine's concern.
pub trait LedgerStore {
    fn find_user_by_id(&self, id: &Address) -> Result<Option<User>, ContractError>;

    /// Insert or overwrite. First insert also indexes the user in registration
    /// order and in the referrer's downline.
    fn save_user(&self, user: &User) -> Result<(), ContractError>;

    fn find_investment_by_id(&self, id: u64) -> Result<Option<Investment>, ContractError>;

    /// Insert or overwrite. First insert also indexes the investment under its owner.
    fn save_investment(&self, investment: &Investment) -> Result<(), ContractError>;

    /// Compare-and-swap on status: overwrite the stored investment with
    /// `updated` only if its current status is `expected`. Returns whether the
    /// swap happened.
    fn replace_investment_if(
        &self,
        expected: InvestmentStatus,
        updated: &Investment,
    ) -> Result<bool, ContractError>;

    /// Append a transaction. Bonus hashes are unique: a second bonus with the
    /// same hash fails with `DuplicateHash` and writes nothing.
    fn create_transaction(&self, draft: NewTransaction) -> Result<Transaction, ContractError>;

    /// Patch the first transaction (creation order) matching `filter`.
    /// Only transactions of `filter.tx_type` are scanned.
    /// Returns the patched id, or `None` when nothing matched.
    fn update_transaction_matching(
        &self,
        filter: &TxFilter,
        patch: &TxPatch,
    ) -> Result<Option<u64>, ContractError>;

    fn find_transaction_by_id(&self, id: u64) -> Result<Option<Transaction>, ContractError>;

    fn find_package_by_id(&self, id: u64) -> Result<Option<Package>, ContractError>;

    fn save_package(&self, package: &Package) -> Result<(), ContractError>;

    fn next_investment_id(&self) -> Result<u64, ContractError>;

    fn next_package_id(&self) -> Result<u64, ContractError>;

    /// Highest investment id issued so far. Ids run from 1 without gaps.
    fn investment_count(&self) -> Result<u64, ContractError>;

    fn user_investments(&self, user: &Address) -> Result<Vec<Investment>, ContractError>;

    fn user_transactions(&self, user: &Address) -> Result<Vec<Transaction>, ContractError>;

    fn direct_referrals(&self, user: &Address) -> Result<Vec<Address>, ContractError>;

    fn all_users(&self) -> Result<Vec<Address>, ContractError>;

    fn stats(&self) -> Result<LedgerStats, ContractError>;
}

/// [`LedgerStore`] over the contract's own Soroban storage.
#[derive(Clone)]
pub struct ContractStore {
    env: Env,
}

impl ContractStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn load<V>(&self, key: &DataKey) -> Option<V>
    where
        V: TryFromVal<Env, Val>,
        V::Error: core::fmt::Debug,
    {
        let storage = self.env.storage().persistent();
        let value = storage.get::<DataKey, V>(key);
        if value.is_some() {
            storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
        }
        value
    }

    fn put<V>(&self, key: &DataKey, value: &V)
    where
        V: IntoVal<Env, Val>,
    {
        let storage = self.env.storage().persistent();
        storage.set(key, value);
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }

    fn exists(&self, key: &DataKey) -> bool {
        self.env.storage().persistent().has(key)
    }

    fn count(&self, count_key: &DataKey) -> u64 {
        self.load(count_key).unwrap_or(0)
    }

    /// Append `value` to the list whose length lives at `count_key`.
    fn push<V, F>(&self, count_key: &DataKey, item_key: F, value: &V) -> Result<(), ContractError>
    where
        V: IntoVal<Env, Val>,
        F: FnOnce(u64) -> DataKey,
    {
        let index = self.count(count_key);
        self.put(&item_key(index), value);
        self.put(count_key, &math::add_u64(index, 1)?);
        Ok(())
    }

    /// Every item of a counter-keyed list, in insertion order.
    fn items<V, F>(&self, count_key: &DataKey, item_key: F) -> Vec<V>
    where
        V: TryFromVal<Env, Val> + IntoVal<Env, Val>,
        V::Error: core::fmt::Debug,
        F: Fn(u64) -> DataKey,
    {
        let mut out = Vec::new(&self.env);
        for index in 0..self.count(count_key) {
            if let Some(value) = self.load::<V>(&item_key(index)) {
                out.push_back(value);
            }
        }
        out
    }

    fn next_id(&self, counter: DataKey) -> Result<u64, ContractError> {
        let storage = self.env.storage().instance();
        let current: u64 = storage.get(&counter).unwrap_or(0);
        let next = math::add_u64(current, 1)?;
        storage.set(&counter, &next);
        Ok(next)
    }

    fn totals(&self) -> CompletedTotals {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Totals)
            .unwrap_or_default()
    }

    /// Move a transaction's amount into or out of the completed totals as its
    /// status changes from `before` to `after`.
    fn track_completed(
        &self,
        before: Option<TransactionStatus>,
        after: &Transaction,
    ) -> Result<(), ContractError> {
        let was = before == Some(TransactionStatus::Completed);
        let is = after.status == TransactionStatus::Completed;
        let delta = match (was, is) {
            (false, true) => after.amount,
            (true, false) => -after.amount,
            _ => return Ok(()),
        };

        let mut totals = self.totals();
        let slot = match after.tx_type {
            TransactionType::Investment => &mut totals.invested,
            TransactionType::Withdrawal => &mut totals.withdrawn,
            TransactionType::Bonus => &mut totals.bonus_paid,
            _ => return Ok(()),
        };
        *slot = math::add_i128(*slot, delta)?;
        self.env.storage().instance().set(&DataKey::Totals, &totals);
        Ok(())
    }
}

impl LedgerStore for ContractStore {
    fn find_user_by_id(&self, id: &Address) -> Result<Option<User>, ContractError> {
        Ok(self.load(&DataKey::User(id.clone())))
    }

    fn save_user(&self, user: &User) -> Result<(), ContractError> {
        let key = DataKey::User(user.address.clone());
        if !self.exists(&key) {
            let index = self.next_id(DataKey::UserCounter)? - 1;
            self.put(&DataKey::UserAt(index), &user.address);

            if let Some(referrer) = &user.referred_by {
                self.push(
                    &DataKey::DownlineCount(referrer.clone()),
                    |n| DataKey::Downline(referrer.clone(), n),
                    &user.address,
                )?;
            }
        }
        self.put(&key, user);
        Ok(())
    }

    fn find_investment_by_id(&self, id: u64) -> Result<Option<Investment>, ContractError> {
        Ok(self.load(&DataKey::Investment(id)))
    }

    fn save_investment(&self, investment: &Investment) -> Result<(), ContractError> {
        let key = DataKey::Investment(investment.id);
        if !self.exists(&key) {
            let owner = investment.user.clone();
            self.push(
                &DataKey::UserInvestmentCount(owner.clone()),
                |n| DataKey::UserInvestment(owner, n),
                &investment.id,
            )?;
        }
        self.put(&key, investment);
        Ok(())
    }

    fn replace_investment_if(
        &self,
        expected: InvestmentStatus,
        updated: &Investment,
    ) -> Result<bool, ContractError> {
        let key = DataKey::Investment(updated.id);
        let current: Investment = self
            .load(&key)
            .ok_or(ContractError::InvestmentNotFound)?;
        if current.status != expected {
            return Ok(false);
        }
        self.put(&key, updated);
        Ok(true)
    }

    fn create_transaction(&self, draft: NewTransaction) -> Result<Transaction, ContractError> {
        let bonus_key = DataKey::BonusHash(draft.hash.clone());
        let is_bonus = draft.tx_type == TransactionType::Bonus;
        if is_bonus && self.exists(&bonus_key) {
            return Err(ContractError::DuplicateHash);
        }

        let tx = Transaction {
            id: self.next_id(DataKey::TransactionCounter)?,
            user: draft.user,
            tx_type: draft.tx_type,
            amount: draft.amount,
            status: draft.status,
            hash: draft.hash,
            created_at: self.env.ledger().timestamp(),
        };
        self.put(&DataKey::Transaction(tx.id), &tx);

        let owner = tx.user.clone();
        self.push(
            &DataKey::UserTxCount(owner.clone()),
            |n| DataKey::UserTx(owner.clone(), n),
            &tx.id,
        )?;
        self.push(
            &DataKey::UserTxByTypeCount(owner.clone(), tx.tx_type),
            |n| DataKey::UserTxByType(owner.clone(), tx.tx_type, n),
            &tx.id,
        )?;
        if is_bonus {
            self.put(&bonus_key, &tx.id);
        }
        self.track_completed(None, &tx)?;
        Ok(tx)
    }

    fn update_transaction_matching(
        &self,
        filter: &TxFilter,
        patch: &TxPatch,
    ) -> Result<Option<u64>, ContractError> {
        let user = filter.user.clone();
        let count_key = DataKey::UserTxByTypeCount(user.clone(), filter.tx_type);
        for index in 0..self.count(&count_key) {
            let item = DataKey::UserTxByType(user.clone(), filter.tx_type, index);
            let Some(id) = self.load::<u64>(&item) else {
                continue;
            };
            let key = DataKey::Transaction(id);
            let Some(mut tx) = self.load::<Transaction>(&key) else {
                continue;
            };
            if filter.matches(&tx) {
                let before = tx.status;
                tx.status = patch.status;
                self.put(&key, &tx);
                self.track_completed(Some(before), &tx)?;
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    fn find_transaction_by_id(&self, id: u64) -> Result<Option<Transaction>, ContractError> {
        Ok(self.load(&DataKey::Transaction(id)))
    }

    fn find_package_by_id(&self, id: u64) -> Result<Option<Package>, ContractError> {
        Ok(self.load(&DataKey::Package(id)))
    }

    fn save_package(&self, package: &Package) -> Result<(), ContractError> {
        self.put(&DataKey::Package(package.id), package);
        Ok(())
    }

    fn next_investment_id(&self) -> Result<u64, ContractError> {
        self.next_id(DataKey::InvestmentCounter)
    }

    fn next_package_id(&self) -> Result<u64, ContractError> {
        self.next_id(DataKey::PackageCounter)
    }

    fn investment_count(&self) -> Result<u64, ContractError> {
        Ok(self
            .env
            .storage()
            .instance()
            .get(&DataKey::InvestmentCounter)
            .unwrap_or(0))
    }

    fn user_investments(&self, user: &Address) -> Result<Vec<Investment>, ContractError> {
        let ids: Vec<u64> = self.items(&DataKey::UserInvestmentCount(user.clone()), |n| {
            DataKey::UserInvestment(user.clone(), n)
        });
        let mut out = Vec::new(&self.env);
        for id in ids.iter() {
            if let Some(inv) = self.load::<Investment>(&DataKey::Investment(id)) {
                out.push_back(inv);
            }
        }
        Ok(out)
    }

    fn user_transactions(&self, user: &Address) -> Result<Vec<Transaction>, ContractError> {
        let ids: Vec<u64> = self.items(&DataKey::UserTxCount(user.clone()), |n| {
            DataKey::UserTx(user.clone(), n)
        });
        let mut out = Vec::new(&self.env);
        for id in ids.iter() {
            if let Some(tx) = self.load::<Transaction>(&DataKey::Transaction(id)) {
                out.push_back(tx);
            }
        }
        Ok(out)
    }

    fn direct_referrals(&self, user: &Address) -> Result<Vec<Address>, ContractError> {
        Ok(self.items(&DataKey::DownlineCount(user.clone()), |n| {
            DataKey::Downline(user.clone(), n)
        }))
    }

    fn all_users(&self) -> Result<Vec<Address>, ContractError> {
        let total: u64 = self
            .env
            .storage()
            .instance()
            .get(&DataKey::UserCounter)
            .unwrap_or(0);
        let mut out = Vec::new(&self.env);
        for index in 0..total {
            if let Some(user) = self.load::<Address>(&DataKey::UserAt(index)) {
                out.push_back(user);
            }
        }
        Ok(out)
    }

    fn stats(&self) -> Result<LedgerStats, ContractError> {
        let instance = self.env.storage().instance();
        let totals = self.totals();
        Ok(LedgerStats {
            total_users: instance.get(&DataKey::UserCounter).unwrap_or(0),
            total_investments: self.investment_count()?,
            total_invested: totals.invested,
            total_withdrawn: totals.withdrawn,
            total_bonus_paid: totals.bonus_paid,
        })
    }
}
