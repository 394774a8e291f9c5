use soroban_sdk::{contracttype, Address, String, Vec};

// ─── Users ────────────────────────────────────────────────────────────────

/// A registered ledger participant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub address: Address,
    /// Direct sponsor. A relation only: the sponsor does not own this record.
    pub referred_by: Option<Address>,
    /// Sponsor wallet string captured at registration. Never resolved.
    pub sponsor_wallet: String,
    /// Payout wallet. Write-once.
    pub wallet: Option<String>,
    /// Running sum of approved investment amounts.
    pub total_investment: i128,
    pub registered_at: u64,
}

// ─── Packages ─────────────────────────────────────────────────────────────

/// Rate and term template an investment can be made against.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    pub id: u64,
    pub name: String,
    pub min_investment: i128,
    /// `None` means unlimited.
    pub max_investment: Option<i128>,
    /// Daily return, scaled by `RATE_SCALE`.
    pub daily_return: i128,
    pub duration_days: u32,
    pub active: bool,
    pub created_at: u64,
}

// ─── Investments ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvestmentStatus {
    Pending,
    Active,
    Completed,
    Terminated,
    Rejected,
}

impl InvestmentStatus {
    /// Statuses that count toward a user's `total_investment`.
    pub fn is_credited(&self) -> bool {
        matches!(self, InvestmentStatus::Active | InvestmentStatus::Completed)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    pub id: u64,
    pub user: Address,
    pub package: Option<u64>,
    pub amount: i128,
    /// Daily return, scaled by `RATE_SCALE`.
    pub daily_return: i128,
    /// `amount * daily_return / (100 * RATE_SCALE)`, fixed at submission.
    pub daily_return_amount: i128,
    pub start_date: u64,
    pub end_date: u64,
    pub status: InvestmentStatus,
    /// External payment reference. Correlates with the paired transaction hash.
    pub transaction_id: String,
    /// Opaque sponsor wallet string supplied with the request.
    pub sponsor_id: String,
    pub created_at: u64,
}

// ─── Transactions ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionType {
    Investment,
    Bonus,
    Withdrawal,
    Deposit,
    Stake,
    ClaimRoi,
    ClaimStakeRoi,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Append-only ledger entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub user: Address,
    pub tx_type: TransactionType,
    pub amount: i128,
    pub status: TransactionStatus,
    pub hash: String,
    pub created_at: u64,
}

/// Transaction fields supplied by the caller; the store assigns id and timestamp.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub user: Address,
    pub tx_type: TransactionType,
    pub amount: i128,
    pub status: TransactionStatus,
    pub hash: String,
}

/// Selects the first transaction (in creation order) whose fields all match.
/// `hash: None` matches any hash.
#[derive(Clone, Debug)]
pub struct TxFilter {
    pub user: Address,
    pub tx_type: TransactionType,
    pub amount: i128,
    pub status: TransactionStatus,
    pub hash: Option<String>,
}

impl TxFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        tx.user == self.user
            && tx.tx_type == self.tx_type
            && tx.amount == self.amount
            && tx.status == self.status
            && self.hash.as_ref().map_or(true, |h| *h == tx.hash)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TxPatch {
    pub status: TransactionStatus,
}

// ─── Decisions ────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Post-transition step of an approval or rejection.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalStep {
    Credit,
    LevelIncome,
    TransactionUpdate,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecisionStatus {
    /// The transition and every follow-up step completed.
    Applied,
    /// The investment was no longer pending; nothing was written.
    Unchanged,
    /// The transition committed but the named step failed with the given
    /// `ContractError` code. Earlier steps are not rolled back.
    Partial(ApprovalStep, u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecisionOutcome {
    pub investment: Investment,
    pub message: String,
    pub status: DecisionStatus,
    /// Bonus transactions created by this call.
    pub levels_paid: u32,
    /// Levels skipped because their bonus was already on record.
    pub levels_skipped: u32,
    /// Sum of the bonus amounts created by this call.
    pub bonus_paid: i128,
}

// ─── Reconciliation & reporting ───────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReconcileEntry {
    pub user: Address,
    pub old_total: i128,
    pub correct_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelStat {
    /// 1-based depth below the reporting user.
    pub level: u32,
    pub members: u32,
    /// Sum of `total_investment` over members at this depth.
    pub business: i128,
    pub commission_bps: u32,
    pub income: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelReport {
    pub levels: Vec<LevelStat>,
    pub total_members: u32,
    pub total_business: i128,
    pub total_income: i128,
    pub active_levels: u32,
}

// ─── Dashboard ────────────────────────────────────────────────────────────

/// Running sums of completed transactions, kept current by the store.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompletedTotals {
    pub invested: i128,
    pub withdrawn: i128,
    pub bonus_paid: i128,
}

/// Ledger-wide figures for the admin dashboard.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerStats {
    pub total_users: u64,
    pub total_investments: u64,
    /// Sum of completed `Investment` transactions.
    pub total_invested: i128,
    /// Sum of completed `Withdrawal` transactions.
    pub total_withdrawn: i128,
    /// Sum of completed `Bonus` transactions.
    pub total_bonus_paid: i128,
}

// ─── Storage keys ─────────────────────────────────────────────────────────

/// * `Admin`, `Config`, `Totals` and the id counters live in `instance()`.
/// * Every per-record key lives in `persistent()` with its own TTL.
/// * Lists are counter-keyed: a `*Count` entry plus one entry per item, so
///   appending writes two small entries and never rewrites the list.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Totals,
    InvestmentCounter,
    TransactionCounter,
    PackageCounter,
    UserCounter,
    User(Address),
    /// Registration order: index -> address.
    UserAt(u64),
    Package(u64),
    Investment(u64),
    Transaction(u64),
    /// Investments owned by a user, in creation order.
    UserInvestmentCount(Address),
    UserInvestment(Address, u64),
    /// Transactions owned by a user, in creation order.
    UserTxCount(Address),
    UserTx(Address, u64),
    /// Transactions owned by a user of one type, in creation order.
    UserTxByTypeCount(Address, TransactionType),
    UserTxByType(Address, TransactionType, u64),
    /// Direct referrals of a user, in registration order.
    DownlineCount(Address),
    Downline(Address, u64),
    /// Claimed bonus hash -> transaction id.
    BonusHash(String),
}
