#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Rejected input: amounts, bounds, packages, wallets (codes 200-299).
    Validation,
    /// A referenced record does not resolve (codes 300-399).
    NotFound,
    /// Persistence failures reported by the ledger store (codes 400-499).
    Store,
    /// Approval state-machine conflicts (codes 500-599).
    Approval,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the referral ledger contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : NotFound
///   400 - 499 : Store
///   500 - 599 : Approval
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    NotAdmin = 100,

    // --- Validation (200-299) ---
    /// Amount must be strictly positive.
    InvalidAmount = 200,

    /// Amount is below the flat floor applied when no package is selected.
    AmountBelowMinimum = 201,

    /// Amount falls outside the selected package's `[min, max]` bounds.
    AmountOutOfPackageBounds = 202,

    /// Package parameters are inconsistent (bounds, rate or duration).
    InvalidPackage = 203,

    /// Ledger configuration values are inconsistent.
    InvalidConfig = 204,

    /// The user's wallet address was already set and is write-once.
    WalletAlreadySet = 205,

    /// A user record already exists for this address.
    UserAlreadyRegistered = 206,

    /// A user cannot be registered as their own referrer.
    SelfReferral = 207,

    /// The selected package is not accepting new investments.
    PackageInactive = 208,

    /// Wallet address string is empty.
    InvalidWallet = 209,

    // --- NotFound (300-399) ---
    /// No user record exists for the given address.
    UserNotFound = 300,

    /// No investment exists for the given id.
    InvestmentNotFound = 301,

    /// No package exists for the given id.
    PackageNotFound = 302,

    /// No transaction exists for the given id.
    TransactionNotFound = 303,

    /// The referrer named at registration is not a registered user.
    ReferrerNotFound = 304,

    // --- Store (400-499) ---
    /// A bonus transaction with the same hash already exists.
    DuplicateHash = 400,

    /// The backing store rejected or failed a read/write.
    /// Surfaced verbatim; never retried by the engine.
    StoreFailure = 401,

    // --- Approval (500-599) ---
    /// Another decision flipped the investment out of `Pending` first.
    /// No side effects were applied by the losing call.
    RaceLost = 500,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            ContractError::NotAdmin => ErrorCategory::Authorization,

            ContractError::InvalidAmount
            | ContractError::AmountBelowMinimum
            | ContractError::AmountOutOfPackageBounds
            | ContractError::InvalidPackage
            | ContractError::InvalidConfig
            | ContractError::WalletAlreadySet
            | ContractError::UserAlreadyRegistered
            | ContractError::SelfReferral
            | ContractError::PackageInactive
            | ContractError::InvalidWallet => ErrorCategory::Validation,

            ContractError::UserNotFound
            | ContractError::InvestmentNotFound
            | ContractError::PackageNotFound
            | ContractError::TransactionNotFound
            | ContractError::ReferrerNotFound => ErrorCategory::NotFound,

            ContractError::DuplicateHash | ContractError::StoreFailure => ErrorCategory::Store,

            ContractError::RaceLost => ErrorCategory::Approval,

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::AmountBelowMinimum => "Amount is below the minimum investment",
            ContractError::AmountOutOfPackageBounds => {
                "Amount is outside the package investment bounds"
            }
            ContractError::InvalidPackage => "Package parameters are invalid",
            ContractError::InvalidConfig => "Ledger configuration is invalid",
            ContractError::WalletAlreadySet => "Wallet address is already set and cannot change",
            ContractError::UserAlreadyRegistered => "User is already registered",
            ContractError::SelfReferral => "User cannot refer themselves",
            ContractError::PackageInactive => "Package is not accepting investments",
            ContractError::InvalidWallet => "Wallet address must not be empty",
            ContractError::UserNotFound => "No user found for the given address",
            ContractError::InvestmentNotFound => "No investment found for the given id",
            ContractError::PackageNotFound => "No package found for the given id",
            ContractError::TransactionNotFound => "No transaction found for the given id",
            ContractError::ReferrerNotFound => "Referrer is not a registered user",
            ContractError::DuplicateHash => "A bonus transaction with this hash already exists",
            ContractError::StoreFailure => "Ledger store failed to persist the record",
            ContractError::RaceLost => "Another decision already resolved this investment",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
