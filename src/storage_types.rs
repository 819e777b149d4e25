use soroban_sdk::{contracterror, contracttype, Address, String};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Halted,
    TotalRaised,
    TokensSold,
    ProceedsWithdrawn,
    Contribution(Address),
    Balance(Address),
}

/// Immutable sale parameters, written once by `initialize`.
#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub admin: Address,
    /// Token accepted as the base currency (a SAC in practice).
    pub payment_token: Address,
    pub name: String,
    pub symbol: String,
    /// Token units minted to contract custody at initialization.
    pub total_supply: i128,
    /// Currency units per token.
    pub token_price: i128,
    pub min_investment: i128,
    /// Per-participant aggregate currency ceiling.
    pub max_investment: i128,
    pub soft_cap: i128,
    pub hard_cap: i128,
    /// Investment window is [start_ledger, start_ledger + duration_ledgers).
    pub start_ledger: u32,
    pub duration_ledgers: u32,
    /// Transfers between non-custody holders unlock at this sequence.
    pub trading_start_ledger: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SalePhase {
    Pending = 0,
    Active = 1,
    Finished = 2,
    Halted = 3,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    WrongPhase = 4,
    Unauthorized = 5,
    NotHalted = 6,
    AmountTooSmall = 7,
    CapExceeded = 8,
    SoftCapMet = 9,
    SoftCapNotMet = 10,
    NothingToRefund = 11,
    TradingLocked = 12,
    InsufficientBalance = 13,
    AlreadyWithdrawn = 14,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
