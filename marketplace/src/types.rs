use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    NotOwned = 3,
    NotListed = 4,
    InvalidState = 5,
    InsufficientFunds = 6,
    InvalidParameter = 7,
    InvalidBid = 8,
    NotFound = 9,
    StateNotAlreadySet = 10,
}

/// Fixed-price sale record. One record per token id, overwritten on
/// relist; `active` drops to false on purchase or when an auction opens
/// on the token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub token_id: u64,
    pub owner: Option<Address>,
    pub seller: Address,
    pub price: i128,
    pub active: bool,
}

/// Append-only bid history entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub token_id: u64,
    pub seller: Address,
    pub start_price: i128,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub end_time: u64,
    pub active: bool,
    pub bids: Vec<Bid>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),
    Auction(u64),
    Unlisted(Address), // Per-owner ids not currently listed
    Listed(Address),   // Per-seller ids with an active listing
    AllListed,         // Global set of actively listed ids
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const FEE_COLLECTOR: Symbol = symbol_short!("FEE_COL");
pub const NFT_CONTRACT: Symbol = symbol_short!("NFT_CA");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
pub const LIST_PRICE: Symbol = symbol_short!("LIST_PRC");
pub const GRACE_BIDS: Symbol = symbol_short!("GRACEBIDS");
