use soroban_sdk::{contracterror, contracttype, symbol_short, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotTokenOwner = 3,
    StateNotAlreadySet = 4,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenCount,      // Sequential mint counter, doubles as total supply
    TokenOwner(u64),
    TokenUri(u64),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const MARKETPLACE_CONTRACT: Symbol = symbol_short!("MAR_CA");
