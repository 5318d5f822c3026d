use super::types::Error;
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol, Vec};

#[contractclient(name = "TokenRegistryClient")]
pub trait TokenRegistryInterface {
    fn initialize(env: Env, admin: Address, marketplace_contract_id: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_uri: String) -> u64;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn exists(env: Env, token_id: u64) -> bool;
    fn total_supply(env: Env) -> u64;
    fn tokens_of_owner(env: Env, owner: Address) -> Vec<u64>;
}
