use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

use crate::{
    events::RegistryEvent,
    storage::{get_data, get_persistent, has_data, has_persistent, store_data, store_persistent},
    utils::require_marketplace_call,
};
use common::nft::{
    interface::TokenRegistryInterface,
    types::{DataKey, Error, ADMIN, MARKETPLACE_CONTRACT},
};

const NAME: &str = "Marketplace Token";
const SYMBOL: &str = "MKT";

#[contract]
pub struct TokenRegistry;

#[contractimpl]
impl TokenRegistryInterface for TokenRegistry {
    fn initialize(env: Env, admin: Address, marketplace_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &MARKETPLACE_CONTRACT, &marketplace_contract_id);
        store_data(&env, &DataKey::TokenCount, &0u64);
        RegistryEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        RegistryEvent::Upgraded(Self::version()).publish(&env);
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn mint(env: Env, to: Address, token_uri: String) -> u64 {
        require_marketplace_call(&env);

        let minted: u64 = get_data(&env, &DataKey::TokenCount).unwrap_or(0);
        let token_id: u64 = minted + 1;

        store_persistent(&env, &DataKey::TokenOwner(token_id), &to);
        store_persistent(&env, &DataKey::TokenUri(token_id), &token_uri);
        store_data(&env, &DataKey::TokenCount, &token_id);

        RegistryEvent::Mint(token_id, to).publish(&env);

        token_id
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        require_marketplace_call(&env);

        let owner: Address =
            get_persistent(&env, &DataKey::TokenOwner(token_id)).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        store_persistent(&env, &DataKey::TokenOwner(token_id), &to);

        RegistryEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::TokenOwner(token_id)).ok_or(Error::TokenNotFound)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        get_persistent(&env, &DataKey::TokenUri(token_id)).ok_or(Error::TokenNotFound)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::TokenOwner(token_id))
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TokenCount).unwrap_or(0)
    }

    fn tokens_of_owner(env: Env, owner: Address) -> Vec<u64> {
        let mut result: Vec<u64> = Vec::new(&env);
        let minted: u64 = get_data(&env, &DataKey::TokenCount).unwrap_or(0);

        for token_id in 1..=minted {
            if let Some(current) =
                get_persistent::<DataKey, Address>(&env, &DataKey::TokenOwner(token_id))
            {
                if current == owner {
                    result.push_back(token_id);
                }
            }
        }

        result
    }
}
