#![cfg(test)]
extern crate std;

use crate::contract::TokenRegistry;
use common::nft::{interface::TokenRegistryClient, types::Error};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

struct RegistryTest {
    env: Env,
    client: TokenRegistryClient<'static>,
    admin: Address,
    marketplace: Address,
    alice: Address,
    bob: Address,
}

impl RegistryTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id: Address = env.register(TokenRegistry, ());
        let client: TokenRegistryClient<'static> = TokenRegistryClient::new(&env, &contract_id);

        let admin: Address = Address::generate(&env);
        let marketplace: Address = Address::generate(&env);
        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);

        client.initialize(&admin, &marketplace);

        RegistryTest {
            env,
            client,
            admin,
            marketplace,
            alice,
            bob,
        }
    }

    fn mint_for(&self, owner: &Address) -> u64 {
        let uri = String::from_str(&self.env, "ipfs://QmTokenMeta");
        self.client.mint(owner, &uri)
    }
}

#[test]
fn initialize_twice_fails() {
    let test = RegistryTest::setup();
    assert_eq!(
        test.client.try_initialize(&test.admin, &test.marketplace),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn mint_assigns_sequential_ids() {
    let test = RegistryTest::setup();

    let first = test.mint_for(&test.alice);
    let second = test.mint_for(&test.alice);
    let third = test.mint_for(&test.bob);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(third, 3);
    assert_eq!(test.client.total_supply(), 3);
    assert_eq!(test.client.owner_of(&first), test.alice);
    assert_eq!(test.client.owner_of(&third), test.bob);
}

#[test]
fn mint_stores_metadata() {
    let test = RegistryTest::setup();
    let uri = String::from_str(&test.env, "ipfs://QmSpecificMeta");

    let token_id = test.client.mint(&test.alice, &uri);

    assert!(test.client.exists(&token_id));
    assert_eq!(test.client.token_uri(&token_id), uri);
}

#[test]
fn transfer_moves_ownership() {
    let test = RegistryTest::setup();
    let token_id = test.mint_for(&test.alice);

    test.client.transfer(&test.alice, &test.bob, &token_id);

    assert_eq!(test.client.owner_of(&token_id), test.bob);
}

#[test]
fn transfer_rejects_non_owner_sender() {
    let test = RegistryTest::setup();
    let token_id = test.mint_for(&test.alice);

    assert_eq!(
        test.client.try_transfer(&test.bob, &test.alice, &token_id),
        Err(Ok(Error::NotTokenOwner))
    );
    assert_eq!(test.client.owner_of(&token_id), test.alice);
}

#[test]
fn unknown_token_lookups_fail() {
    let test = RegistryTest::setup();

    assert_eq!(test.client.try_owner_of(&42), Err(Ok(Error::TokenNotFound)));
    assert_eq!(
        test.client.try_transfer(&test.alice, &test.bob, &42),
        Err(Ok(Error::TokenNotFound))
    );
    assert!(!test.client.exists(&42));
}

#[test]
fn tokens_of_owner_follows_transfers() {
    let test = RegistryTest::setup();
    let first = test.mint_for(&test.alice);
    let second = test.mint_for(&test.alice);

    test.client.transfer(&test.alice, &test.bob, &first);

    let alice_tokens = test.client.tokens_of_owner(&test.alice);
    let bob_tokens = test.client.tokens_of_owner(&test.bob);

    assert_eq!(alice_tokens.len(), 1);
    assert_eq!(alice_tokens.get(0), Some(second));
    assert_eq!(bob_tokens.len(), 1);
    assert_eq!(bob_tokens.get(0), Some(first));
}
