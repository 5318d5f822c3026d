use crate::{storage::get_data, types::NFT_CONTRACT};
use common::nft::interface::TokenRegistryClient;
use soroban_sdk::{Address, Env};

pub fn get_registry_client(env: &Env) -> TokenRegistryClient<'_> {
    let nft_ca: Address = get_data(env, &NFT_CONTRACT).unwrap();
    TokenRegistryClient::new(&env, &nft_ca)
}
