//! All native-asset movement funnels through here; no other module
//! touches the token client.

use soroban_sdk::{token, Address, Env};

use crate::{
    storage::get_data,
    types::{Error, PAYMENT_TOKEN},
};

fn payment_client(env: &Env) -> token::Client<'_> {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    token::Client::new(env, &token_addr)
}

/// Pulls `amount` of the payment asset from `from` into the contract.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let client = payment_client(env);
    if client.balance(from) < amount {
        return Err(Error::InsufficientFunds);
    }
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pays `amount` out of the contract's holdings to `to`.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let client = payment_client(env);
    if client.balance(&env.current_contract_address()) < amount {
        return Err(Error::InsufficientFunds);
    }
    client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
