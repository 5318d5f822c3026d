//! Per-owner membership sets for token ids.
//!
//! Every set is an unordered `Vec<u64>` in persistent storage. Removal
//! scans for the id, swaps it with the last element and pops, so lookup
//! is O(n) and removal O(1), and iteration order is not preserved.
//! Per-owner sets stay small, which keeps the linear scan acceptable.

use soroban_sdk::{Address, Env, Vec};

use crate::{
    storage::{get_persistent, store_persistent},
    types::{DataKey, Error},
};

fn get_set(env: &Env, key: &DataKey) -> Vec<u64> {
    get_persistent(env, key).unwrap_or_else(|| Vec::new(env))
}

pub fn add(env: &Env, key: &DataKey, token_id: u64) {
    let mut set: Vec<u64> = get_set(env, key);
    set.push_back(token_id);
    store_persistent(env, key, &set);
}

pub fn remove(env: &Env, key: &DataKey, token_id: u64) -> Result<(), Error> {
    let mut set: Vec<u64> = get_set(env, key);
    let index: u32 = set.first_index_of(token_id).ok_or(Error::NotFound)?;
    let last: u64 = set.last().unwrap();
    set.set(index, last);
    set.pop_back();
    store_persistent(env, key, &set);
    Ok(())
}

pub fn contains(env: &Env, key: &DataKey, token_id: u64) -> bool {
    get_set(env, key).first_index_of(token_id).is_some()
}

/// Moves a token from the owner's unlisted set into the listed
/// bookkeeping. Membership is verified before anything is written, so a
/// failure leaves every set untouched.
pub fn move_to_listed(env: &Env, owner: &Address, token_id: u64) -> Result<(), Error> {
    remove(env, &DataKey::Unlisted(owner.clone()), token_id)?;
    add(env, &DataKey::Listed(owner.clone()), token_id);
    add(env, &DataKey::AllListed, token_id);
    Ok(())
}

/// Removes a token from the seller's listed bookkeeping and hands it to
/// the recipient's unlisted set. Seller and recipient coincide when a
/// listing is withdrawn rather than sold.
pub fn move_to_unlisted(
    env: &Env,
    seller: &Address,
    recipient: &Address,
    token_id: u64,
) -> Result<(), Error> {
    remove(env, &DataKey::Listed(seller.clone()), token_id)?;
    remove(env, &DataKey::AllListed, token_id)?;
    add(env, &DataKey::Unlisted(recipient.clone()), token_id);
    Ok(())
}

/// Hands a token from one unlisted set to another, for auction
/// settlement where no listing bookkeeping is involved.
pub fn transfer_unlisted(
    env: &Env,
    from: &Address,
    to: &Address,
    token_id: u64,
) -> Result<(), Error> {
    remove(env, &DataKey::Unlisted(from.clone()), token_id)?;
    add(env, &DataKey::Unlisted(to.clone()), token_id);
    Ok(())
}

pub fn unlisted_of(env: &Env, owner: &Address) -> Vec<u64> {
    get_set(env, &DataKey::Unlisted(owner.clone()))
}

pub fn listed_of(env: &Env, owner: &Address) -> Vec<u64> {
    get_set(env, &DataKey::Listed(owner.clone()))
}

pub fn all_listed(env: &Env) -> Vec<u64> {
    get_set(env, &DataKey::AllListed)
}
