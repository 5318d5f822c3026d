#![cfg(test)]

use super::{MarketplaceTest, LIST_FEE};
use crate::token_sets;
use crate::types::{DataKey, Error};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, Address};

/// Counts the sets the token currently belongs to across every known
/// principal. The partition invariant demands exactly one.
fn membership_count(test: &MarketplaceTest, token_id: u64) -> u32 {
    let mut count: u32 = 0;
    for user in [&test.alice, &test.bob, &test.carol, &test.dave] {
        if test
            .marketplace_client
            .get_my_unlisted_tokens(user)
            .contains(token_id)
        {
            count += 1;
        }
        if test
            .marketplace_client
            .get_my_listed_tokens(user)
            .contains(token_id)
        {
            count += 1;
        }
    }
    count
}

#[test]
fn token_is_always_in_exactly_one_set() {
    let test = MarketplaceTest::setup();

    let token_id = test.mint_for(&test.alice);
    assert_eq!(membership_count(&test, token_id), 1);

    test.marketplace_client
        .list_token(&test.alice, &token_id, &100, &LIST_FEE);
    assert_eq!(membership_count(&test, token_id), 1);

    test.marketplace_client
        .purchase_token(&test.bob, &token_id, &100);
    assert_eq!(membership_count(&test, token_id), 1);

    test.env.ledger().set_timestamp(100);
    test.marketplace_client
        .start_auction(&test.bob, &token_id, &10, &1000);
    assert_eq!(membership_count(&test, token_id), 1);

    test.marketplace_client.place_bid(&test.carol, &token_id, &20);
    assert_eq!(membership_count(&test, token_id), 1);

    test.env.ledger().set_timestamp(1100);
    test.marketplace_client.end_auction(&test.bob, &token_id);
    assert_eq!(membership_count(&test, token_id), 1);
}

#[test]
fn listed_membership_tracks_the_global_set() {
    let test = MarketplaceTest::setup();
    let first = test.mint_and_list(&test.alice, 100);
    let second = test.mint_and_list(&test.bob, 200);

    let all = test.marketplace_client.get_all_listed_tokens();
    assert_eq!(all.len(), 2);
    assert!(all.contains(first));
    assert!(all.contains(second));

    test.marketplace_client
        .purchase_token(&test.carol, &first, &100);
    assert_eq!(
        test.marketplace_client.get_all_listed_tokens(),
        vec![&test.env, second]
    );
}

#[test]
fn removal_swaps_in_the_last_element() {
    let test = MarketplaceTest::setup();
    let first = test.mint_for(&test.alice);
    let second = test.mint_for(&test.alice);
    let third = test.mint_for(&test.alice);
    assert_eq!(
        test.marketplace_client.get_my_unlisted_tokens(&test.alice),
        vec![&test.env, first, second, third]
    );

    test.marketplace_client
        .list_token(&test.alice, &first, &100, &LIST_FEE);

    // The last id takes the vacated slot; order is not preserved.
    assert_eq!(
        test.marketplace_client.get_my_unlisted_tokens(&test.alice),
        vec![&test.env, third, second]
    );
}

#[test]
fn removing_a_missing_id_fails_cleanly() {
    let test = MarketplaceTest::setup();
    let owner: Address = Address::generate(&test.env);

    test.env
        .as_contract(&test.marketplace_client.address, || {
            let key = DataKey::Unlisted(owner.clone());
            token_sets::add(&test.env, &key, 1);
            token_sets::add(&test.env, &key, 2);

            assert_eq!(
                token_sets::remove(&test.env, &key, 7),
                Err(Error::NotFound)
            );
            // The failed removal left the set alone.
            assert_eq!(
                token_sets::unlisted_of(&test.env, &owner),
                vec![&test.env, 1, 2]
            );

            assert_eq!(token_sets::remove(&test.env, &key, 1), Ok(()));
            assert_eq!(
                token_sets::remove(&test.env, &key, 1),
                Err(Error::NotFound)
            );
        });
}

#[test]
fn transactional_moves_leave_no_partial_membership() {
    let test = MarketplaceTest::setup();
    let owner: Address = Address::generate(&test.env);

    test.env
        .as_contract(&test.marketplace_client.address, || {
            // Never added to the unlisted set, so the move must fail
            // without touching the listed bookkeeping.
            assert_eq!(
                token_sets::move_to_listed(&test.env, &owner, 9),
                Err(Error::NotFound)
            );
            assert!(token_sets::listed_of(&test.env, &owner).is_empty());
            assert!(token_sets::all_listed(&test.env).is_empty());
        });
}
