#![no_std]

mod events;
mod storage;
mod token_sets;
mod types;
mod utils;

use events::MarketplaceEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};
use storage::{get_data, get_persistent, has_data, store_data, store_persistent};
use types::{
    Auction, Bid, DataKey, Error, Listing, ADMIN, FEE_COLLECTOR, GRACE_BIDS, LIST_PRICE,
    NFT_CONTRACT, PAYMENT_TOKEN,
};
use utils::{contract_clients::get_registry_client, funds};

#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_collector: Address,
        nft_ca: Address,
        payment_token: Address,
        list_price: i128,
        grace_bids: bool,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &FEE_COLLECTOR, &fee_collector);
        store_data(&env, &NFT_CONTRACT, &nft_ca);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &LIST_PRICE, &list_price);
        store_data(&env, &GRACE_BIDS, &grace_bids);

        MarketplaceEvent::Initialized(nft_ca, fee_collector).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        MarketplaceEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
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

    // Mint through the registry and record the token as unlisted.
    pub fn create_token(env: Env, caller: Address, token_uri: String) -> u64 {
        caller.require_auth();

        let token_id: u64 = get_registry_client(&env).mint(&caller, &token_uri);
        token_sets::add(&env, &DataKey::Unlisted(caller), token_id);

        token_id
    }

    // The listing fee is retained by the contract; anything paid beyond
    // it goes straight to the fee collector.
    pub fn list_token(
        env: Env,
        seller: Address,
        token_id: u64,
        price: i128,
        payment: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        if !token_sets::contains(&env, &DataKey::Unlisted(seller.clone()), token_id) {
            return Err(Error::NotOwned);
        }
        let list_price: i128 = get_data(&env, &LIST_PRICE).unwrap();
        if payment < list_price {
            return Err(Error::InsufficientFunds);
        }

        funds::collect(&env, &seller, payment)?;
        if payment > list_price {
            let fee_collector: Address = get_data(&env, &FEE_COLLECTOR).unwrap();
            funds::pay_out(&env, &fee_collector, payment - list_price)?;
        }

        token_sets::move_to_listed(&env, &seller, token_id)?;
        let listing = Listing {
            token_id,
            owner: None,
            seller: seller.clone(),
            price,
            active: true,
        };
        store_persistent(&env, &DataKey::Listing(token_id), &listing);

        MarketplaceEvent::TokenListed(token_id, seller, price).publish(&env);
        Ok(())
    }

    // Registry ownership, set membership and the seller payout move in
    // the same invocation or not at all.
    pub fn purchase_token(
        env: Env,
        buyer: Address,
        token_id: u64,
        payment: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let mut listing: Listing =
            get_persistent(&env, &DataKey::Listing(token_id)).ok_or(Error::NotListed)?;
        if !listing.active {
            return Err(Error::NotListed);
        }
        if payment < listing.price {
            return Err(Error::InsufficientFunds);
        }

        let seller: Address = listing.seller.clone();
        funds::collect(&env, &buyer, payment)?;

        listing.active = false;
        listing.owner = Some(buyer.clone());
        store_persistent(&env, &DataKey::Listing(token_id), &listing);
        token_sets::move_to_unlisted(&env, &seller, &buyer, token_id)?;

        get_registry_client(&env).transfer(&seller, &buyer, &token_id);
        funds::pay_out(&env, &seller, listing.price)?;

        MarketplaceEvent::TokenSold(token_id, seller, buyer, listing.price).publish(&env);
        Ok(())
    }

    // A still-active auction cannot be clobbered. An active fixed-price
    // listing is withdrawn first, so the token sits in the seller's
    // unlisted set for the auction's lifetime.
    pub fn start_auction(
        env: Env,
        seller: Address,
        token_id: u64,
        start_price: i128,
        duration: u64,
    ) -> Result<(), Error> {
        seller.require_auth();

        let owner: Address = get_registry_client(&env).owner_of(&token_id);
        if owner != seller {
            return Err(Error::NotOwned);
        }
        if start_price <= 0 || duration == 0 {
            return Err(Error::InvalidParameter);
        }
        if let Some(previous) =
            get_persistent::<DataKey, Auction>(&env, &DataKey::Auction(token_id))
        {
            if previous.active {
                return Err(Error::InvalidState);
            }
        }

        if let Some(mut listing) =
            get_persistent::<DataKey, Listing>(&env, &DataKey::Listing(token_id))
        {
            if listing.active {
                listing.active = false;
                store_persistent(&env, &DataKey::Listing(token_id), &listing);
                token_sets::move_to_unlisted(&env, &seller, &seller, token_id)?;
            }
        }

        let end_time: u64 = env.ledger().timestamp() + duration;
        let auction = Auction {
            token_id,
            seller: seller.clone(),
            start_price,
            highest_bid: 0,
            highest_bidder: None,
            end_time,
            active: true,
            bids: Vec::new(&env),
        };
        store_persistent(&env, &DataKey::Auction(token_id), &auction);

        MarketplaceEvent::AuctionStarted(token_id, seller, start_price, end_time).publish(&env);
        Ok(())
    }

    // The outgoing highest bidder is refunded before the new bid is
    // recorded; only the standing highest bid stays escrowed.
    pub fn place_bid(env: Env, bidder: Address, token_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction: Auction =
            get_persistent(&env, &DataKey::Auction(token_id)).ok_or(Error::InvalidState)?;
        if !auction.active {
            return Err(Error::InvalidState);
        }
        let grace_bids: bool = get_data(&env, &GRACE_BIDS).unwrap();
        if !grace_bids && env.ledger().timestamp() >= auction.end_time {
            return Err(Error::InvalidState);
        }
        if amount <= auction.highest_bid {
            return Err(Error::InvalidBid);
        }
        if bidder == auction.seller {
            return Err(Error::InvalidBid);
        }

        funds::collect(&env, &bidder, amount)?;
        if let Some(previous) = auction.highest_bidder.clone() {
            funds::pay_out(&env, &previous, auction.highest_bid)?;
        }

        auction.bids.push_back(Bid {
            bidder: bidder.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
        });
        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        store_persistent(&env, &DataKey::Auction(token_id), &auction);

        MarketplaceEvent::BidPlaced(token_id, bidder, amount).publish(&env);
        Ok(())
    }

    // With a winner: ownership, set membership and the escrowed payout
    // settle together. With no bids nothing changes hands.
    pub fn end_auction(env: Env, caller: Address, token_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut auction: Auction =
            get_persistent(&env, &DataKey::Auction(token_id)).ok_or(Error::InvalidState)?;
        if !auction.active {
            return Err(Error::InvalidState);
        }
        if env.ledger().timestamp() < auction.end_time {
            return Err(Error::InvalidState);
        }
        if caller != auction.seller {
            return Err(Error::Unauthorized);
        }

        let seller: Address = auction.seller.clone();
        let winner: Option<Address> = auction.highest_bidder.clone();
        let winning_bid: i128 = auction.highest_bid;

        auction.active = false;
        auction.bids = Vec::new(&env);
        store_persistent(&env, &DataKey::Auction(token_id), &auction);

        if let Some(winner_addr) = winner.clone() {
            token_sets::transfer_unlisted(&env, &seller, &winner_addr, token_id)?;
            get_registry_client(&env).transfer(&seller, &winner_addr, &token_id);
            funds::pay_out(&env, &seller, winning_bid)?;
        }

        MarketplaceEvent::AuctionEnded(token_id, seller, winner, winning_bid).publish(&env);
        Ok(())
    }

    pub fn get_my_unlisted_tokens(env: Env, owner: Address) -> Vec<u64> {
        token_sets::unlisted_of(&env, &owner)
    }

    pub fn get_my_listed_tokens(env: Env, owner: Address) -> Vec<u64> {
        token_sets::listed_of(&env, &owner)
    }

    pub fn get_all_listed_tokens(env: Env) -> Vec<u64> {
        token_sets::all_listed(&env)
    }

    pub fn get_listing_details(env: Env, token_id: u64) -> Result<Listing, Error> {
        get_persistent(&env, &DataKey::Listing(token_id)).ok_or(Error::NotFound)
    }

    pub fn get_auction_details(env: Env, token_id: u64) -> Result<Auction, Error> {
        get_persistent(&env, &DataKey::Auction(token_id)).ok_or(Error::NotFound)
    }

    pub fn get_all_bids(env: Env, token_id: u64) -> Result<Vec<Bid>, Error> {
        let auction: Auction =
            get_persistent(&env, &DataKey::Auction(token_id)).ok_or(Error::NotFound)?;
        Ok(auction.bids)
    }

    pub fn get_highest_bid(env: Env, token_id: u64) -> Result<i128, Error> {
        let auction: Auction =
            get_persistent(&env, &DataKey::Auction(token_id)).ok_or(Error::NotFound)?;
        Ok(auction.highest_bid)
    }

    pub fn get_list_price(env: Env) -> i128 {
        get_data(&env, &LIST_PRICE).unwrap()
    }

    pub fn update_list_price(env: Env, caller: Address, new_price: i128) -> Result<(), Error> {
        caller.require_auth();

        let admin: Address = get_data(&env, &ADMIN).unwrap();
        if caller != admin {
            return Err(Error::Unauthorized);
        }
        store_data(&env, &LIST_PRICE, &new_price);
        Ok(())
    }

    pub fn withdraw_listing_fees(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();

        let fee_collector: Address = get_data(&env, &FEE_COLLECTOR).unwrap();
        if caller != fee_collector {
            return Err(Error::Unauthorized);
        }
        funds::pay_out(&env, &caller, amount)?;

        MarketplaceEvent::ListingFeeWithdrawn(caller, amount).publish(&env);
        Ok(())
    }
}
