use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum MarketplaceEvent {
    Initialized(Address, Address),
    Upgraded(u32),
    TokenListed(u64, Address, i128),
    TokenSold(u64, Address, Address, i128),
    AuctionStarted(u64, Address, i128, u64),
    BidPlaced(u64, Address, i128),
    AuctionEnded(u64, Address, Option<Address>, i128),
    ListingFeeWithdrawn(Address, i128),
}

impl MarketplaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MarketplaceEvent::Initialized(..) => stringify!(Initialized),
            MarketplaceEvent::Upgraded(..) => stringify!(Upgraded),
            MarketplaceEvent::TokenListed(..) => stringify!(TokenListed),
            MarketplaceEvent::TokenSold(..) => stringify!(TokenSold),
            MarketplaceEvent::AuctionStarted(..) => stringify!(AuctionStarted),
            MarketplaceEvent::BidPlaced(..) => stringify!(BidPlaced),
            MarketplaceEvent::AuctionEnded(..) => stringify!(AuctionEnded),
            MarketplaceEvent::ListingFeeWithdrawn(..) => stringify!(ListingFeeWithdrawn),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            MarketplaceEvent::Initialized(nft_contract, fee_collector) => {
                v.push_back(nft_contract.into_val(env));
                v.push_back(fee_collector.into_val(env));
            }
            MarketplaceEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            MarketplaceEvent::TokenListed(token_id, seller, price) => {
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(price.into_val(env));
            }
            MarketplaceEvent::TokenSold(token_id, seller, buyer, price) => {
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(price.into_val(env));
            }
            MarketplaceEvent::AuctionStarted(token_id, seller, start_price, end_time) => {
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(start_price.into_val(env));
                v.push_back(end_time.into_val(env));
            }
            MarketplaceEvent::BidPlaced(token_id, bidder, amount) => {
                v.push_back(token_id.into_val(env));
                v.push_back(bidder.into_val(env));
                v.push_back(amount.into_val(env));
            }
            MarketplaceEvent::AuctionEnded(token_id, seller, winner, amount) => {
                v.push_back(token_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(winner.into_val(env));
                v.push_back(amount.into_val(env));
            }
            MarketplaceEvent::ListingFeeWithdrawn(collector, amount) => {
                v.push_back(collector.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
