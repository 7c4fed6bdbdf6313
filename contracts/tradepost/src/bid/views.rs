//! Bid view methods.

use crate::*;

use super::{collection_bid_key, token_bid_key};

#[near]
impl Contract {
    pub fn get_token_bid(
        &self,
        collection_id: AccountId,
        token_id: String,
        bidder_id: AccountId,
    ) -> Option<TokenBid> {
        self.token_bids
            .get(&token_bid_key(&collection_id, &token_id, &bidder_id))
            .cloned()
    }

    pub fn get_collection_bid(
        &self,
        collection_id: AccountId,
        bidder_id: AccountId,
    ) -> Option<CollectionBid> {
        self.collection_bids
            .get(&collection_bid_key(&collection_id, &bidder_id))
            .cloned()
    }

    /// Bids on one token across bidders. Expired entries remain until
    /// cancelled or replaced.
    pub fn get_bids_for_token(
        &self,
        collection_id: AccountId,
        token_id: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(AccountId, TokenBid)> {
        let prefix = format!("{}\0{}\0", collection_id, token_id);
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.token_bids
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .skip(start)
            .take(limit)
            .filter_map(|(key, bid)| {
                let bidder: AccountId = key.rsplit('\0').next()?.parse().ok()?;
                Some((bidder, bid.clone()))
            })
            .collect()
    }
}
