//! Listing view methods.

use crate::*;

use super::listing_key;

#[near]
impl Contract {
    pub fn get_listing(
        &self,
        collection_id: AccountId,
        token_id: String,
        seller_id: AccountId,
    ) -> Option<Listing> {
        self.listings
            .get(&listing_key(&collection_id, &token_id, &seller_id))
            .cloned()
    }

    /// Listings for one token across sellers. Expired entries remain until
    /// bought or cancelled.
    pub fn get_listings_for_token(
        &self,
        collection_id: AccountId,
        token_id: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(AccountId, Listing)> {
        let prefix = format!("{}\0{}\0", collection_id, token_id);
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.listings
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .skip(start)
            .take(limit)
            .filter_map(|(key, listing)| {
                let seller: AccountId = key.rsplit('\0').next()?.parse().ok()?;
                Some((seller, listing.clone()))
            })
            .collect()
    }
}
