//! Bid book: buy-side offers, token-scoped and collection-wide.

pub mod types;

mod cancel;
mod collection;
mod token;
mod views;

pub use types::{BidKey, BidKind, CollectionBid, TokenBid};

use near_sdk::AccountId;

use crate::{Contract, MarketError};

pub(crate) fn token_bid_key(collection_id: &AccountId, token_id: &str, bidder_id: &AccountId) -> String {
    format!("{}\0{}\0{}", collection_id, token_id, bidder_id)
}

pub(crate) fn collection_bid_key(collection_id: &AccountId, bidder_id: &AccountId) -> String {
    format!("{}\0{}", collection_id, bidder_id)
}

impl Contract {
    /// Bids settle from the vault, so they must name a supported NEP-141
    /// token; there is no native-NEAR bid.
    pub(crate) fn check_bid_payment_token(
        &self,
        payment_token: Option<AccountId>,
    ) -> Result<AccountId, MarketError> {
        let token = payment_token.ok_or(MarketError::UnsupportedToken)?;
        if !self.payment_tokens.contains(&token) {
            return Err(MarketError::UnsupportedToken);
        }
        Ok(token)
    }
}

/// Bids always carry an expiry, strictly in the future.
pub(crate) fn check_bid_expiration(expires_at: Option<u64>) -> Result<u64, MarketError> {
    match expires_at {
        Some(expiry) if expiry > near_sdk::env::block_timestamp() => Ok(expiry),
        _ => Err(MarketError::InvalidExpiration),
    }
}
