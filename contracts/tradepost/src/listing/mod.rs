//! Listing book: sell-side offers keyed by (collection, token, seller).

pub mod types;

mod manage;
mod views;

pub use types::{Listing, ListingKey, ListingParams};

use near_sdk::AccountId;

/// Composite book key; token ids cannot contain the delimiter.
pub(crate) fn listing_key(collection_id: &AccountId, token_id: &str, seller_id: &AccountId) -> String {
    format!("{}\0{}\0{}", collection_id, token_id, seller_id)
}
