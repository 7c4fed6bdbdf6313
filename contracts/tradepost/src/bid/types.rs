//! Bid book types.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// A buy-side offer on one token. Stored under
/// "{collection}\0{token}\0{bidder}".
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenBid {
    /// Units still wanted.
    pub quantity: u64,
    /// Base units of the payment token.
    pub price_per_unit: U128,
    /// Nanoseconds; bids always expire.
    pub expires_at: u64,
    /// Always a supported NEP-141 token; bids settle from the vault.
    pub payment_token: AccountId,
    /// Nanoseconds; refreshed on update.
    pub created_at: u64,
}

/// A buy-side offer on any token of a unique-unit collection, fulfillable
/// one unit per acceptance. Stored under "{collection}\0{bidder}".
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct CollectionBid {
    /// Acceptances still wanted.
    pub quantity: u64,
    pub price_per_unit: U128,
    /// Nanoseconds.
    pub expires_at: u64,
    pub payment_token: AccountId,
    /// Nanoseconds; refreshed on update.
    pub created_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BidKind {
    Token,
    Collection,
}

/// One entry of `cancel_bids`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct BidKey {
    pub kind: BidKind,
    pub collection_id: AccountId,
    /// Required for `Token` entries, ignored for `Collection`.
    #[serde(default)]
    pub token_id: Option<String>,
}
