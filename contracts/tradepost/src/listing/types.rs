//! Listing book types.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// A sell-side offer. Stored under "{collection}\0{token}\0{seller}".
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    /// Units still for sale.
    pub quantity: u64,
    /// Base units of the payment token.
    pub price_per_unit: U128,
    /// Nanoseconds; `None` = no expiry.
    pub expires_at: Option<u64>,
    /// `None` = native NEAR.
    pub payment_token: Option<AccountId>,
    /// Nanoseconds; refreshed on update.
    pub created_at: u64,
}

/// One entry of `create_or_update_listings`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct ListingParams {
    pub collection_id: AccountId,
    pub token_id: String,
    pub quantity: u64,
    pub price_per_unit: U128,
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub payment_token: Option<AccountId>,
}

/// One entry of `cancel_listings`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct ListingKey {
    pub collection_id: AccountId,
    pub token_id: String,
}
