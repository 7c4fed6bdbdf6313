//! Venue error type.
//!
//! Every fallible entry point returns `Result<_, MarketError>` under
//! `#[handle_result]`; the `FunctionError` derive turns an `Err` into an
//! `env::panic_str()` with the Display message, so callers see a stable
//! reason string and unit tests can match on the variant instead.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MarketError {
    /// Caller lacks the required role.
    Unauthorized,
    /// Caller does not hold the asset being offered.
    NotOwner,
    /// Holder has not granted the engine transfer authority.
    NotApproved,
    /// Maker and taker resolve to the same account.
    SelfTrade,
    /// Zero quantity, or more than one unit of a unique asset.
    BadQuantity,
    /// Price per unit outside the accepted range.
    BelowMinPrice,
    /// Expiration absent where required, or not in the future.
    InvalidExpiration,
    /// Payment token is not on the supported list.
    UnsupportedToken,
    /// Entry's payment token differs from the stored offer's.
    WrongPaymentToken,
    /// Entry's price does not satisfy the stored offer's.
    PriceMismatch,
    /// Collection bids only exist on unique-unit collections.
    CollectionBidsUnsupported,
    /// Empty, oversized, or delimiter-bearing token identifier.
    InvalidTokenId,
    /// Batch exceeds the per-call entry cap.
    BatchTooLarge,
    /// Attached deposit does not match what the call requires.
    InvalidDeposit,
    /// No live bid under the given key.
    BidNotFound,
    /// No live listing to purchase from.
    NothingToBuy,
    /// Offer has fewer units left than requested.
    InsufficientQuantity,
    /// Bidder or buyer cannot cover the total from vault funds.
    InsufficientFunds,
    /// Collection was never registered.
    UnknownCollection,
    /// Collection id already taken.
    CollectionExists,
    /// Unique token id already minted.
    TokenExists,
    /// Venue is paused.
    Paused,
    /// Bid surfaces are switched off.
    BiddingInactive,
    /// Fee knob above its ceiling.
    FeeTooHigh,
    /// Recipient account not acceptable for fee routing.
    InvalidRecipient,
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Unauthorized => "No permission",
            Self::NotOwner => "Not owning item",
            Self::NotApproved => "Item not approved",
            Self::SelfTrade => "Cannot fulfill own order",
            Self::BadQuantity => "Bad quantity",
            Self::BelowMinPrice => "Below min price",
            Self::InvalidExpiration => "Invalid expiration time",
            Self::UnsupportedToken => "Token is not supported",
            Self::WrongPaymentToken => "Wrong payment token",
            Self::PriceMismatch => "Price does not match",
            Self::CollectionBidsUnsupported => "No collection bids on multi unit assets",
            Self::InvalidTokenId => "Invalid token id",
            Self::BatchTooLarge => "Too many batch entries",
            Self::InvalidDeposit => "Attached deposit does not match the required amount",
            Self::BidNotFound => "Bid does not exist",
            Self::NothingToBuy => "Nothing to buy",
            Self::InsufficientQuantity => "Not enough quantity",
            Self::InsufficientFunds => "Not enough balance or allowance",
            Self::UnknownCollection => "Collection not registered",
            Self::CollectionExists => "Collection already registered",
            Self::TokenExists => "Token already minted",
            Self::Paused => "Paused",
            Self::BiddingInactive => "Bidding is not active",
            Self::FeeTooHigh => "Max fee",
            Self::InvalidRecipient => "Invalid fee recipient",
        };
        f.write_str(msg)
    }
}
