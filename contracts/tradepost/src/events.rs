use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

use crate::assets::AssetKind;

#[near(event_json(standard = "tradepost"))]
pub enum MarketEvent {
    #[event_version("1.0.0")]
    ItemListed {
        seller_id: AccountId,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        expires_at: Option<u64>,
        payment_token: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    ItemUpdated {
        seller_id: AccountId,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        expires_at: Option<u64>,
        payment_token: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    ItemCanceled {
        seller_id: AccountId,
        collection_id: AccountId,
        token_id: String,
    },
    #[event_version("1.0.0")]
    ItemSold {
        seller_id: AccountId,
        buyer_id: AccountId,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        payment_token: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    TokenBidUpserted {
        bidder_id: AccountId,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        expires_at: u64,
        payment_token: AccountId,
    },
    #[event_version("1.0.0")]
    CollectionBidUpserted {
        bidder_id: AccountId,
        collection_id: AccountId,
        quantity: u64,
        price_per_unit: U128,
        expires_at: u64,
        payment_token: AccountId,
    },
    #[event_version("1.0.0")]
    TokenBidCanceled {
        bidder_id: AccountId,
        collection_id: AccountId,
        token_id: String,
    },
    #[event_version("1.0.0")]
    CollectionBidCanceled {
        bidder_id: AccountId,
        collection_id: AccountId,
    },
    #[event_version("1.0.0")]
    BidAccepted {
        seller_id: AccountId,
        bidder_id: AccountId,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        payment_token: AccountId,
        bid_kind: String,
    },
    #[event_version("1.0.0")]
    FeeUpdated { fee_bps: u16, fee_with_owner_bps: u16 },
    #[event_version("1.0.0")]
    FeeRecipientUpdated { recipient: AccountId },
    #[event_version("1.0.0")]
    CollectionFeeUpdated {
        collection_id: AccountId,
        recipient: AccountId,
        fee_bps: u16,
    },
    #[event_version("1.0.0")]
    PaymentTokenUpdated { token: AccountId, supported: bool },
    #[event_version("1.0.0")]
    BiddingToggled { active: bool },
    #[event_version("1.0.0")]
    VenuePaused { admin_id: AccountId },
    #[event_version("1.0.0")]
    VenueUnpaused { admin_id: AccountId },
    #[event_version("1.0.0")]
    CollectionRegistered {
        collection_id: AccountId,
        owner_id: AccountId,
        kind: AssetKind,
    },
    #[event_version("1.0.0")]
    AssetMinted {
        collection_id: AccountId,
        token_id: String,
        owner_id: AccountId,
        quantity: u64,
    },
    #[event_version("1.0.0")]
    AssetTransferred {
        collection_id: AccountId,
        token_id: String,
        sender_id: AccountId,
        receiver_id: AccountId,
        quantity: u64,
    },
    #[event_version("1.0.0")]
    ApprovalUpdated {
        collection_id: AccountId,
        owner_id: AccountId,
        approved: bool,
    },
    #[event_version("1.0.0")]
    FundsDeposited {
        token: AccountId,
        account_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    FundsWithdrawn {
        token: AccountId,
        account_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    WithdrawFailed {
        token: AccountId,
        account_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    AllowanceUpdated {
        token: AccountId,
        account_id: AccountId,
        amount: U128,
    },
}
