//! Tradepost — an NFT trading venue.
//!
//! Three coordinated books (listings, token bids, collection bids) over an
//! in-contract asset registry and payment vault, settled by an atomic
//! batch exchange engine with protocol and collection-owner fee routing.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{
    AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, env,
    ext_contract, near,
};

pub mod constants;

mod admin;
mod assets;
mod bid;
mod errors;
mod events;
mod exchange;
mod fees;
mod guards;
mod listing;
mod payments;


pub use assets::{AssetKind, Collection};
pub use bid::{BidKey, BidKind, CollectionBid, TokenBid};
pub use constants::*;
pub use errors::MarketError;
pub use events::MarketEvent;
pub use exchange::{AcceptParams, BuyParams};
pub use fees::{CollectionOwnerFee, FeeConfig};
pub use listing::{Listing, ListingKey, ListingParams};

#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    TokenBids,
    CollectionBids,
    Collections,
    UniqueOwners,
    MultiBalances,
    OperatorApprovals,
    CollectionFees,
    PaymentTokens,
    VaultBalances,
    VaultAllowances,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    /// Halts books and engine; registry and vault surfaces stay live.
    pub paused: bool,
    /// Bid creation and acceptance only run while true.
    pub bidding_active: bool,

    pub fee_config: FeeConfig,
    pub collection_fees: IterableMap<AccountId, CollectionOwnerFee>,
    /// NEP-141 tokens accepted for settlement. Native NEAR is always
    /// eligible for listings and never a member here.
    pub payment_tokens: IterableSet<AccountId>,

    /// Sell side; key = "{collection}\0{token}\0{seller}".
    pub listings: IterableMap<String, Listing>,
    /// Buy side, one token; key = "{collection}\0{token}\0{bidder}".
    pub token_bids: IterableMap<String, TokenBid>,
    /// Buy side, any token of a collection; key = "{collection}\0{bidder}".
    pub collection_bids: IterableMap<String, CollectionBid>,

    pub collections: IterableMap<AccountId, Collection>,
    /// Unique-kind ownership; key = (collection, token).
    pub unique_owners: LookupMap<(AccountId, String), AccountId>,
    /// Multi-kind balances; key = (collection, token, holder).
    pub multi_balances: LookupMap<(AccountId, String, AccountId), u64>,
    /// Engine transfer authority; key = (collection, holder).
    pub operator_approvals: LookupMap<(AccountId, AccountId), bool>,

    /// Deposited NEP-141 funds; key = (token, holder).
    pub vault_balances: LookupMap<(AccountId, AccountId), u128>,
    /// Engine spending authority; key = (token, holder).
    pub vault_allowances: LookupMap<(AccountId, AccountId), u128>,
}
