//! Asset registry types.

use near_sdk::{near, AccountId};

/// Unit semantics of a collection, fixed at registration.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// One owner per token id; trades move the whole token.
    Unique,
    /// Per-holder balances per token id; trades move unit quantities.
    Multi,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Collection {
    pub kind: AssetKind,
    /// May set this collection's owner fee without holding the contract
    /// owner role.
    pub owner_id: AccountId,
    /// Nanoseconds.
    pub registered_at: u64,
}
