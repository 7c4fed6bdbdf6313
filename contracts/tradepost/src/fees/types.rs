//! Fee policy types.

use near_sdk::{near, AccountId};

/// Protocol-level fee configuration.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct FeeConfig {
    /// Protocol share on sales without a collection override, in basis points.
    pub fee_bps: u16,
    /// Protocol share on sales where a collection override exists.
    pub fee_with_owner_bps: u16,
    /// Account credited with the protocol share.
    pub fee_recipient: AccountId,
}

/// Per-collection fee override, set by the contract owner or the
/// collection's registered owner.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct CollectionOwnerFee {
    pub recipient: AccountId,
    /// Collection owner's share, in basis points.
    pub fee_bps: u16,
}
