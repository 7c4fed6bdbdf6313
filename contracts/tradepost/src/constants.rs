//! Venue-wide constants.

use near_sdk::NearToken;

/// Basis-point denominator; 10_000 = 100%.
pub const BASIS_POINTS: u16 = 10_000;

/// Ceiling for both protocol fee knobs (1_500 = 15%).
pub const MAX_FEE_BPS: u16 = 1_500;

/// Ceiling for a collection owner's fee share (2_000 = 20%).
pub const MAX_COLLECTION_FEE_BPS: u16 = 2_000;

/// Smallest accepted price per unit, in the payment token's base unit.
/// Keeps fee shares from rounding to zero on dust prices.
pub const MIN_PRICE: u128 = 1_000_000_000;

/// Largest accepted price per unit. quantity * price * bps stays well
/// inside U256 at this bound.
pub const MAX_PRICE: u128 = 1_000_000_000_000_000_000_000_000_000_000_000;

/// Maximum length of a token identifier, in bytes.
pub const MAX_TOKEN_ID_LEN: usize = 256;

/// Maximum entries accepted in one batch call.
pub const MAX_BATCH_ENTRIES: usize = 50;

/// Exact deposit required on state-changing calls that need wallet confirmation.
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

// Gas constants (TGas)
pub const GAS_FT_TRANSFER: u64 = 30;
pub const GAS_WITHDRAW_RESOLVE: u64 = 10;
