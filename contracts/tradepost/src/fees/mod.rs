//! Fee policy: protocol share, per-collection overrides, and the split
//! arithmetic the exchange engine settles with.

pub mod types;

pub(crate) mod routing;

pub use types::{CollectionOwnerFee, FeeConfig};
