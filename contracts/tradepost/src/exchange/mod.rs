//! Exchange engine: batch purchase and bid acceptance.
//!
//! Checks-effects-interactions, batch-wide: validate every entry against a
//! staged overlay, write books, vault, and registry, then create native
//! payout promises.

mod accept;
mod buy;
mod staging;

pub use accept::AcceptParams;
pub use buy::BuyParams;
