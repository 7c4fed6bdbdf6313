//! In-contract asset registry: collections with fixed unit semantics,
//! per-token positions, and operator approvals for the exchange engine.

pub mod types;

mod registry;
mod transfer;
mod views;

pub use types::{AssetKind, Collection};
