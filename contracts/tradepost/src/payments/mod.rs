//! In-contract payment vault: bidders and buyers pre-fund NEP-141 balances
//! and grant the engine a spending allowance, so settlement never waits on
//! a cross-contract call.

mod vault;
mod views;
