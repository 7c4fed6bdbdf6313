//! Per-batch staged state and the commit path.
//!
//! A batch validates every entry against this overlay before anything is
//! written: later entries observe earlier entries' quantity decrements,
//! ownership moves, and vault spends. One bad entry fails the whole call
//! with no state change.

use std::collections::HashMap;

use crate::*;

/// Which stored offer a planned trade consumes.
pub(crate) enum OfferRef {
    Listing { key: String },
    TokenBid { key: String },
    CollectionBid { key: String },
}

/// A fully validated trade, ready to commit.
pub(crate) struct PlannedTrade {
    pub offer: OfferRef,
    /// Offer quantity left after this trade; zero removes the offer.
    pub remaining_after: u64,
    pub kind: AssetKind,
    pub collection_id: AccountId,
    pub token_id: String,
    pub seller_id: AccountId,
    pub buyer_id: AccountId,
    pub quantity: u64,
    pub price_per_unit: u128,
    /// `None` = native NEAR, paid out by promises after commit.
    pub payment_token: Option<AccountId>,
    pub total: u128,
}

/// Mutable overlay for one batch call. Reads fall through to stored state;
/// writes stay here until the whole batch has validated.
#[derive(Default)]
pub(crate) struct TradeStage {
    listings: HashMap<String, u64>,
    token_bids: HashMap<String, u64>,
    collection_bids: HashMap<String, u64>,
    unique_owners: HashMap<(AccountId, String), AccountId>,
    multi_balances: HashMap<(AccountId, String, AccountId), u64>,
    vault_spend: HashMap<(AccountId, AccountId), u128>,
    /// Native total the caller must attach exactly.
    pub native_due: u128,
}

impl TradeStage {
    pub fn listing_remaining(&self, contract: &Contract, key: &str) -> Option<u64> {
        if let Some(quantity) = self.listings.get(key) {
            return Some(*quantity);
        }
        contract.listings.get(key).map(|listing| listing.quantity)
    }

    pub fn set_listing_remaining(&mut self, key: String, quantity: u64) {
        self.listings.insert(key, quantity);
    }

    pub fn token_bid_remaining(&self, contract: &Contract, key: &str) -> Option<u64> {
        if let Some(quantity) = self.token_bids.get(key) {
            return Some(*quantity);
        }
        contract.token_bids.get(key).map(|bid| bid.quantity)
    }

    pub fn set_token_bid_remaining(&mut self, key: String, quantity: u64) {
        self.token_bids.insert(key, quantity);
    }

    pub fn collection_bid_remaining(&self, contract: &Contract, key: &str) -> Option<u64> {
        if let Some(quantity) = self.collection_bids.get(key) {
            return Some(*quantity);
        }
        contract.collection_bids.get(key).map(|bid| bid.quantity)
    }

    pub fn set_collection_bid_remaining(&mut self, key: String, quantity: u64) {
        self.collection_bids.insert(key, quantity);
    }

    /// Holder's quantity of one token as staged so far.
    pub fn holder_quantity(
        &self,
        contract: &Contract,
        kind: AssetKind,
        collection_id: &AccountId,
        token_id: &str,
        holder: &AccountId,
    ) -> u64 {
        match kind {
            AssetKind::Unique => {
                let key = (collection_id.clone(), token_id.to_string());
                let owner = match self.unique_owners.get(&key) {
                    Some(owner) => Some(owner),
                    None => contract.unique_owners.get(&key),
                };
                u64::from(owner == Some(holder))
            }
            AssetKind::Multi => {
                let key = (collection_id.clone(), token_id.to_string(), holder.clone());
                match self.multi_balances.get(&key) {
                    Some(balance) => *balance,
                    None => contract.multi_balances.get(&key).copied().unwrap_or(0),
                }
            }
        }
    }

    /// Stages a unit move. Holdings were validated against this overlay.
    pub fn stage_asset_move(
        &mut self,
        contract: &Contract,
        kind: AssetKind,
        collection_id: &AccountId,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
        quantity: u64,
    ) {
        match kind {
            AssetKind::Unique => {
                self.unique_owners
                    .insert((collection_id.clone(), token_id.to_string()), to.clone());
            }
            AssetKind::Multi => {
                let from_balance = self.holder_quantity(contract, kind, collection_id, token_id, from);
                self.multi_balances.insert(
                    (collection_id.clone(), token_id.to_string(), from.clone()),
                    from_balance.saturating_sub(quantity),
                );
                let to_balance = self.holder_quantity(contract, kind, collection_id, token_id, to);
                self.multi_balances.insert(
                    (collection_id.clone(), token_id.to_string(), to.clone()),
                    to_balance.saturating_add(quantity),
                );
            }
        }
    }

    /// Accumulates a vault spend and checks the running total against the
    /// payer's spendable funds.
    pub fn stage_vault_spend(
        &mut self,
        contract: &Contract,
        token: &AccountId,
        payer: &AccountId,
        amount: u128,
    ) -> Result<(), MarketError> {
        let key = (token.clone(), payer.clone());
        let spent = self.vault_spend.get(&key).copied().unwrap_or(0);
        let total = spent.checked_add(amount).ok_or(MarketError::InsufficientFunds)?;
        if total > contract.spendable_funds(token, payer) {
            return Err(MarketError::InsufficientFunds);
        }
        self.vault_spend.insert(key, total);
        Ok(())
    }

    /// Accumulates the native amount the caller must attach.
    pub fn stage_native_due(&mut self, amount: u128) -> Result<(), MarketError> {
        self.native_due = self
            .native_due
            .checked_add(amount)
            .ok_or(MarketError::InvalidDeposit)?;
        Ok(())
    }
}

impl Contract {
    /// Applies a fully validated batch: book decrements, then funds, then
    /// asset moves, per trade. Native payout promises are created last,
    /// after every state write.
    pub(crate) fn commit_trades(&mut self, trades: Vec<PlannedTrade>) {
        let mut native_payouts: Vec<(AccountId, u128)> = Vec::new();

        for trade in trades {
            match &trade.offer {
                OfferRef::Listing { key } => {
                    if trade.remaining_after == 0 {
                        self.listings.remove(key);
                    } else if let Some(listing) = self.listings.get_mut(key) {
                        listing.quantity = trade.remaining_after;
                    }
                }
                OfferRef::TokenBid { key } => {
                    if trade.remaining_after == 0 {
                        self.token_bids.remove(key);
                    } else if let Some(bid) = self.token_bids.get_mut(key) {
                        bid.quantity = trade.remaining_after;
                    }
                }
                OfferRef::CollectionBid { key } => {
                    if trade.remaining_after == 0 {
                        self.collection_bids.remove(key);
                    } else if let Some(bid) = self.collection_bids.get_mut(key) {
                        bid.quantity = trade.remaining_after;
                    }
                }
            }

            let split = self.compute_fee_split(&trade.collection_id, trade.total);
            match &trade.payment_token {
                Some(token) => {
                    self.pull_funds(token, &trade.buyer_id, trade.total);
                    self.credit_funds(token, &split.protocol_recipient, split.protocol_amount);
                    if let Some(recipient) = &split.collection_recipient {
                        self.credit_funds(token, recipient, split.collection_amount);
                    }
                    self.credit_funds(token, &trade.seller_id, split.seller_amount);
                }
                None => {
                    native_payouts.push((split.protocol_recipient, split.protocol_amount));
                    if let Some(recipient) = split.collection_recipient {
                        native_payouts.push((recipient, split.collection_amount));
                    }
                    native_payouts.push((trade.seller_id.clone(), split.seller_amount));
                }
            }

            self.move_asset(
                trade.kind,
                &trade.collection_id,
                &trade.token_id,
                &trade.seller_id,
                &trade.buyer_id,
                trade.quantity,
            );

            self.emit_trade_event(trade);
        }

        // Interactions last.
        for (recipient, amount) in native_payouts {
            if amount > 0 {
                let _ = Promise::new(recipient).transfer(NearToken::from_yoctonear(amount));
            }
        }
    }

    fn emit_trade_event(&self, trade: PlannedTrade) {
        let bid_kind = match &trade.offer {
            OfferRef::Listing { .. } => {
                MarketEvent::ItemSold {
                    seller_id: trade.seller_id,
                    buyer_id: trade.buyer_id,
                    collection_id: trade.collection_id,
                    token_id: trade.token_id,
                    quantity: trade.quantity,
                    price_per_unit: U128(trade.price_per_unit),
                    payment_token: trade.payment_token,
                }
                .emit();
                return;
            }
            OfferRef::TokenBid { .. } => "token",
            OfferRef::CollectionBid { .. } => "collection",
        };

        // Bids always settle through the vault.
        if let Some(token) = trade.payment_token {
            MarketEvent::BidAccepted {
                seller_id: trade.seller_id,
                bidder_id: trade.buyer_id,
                collection_id: trade.collection_id,
                token_id: trade.token_id,
                quantity: trade.quantity,
                price_per_unit: U128(trade.price_per_unit),
                payment_token: token,
                bid_kind: bid_kind.to_string(),
            }
            .emit();
        }
    }
}
