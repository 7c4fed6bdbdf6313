//! Bid acceptance: a holder fulfills stored token or collection bids.

use crate::bid::{collection_bid_key, token_bid_key};
use crate::*;

use super::staging::{OfferRef, PlannedTrade, TradeStage};

/// One entry of `accept_token_bids` / `accept_collection_bids`. For
/// collection bids the caller chooses which `token_id` to deliver.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct AcceptParams {
    pub collection_id: AccountId,
    pub token_id: String,
    pub bidder_id: AccountId,
    pub quantity: u64,
    /// Must match the stored bid exactly; guards against bid updates.
    pub price_per_unit: U128,
    pub payment_token: AccountId,
}

#[near]
impl Contract {
    /// Fulfills stored token bids, all entries or none.
    #[handle_result]
    pub fn accept_token_bids(&mut self, entries: Vec<AcceptParams>) -> Result<(), MarketError> {
        let seller_id = env::predecessor_account_id();
        self.internal_accept_bids(&seller_id, entries, BidKind::Token)
    }

    /// Fulfills stored collection bids, all entries or none. Each entry
    /// delivers exactly one unit.
    #[handle_result]
    pub fn accept_collection_bids(&mut self, entries: Vec<AcceptParams>) -> Result<(), MarketError> {
        let seller_id = env::predecessor_account_id();
        self.internal_accept_bids(&seller_id, entries, BidKind::Collection)
    }
}

impl Contract {
    pub(crate) fn internal_accept_bids(
        &mut self,
        seller_id: &AccountId,
        entries: Vec<AcceptParams>,
        bid_kind: BidKind,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        self.check_bidding_active()?;
        guards::check_batch_len(entries.len())?;

        let mut stage = TradeStage::default();
        let mut trades = Vec::with_capacity(entries.len());
        for entry in entries {
            trades.push(self.validate_accept_entry(seller_id, &mut stage, entry, bid_kind)?);
        }

        self.commit_trades(trades);
        Ok(())
    }

    fn validate_accept_entry(
        &self,
        seller_id: &AccountId,
        stage: &mut TradeStage,
        entry: AcceptParams,
        bid_kind: BidKind,
    ) -> Result<PlannedTrade, MarketError> {
        let key = match bid_kind {
            BidKind::Token => token_bid_key(&entry.collection_id, &entry.token_id, &entry.bidder_id),
            BidKind::Collection => collection_bid_key(&entry.collection_id, &entry.bidder_id),
        };

        let (bid_price, bid_token, bid_expiry) = match bid_kind {
            BidKind::Token => {
                let bid = self.token_bids.get(&key).ok_or(MarketError::BidNotFound)?;
                (bid.price_per_unit, bid.payment_token.clone(), bid.expires_at)
            }
            BidKind::Collection => {
                let bid = self.collection_bids.get(&key).ok_or(MarketError::BidNotFound)?;
                (bid.price_per_unit, bid.payment_token.clone(), bid.expires_at)
            }
        };

        // An expired bid behaves exactly like a missing one.
        if bid_expiry <= env::block_timestamp() {
            return Err(MarketError::BidNotFound);
        }
        if &entry.bidder_id == seller_id {
            return Err(MarketError::SelfTrade);
        }

        let kind = self.collection_kind(&entry.collection_id)?;
        if entry.quantity == 0 || (kind == AssetKind::Unique && entry.quantity != 1) {
            return Err(MarketError::BadQuantity);
        }

        let remaining = match bid_kind {
            BidKind::Token => stage.token_bid_remaining(self, &key),
            BidKind::Collection => stage.collection_bid_remaining(self, &key),
        }
        .unwrap_or(0);
        if entry.quantity > remaining {
            return Err(MarketError::InsufficientQuantity);
        }

        // Acceptance settles at the stored price, never a ceiling.
        if entry.price_per_unit.0 != bid_price.0 {
            return Err(MarketError::PriceMismatch);
        }
        if entry.payment_token != bid_token {
            return Err(MarketError::WrongPaymentToken);
        }

        if stage.holder_quantity(self, kind, &entry.collection_id, &entry.token_id, seller_id)
            < entry.quantity
        {
            return Err(MarketError::NotOwner);
        }
        if !self.is_engine_approved(&entry.collection_id, seller_id) {
            return Err(MarketError::NotApproved);
        }

        let total = (entry.quantity as u128)
            .checked_mul(bid_price.0)
            .ok_or(MarketError::BelowMinPrice)?;
        stage.stage_vault_spend(self, &bid_token, &entry.bidder_id, total)?;

        let remaining_after = remaining - entry.quantity;
        match bid_kind {
            BidKind::Token => stage.set_token_bid_remaining(key.clone(), remaining_after),
            BidKind::Collection => stage.set_collection_bid_remaining(key.clone(), remaining_after),
        }
        stage.stage_asset_move(
            self,
            kind,
            &entry.collection_id,
            &entry.token_id,
            seller_id,
            &entry.bidder_id,
            entry.quantity,
        );

        let offer = match bid_kind {
            BidKind::Token => OfferRef::TokenBid { key },
            BidKind::Collection => OfferRef::CollectionBid { key },
        };
        Ok(PlannedTrade {
            offer,
            remaining_after,
            kind,
            collection_id: entry.collection_id,
            token_id: entry.token_id,
            seller_id: seller_id.clone(),
            buyer_id: entry.bidder_id,
            quantity: entry.quantity,
            price_per_unit: bid_price.0,
            payment_token: Some(bid_token),
            total,
        })
    }
}
