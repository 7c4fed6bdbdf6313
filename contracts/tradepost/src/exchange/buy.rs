//! Direct purchase against listings.

use crate::listing::listing_key;
use crate::*;

use super::staging::{OfferRef, PlannedTrade, TradeStage};

/// One entry of `buy_items`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct BuyParams {
    pub collection_id: AccountId,
    pub token_id: String,
    /// The seller whose listing to buy from.
    pub owner_id: AccountId,
    pub quantity: u64,
    /// Protects against listing updates; the stored price may be lower.
    pub max_price_per_unit: U128,
    #[serde(default)]
    pub payment_token: Option<AccountId>,
    /// Must agree with the listing's settlement side.
    #[serde(default)]
    pub using_native: bool,
}

#[near]
impl Contract {
    /// Buys from stored listings, all entries or none. The attached deposit
    /// must equal the batch's native total exactly; zero for an all-vault
    /// batch.
    #[payable]
    #[handle_result]
    pub fn buy_items(&mut self, entries: Vec<BuyParams>) -> Result<(), MarketError> {
        let buyer_id = env::predecessor_account_id();
        let attached = env::attached_deposit().as_yoctonear();
        self.internal_buy_items(&buyer_id, attached, entries)
    }
}

impl Contract {
    pub(crate) fn internal_buy_items(
        &mut self,
        buyer_id: &AccountId,
        attached: u128,
        entries: Vec<BuyParams>,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        guards::check_batch_len(entries.len())?;

        let mut stage = TradeStage::default();
        let mut trades = Vec::with_capacity(entries.len());
        for entry in entries {
            trades.push(self.validate_buy_entry(buyer_id, &mut stage, entry)?);
        }

        if attached != stage.native_due {
            return Err(MarketError::InvalidDeposit);
        }

        self.commit_trades(trades);
        Ok(())
    }

    fn validate_buy_entry(
        &self,
        buyer_id: &AccountId,
        stage: &mut TradeStage,
        entry: BuyParams,
    ) -> Result<PlannedTrade, MarketError> {
        if &entry.owner_id == buyer_id {
            return Err(MarketError::SelfTrade);
        }

        let key = listing_key(&entry.collection_id, &entry.token_id, &entry.owner_id);
        let listing = self.listings.get(&key).ok_or(MarketError::NothingToBuy)?;

        if entry.quantity == 0 {
            return Err(MarketError::NothingToBuy);
        }
        if let Some(expiry) = listing.expires_at {
            if expiry <= env::block_timestamp() {
                return Err(MarketError::NothingToBuy);
            }
        }

        let remaining = stage.listing_remaining(self, &key).unwrap_or(0);
        if remaining == 0 {
            return Err(MarketError::NothingToBuy);
        }
        if entry.quantity > remaining {
            return Err(MarketError::InsufficientQuantity);
        }

        // Buys tolerate a price drop, never a raise.
        if listing.price_per_unit.0 > entry.max_price_per_unit.0 {
            return Err(MarketError::PriceMismatch);
        }
        if entry.payment_token != listing.payment_token
            || entry.using_native != listing.payment_token.is_none()
        {
            return Err(MarketError::WrongPaymentToken);
        }

        // The listing may have gone stale since creation; a seller who no
        // longer holds or approves has nothing to sell.
        let kind = self.collection_kind(&entry.collection_id)?;
        if stage.holder_quantity(self, kind, &entry.collection_id, &entry.token_id, &entry.owner_id)
            < entry.quantity
        {
            return Err(MarketError::NothingToBuy);
        }
        if !self.is_engine_approved(&entry.collection_id, &entry.owner_id) {
            return Err(MarketError::NothingToBuy);
        }

        let total = (entry.quantity as u128)
            .checked_mul(listing.price_per_unit.0)
            .ok_or(MarketError::BelowMinPrice)?;
        match &listing.payment_token {
            Some(token) => stage.stage_vault_spend(self, token, buyer_id, total)?,
            None => stage.stage_native_due(total)?,
        }

        let remaining_after = remaining - entry.quantity;
        stage.set_listing_remaining(key.clone(), remaining_after);
        stage.stage_asset_move(
            self,
            kind,
            &entry.collection_id,
            &entry.token_id,
            &entry.owner_id,
            buyer_id,
            entry.quantity,
        );

        Ok(PlannedTrade {
            offer: OfferRef::Listing { key },
            remaining_after,
            kind,
            collection_id: entry.collection_id,
            token_id: entry.token_id,
            seller_id: entry.owner_id,
            buyer_id: buyer_id.clone(),
            quantity: entry.quantity,
            price_per_unit: listing.price_per_unit.0,
            payment_token: listing.payment_token.clone(),
            total,
        })
    }
}
