//! Collection-bid upsert.

use crate::*;

use super::{check_bid_expiration, collection_bid_key};

#[near]
impl Contract {
    /// Upserts the caller's bid on any token of a unique-unit collection.
    /// `quantity` is the number of single-unit acceptances the bid covers.
    #[handle_result]
    pub fn create_or_update_collection_bid(
        &mut self,
        collection_id: AccountId,
        quantity: u64,
        price_per_unit: U128,
        expires_at: Option<u64>,
        payment_token: Option<AccountId>,
    ) -> Result<(), MarketError> {
        let bidder_id = env::predecessor_account_id();
        self.internal_upsert_collection_bid(
            &bidder_id,
            collection_id,
            quantity,
            price_per_unit,
            expires_at,
            payment_token,
        )
    }
}

impl Contract {
    pub(crate) fn internal_upsert_collection_bid(
        &mut self,
        bidder_id: &AccountId,
        collection_id: AccountId,
        quantity: u64,
        price_per_unit: U128,
        expires_at: Option<u64>,
        payment_token: Option<AccountId>,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        self.check_bidding_active()?;
        let kind = self.collection_kind(&collection_id)?;
        if kind == AssetKind::Multi {
            return Err(MarketError::CollectionBidsUnsupported);
        }

        let token = self.check_bid_payment_token(payment_token)?;
        if quantity == 0 {
            return Err(MarketError::BadQuantity);
        }
        guards::check_price_bounds(quantity, price_per_unit.0)?;
        let expiry = check_bid_expiration(expires_at)?;

        let total = quantity as u128 * price_per_unit.0;
        if self.spendable_funds(&token, bidder_id) < total {
            return Err(MarketError::InsufficientFunds);
        }

        let bid = CollectionBid {
            quantity,
            price_per_unit,
            expires_at: expiry,
            payment_token: token.clone(),
            created_at: env::block_timestamp(),
        };
        self.collection_bids
            .insert(collection_bid_key(&collection_id, bidder_id), bid);

        MarketEvent::CollectionBidUpserted {
            bidder_id: bidder_id.clone(),
            collection_id,
            quantity,
            price_per_unit,
            expires_at: expiry,
            payment_token: token,
        }
        .emit();
        Ok(())
    }
}
