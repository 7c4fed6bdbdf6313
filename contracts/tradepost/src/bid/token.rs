//! Token-bid upsert.

use crate::*;

use super::{check_bid_expiration, token_bid_key};

#[near]
impl Contract {
    /// Upserts the caller's bid on one token, replacing any prior bid
    /// wholesale. Funds stay in the vault until acceptance; the bid only
    /// proves they are spendable right now.
    #[handle_result]
    pub fn create_or_update_token_bid(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        expires_at: Option<u64>,
        payment_token: Option<AccountId>,
    ) -> Result<(), MarketError> {
        let bidder_id = env::predecessor_account_id();
        self.internal_upsert_token_bid(
            &bidder_id,
            collection_id,
            token_id,
            quantity,
            price_per_unit,
            expires_at,
            payment_token,
        )
    }
}

impl Contract {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn internal_upsert_token_bid(
        &mut self,
        bidder_id: &AccountId,
        collection_id: AccountId,
        token_id: String,
        quantity: u64,
        price_per_unit: U128,
        expires_at: Option<u64>,
        payment_token: Option<AccountId>,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        self.check_bidding_active()?;
        let kind = self.collection_kind(&collection_id)?;
        guards::check_token_id(&token_id)?;

        let token = self.check_bid_payment_token(payment_token)?;
        guards::check_quantity(kind, quantity)?;
        guards::check_price_bounds(quantity, price_per_unit.0)?;
        let expiry = check_bid_expiration(expires_at)?;

        // A unique-token holder cannot bid on their own asset.
        if kind == AssetKind::Unique
            && self.holds_quantity(kind, &collection_id, &token_id, bidder_id, 1)
        {
            return Err(MarketError::SelfTrade);
        }

        let total = quantity as u128 * price_per_unit.0;
        if self.spendable_funds(&token, bidder_id) < total {
            return Err(MarketError::InsufficientFunds);
        }

        let bid = TokenBid {
            quantity,
            price_per_unit,
            expires_at: expiry,
            payment_token: token.clone(),
            created_at: env::block_timestamp(),
        };
        self.token_bids
            .insert(token_bid_key(&collection_id, &token_id, bidder_id), bid);

        MarketEvent::TokenBidUpserted {
            bidder_id: bidder_id.clone(),
            collection_id,
            token_id,
            quantity,
            price_per_unit,
            expires_at: expiry,
            payment_token: token,
        }
        .emit();
        Ok(())
    }
}
