//! Listing upsert and cancel.

use crate::*;

use super::listing_key;

#[near]
impl Contract {
    /// Upserts one listing per entry, keyed by (collection, token, caller).
    /// Any invalid entry fails the whole batch.
    #[handle_result]
    pub fn create_or_update_listings(&mut self, listings: Vec<ListingParams>) -> Result<(), MarketError> {
        let seller_id = env::predecessor_account_id();
        self.internal_create_or_update_listings(&seller_id, listings)
    }

    /// Removes the caller's listings. Absent entries are silent no-ops, so
    /// retries and races with buyers stay safe.
    #[handle_result]
    pub fn cancel_listings(&mut self, listings: Vec<ListingKey>) -> Result<(), MarketError> {
        let seller_id = env::predecessor_account_id();
        self.internal_cancel_listings(&seller_id, listings)
    }
}

impl Contract {
    pub(crate) fn internal_create_or_update_listings(
        &mut self,
        seller_id: &AccountId,
        entries: Vec<ListingParams>,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        guards::check_batch_len(entries.len())?;

        // Validate everything before writing anything.
        for entry in &entries {
            self.validate_listing_entry(seller_id, entry)?;
        }
        for entry in entries {
            self.apply_listing_upsert(seller_id, entry);
        }
        Ok(())
    }

    pub(crate) fn internal_cancel_listings(
        &mut self,
        seller_id: &AccountId,
        entries: Vec<ListingKey>,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        guards::check_batch_len(entries.len())?;

        for entry in entries {
            let key = listing_key(&entry.collection_id, &entry.token_id, seller_id);
            if self.listings.remove(&key).is_some() {
                MarketEvent::ItemCanceled {
                    seller_id: seller_id.clone(),
                    collection_id: entry.collection_id,
                    token_id: entry.token_id,
                }
                .emit();
            }
        }
        Ok(())
    }

    fn validate_listing_entry(&self, seller_id: &AccountId, entry: &ListingParams) -> Result<(), MarketError> {
        let kind = self.collection_kind(&entry.collection_id)?;
        guards::check_token_id(&entry.token_id)?;

        if !self.holds_quantity(kind, &entry.collection_id, &entry.token_id, seller_id, entry.quantity) {
            return Err(MarketError::NotOwner);
        }
        if !self.is_engine_approved(&entry.collection_id, seller_id) {
            return Err(MarketError::NotApproved);
        }
        if let Some(token) = &entry.payment_token {
            if !self.payment_tokens.contains(token) {
                return Err(MarketError::UnsupportedToken);
            }
        }
        guards::check_price_bounds(entry.quantity, entry.price_per_unit.0)?;
        guards::check_quantity(kind, entry.quantity)?;
        guards::check_listing_expiration(entry.expires_at)?;
        Ok(())
    }

    fn apply_listing_upsert(&mut self, seller_id: &AccountId, entry: ListingParams) {
        let key = listing_key(&entry.collection_id, &entry.token_id, seller_id);
        let listing = Listing {
            quantity: entry.quantity,
            price_per_unit: entry.price_per_unit,
            expires_at: entry.expires_at,
            payment_token: entry.payment_token.clone(),
            created_at: env::block_timestamp(),
        };
        let replaced = self.listings.insert(key, listing).is_some();

        if replaced {
            MarketEvent::ItemUpdated {
                seller_id: seller_id.clone(),
                collection_id: entry.collection_id,
                token_id: entry.token_id,
                quantity: entry.quantity,
                price_per_unit: entry.price_per_unit,
                expires_at: entry.expires_at,
                payment_token: entry.payment_token,
            }
            .emit();
        } else {
            MarketEvent::ItemListed {
                seller_id: seller_id.clone(),
                collection_id: entry.collection_id,
                token_id: entry.token_id,
                quantity: entry.quantity,
                price_per_unit: entry.price_per_unit,
                expires_at: entry.expires_at,
                payment_token: entry.payment_token,
            }
            .emit();
        }
    }
}
