//! Shared call-site and input guards.

use crate::*;

/// Exactly 1 yoctoNEAR attached. Wallet-confirmation gate for calls that
/// move assets or change configuration.
pub(crate) fn check_one_yocto() -> Result<(), MarketError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketError::InvalidDeposit);
    }
    Ok(())
}

pub(crate) fn check_batch_len(len: usize) -> Result<(), MarketError> {
    if len > MAX_BATCH_ENTRIES {
        return Err(MarketError::BatchTooLarge);
    }
    Ok(())
}

/// Token ids are non-empty, bounded, and free of the composite-key delimiter.
pub(crate) fn check_token_id(token_id: &str) -> Result<(), MarketError> {
    if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN || token_id.contains('\0') {
        return Err(MarketError::InvalidTokenId);
    }
    Ok(())
}

/// Price must sit inside [MIN_PRICE, MAX_PRICE] and quantity * price must
/// fit in u128.
pub(crate) fn check_price_bounds(quantity: u64, price_per_unit: u128) -> Result<(), MarketError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&price_per_unit) {
        return Err(MarketError::BelowMinPrice);
    }
    if (quantity as u128).checked_mul(price_per_unit).is_none() {
        return Err(MarketError::BelowMinPrice);
    }
    Ok(())
}

/// Unique-kind offers are always single-unit.
pub(crate) fn check_quantity(kind: AssetKind, quantity: u64) -> Result<(), MarketError> {
    if quantity == 0 || (kind == AssetKind::Unique && quantity != 1) {
        return Err(MarketError::BadQuantity);
    }
    Ok(())
}

/// Listings may omit an expiry; a set expiry must be strictly in the future.
pub(crate) fn check_listing_expiration(expires_at: Option<u64>) -> Result<(), MarketError> {
    if let Some(expiry) = expires_at {
        if expiry <= env::block_timestamp() {
            return Err(MarketError::InvalidExpiration);
        }
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, account_id: &AccountId) -> Result<(), MarketError> {
        if account_id != &self.owner_id {
            return Err(MarketError::Unauthorized);
        }
        Ok(())
    }

    pub(crate) fn check_not_paused(&self) -> Result<(), MarketError> {
        if self.paused {
            return Err(MarketError::Paused);
        }
        Ok(())
    }

    pub(crate) fn check_bidding_active(&self) -> Result<(), MarketError> {
        if !self.bidding_active {
            return Err(MarketError::BiddingInactive);
        }
        Ok(())
    }
}
