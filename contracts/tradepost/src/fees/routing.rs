//! Sale-total splitting across protocol, collection owner, and seller.

use primitive_types::U256;

use crate::*;

/// One sale's resolved split. Shares sum to the sale total exactly.
pub(crate) struct FeeSplit {
    pub protocol_amount: u128,
    pub protocol_recipient: AccountId,
    pub collection_amount: u128,
    pub collection_recipient: Option<AccountId>,
    pub seller_amount: u128,
}

impl Contract {
    /// Splits `total` for a sale in `collection_id`. With an override the
    /// collection owner takes their share and the protocol falls back to
    /// `fee_with_owner_bps`; otherwise the protocol takes `fee_bps` alone.
    /// Fee shares round down; the seller takes the exact remainder.
    pub(crate) fn compute_fee_split(&self, collection_id: &AccountId, total: u128) -> FeeSplit {
        let override_fee = self.collection_fees.get(collection_id).cloned();

        let protocol_bps = if override_fee.is_some() {
            self.fee_config.fee_with_owner_bps
        } else {
            self.fee_config.fee_bps
        };
        let protocol_amount = share_of(total, protocol_bps);

        let (collection_amount, collection_recipient) = match override_fee {
            Some(fee) => (share_of(total, fee.fee_bps), Some(fee.recipient)),
            None => (0, None),
        };

        // Both bps caps stay under BASIS_POINTS combined, so the skim never
        // exceeds the total.
        let seller_amount = total - protocol_amount - collection_amount;

        FeeSplit {
            protocol_amount,
            protocol_recipient: self.fee_config.fee_recipient.clone(),
            collection_amount,
            collection_recipient,
            seller_amount,
        }
    }
}

/// `amount * bps / BASIS_POINTS`, widened through U256, rounded down.
pub(crate) fn share_of(amount: u128, bps: u16) -> u128 {
    let scaled = U256::from(amount) * U256::from(bps) / U256::from(BASIS_POINTS);
    scaled.as_u128()
}
