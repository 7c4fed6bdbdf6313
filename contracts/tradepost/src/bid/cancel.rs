//! Bid cancellation, both kinds through one batch surface.

use crate::*;

use super::{collection_bid_key, token_bid_key};

#[near]
impl Contract {
    /// Removes the caller's bids. Absent entries are silent no-ops.
    #[handle_result]
    pub fn cancel_bids(&mut self, bids: Vec<BidKey>) -> Result<(), MarketError> {
        let bidder_id = env::predecessor_account_id();
        self.internal_cancel_bids(&bidder_id, bids)
    }
}

impl Contract {
    pub(crate) fn internal_cancel_bids(
        &mut self,
        bidder_id: &AccountId,
        entries: Vec<BidKey>,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;
        guards::check_batch_len(entries.len())?;

        // Malformed entries fail the batch before any removal.
        for entry in &entries {
            if entry.kind == BidKind::Token && entry.token_id.is_none() {
                return Err(MarketError::InvalidTokenId);
            }
        }

        for entry in entries {
            match entry.kind {
                BidKind::Token => {
                    let token_id = match entry.token_id {
                        Some(token_id) => token_id,
                        None => continue,
                    };
                    let key = token_bid_key(&entry.collection_id, &token_id, bidder_id);
                    if self.token_bids.remove(&key).is_some() {
                        MarketEvent::TokenBidCanceled {
                            bidder_id: bidder_id.clone(),
                            collection_id: entry.collection_id,
                            token_id,
                        }
                        .emit();
                    }
                }
                BidKind::Collection => {
                    let key = collection_bid_key(&entry.collection_id, bidder_id);
                    if self.collection_bids.remove(&key).is_some() {
                        MarketEvent::CollectionBidCanceled {
                            bidder_id: bidder_id.clone(),
                            collection_id: entry.collection_id,
                        }
                        .emit();
                    }
                }
            }
        }
        Ok(())
    }
}
