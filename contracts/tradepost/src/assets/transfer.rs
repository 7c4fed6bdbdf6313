//! Holding checks and unit moves shared by the engine and the direct
//! transfer surface.

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Direct holder-to-holder move outside the exchange. Requires
    /// 1 yoctoNEAR attached.
    #[payable]
    #[handle_result]
    pub fn transfer_asset(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        receiver_id: AccountId,
        quantity: u64,
    ) -> Result<(), MarketError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        if receiver_id == sender_id {
            return Err(MarketError::SelfTrade);
        }
        let kind = self.collection_kind(&collection_id)?;
        guards::check_token_id(&token_id)?;
        if quantity == 0 {
            return Err(MarketError::BadQuantity);
        }
        if !self.holds_quantity(kind, &collection_id, &token_id, &sender_id, quantity) {
            return Err(MarketError::NotOwner);
        }

        self.move_asset(kind, &collection_id, &token_id, &sender_id, &receiver_id, quantity);

        MarketEvent::AssetTransferred {
            collection_id,
            token_id,
            sender_id,
            receiver_id,
            quantity,
        }
        .emit();
        Ok(())
    }
}

impl Contract {
    /// Unit semantics for `collection_id`; every book surface resolves the
    /// kind through this before branching.
    pub(crate) fn collection_kind(&self, collection_id: &AccountId) -> Result<AssetKind, MarketError> {
        self.collections
            .get(collection_id)
            .map(|collection| collection.kind)
            .ok_or(MarketError::UnknownCollection)
    }

    /// Whether `holder` owns the token (unique) or holds at least
    /// `quantity` units (multi). Unique ownership ignores `quantity`.
    pub(crate) fn holds_quantity(
        &self,
        kind: AssetKind,
        collection_id: &AccountId,
        token_id: &str,
        holder: &AccountId,
        quantity: u64,
    ) -> bool {
        match kind {
            AssetKind::Unique => {
                self.unique_owners
                    .get(&(collection_id.clone(), token_id.to_string()))
                    == Some(holder)
            }
            AssetKind::Multi => {
                self.multi_balances
                    .get(&(collection_id.clone(), token_id.to_string(), holder.clone()))
                    .copied()
                    .unwrap_or(0)
                    >= quantity
            }
        }
    }

    pub(crate) fn is_engine_approved(&self, collection_id: &AccountId, holder: &AccountId) -> bool {
        self.operator_approvals
            .get(&(collection_id.clone(), holder.clone()))
            .copied()
            .unwrap_or(false)
    }

    /// Moves units between holders. Callers validate holdings first; a
    /// multi balance that empties is removed from storage.
    pub(crate) fn move_asset(
        &mut self,
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
                let from_key = (collection_id.clone(), token_id.to_string(), from.clone());
                let remaining = self
                    .multi_balances
                    .get(&from_key)
                    .copied()
                    .unwrap_or(0)
                    .saturating_sub(quantity);
                if remaining == 0 {
                    self.multi_balances.remove(&from_key);
                } else {
                    self.multi_balances.insert(from_key, remaining);
                }

                let to_key = (collection_id.clone(), token_id.to_string(), to.clone());
                let balance = self.multi_balances.get(&to_key).copied().unwrap_or(0);
                self.multi_balances.insert(to_key, balance.saturating_add(quantity));
            }
        }
    }
}
