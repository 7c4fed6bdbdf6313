//! Collection registration, minting, and operator approval.
//!
//! These surfaces stay live while the venue is paused so holders can
//! always manage approvals and withdraw-side state.

use crate::*;

#[near]
impl Contract {
    /// Registers `collection_id` with fixed unit semantics. The caller
    /// becomes the collection owner.
    #[handle_result]
    pub fn register_collection(
        &mut self,
        collection_id: AccountId,
        kind: AssetKind,
    ) -> Result<(), MarketError> {
        let owner_id = env::predecessor_account_id();
        self.internal_register_collection(&owner_id, collection_id, kind)
    }

    /// Mints into a registered collection. Collection owner only.
    #[handle_result]
    pub fn mint_asset(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        owner_id: AccountId,
        quantity: u64,
    ) -> Result<(), MarketError> {
        let minter_id = env::predecessor_account_id();
        self.internal_mint_asset(&minter_id, &collection_id, &token_id, &owner_id, quantity)
    }

    /// Grants or revokes the exchange engine's authority over every holding
    /// the caller has in `collection_id`.
    #[handle_result]
    pub fn set_approval_for_all(
        &mut self,
        collection_id: AccountId,
        approved: bool,
    ) -> Result<(), MarketError> {
        let owner_id = env::predecessor_account_id();
        self.internal_set_approval(&owner_id, &collection_id, approved)
    }
}

impl Contract {
    pub(crate) fn internal_register_collection(
        &mut self,
        owner_id: &AccountId,
        collection_id: AccountId,
        kind: AssetKind,
    ) -> Result<(), MarketError> {
        if self.collections.contains_key(&collection_id) {
            return Err(MarketError::CollectionExists);
        }

        let collection = Collection {
            kind,
            owner_id: owner_id.clone(),
            registered_at: env::block_timestamp(),
        };
        self.collections.insert(collection_id.clone(), collection);

        MarketEvent::CollectionRegistered {
            collection_id,
            owner_id: owner_id.clone(),
            kind,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn internal_mint_asset(
        &mut self,
        minter_id: &AccountId,
        collection_id: &AccountId,
        token_id: &str,
        owner_id: &AccountId,
        quantity: u64,
    ) -> Result<(), MarketError> {
        let collection = self
            .collections
            .get(collection_id)
            .ok_or(MarketError::UnknownCollection)?;
        if &collection.owner_id != minter_id {
            return Err(MarketError::Unauthorized);
        }
        guards::check_token_id(token_id)?;

        match collection.kind {
            AssetKind::Unique => {
                if quantity != 1 {
                    return Err(MarketError::BadQuantity);
                }
                let key = (collection_id.clone(), token_id.to_string());
                if self.unique_owners.contains_key(&key) {
                    return Err(MarketError::TokenExists);
                }
                self.unique_owners.insert(key, owner_id.clone());
            }
            AssetKind::Multi => {
                if quantity == 0 {
                    return Err(MarketError::BadQuantity);
                }
                let key = (collection_id.clone(), token_id.to_string(), owner_id.clone());
                let balance = self.multi_balances.get(&key).copied().unwrap_or(0);
                self.multi_balances.insert(key, balance.saturating_add(quantity));
            }
        }

        MarketEvent::AssetMinted {
            collection_id: collection_id.clone(),
            token_id: token_id.to_string(),
            owner_id: owner_id.clone(),
            quantity,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn internal_set_approval(
        &mut self,
        owner_id: &AccountId,
        collection_id: &AccountId,
        approved: bool,
    ) -> Result<(), MarketError> {
        if !self.collections.contains_key(collection_id) {
            return Err(MarketError::UnknownCollection);
        }

        let key = (collection_id.clone(), owner_id.clone());
        if approved {
            self.operator_approvals.insert(key, true);
        } else {
            self.operator_approvals.remove(&key);
        }

        MarketEvent::ApprovalUpdated {
            collection_id: collection_id.clone(),
            owner_id: owner_id.clone(),
            approved,
        }
        .emit();
        Ok(())
    }
}
