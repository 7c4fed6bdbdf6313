//! Registry view methods.

use crate::*;

#[near]
impl Contract {
    pub fn get_collection(&self, collection_id: AccountId) -> Option<Collection> {
        self.collections.get(&collection_id).cloned()
    }

    /// Unique collections only; `None` for unminted ids.
    pub fn owner_of(&self, collection_id: AccountId, token_id: String) -> Option<AccountId> {
        self.unique_owners.get(&(collection_id, token_id)).cloned()
    }

    /// Multi collections only; zero for absent positions.
    pub fn balance_of(&self, collection_id: AccountId, token_id: String, account_id: AccountId) -> u64 {
        self.multi_balances
            .get(&(collection_id, token_id, account_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_approved_for_all(&self, collection_id: AccountId, owner_id: AccountId) -> bool {
        self.operator_approvals
            .get(&(collection_id, owner_id))
            .copied()
            .unwrap_or(false)
    }
}
