//! Vault and payment-token view methods.

use crate::*;

#[near]
impl Contract {
    pub fn funds_of(&self, token: AccountId, account_id: AccountId) -> U128 {
        U128(self.vault_balance(&token, &account_id))
    }

    pub fn allowance_of(&self, token: AccountId, account_id: AccountId) -> U128 {
        U128(self.vault_allowance(&token, &account_id))
    }

    pub fn is_payment_token_supported(&self, token: AccountId) -> bool {
        self.payment_tokens.contains(&token)
    }

    pub fn get_supported_payment_tokens(&self) -> Vec<&AccountId> {
        self.payment_tokens.iter().collect()
    }
}
