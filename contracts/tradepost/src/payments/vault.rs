//! Vault entry points: NEP-141 deposits, engine allowances, withdrawals.

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// NEP-141 receiver hook; the predecessor is the token contract.
    /// Deposits into unsupported tokens are refunded in full. A non-empty
    /// `msg` names an alternate beneficiary account.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let token = env::predecessor_account_id();
        if amount.0 == 0 || !self.payment_tokens.contains(&token) {
            return PromiseOrValue::Value(amount);
        }

        let beneficiary: AccountId = if msg.is_empty() {
            sender_id
        } else {
            match msg.parse() {
                Ok(account_id) => account_id,
                Err(_) => return PromiseOrValue::Value(amount),
            }
        };

        self.credit_funds(&token, &beneficiary, amount.0);
        MarketEvent::FundsDeposited {
            token,
            account_id: beneficiary,
            amount,
        }
        .emit();
        PromiseOrValue::Value(U128(0))
    }

    /// Sets (not adds to) the caller's engine allowance for `token`.
    /// Requires 1 yoctoNEAR attached; zero clears the allowance.
    #[payable]
    #[handle_result]
    pub fn approve_spending(&mut self, token: AccountId, amount: U128) -> Result<(), MarketError> {
        check_one_yocto()?;
        if !self.payment_tokens.contains(&token) {
            return Err(MarketError::UnsupportedToken);
        }

        let account_id = env::predecessor_account_id();
        let key = (token.clone(), account_id.clone());
        if amount.0 == 0 {
            self.vault_allowances.remove(&key);
        } else {
            self.vault_allowances.insert(key, amount.0);
        }

        MarketEvent::AllowanceUpdated {
            token,
            account_id,
            amount,
        }
        .emit();
        Ok(())
    }

    /// Debits the caller, then transfers out on the token contract. A failed
    /// transfer re-credits through the resolve callback. Requires
    /// 1 yoctoNEAR attached.
    #[payable]
    #[handle_result]
    pub fn withdraw_funds(&mut self, token: AccountId, amount: U128) -> Result<Promise, MarketError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();

        if amount.0 == 0 {
            return Err(MarketError::BadQuantity);
        }
        if amount.0 > self.vault_balance(&token, &account_id) {
            return Err(MarketError::InsufficientFunds);
        }

        self.debit_balance(&token, &account_id, amount.0);
        MarketEvent::FundsWithdrawn {
            token: token.clone(),
            account_id: account_id.clone(),
            amount,
        }
        .emit();

        Ok(ext_ft::ext(token.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER))
            .ft_transfer(account_id.clone(), amount, None)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_RESOLVE))
                    .on_funds_withdrawn(token, account_id, amount),
            ))
    }

    /// Resolve for `withdraw_funds`: re-credits the debited amount when the
    /// token transfer failed. Returns whether the withdrawal stuck.
    #[private]
    pub fn on_funds_withdrawn(&mut self, token: AccountId, account_id: AccountId, amount: U128) -> bool {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok() {
            return true;
        }

        self.credit_funds(&token, &account_id, amount.0);
        MarketEvent::WithdrawFailed {
            token,
            account_id,
            amount,
        }
        .emit();
        false
    }
}

impl Contract {
    pub(crate) fn vault_balance(&self, token: &AccountId, account_id: &AccountId) -> u128 {
        self.vault_balances
            .get(&(token.clone(), account_id.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn vault_allowance(&self, token: &AccountId, account_id: &AccountId) -> u128 {
        self.vault_allowances
            .get(&(token.clone(), account_id.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// What the engine may pull right now: the lesser of balance and
    /// allowance.
    pub(crate) fn spendable_funds(&self, token: &AccountId, account_id: &AccountId) -> u128 {
        self.vault_balance(token, account_id)
            .min(self.vault_allowance(token, account_id))
    }

    pub(crate) fn credit_funds(&mut self, token: &AccountId, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.vault_balance(token, account_id);
        self.vault_balances
            .insert((token.clone(), account_id.clone()), balance.saturating_add(amount));
    }

    fn debit_balance(&mut self, token: &AccountId, account_id: &AccountId, amount: u128) {
        let key = (token.clone(), account_id.clone());
        let remaining = self.vault_balance(token, account_id).saturating_sub(amount);
        if remaining == 0 {
            self.vault_balances.remove(&key);
        } else {
            self.vault_balances.insert(key, remaining);
        }
    }

    /// Engine settlement debit: consumes balance and allowance together.
    /// Callers validate spendable funds first.
    pub(crate) fn pull_funds(&mut self, token: &AccountId, account_id: &AccountId, amount: u128) {
        self.debit_balance(token, account_id, amount);

        let key = (token.clone(), account_id.clone());
        let allowance = self.vault_allowance(token, account_id).saturating_sub(amount);
        if allowance == 0 {
            self.vault_allowances.remove(&key);
        } else {
            self.vault_allowances.insert(key, allowance);
        }
    }
}
