//! Initialization, venue configuration, and admin views.

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Deploys the venue: bidding starts inactive, nothing is paused, no
    /// payment tokens are supported yet.
    #[init]
    pub fn new(owner_id: AccountId, fee_bps: u16, fee_recipient: AccountId) -> Self {
        near_sdk::require!(fee_bps <= MAX_FEE_BPS, "Max fee");
        Self {
            owner_id,
            paused: false,
            bidding_active: false,
            fee_config: FeeConfig {
                fee_bps,
                fee_with_owner_bps: 0,
                fee_recipient,
            },
            collection_fees: IterableMap::new(StorageKey::CollectionFees),
            payment_tokens: IterableSet::new(StorageKey::PaymentTokens),
            listings: IterableMap::new(StorageKey::Listings),
            token_bids: IterableMap::new(StorageKey::TokenBids),
            collection_bids: IterableMap::new(StorageKey::CollectionBids),
            collections: IterableMap::new(StorageKey::Collections),
            unique_owners: LookupMap::new(StorageKey::UniqueOwners),
            multi_balances: LookupMap::new(StorageKey::MultiBalances),
            operator_approvals: LookupMap::new(StorageKey::OperatorApprovals),
            vault_balances: LookupMap::new(StorageKey::VaultBalances),
            vault_allowances: LookupMap::new(StorageKey::VaultAllowances),
        }
    }

    /// Sets both protocol fee knobs at once. Owner only.
    #[payable]
    #[handle_result]
    pub fn set_fee(&mut self, fee_bps: u16, fee_with_owner_bps: u16) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if fee_bps > MAX_FEE_BPS || fee_with_owner_bps > MAX_FEE_BPS {
            return Err(MarketError::FeeTooHigh);
        }

        self.fee_config.fee_bps = fee_bps;
        self.fee_config.fee_with_owner_bps = fee_with_owner_bps;
        MarketEvent::FeeUpdated {
            fee_bps,
            fee_with_owner_bps,
        }
        .emit();
        Ok(())
    }

    /// Owner only. The venue account itself cannot collect fees.
    #[payable]
    #[handle_result]
    pub fn set_fee_recipient(&mut self, fee_recipient: AccountId) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if fee_recipient == env::current_account_id() {
            return Err(MarketError::InvalidRecipient);
        }

        self.fee_config.fee_recipient = fee_recipient.clone();
        MarketEvent::FeeRecipientUpdated {
            recipient: fee_recipient,
        }
        .emit();
        Ok(())
    }

    /// Adds or removes a NEP-141 token from the supported set. Owner only.
    /// Existing offers in a removed token stay stored but stop trading.
    #[payable]
    #[handle_result]
    pub fn set_support_payment_token(
        &mut self,
        token: AccountId,
        supported: bool,
    ) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if token == env::current_account_id() {
            return Err(MarketError::InvalidRecipient);
        }

        if supported {
            self.payment_tokens.insert(token.clone());
        } else {
            self.payment_tokens.remove(&token);
        }
        MarketEvent::PaymentTokenUpdated { token, supported }.emit();
        Ok(())
    }

    /// Upserts a collection's fee override. Contract owner or the
    /// collection's registered owner.
    #[payable]
    #[handle_result]
    pub fn set_collection_owner_fee(
        &mut self,
        collection_id: AccountId,
        fee: CollectionOwnerFee,
    ) -> Result<(), MarketError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        let collection = self
            .collections
            .get(&collection_id)
            .ok_or(MarketError::UnknownCollection)?;
        if caller != self.owner_id && caller != collection.owner_id {
            return Err(MarketError::Unauthorized);
        }
        if fee.fee_bps > MAX_COLLECTION_FEE_BPS {
            return Err(MarketError::FeeTooHigh);
        }
        if fee.recipient == env::current_account_id() {
            return Err(MarketError::InvalidRecipient);
        }

        self.collection_fees.insert(collection_id.clone(), fee.clone());
        MarketEvent::CollectionFeeUpdated {
            collection_id,
            recipient: fee.recipient,
            fee_bps: fee.fee_bps,
        }
        .emit();
        Ok(())
    }

    /// Flips the bid surfaces on or off. Owner only.
    #[payable]
    #[handle_result]
    pub fn toggle_bidding_active(&mut self) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;

        self.bidding_active = !self.bidding_active;
        MarketEvent::BiddingToggled {
            active: self.bidding_active,
        }
        .emit();
        Ok(())
    }

    /// Halts books and engine; registry and vault stay live. Owner only,
    /// idempotent.
    #[payable]
    #[handle_result]
    pub fn pause(&mut self) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;

        if !self.paused {
            self.paused = true;
            MarketEvent::VenuePaused {
                admin_id: self.owner_id.clone(),
            }
            .emit();
        }
        Ok(())
    }

    /// Owner only, idempotent.
    #[payable]
    #[handle_result]
    pub fn unpause(&mut self) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;

        if self.paused {
            self.paused = false;
            MarketEvent::VenueUnpaused {
                admin_id: self.owner_id.clone(),
            }
            .emit();
        }
        Ok(())
    }

    // --- Views ---

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_fee_config(&self) -> &FeeConfig {
        &self.fee_config
    }

    pub fn get_collection_owner_fee(&self, collection_id: AccountId) -> Option<CollectionOwnerFee> {
        self.collection_fees.get(&collection_id).cloned()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_bidding_active(&self) -> bool {
        self.bidding_active
    }
}
