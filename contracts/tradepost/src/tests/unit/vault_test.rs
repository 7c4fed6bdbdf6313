use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn unconsumed(result: PromiseOrValue<U128>) -> u128 {
    match result {
        PromiseOrValue::Value(amount) => amount.0,
        PromiseOrValue::Promise(_) => panic!("expected a value"),
    }
}

// --- Deposits ---

#[test]
fn deposit_credits_supported_token() {
    let mut contract = new_market();

    testing_env!(context(wnear()).build());
    let leftover = unconsumed(contract.ft_on_transfer(buyer(), U128(1_000), String::new()));

    assert_eq!(leftover, 0);
    assert_eq!(contract.funds_of(wnear(), buyer()).0, 1_000);
}

#[test]
fn deposit_refunds_unsupported_token() {
    let mut contract = new_market();

    testing_env!(context("othertoken.near".parse().unwrap()).build());
    let leftover = unconsumed(contract.ft_on_transfer(buyer(), U128(1_000), String::new()));

    assert_eq!(leftover, 1_000);
    assert_eq!(contract.funds_of("othertoken.near".parse().unwrap(), buyer()).0, 0);
}

#[test]
fn deposit_msg_routes_to_beneficiary() {
    let mut contract = new_market();

    testing_env!(context(wnear()).build());
    let leftover = unconsumed(contract.ft_on_transfer(buyer(), U128(500), seller().to_string()));

    assert_eq!(leftover, 0);
    assert_eq!(contract.funds_of(wnear(), seller()).0, 500);
    assert_eq!(contract.funds_of(wnear(), buyer()).0, 0);
}

#[test]
fn deposit_with_malformed_msg_refunds() {
    let mut contract = new_market();

    testing_env!(context(wnear()).build());
    let leftover = unconsumed(contract.ft_on_transfer(buyer(), U128(500), "not a!!account".to_string()));

    assert_eq!(leftover, 500);
    assert_eq!(contract.funds_of(wnear(), buyer()).0, 0);
}

#[test]
fn deposits_accumulate() {
    let mut contract = new_market();

    testing_env!(context(wnear()).build());
    let _ = contract.ft_on_transfer(buyer(), U128(300), String::new());
    let _ = contract.ft_on_transfer(buyer(), U128(200), String::new());

    assert_eq!(contract.funds_of(wnear(), buyer()).0, 500);
}

// --- Allowances ---

#[test]
fn approve_spending_sets_and_clears() {
    let mut contract = new_market();

    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.approve_spending(wnear(), U128(750)).unwrap();
    assert_eq!(contract.allowance_of(wnear(), buyer()).0, 750);

    contract.approve_spending(wnear(), U128(0)).unwrap();
    assert_eq!(contract.allowance_of(wnear(), buyer()).0, 0);
}

#[test]
fn approve_spending_rejects_unsupported_token() {
    let mut contract = new_market();

    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract
        .approve_spending("othertoken.near".parse().unwrap(), U128(100))
        .unwrap_err();
    assert_eq!(err, MarketError::UnsupportedToken);
}

#[test]
fn spendable_is_min_of_balance_and_allowance() {
    let mut contract = new_market();

    testing_env!(context(wnear()).build());
    let _ = contract.ft_on_transfer(buyer(), U128(1_000), String::new());
    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.approve_spending(wnear(), U128(400)).unwrap();

    assert_eq!(contract.spendable_funds(&wnear(), &buyer()), 400);

    contract.approve_spending(wnear(), U128(5_000)).unwrap();
    assert_eq!(contract.spendable_funds(&wnear(), &buyer()), 1_000);
}

// --- Withdrawals ---

#[test]
fn withdraw_debits_before_transfer() {
    let mut contract = new_market();
    fund_vault(&mut contract, &buyer(), 1_000);

    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.withdraw_funds(wnear(), U128(600)).unwrap();

    assert_eq!(contract.funds_of(wnear(), buyer()).0, 400);
}

#[test]
fn withdraw_rejects_zero_and_overdraft() {
    let mut contract = new_market();
    fund_vault(&mut contract, &buyer(), 1_000);

    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract.withdraw_funds(wnear(), U128(0)).err().unwrap();
    assert_eq!(err, MarketError::BadQuantity);

    let err = contract.withdraw_funds(wnear(), U128(1_001)).err().unwrap();
    assert_eq!(err, MarketError::InsufficientFunds);
}

#[test]
fn failed_withdraw_restores_balance() {
    let mut contract = new_market();
    fund_vault(&mut contract, &buyer(), 1_000);

    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.withdraw_funds(wnear(), U128(600)).unwrap();
    assert_eq!(contract.funds_of(wnear(), buyer()).0, 400);

    // In unit tests promise_results_count() == 0, so the callback takes the
    // failure path and re-credits.
    testing_env!(context("tradepost.near".parse().unwrap()).build());
    let stuck = contract.on_funds_withdrawn(wnear(), buyer(), U128(600));
    assert!(!stuck);
    assert_eq!(contract.funds_of(wnear(), buyer()).0, 1_000);
}
