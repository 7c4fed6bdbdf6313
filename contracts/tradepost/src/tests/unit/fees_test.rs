use crate::fees::routing::share_of;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn with_override(contract: &mut Contract, collection_bps: u16, protocol_with_owner_bps: u16) {
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_fee(500, protocol_with_owner_bps).unwrap();
    contract
        .set_collection_owner_fee(
            nft(),
            CollectionOwnerFee {
                recipient: creator(),
                fee_bps: collection_bps,
            },
        )
        .unwrap();
}

// --- share_of ---

#[test]
fn share_of_rounds_down() {
    assert_eq!(share_of(10_000, 500), 500);
    assert_eq!(share_of(999, 500), 49);
    assert_eq!(share_of(1, 9_999), 0);
    assert_eq!(share_of(0, 1_000), 0);
}

#[test]
fn share_of_survives_extreme_totals() {
    // quantity * MAX_PRICE worth of volume times the largest bps must not
    // overflow the widened math.
    let total = MAX_PRICE * 1_000;
    assert_eq!(share_of(total, BASIS_POINTS), total);
    assert_eq!(share_of(u128::MAX, 0), 0);
}

// --- Split without override ---

#[test]
fn split_without_override_pays_protocol_only() {
    let contract = new_contract();

    let split = contract.compute_fee_split(&nft(), 10_000);
    assert_eq!(split.protocol_amount, 500);
    assert_eq!(split.protocol_recipient, collector());
    assert_eq!(split.collection_amount, 0);
    assert!(split.collection_recipient.is_none());
    assert_eq!(split.seller_amount, 9_500);
}

#[test]
fn split_shares_always_sum_to_total() {
    let contract = new_contract();

    // Indivisible total: both floor divisions lose a fraction, the seller
    // takes it back.
    let total = 9_999;
    let split = contract.compute_fee_split(&nft(), total);
    assert_eq!(split.protocol_amount, 499);
    assert_eq!(split.protocol_amount + split.seller_amount, total);
}

// --- Split with override ---

#[test]
fn split_with_override_routes_three_ways() {
    let mut contract = new_contract();
    setup_unique_token(&mut contract, "t1", &seller());
    with_override(&mut contract, 1_000, 250);

    let split = contract.compute_fee_split(&nft(), 10_000);
    assert_eq!(split.protocol_amount, 250);
    assert_eq!(split.collection_amount, 1_000);
    assert_eq!(split.collection_recipient, Some(creator()));
    assert_eq!(split.seller_amount, 8_750);
}

#[test]
fn split_with_override_sums_on_indivisible_totals() {
    let mut contract = new_contract();
    setup_unique_token(&mut contract, "t1", &seller());
    with_override(&mut contract, 333, 77);

    let total = 12_345_677;
    let split = contract.compute_fee_split(&nft(), total);
    assert_eq!(
        split.protocol_amount + split.collection_amount + split.seller_amount,
        total
    );
}

#[test]
fn override_applies_per_collection() {
    let mut contract = new_contract();
    setup_unique_token(&mut contract, "t1", &seller());
    setup_multi_token(&mut contract, "gold", &seller(), 10);
    with_override(&mut contract, 1_000, 250);

    // editions() has no override, so the flat protocol fee applies there.
    let split = contract.compute_fee_split(&editions(), 10_000);
    assert_eq!(split.protocol_amount, 500);
    assert_eq!(split.collection_amount, 0);
    assert_eq!(split.seller_amount, 9_500);
}

#[test]
fn zero_fees_pay_seller_everything() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_fee(0, 0).unwrap();

    let split = contract.compute_fee_split(&nft(), 10_000);
    assert_eq!(split.protocol_amount, 0);
    assert_eq!(split.seller_amount, 10_000);
}
