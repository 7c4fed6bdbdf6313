use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Create ---

#[test]
fn create_listing_stores_all_fields() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    testing_env!(context(seller()).build());
    contract
        .create_or_update_listings(vec![ListingParams {
            collection_id: nft(),
            token_id: "t1".to_string(),
            quantity: 1,
            price_per_unit: U128(PRICE),
            expires_at: Some(NOW_NS + DAY_NS),
            payment_token: Some(wnear()),
        }])
        .unwrap();

    let listing = contract
        .get_listing(nft(), "t1".to_string(), seller())
        .expect("listing should exist");
    assert_eq!(listing.quantity, 1);
    assert_eq!(listing.price_per_unit.0, PRICE);
    assert_eq!(listing.expires_at, Some(NOW_NS + DAY_NS));
    assert_eq!(listing.payment_token, Some(wnear()));
    assert_eq!(listing.created_at, NOW_NS);
}

#[test]
fn update_replaces_listing_wholesale() {
    let mut contract = new_market();
    setup_multi_token(&mut contract, "gold", &seller(), 10);

    testing_env!(context(seller()).build());
    contract
        .create_or_update_listings(vec![ft_listing(editions(), "gold", 10, PRICE)])
        .unwrap();
    contract
        .create_or_update_listings(vec![ListingParams {
            collection_id: editions(),
            token_id: "gold".to_string(),
            quantity: 4,
            price_per_unit: U128(PRICE * 2),
            expires_at: Some(NOW_NS + DAY_NS),
            payment_token: None,
        }])
        .unwrap();

    let listing = contract
        .get_listing(editions(), "gold".to_string(), seller())
        .unwrap();
    assert_eq!(listing.quantity, 4);
    assert_eq!(listing.price_per_unit.0, PRICE * 2);
    assert_eq!(listing.payment_token, None);
}

// --- Validation ---

#[test]
fn listing_requires_registered_collection() {
    let mut contract = new_market();

    let err = contract
        .internal_create_or_update_listings(&seller(), vec![native_listing("t1", 1, PRICE)])
        .unwrap_err();
    assert_eq!(err, MarketError::UnknownCollection);
}

#[test]
fn holding_is_checked_before_approval() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    // buyer() neither holds t1 nor approved the engine.
    let err = contract
        .internal_create_or_update_listings(&buyer(), vec![native_listing("t1", 1, PRICE)])
        .unwrap_err();
    assert_eq!(err, MarketError::NotOwner);

    // Revoking approval while still holding flips the error.
    testing_env!(context(seller()).build());
    contract.set_approval_for_all(nft(), false).unwrap();
    let err = contract
        .internal_create_or_update_listings(&seller(), vec![native_listing("t1", 1, PRICE)])
        .unwrap_err();
    assert_eq!(err, MarketError::NotApproved);
}

#[test]
fn listing_rejects_unsupported_payment_token() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    let mut entry = native_listing("t1", 1, PRICE);
    entry.payment_token = Some("othertoken.near".parse().unwrap());
    let err = contract
        .internal_create_or_update_listings(&seller(), vec![entry])
        .unwrap_err();
    assert_eq!(err, MarketError::UnsupportedToken);
}

#[test]
fn price_bounds_are_checked_before_quantity() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    // Both price and quantity invalid: price wins.
    let err = contract
        .internal_create_or_update_listings(&seller(), vec![native_listing("t1", 0, MIN_PRICE - 1)])
        .unwrap_err();
    assert_eq!(err, MarketError::BelowMinPrice);

    let err = contract
        .internal_create_or_update_listings(&seller(), vec![native_listing("t1", 1, MAX_PRICE + 1)])
        .unwrap_err();
    assert_eq!(err, MarketError::BelowMinPrice);
}

#[test]
fn unique_listing_quantity_must_be_one() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    // holds_quantity ignores quantity for unique tokens, so an oversized
    // ask reaches the quantity rule.
    let err = contract
        .internal_create_or_update_listings(&seller(), vec![native_listing("t1", 2, PRICE)])
        .unwrap_err();
    assert_eq!(err, MarketError::BadQuantity);
}

#[test]
fn multi_listing_cannot_exceed_holdings() {
    let mut contract = new_market();
    setup_multi_token(&mut contract, "gold", &seller(), 10);

    let err = contract
        .internal_create_or_update_listings(&seller(), vec![ft_listing(editions(), "gold", 11, PRICE)])
        .unwrap_err();
    assert_eq!(err, MarketError::NotOwner);

    contract
        .internal_create_or_update_listings(&seller(), vec![ft_listing(editions(), "gold", 10, PRICE)])
        .unwrap();
}

#[test]
fn listing_expiry_must_be_future_when_set() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    let mut entry = native_listing("t1", 1, PRICE);
    entry.expires_at = Some(NOW_NS);
    let err = contract
        .internal_create_or_update_listings(&seller(), vec![entry])
        .unwrap_err();
    assert_eq!(err, MarketError::InvalidExpiration);
}

#[test]
fn listing_rejects_invalid_token_id() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    let err = contract
        .internal_create_or_update_listings(&seller(), vec![native_listing("bad\0id", 1, PRICE)])
        .unwrap_err();
    assert_eq!(err, MarketError::InvalidTokenId);
}

// --- Batch semantics ---

#[test]
fn batch_with_one_bad_entry_stores_nothing() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());
    setup_unique_token(&mut contract, "t2", &seller());

    let err = contract
        .internal_create_or_update_listings(
            &seller(),
            vec![
                native_listing("t1", 1, PRICE),
                native_listing("t2", 1, MIN_PRICE - 1),
            ],
        )
        .unwrap_err();
    assert_eq!(err, MarketError::BelowMinPrice);

    assert!(contract.get_listing(nft(), "t1".to_string(), seller()).is_none());
    assert!(contract.get_listing(nft(), "t2".to_string(), seller()).is_none());
}

#[test]
fn batch_respects_entry_cap() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    let entries: Vec<_> = (0..=MAX_BATCH_ENTRIES)
        .map(|_| native_listing("t1", 1, PRICE))
        .collect();
    let err = contract
        .internal_create_or_update_listings(&seller(), entries)
        .unwrap_err();
    assert_eq!(err, MarketError::BatchTooLarge);
}

#[test]
fn empty_batch_is_a_no_op() {
    let mut contract = new_market();
    contract
        .internal_create_or_update_listings(&seller(), vec![])
        .unwrap();
    contract.internal_cancel_listings(&seller(), vec![]).unwrap();
}

// --- Cancel ---

#[test]
fn cancel_removes_only_callers_listing() {
    let mut contract = new_market();
    setup_multi_token(&mut contract, "gold", &seller(), 10);
    setup_multi_token(&mut contract, "gold", &buyer(), 5);

    contract
        .internal_create_or_update_listings(&seller(), vec![ft_listing(editions(), "gold", 10, PRICE)])
        .unwrap();
    contract
        .internal_create_or_update_listings(&buyer(), vec![ft_listing(editions(), "gold", 5, PRICE)])
        .unwrap();

    contract
        .internal_cancel_listings(
            &seller(),
            vec![ListingKey {
                collection_id: editions(),
                token_id: "gold".to_string(),
            }],
        )
        .unwrap();

    assert!(contract.get_listing(editions(), "gold".to_string(), seller()).is_none());
    assert!(contract.get_listing(editions(), "gold".to_string(), buyer()).is_some());
}

#[test]
fn cancel_absent_listing_is_silent() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    contract
        .internal_cancel_listings(
            &seller(),
            vec![ListingKey {
                collection_id: nft(),
                token_id: "t1".to_string(),
            }],
        )
        .unwrap();
}

#[test]
fn paused_blocks_cancel_too() {
    let mut contract = new_market();
    setup_unique_token(&mut contract, "t1", &seller());

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.pause().unwrap();

    let err = contract
        .internal_cancel_listings(
            &seller(),
            vec![ListingKey {
                collection_id: nft(),
                token_id: "t1".to_string(),
            }],
        )
        .unwrap_err();
    assert_eq!(err, MarketError::Paused);
}

// --- Views ---

#[test]
fn listings_for_token_spans_sellers() {
    let mut contract = new_market();
    setup_multi_token(&mut contract, "gold", &seller(), 10);
    setup_multi_token(&mut contract, "gold", &buyer(), 5);

    contract
        .internal_create_or_update_listings(&seller(), vec![ft_listing(editions(), "gold", 10, PRICE)])
        .unwrap();
    contract
        .internal_create_or_update_listings(&buyer(), vec![ft_listing(editions(), "gold", 5, PRICE)])
        .unwrap();

    let listings = contract.get_listings_for_token(editions(), "gold".to_string(), None, None);
    assert_eq!(listings.len(), 2);
    let sellers: Vec<_> = listings.iter().map(|(account, _)| account.clone()).collect();
    assert!(sellers.contains(&seller()));
    assert!(sellers.contains(&buyer()));
}
