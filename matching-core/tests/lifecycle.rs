mod common;

use common::{context, engine, SYMBOL};
use matching_core::prelude::*;

#[test]
fn resting_order_is_open_until_filled() {
    let mut engine = engine();
    let mut context = context(&["alice", "bob"]);

    let id = engine
        .submit_limit(&mut context, Side::Buy, "alice", SYMBOL, 100, 10)
        .unwrap();
    assert!(context.trader("alice").unwrap().open_orders(Side::Buy).contains(&id));

    engine
        .submit_limit(&mut context, Side::Sell, "bob", SYMBOL, 100, 10)
        .unwrap();
    assert!(!context.trader("alice").unwrap().open_orders(Side::Buy).contains(&id));
}

#[test]
fn cancel_request_removes_a_resting_order() {
    let mut engine = engine();
    let mut context = context(&["alice"]);

    let id = engine
        .submit_limit(&mut context, Side::Buy, "alice", SYMBOL, 100, 10)
        .unwrap();

    engine
        .cancel(
            &mut context,
            CancelRequest {
                order_id: id,
                symbol: SYMBOL.to_string(),
                trader_id: "alice".to_string(),
            },
        )
        .unwrap();

    assert!(engine.order_book(SYMBOL).unwrap().is_empty(Side::Buy));
    assert!(!context.trader("alice").unwrap().open_orders(Side::Buy).contains(&id));
}

#[test]
fn cancel_of_unknown_order_is_rejected_not_errored() {
    let mut engine = engine();
    let mut context = context(&["alice"]);

    let result = engine.cancel(
        &mut context,
        CancelRequest {
            order_id: 999,
            symbol: SYMBOL.to_string(),
            trader_id: "alice".to_string(),
        },
    );
    assert!(result.is_ok());
}

#[test]
fn cancel_after_full_fill_is_a_reject_not_a_panic() {
    let mut engine = engine();
    let mut context = context(&["alice", "bob"]);

    let id = engine
        .submit_limit(&mut context, Side::Sell, "alice", SYMBOL, 100, 10)
        .unwrap();
    engine
        .submit_limit(&mut context, Side::Buy, "bob", SYMBOL, 100, 10)
        .unwrap();

    let result = engine.cancel(
        &mut context,
        CancelRequest {
            order_id: id,
            symbol: SYMBOL.to_string(),
            trader_id: "alice".to_string(),
        },
    );
    assert!(result.is_ok());
}

#[test]
fn cancel_on_unregistered_symbol_is_an_engine_error() {
    let mut engine = engine();
    let mut context = context(&["alice"]);

    let result = engine.cancel(
        &mut context,
        CancelRequest {
            order_id: 1,
            symbol: "ETH-USD".to_string(),
            trader_id: "alice".to_string(),
        },
    );
    assert_eq!(result, Err(EngineError::UnknownSymbol("ETH-USD".to_string())));
}

#[test]
fn partially_filled_order_stays_open_until_fully_consumed() {
    let mut engine = engine();
    let mut context = context(&["alice", "bob"]);

    let id = engine
        .submit_limit(&mut context, Side::Sell, "alice", SYMBOL, 100, 10)
        .unwrap();
    engine
        .submit_limit(&mut context, Side::Buy, "bob", SYMBOL, 100, 4)
        .unwrap();
    assert!(context.trader("alice").unwrap().open_orders(Side::Sell).contains(&id));

    engine
        .submit_limit(&mut context, Side::Buy, "bob", SYMBOL, 100, 6)
        .unwrap();
    assert!(!context.trader("alice").unwrap().open_orders(Side::Sell).contains(&id));
}
