//! Property-based and deterministic invariant tests.
//!
//! Replays seeded synthetic order streams into the engine and asserts after
//! every submit: no crossed book, snapshot price ordering and FIFO within
//! levels, maker-price trades, and global quantity conservation.

use limit_order_book::{
    BookSnapshot, Engine, Generator, GeneratorConfig, OrderId, OrderResult, Side,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Invariant: best bid strictly below best ask when both sides exist.
fn assert_no_crossed_book(engine: &Engine) {
    if let (Some(bid), Some(ask)) = (engine.best_bid(), engine.best_ask()) {
        assert!(bid < ask, "crossed book: best_bid {bid} >= best_ask {ask}");
    }
}

/// Invariant: bids descending, asks ascending, and every level queue ordered
/// by arrival (ascending order id, since ids are assigned in arrival order).
fn assert_snapshot_ordering(snapshot: &BookSnapshot) {
    let bid_prices: Vec<Decimal> = snapshot.bids.iter().map(|l| l.price).collect();
    let mut sorted = bid_prices.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(bid_prices, sorted, "bid levels not in descending order");

    let ask_prices: Vec<Decimal> = snapshot.asks.iter().map(|l| l.price).collect();
    let mut sorted = ask_prices.clone();
    sorted.sort();
    assert_eq!(ask_prices, sorted, "ask levels not in ascending order");

    for level in snapshot.bids.iter().chain(snapshot.asks.iter()) {
        let ids: Vec<OrderId> = level.orders.iter().map(|o| o.order_id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "level at {} not FIFO by arrival", level.price);
        for order in &level.orders {
            assert!(order.quantity > 0, "zero-quantity order left in book");
        }
    }
}

/// Invariant: each trade's price is the maker's submitted price, and the
/// maker was matched within the taker's limit.
fn assert_maker_price(
    result: &OrderResult,
    taker_side: Side,
    taker_price: Decimal,
    submitted_prices: &HashMap<OrderId, Decimal>,
) {
    for trade in &result.trades {
        assert!(trade.quantity > 0, "zero-quantity trade");
        let maker_id = match taker_side {
            Side::Buy => trade.sell_order_id,
            Side::Sell => trade.buy_order_id,
        };
        assert_ne!(maker_id, result.order_id, "order traded with itself");
        let maker_price = submitted_prices[&maker_id];
        assert_eq!(trade.price, maker_price, "trade not at maker price");
        match taker_side {
            Side::Buy => assert!(trade.price <= taker_price, "buy filled above its limit"),
            Side::Sell => assert!(trade.price >= taker_price, "sell filled below its limit"),
        }
    }
}

fn total_resting(snapshot: &BookSnapshot) -> u64 {
    snapshot
        .bids
        .iter()
        .chain(snapshot.asks.iter())
        .flat_map(|l| l.orders.iter())
        .map(|o| o.quantity)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// For any (seed, num_orders): after every submit of the generated
    /// stream, the book is uncrossed and ordered, trades are at maker
    /// prices, and quantity is conserved.
    #[test]
    fn prop_invariants_hold_after_replay(seed in 0u64..100_000u64, num_orders in 10usize..150usize) {
        let orders = Generator::new(GeneratorConfig {
            seed,
            num_orders,
            ..Default::default()
        })
        .all_orders();

        let mut engine = Engine::new();
        let mut submitted_prices: HashMap<OrderId, Decimal> = HashMap::new();
        let mut total_submitted: u64 = 0;
        let mut total_traded: u64 = 0;

        for (side, price, quantity) in orders {
            let result = engine.submit(side, price, quantity).unwrap();
            submitted_prices.insert(result.order_id, price);
            total_submitted += quantity;
            total_traded += result.filled_quantity();

            assert_no_crossed_book(&engine);
            let snapshot = engine.snapshot();
            assert_snapshot_ordering(&snapshot);
            assert_maker_price(&result, side, price, &submitted_prices);

            // Every submitted unit is either still resting or was matched
            // once on each side of a trade.
            assert_eq!(
                total_submitted,
                2 * total_traded + total_resting(&snapshot),
                "quantity not conserved"
            );
        }

        // Snapshot is read-only and repeatable.
        assert_eq!(engine.snapshot(), engine.snapshot());
    }
}

/// Deterministic replay: same config, same trades, same final book.
#[test]
fn deterministic_replay_same_seed_same_outcome() {
    let config = GeneratorConfig {
        seed: 999,
        num_orders: 80,
        ..Default::default()
    };

    let mut engine1 = Engine::new();
    let results1 =
        limit_order_book::replay(&mut engine1, Generator::new(config.clone()).all_orders())
            .unwrap();
    let mut engine2 = Engine::new();
    let results2 =
        limit_order_book::replay(&mut engine2, Generator::new(config).all_orders()).unwrap();

    assert_eq!(results1, results2, "same stream must produce same results");
    assert_eq!(engine1.snapshot(), engine2.snapshot());
}

/// Rejected orders leave no trace: state and id allocation are untouched.
#[test]
fn rejected_orders_do_not_change_state() {
    let mut engine = Engine::new();
    engine.submit(Side::Sell, Decimal::from(10), 100).unwrap();
    let before = engine.snapshot();

    assert!(engine.submit(Side::Buy, Decimal::from(10), 0).is_err());
    assert!(engine.submit(Side::Buy, Decimal::from(-3), 5).is_err());
    assert_eq!(engine.snapshot(), before);

    let next = engine.submit(Side::Buy, Decimal::from(1), 1).unwrap();
    assert_eq!(next.order_id, OrderId(2));
}
