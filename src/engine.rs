//! Single-entry order book facade.
//!
//! [`Engine`] owns the book and the order-id counter, validates input, and
//! exposes the two core operations: [`Engine::submit`] and
//! [`Engine::snapshot`]. Strictly single-threaded: callers needing
//! concurrency wrap the engine in a mutex or a dedicated task.

use crate::error::BookError;
use crate::execution::OrderResult;
use crate::matching::match_order;
use crate::order_book::OrderBook;
use crate::types::{Order, OrderId, RestingOrder, Side};
use log::info;
use rust_decimal::Decimal;

/// One price level in a snapshot: price and its orders in FIFO order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LevelSnapshot {
    pub price: Decimal,
    pub orders: Vec<RestingOrder>,
}

/// Read-only view of the whole book, best price first on each side.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<LevelSnapshot>,
    pub asks: Vec<LevelSnapshot>,
}

/// Single-instrument limit order book engine.
///
/// [`Engine::submit`] runs matching to completion and returns all trade
/// events of the call atomically; there is no partial-result visibility.
#[derive(Debug, Default)]
pub struct Engine {
    book: OrderBook,
    next_order_id: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
            next_order_id: 1,
        }
    }

    /// Submits a limit order: validates, matches against the opposite side
    /// under price-time priority, rests any remainder.
    ///
    /// Returns [`BookError::InvalidOrder`] for a zero quantity or a
    /// non-positive price; the book is left untouched in that case.
    pub fn submit(
        &mut self,
        side: Side,
        price: Decimal,
        quantity: u64,
    ) -> Result<OrderResult, BookError> {
        if quantity == 0 {
            return Err(BookError::InvalidOrder(
                "quantity must be positive".into(),
            ));
        }
        if price <= Decimal::ZERO {
            return Err(BookError::InvalidOrder(format!(
                "price {price} must be positive"
            )));
        }

        let sequence = self.next_order_id;
        self.next_order_id += 1;
        let order = Order {
            id: OrderId(sequence),
            side,
            price,
            remaining_quantity: quantity,
            sequence,
        };
        info!(
            "order submitted order_id={} side={:?} quantity={} price={}",
            order.id, side, quantity, price
        );

        let order_id = order.id;
        let (trades, resting_quantity) = match_order(&mut self.book, order);
        for trade in &trades {
            info!(
                "trade buy_order={} sell_order={} price={} quantity={}",
                trade.buy_order_id, trade.sell_order_id, trade.price, trade.quantity
            );
        }
        if resting_quantity > 0 {
            info!(
                "order resting order_id={} quantity={} price={}",
                order_id, resting_quantity, price
            );
        }

        Ok(OrderResult {
            order_id,
            trades,
            resting_quantity,
        })
    }

    /// Read-only snapshot of both sides, best price first, FIFO within each
    /// level. Calling it twice with no intervening submit yields identical
    /// results.
    pub fn snapshot(&self) -> BookSnapshot {
        let collect = |side: Side| -> Vec<LevelSnapshot> {
            self.book
                .iter_levels(side)
                .map(|(price, orders)| LevelSnapshot { price, orders })
                .collect()
        };
        BookSnapshot {
            bids: collect(Side::Buy),
            asks: collect(Side::Sell),
        }
    }

    /// Best bid price, if any.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.book.best_bid()
    }

    /// Best ask price, if any.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.book.best_ask()
    }

    /// Total remaining quantity resting on one side.
    pub fn resting_quantity(&self, side: Side) -> u64 {
        self.book.resting_quantity(side)
    }
}
