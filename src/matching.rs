//! Price-time priority matching.
//!
//! [`match_order`] runs one incoming order against the book: takes liquidity
//! from the opposite side while the order crosses, emits one [`TradeEvent`]
//! per resting order touched, and rests any remainder on the order's own
//! side.

use crate::execution::TradeEvent;
use crate::order_book::OrderBook;
use crate::types::{Order, Side};

/// Runs matching for one order. Returns the trade events and the quantity
/// left resting on the book (zero if fully filled; the order is then never
/// inserted on its own side).
///
/// A buy crosses while `incoming.price >= best_ask`; a sell while
/// `incoming.price <= best_bid`. Trade price is always the resting order's
/// price. Quantity is conserved: the incoming quantity splits exactly into
/// the fill quantities plus the resting remainder.
pub fn match_order(book: &mut OrderBook, mut incoming: Order) -> (Vec<TradeEvent>, u64) {
    let fills = match incoming.side {
        Side::Buy => book.take_from_asks(incoming.price, incoming.remaining_quantity),
        Side::Sell => book.take_from_bids(incoming.price, incoming.remaining_quantity),
    };

    let mut trades = Vec::with_capacity(fills.len());
    for fill in &fills {
        incoming.remaining_quantity -= fill.quantity;
        let (buy_order_id, sell_order_id) = match incoming.side {
            Side::Buy => (incoming.id, fill.resting_order_id),
            Side::Sell => (fill.resting_order_id, incoming.id),
        };
        trades.push(TradeEvent {
            buy_order_id,
            sell_order_id,
            price: fill.price,
            quantity: fill.quantity,
            taker_side: incoming.side,
        });
    }

    let resting_quantity = incoming.remaining_quantity;
    if resting_quantity > 0 {
        book.rest_order(incoming);
    }
    (trades, resting_quantity)
}
