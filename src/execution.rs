//! Trade events and submit results.
//!
//! [`TradeEvent`] is emitted for each match between a buy and a sell.
//! [`OrderResult`] is what one submit call returns: all events from the call,
//! observed atomically.

use crate::types::{OrderId, Side};
use rust_decimal::Decimal;

/// One match between a buy and a sell order.
///
/// `price` is always the resting (maker) order's price, never the incoming
/// (taker) order's price.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TradeEvent {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Decimal,
    pub quantity: u64,
    /// Side of the incoming order that triggered the match.
    pub taker_side: Side,
}

/// Outcome of one submit call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderResult {
    pub order_id: OrderId,
    pub trades: Vec<TradeEvent>,
    /// Quantity left on the book after matching. Zero means the order was
    /// fully filled and never rested.
    pub resting_quantity: u64,
}

impl OrderResult {
    /// Total quantity matched by this submit call.
    pub fn filled_quantity(&self) -> u64 {
        self.trades.iter().map(|t| t.quantity).sum()
    }
}
