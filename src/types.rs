//! Core order types for the book.
//!
//! [`OrderId`] is a newtype over the engine's monotonic counter. [`Order`] is
//! the book's internal record: immutable identity/side/price plus the mutable
//! remaining quantity the matching loop decrements.

use rust_decimal::Decimal;

/// Unique order identifier, assigned monotonically by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct OrderId(pub u64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an incoming order takes liquidity from.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// An order in the book (or in flight through matching).
///
/// `id`, `side`, `price`, and `sequence` are fixed at creation; only
/// `remaining_quantity` changes, and only downward. An order whose remaining
/// quantity reaches zero is removed from the book immediately.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    /// Limit price. Exact decimal so level keys have a reliable total order
    /// (no binary floating point).
    pub price: Decimal,
    pub remaining_quantity: u64,
    /// Arrival index; ties at equal price resolve to the lower sequence.
    pub sequence: u64,
}

/// Per-order summary exposed in snapshots: identity and what is left of it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RestingOrder {
    pub order_id: OrderId,
    pub quantity: u64,
}
