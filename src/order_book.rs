//! Single-instrument order book storage: bids and asks, price-time priority.
//!
//! Each side is a price-keyed map of FIFO queues; best bid is the highest
//! price, best ask the lowest. Order records live in a slot arena owned by
//! the book, and queues refer to them by slot index, so a filled order's slot
//! is recycled for the next arrival. Taking liquidity (used by
//! [`crate::matching`]) walks levels best-price-first and each queue
//! head-first.

use crate::types::{Order, OrderId, RestingOrder, Side};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, VecDeque};

/// Index of an order's slot in the book's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OrderKey(u32);

/// Slot storage for resting orders with a free list for reuse.
///
/// Owned by one book; independent books share nothing.
#[derive(Debug, Default)]
struct OrderArena {
    slots: Vec<Option<Order>>,
    free: Vec<OrderKey>,
}

impl OrderArena {
    fn insert(&mut self, order: Order) -> OrderKey {
        match self.free.pop() {
            Some(key) => {
                self.slots[key.0 as usize] = Some(order);
                key
            }
            None => {
                let key = OrderKey(self.slots.len() as u32);
                self.slots.push(Some(order));
                key
            }
        }
    }

    fn get(&self, key: OrderKey) -> &Order {
        self.slots[key.0 as usize]
            .as_ref()
            .expect("vacant arena slot referenced")
    }

    fn get_mut(&mut self, key: OrderKey) -> &mut Order {
        self.slots[key.0 as usize]
            .as_mut()
            .expect("vacant arena slot referenced")
    }

    /// Takes the order out of its slot and returns the slot to the free list.
    fn release(&mut self, key: OrderKey) -> Order {
        let order = self.slots[key.0 as usize]
            .take()
            .expect("vacant arena slot released");
        self.free.push(key);
        order
    }

    fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// FIFO queue of one price level: head is the oldest (lowest sequence) order.
type LevelQueue = VecDeque<OrderKey>;

/// Result of taking liquidity from the book (one per resting order touched).
#[derive(Clone, Debug)]
pub struct Fill {
    pub resting_order_id: OrderId,
    /// The resting order's price, i.e. the trade price.
    pub price: Decimal,
    pub quantity: u64,
    /// True if the resting order was fully filled (removed from the book).
    pub resting_fully_filled: bool,
}

/// Single-instrument order book.
///
/// Invariants: every queued order has positive remaining quantity, a level
/// with an empty queue never exists in its map, and after matching the best
/// bid is strictly below the best ask whenever both sides are non-empty.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BTreeMap<Decimal, LevelQueue>,
    asks: BTreeMap<Decimal, LevelQueue>,
    arena: OrderArena,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rests an order at the tail of its price level, creating the level if
    /// absent. Does not run matching; caller uses the matching module.
    pub fn rest_order(&mut self, order: Order) {
        debug_assert!(order.remaining_quantity > 0, "resting a filled order");
        let side = order.side;
        let price = order.price;
        let key = self.arena.insert(order);
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        levels.entry(price).or_default().push_back(key);
    }

    /// Take liquidity from the ask side (for an incoming buy): levels with
    /// price at most `price_limit`, lowest price first, queue head first.
    /// Decrements resting orders, drops filled ones, and returns the fills.
    pub fn take_from_asks(&mut self, price_limit: Decimal, mut quantity: u64) -> Vec<Fill> {
        let mut fills = Vec::new();
        while quantity > 0 {
            let (price, key) = match self.asks.iter().next() {
                Some((&price, queue)) if price <= price_limit => {
                    (price, *queue.front().expect("empty price level in book"))
                }
                _ => break,
            };
            let (order_id, fill_qty, fully_filled) = {
                let resting = self.arena.get_mut(key);
                let fill_qty = quantity.min(resting.remaining_quantity);
                resting.remaining_quantity -= fill_qty;
                (resting.id, fill_qty, resting.remaining_quantity == 0)
            };
            quantity -= fill_qty;
            fills.push(Fill {
                resting_order_id: order_id,
                price,
                quantity: fill_qty,
                resting_fully_filled: fully_filled,
            });
            if fully_filled {
                self.pop_level_head(Side::Sell, price, key);
            }
        }
        fills
    }

    /// Take liquidity from the bid side (for an incoming sell): levels with
    /// price at least `price_limit`, highest price first, queue head first.
    pub fn take_from_bids(&mut self, price_limit: Decimal, mut quantity: u64) -> Vec<Fill> {
        let mut fills = Vec::new();
        while quantity > 0 {
            let (price, key) = match self.bids.iter().next_back() {
                Some((&price, queue)) if price >= price_limit => {
                    (price, *queue.front().expect("empty price level in book"))
                }
                _ => break,
            };
            let (order_id, fill_qty, fully_filled) = {
                let resting = self.arena.get_mut(key);
                let fill_qty = quantity.min(resting.remaining_quantity);
                resting.remaining_quantity -= fill_qty;
                (resting.id, fill_qty, resting.remaining_quantity == 0)
            };
            quantity -= fill_qty;
            fills.push(Fill {
                resting_order_id: order_id,
                price,
                quantity: fill_qty,
                resting_fully_filled: fully_filled,
            });
            if fully_filled {
                self.pop_level_head(Side::Buy, price, key);
            }
        }
        fills
    }

    /// Removes the filled head order from its level, deleting the level when
    /// its queue empties, and recycles the arena slot.
    fn pop_level_head(&mut self, side: Side, price: Decimal, key: OrderKey) {
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let queue = levels.get_mut(&price).expect("price level missing");
        let head = queue.pop_front().expect("empty price level in book");
        debug_assert_eq!(head, key, "filled order was not the queue head");
        if queue.is_empty() {
            levels.remove(&price);
        }
        self.arena.release(key);
    }

    /// Best bid price (None if empty).
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.keys().next_back().copied()
    }

    /// Best ask price (None if empty).
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.keys().next().copied()
    }

    /// Number of price levels on one side.
    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::Buy => self.bids.len(),
            Side::Sell => self.asks.len(),
        }
    }

    /// Number of orders resting in the book (both sides).
    pub fn order_count(&self) -> usize {
        self.arena.live()
    }

    /// Total remaining quantity resting on one side.
    pub fn resting_quantity(&self, side: Side) -> u64 {
        self.iter_levels(side)
            .flat_map(|(_, orders)| orders)
            .map(|o| o.quantity)
            .sum()
    }

    /// Iterates one side's levels in priority order (best price first), each
    /// with its orders in FIFO order. Lazy and restartable; never mutates.
    pub fn iter_levels(
        &self,
        side: Side,
    ) -> impl Iterator<Item = (Decimal, Vec<RestingOrder>)> + '_ {
        let levels: Box<dyn Iterator<Item = (&Decimal, &LevelQueue)>> = match side {
            Side::Buy => Box::new(self.bids.iter().rev()),
            Side::Sell => Box::new(self.asks.iter()),
        };
        levels.map(move |(&price, queue)| {
            let orders = queue
                .iter()
                .map(|&key| {
                    let order = self.arena.get(key);
                    RestingOrder {
                        order_id: order.id,
                        quantity: order.remaining_quantity,
                    }
                })
                .collect();
            (price, orders)
        })
    }
}
