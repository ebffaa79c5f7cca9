//! # Limit Order Book
//!
//! Single-instrument limit order book: price-time priority matching with
//! exact decimal prices, trade events, and read-only snapshots.
//!
//! ## Entry point
//!
//! Use [`Engine`] as the single entry point: create with [`Engine::new`],
//! send orders with [`Engine::submit`], and render the book with
//! [`Engine::snapshot`].
//!
//! ## Example
//!
//! ```rust
//! use limit_order_book::{Engine, Side};
//! use rust_decimal::Decimal;
//!
//! let mut engine = Engine::new();
//! let ask = engine.submit(Side::Sell, Decimal::from(10), 100).unwrap();
//! assert!(ask.trades.is_empty());
//! assert_eq!(ask.resting_quantity, 100);
//!
//! let bid = engine.submit(Side::Buy, Decimal::from(10), 40).unwrap();
//! assert_eq!(bid.trades.len(), 1);
//! assert_eq!(bid.trades[0].quantity, 40);
//! assert_eq!(bid.trades[0].price, Decimal::from(10));
//! assert_eq!(bid.resting_quantity, 0);
//! ```
//!
//! ## Lower-level API
//!
//! [`OrderBook`] and [`match_order`] are available directly if you manage
//! order ids yourself.

pub mod engine;
pub mod error;
pub mod execution;
pub mod market_data_gen;
pub mod matching;
pub mod order_book;
pub mod types;

pub use engine::{BookSnapshot, Engine, LevelSnapshot};
pub use error::BookError;
pub use execution::{OrderResult, TradeEvent};
pub use market_data_gen::{replay, Generator, GeneratorConfig};
pub use matching::match_order;
pub use order_book::{Fill, OrderBook};
pub use types::{Order, OrderId, RestingOrder, Side};
