//! Synthetic order stream generator.
//!
//! Deterministic, configurable stream of submit triples for replay tests,
//! benches, and the console demo. Same seed, same sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::engine::Engine;
use crate::error::BookError;
use crate::execution::OrderResult;
use crate::types::Side;

/// Configuration for the synthetic order generator. All ranges are
/// inclusive; prices are generated in integer ticks of `tick`.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed produces the same stream.
    pub seed: u64,
    /// Number of orders in the stream (used when collecting).
    pub num_orders: usize,
    /// Probability of Buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Price range in ticks.
    pub price_min_ticks: i64,
    pub price_max_ticks: i64,
    /// Tick size, e.g. 0.01.
    pub tick: Decimal,
    /// Quantity range, whole units.
    pub quantity_min: u64,
    pub quantity_max: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_orders: 1000,
            buy_ratio: 0.5,
            price_min_ticks: 950,
            price_max_ticks: 1050,
            tick: Decimal::new(1, 1), // 0.1
            quantity_min: 1,
            quantity_max: 100,
        }
    }
}

/// Deterministic stream of `(side, price, quantity)` submit triples.
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl Generator {
    /// Builds a generator; same config (including seed) gives the same stream.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { rng, config }
    }

    /// Generates the next submit triple, advancing the RNG.
    pub fn next_order(&mut self) -> (Side, Decimal, u64) {
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            Side::Buy
        } else {
            Side::Sell
        };
        let ticks = self
            .rng
            .gen_range(self.config.price_min_ticks..=self.config.price_max_ticks);
        let price = Decimal::from(ticks) * self.config.tick;
        let quantity = self
            .rng
            .gen_range(self.config.quantity_min..=self.config.quantity_max);
        (side, price, quantity)
    }

    /// Returns exactly `n` triples, advancing the generator state.
    pub fn take_orders(&mut self, n: usize) -> Vec<(Side, Decimal, u64)> {
        (0..n).map(|_| self.next_order()).collect()
    }

    /// Returns the full stream as defined by `config.num_orders`.
    pub fn all_orders(&mut self) -> Vec<(Side, Decimal, u64)> {
        self.take_orders(self.config.num_orders)
    }
}

/// Replays a stream of submit triples into the engine, collecting every
/// result (or the first error).
pub fn replay(
    engine: &mut Engine,
    orders: impl IntoIterator<Item = (Side, Decimal, u64)>,
) -> Result<Vec<OrderResult>, BookError> {
    let mut results = Vec::new();
    for (side, price, quantity) in orders {
        results.push(engine.submit(side, price, quantity)?);
    }
    Ok(results)
}
