//! Simulated quote movements.
//!
//! There is no real market data behind the dashboard. Each tick every pair
//! moves by a uniformly drawn fraction of its own price, independently of the
//! other pairs. Prices are never clamped and may drift over a long session.

use rand::Rng;

use crate::trading_pair::TradingPair;

/// Fraction of the current price spanned by one tick's fluctuation range.
///
/// A rate of `0.001` yields movements in `[-0.0005, +0.0005] * price`.
pub const DEFAULT_FLUCTUATION_RATE: f64 = 0.001;

/// Produces replacement pair lists from a randomness source.
#[derive(Debug, Clone)]
pub struct PriceFeed<R> {
    rng: R,
    rate: f64,
}

impl<R: Rng> PriceFeed<R> {
    pub fn new(rng: R) -> Self {
        Self::with_rate(rng, DEFAULT_FLUCTUATION_RATE)
    }

    pub fn with_rate(rng: R, rate: f64) -> Self {
        Self { rng, rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Maps a uniform sample `u` in `[0, 1)` to a signed price movement.
    pub fn fluctuation_for(&self, price: f64, u: f64) -> f64 {
        (u - 0.5) * self.rate * price
    }

    /// Computes the next full list of pairs.
    ///
    /// The input is left untouched so callers can swap the whole list in one
    /// write; names and order are preserved.
    pub fn tick(&mut self, pairs: &[TradingPair]) -> Vec<TradingPair> {
        pairs
            .iter()
            .map(|pair| {
                let u: f64 = self.rng.gen();
                pair.with_fluctuation(self.fluctuation_for(pair.price, u))
            })
            .collect()
    }
}
