//! Provides the quoted pair type and the fixed list the dashboard starts with.

use serde::Deserialize;
use serde::Serialize;

/// Number of fractional digits every quote is displayed and rounded with.
pub const QUOTE_DECIMALS: usize = 4;

/// A currency or metal pair as displayed on one card.
///
/// `change` always holds the magnitude of the latest movement. The sign of
/// that movement lives in `up`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPair {
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub up: bool,
}

impl TradingPair {
    pub fn new(name: impl Into<String>, price: f64, change: f64, up: bool) -> Self {
        Self {
            name: name.into(),
            price,
            change: change.abs(),
            up,
        }
    }

    /// Returns the pair that replaces `self` after a price movement of
    /// `fluctuation` (in quote units, signed).
    ///
    /// The result is a new value; the list holding `self` is expected to be
    /// swapped as a whole.
    pub fn with_fluctuation(&self, fluctuation: f64) -> Self {
        Self {
            name: self.name.clone(),
            price: round_to_quote(self.price + fluctuation),
            change: round_to_quote(fluctuation.abs()),
            up: fluctuation >= 0.0,
        }
    }

    /// The price with exactly four fractional digits, e.g. `1.0750`.
    pub fn price_display(&self) -> String {
        format_quote(self.price)
    }

    /// The change magnitude with exactly four fractional digits.
    pub fn change_display(&self) -> String {
        format_quote(self.change)
    }
}

/// Formats a quote value with exactly [`QUOTE_DECIMALS`] fractional digits.
pub fn format_quote(value: f64) -> String {
    format!("{:.*}", QUOTE_DECIMALS, value)
}

/// Rounds to [`QUOTE_DECIMALS`] decimal places.
pub fn round_to_quote(value: f64) -> f64 {
    let scale = 10_f64.powi(QUOTE_DECIMALS as i32);
    // `+ 0.0` folds a rounded `-0.0` into `0.0`.
    (value * scale).round() / scale + 0.0
}

/// The ten pairs shown at startup, in display order.
pub fn seed_pairs() -> Vec<TradingPair> {
    vec![
        TradingPair::new("EUR/USD", 1.0750, 0.0015, true),
        TradingPair::new("XAU/USD", 2315.65, 5.20, false),
        TradingPair::new("GBP/JPY", 198.45, 0.10, true),
        TradingPair::new("USD/CAD", 1.3705, 0.0008, false),
        TradingPair::new("AUD/USD", 0.6655, 0.0003, true),
        TradingPair::new("USD/CHF", 0.8950, 0.0005, false),
        TradingPair::new("NZD/USD", 0.6150, 0.0001, true),
        TradingPair::new("EUR/JPY", 178.60, 0.15, false),
        TradingPair::new("CAD/JPY", 106.75, 0.05, true),
        TradingPair::new("CHF/JPY", 167.30, 0.08, false),
    ]
}
