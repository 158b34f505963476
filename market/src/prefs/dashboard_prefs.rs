use std::env;
use std::time::Duration;

use crate::pointer::DEFAULT_FOLLOWER_SIZE;
use crate::price_feed::DEFAULT_FLUCTUATION_RATE;

/// Tunables for the dashboard.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DashboardPrefs {
    /// Time between two simulated price ticks.
    pub update_interval: Duration,
    pub fluctuation_rate: f64,
    /// Edge length of the pointer follower, in CSS pixels.
    pub follower_size: f64,
}

impl DashboardPrefs {
    /// Seconds between price ticks when nothing overrides it.
    pub const DEFAULT_UPDATE_SECS: u64 = 3;

    /// Longest accepted tick interval: one day.
    pub const MAX_UPDATE_SECS: u64 = 86_400;

    /// Reads overrides from the environment, falling back to in-code defaults.
    ///
    /// # Environment Variables
    /// - `MARKET_UPDATE_SECS`: whole seconds between price ticks, from 1 up to
    ///   `MAX_UPDATE_SECS`.
    ///
    /// Malformed or missing values are ignored. wasm32 builds have no process
    /// environment and always get the defaults.
    pub fn from_env() -> Self {
        let update_secs = env::var("MARKET_UPDATE_SECS")
            .ok()
            .and_then(|s| parse_update_secs(&s))
            .unwrap_or(Self::DEFAULT_UPDATE_SECS);

        Self {
            update_interval: Duration::from_secs(update_secs),
            fluctuation_rate: DEFAULT_FLUCTUATION_RATE,
            follower_size: DEFAULT_FOLLOWER_SIZE,
        }
    }
}

impl Default for DashboardPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_update_secs(s: &str) -> Option<u64> {
    s.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| (1..=DashboardPrefs::MAX_UPDATE_SECS).contains(secs))
}
