//! Renderer-independent state and arithmetic for the trading dashboard.
//!
//! Nothing in this crate touches the DOM or a timer. The `ui` crate owns the
//! signals and the scheduling, and calls into these types to compute every
//! state transition.

pub mod alert;
pub mod modal;
pub mod pointer;
pub mod prefs;
pub mod price_feed;
pub mod trading_pair;
