//! Form state and output of the "set price alert" flow.
//!
//! Alerts are not stored or delivered anywhere. Creating one emits a single
//! record through an [`AlertSink`] and that is the end of it.

use std::fmt;

use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::trading_pair::round_to_quote;
use crate::trading_pair::TradingPair;

/// Amount one stepper activation adds to or removes from the target price.
pub const PRICE_STEP: f64 = 0.0001;

/// Which side of the target price should trigger the alert.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AlertDirection {
    #[default]
    Above,
    Below,
}

impl AlertDirection {
    /// Label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Above => "Above",
            Self::Below => "Below",
        }
    }
}

/// The target price text could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("target price {text:?} is not a number")]
pub struct InvalidTargetPrice {
    pub text: String,
}

/// Editable state of an open alert modal.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDraft {
    pair: TradingPair,
    /// Raw input text. Manual edits are kept verbatim, whatever they contain.
    pub target_price: String,
    pub direction: AlertDirection,
}

impl AlertDraft {
    /// Starts a draft for a snapshot of `pair`, targeting its current price.
    pub fn new(pair: TradingPair) -> Self {
        let target_price = pair.price.to_string();
        Self {
            pair,
            target_price,
            direction: AlertDirection::default(),
        }
    }

    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    pub fn set_target_price(&mut self, text: impl Into<String>) {
        self.target_price = text.into();
    }

    /// Parses the current text.
    pub fn target_value(&self) -> Result<f64, InvalidTargetPrice> {
        self.target_price
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidTargetPrice {
                text: self.target_price.clone(),
            })
    }

    /// Moves the target by `delta`, rounded to four places.
    ///
    /// Text that does not parse is left as it is.
    pub fn step(&mut self, delta: f64) -> Result<f64, InvalidTargetPrice> {
        let next = round_to_quote(self.target_value()? + delta);
        self.target_price = next.to_string();
        Ok(next)
    }

    pub fn step_up(&mut self) -> Result<f64, InvalidTargetPrice> {
        self.step(PRICE_STEP)
    }

    pub fn step_down(&mut self) -> Result<f64, InvalidTargetPrice> {
        self.step(-PRICE_STEP)
    }

    pub fn request(&self) -> AlertRequest {
        AlertRequest {
            pair: self.pair.clone(),
            target_price: self.target_price.clone(),
            direction: self.direction,
        }
    }

    /// Emits the alert to `sink` once, then calls `on_close` once.
    pub fn create(&self, sink: &mut impl AlertSink, on_close: impl FnOnce()) -> AlertRequest {
        let request = self.request();
        sink.alert_created(&request);
        on_close();
        request
    }
}

/// An alert as submitted by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub pair: TradingPair,
    pub target_price: String,
    pub direction: AlertDirection,
}

impl fmt::Display for AlertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alert created for {}: Price goes {} {}",
            self.pair.name, self.direction, self.target_price
        )
    }
}

/// Receives created alerts.
pub trait AlertSink {
    fn alert_created(&mut self, request: &AlertRequest);
}

/// Writes each created alert to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn alert_created(&mut self, request: &AlertRequest) {
        // one record per alert; the JSON form rides along as a field
        let json = serde_json::to_string(request).unwrap_or_default();
        tracing::info!(alert = %json, "{}", request);
    }
}
