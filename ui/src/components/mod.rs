//! Shared components for the dashboard.
pub mod alert_modal;
pub mod background;
pub mod pointer_follower;
pub mod trading_card;
