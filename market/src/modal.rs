use crate::trading_pair::TradingPair;

/// Whether the alert modal is showing, and for which pair.
///
/// The pair is a snapshot taken when the modal opened. Later price ticks do
/// not reach it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open(TradingPair),
}

impl ModalVisibility {
    /// Opens for `pair`, replacing any pair already associated.
    pub fn open(&mut self, pair: TradingPair) {
        *self = Self::Open(pair);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn pair(&self) -> Option<&TradingPair> {
        match self {
            Self::Open(pair) => Some(pair),
            Self::Closed => None,
        }
    }
}
