use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Carrier service level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Open,
    Enclosed,
}

impl TransportMode {
    pub const ALL: [TransportMode; 2] = [TransportMode::Open, TransportMode::Enclosed];

    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Open => "open",
            TransportMode::Enclosed => "enclosed",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TransportMode::Open => 1.0,
            TransportMode::Enclosed => 1.4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Open => "Open carrier",
            TransportMode::Enclosed => "Enclosed carrier",
        }
    }

    pub fn rate(&self) -> TransportModeRate {
        TransportModeRate {
            key: *self,
            multiplier: self.multiplier(),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TransportMode {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| QuoteError::invalid_key("transport mode", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TransportModeRate {
    pub key: TransportMode,
    pub multiplier: f64,
}

pub fn transport_mode_rate(key: &str) -> Result<TransportModeRate, QuoteError> {
    key.parse::<TransportMode>().map(|mode| mode.rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosed_costs_more_than_open() {
        assert!(TransportMode::Enclosed.multiplier() > TransportMode::Open.multiplier());
    }

    #[test]
    fn lookup_by_key() {
        let rate = transport_mode_rate("enclosed").unwrap();
        assert_eq!(rate.key, TransportMode::Enclosed);
        assert_eq!(rate.multiplier, 1.4);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            transport_mode_rate("covered"),
            Err(QuoteError::InvalidKey { kind: "transport mode", .. })
        ));
    }
}
