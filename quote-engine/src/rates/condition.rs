use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Operability of the vehicle at pickup. Degraded condition never lowers a quote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    #[default]
    Running,
    NonRunning,
    Damaged,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Running, Condition::NonRunning, Condition::Damaged];

    pub fn key(&self) -> &'static str {
        match self {
            Condition::Running => "running",
            Condition::NonRunning => "nonRunning",
            Condition::Damaged => "damaged",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Condition::Running => 1.0,
            Condition::NonRunning => 1.15,
            Condition::Damaged => 1.25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Running => "Running",
            Condition::NonRunning => "Non-running",
            Condition::Damaged => "Damaged",
        }
    }

    pub fn rate(&self) -> ConditionRate {
        ConditionRate {
            key: *self,
            multiplier: self.multiplier(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Condition {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.key() == s)
            .ok_or_else(|| QuoteError::invalid_key("condition", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConditionRate {
    pub key: Condition,
    pub multiplier: f64,
}

/// Strict lookup; an unknown key is an integration bug, not a data issue.
pub fn condition_rate(key: &str) -> Result<ConditionRate, QuoteError> {
    key.parse::<Condition>().map(|condition| condition.rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_never_discount() {
        assert!(Condition::ALL.iter().all(|c| c.multiplier() >= 1.0));
    }

    #[test]
    fn keys_round_trip_through_parse() {
        for condition in Condition::ALL {
            assert_eq!(condition.key().parse::<Condition>(), Ok(condition));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            condition_rate("non_running"),
            Err(QuoteError::InvalidKey {
                kind: "condition",
                key: "non_running".to_string(),
            })
        );
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&Condition::NonRunning).unwrap();
        assert_eq!(json, "\"nonRunning\"");
    }
}
