use thiserror::Error;

/// Failures surfaced by the quote calculations.
///
/// An unknown state code is deliberately absent: it resolves to the fallback
/// transport record instead of failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("{field} must be a positive finite amount, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("unknown {kind} key: {key:?}")]
    InvalidKey { kind: &'static str, key: String },
    #[error("unknown vehicle type: {0:?}")]
    UnknownVehicleType(String),
}

impl QuoteError {
    pub(crate) fn invalid_key(kind: &'static str, key: &str) -> Self {
        QuoteError::InvalidKey {
            kind,
            key: key.to_string(),
        }
    }
}

/// Rejects zero, negative and non-finite amounts.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, QuoteError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(field, value, "rejected non-positive amount");
        Err(QuoteError::InvalidInput { field, value })
    }
}
