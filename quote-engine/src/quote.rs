use serde::{Deserialize, Serialize};

use crate::{
    error::QuoteError,
    landed_cost::{compute_landed_cost, LandedCostResult},
    pricing::{adjusted_price, PriceBreakdown},
    rates::{Condition, TransportMode, VehicleKind},
};

/// Where a vehicle ships from and what it sold for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    pub state_code: String,
    pub vehicle_price: f64,
}

/// Inputs for one quote. Either path may be left out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub vehicle_type: VehicleKind,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub transport_mode: TransportMode,
    #[serde(default)]
    pub base_transport_price: Option<f64>,
    #[serde(default)]
    pub origin: Option<Origin>,
}

impl QuoteRequest {
    pub fn new(vehicle_type: VehicleKind, condition: Condition, transport_mode: TransportMode) -> Self {
        Self {
            vehicle_type,
            condition,
            transport_mode,
            base_transport_price: None,
            origin: None,
        }
    }

    pub fn with_base_transport_price(mut self, base_price: f64) -> Self {
        self.base_transport_price = Some(base_price);
        self
    }

    pub fn with_origin(mut self, state_code: impl Into<String>, vehicle_price: f64) -> Self {
        self.origin = Some(Origin {
            state_code: state_code.into(),
            vehicle_price,
        });
        self
    }

    /// Runs each requested path independently. The first failure aborts the
    /// whole quote.
    pub fn evaluate(&self) -> Result<QuoteResult, QuoteError> {
        let breakdown = self
            .base_transport_price
            .map(|base| {
                adjusted_price(base, self.vehicle_type, self.condition, self.transport_mode)
            })
            .transpose()?;

        let landed = self
            .origin
            .as_ref()
            .map(|origin| compute_landed_cost(&origin.state_code, origin.vehicle_price))
            .transpose()?;

        Ok(QuoteResult { breakdown, landed })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub breakdown: Option<PriceBreakdown>,
    pub landed: Option<LandedCostResult>,
}

impl QuoteResult {
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_none() && self.landed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_both_paths_without_composing_them() {
        let result = QuoteRequest::new(VehicleKind::Luxury, Condition::Damaged, TransportMode::Enclosed)
            .with_base_transport_price(1500.0)
            .with_origin("FL", 30000.0)
            .evaluate()
            .unwrap();

        // 1500 * 1.3 * 1.25 * 1.4 = 3412.5
        assert_eq!(result.breakdown.unwrap().total_price, 3413);
        let landed = result.landed.unwrap();
        assert_eq!(landed.transport_cost, 1750);
        assert_eq!(landed.total_cost, 31750.0);
    }

    #[test]
    fn empty_request_yields_empty_result() {
        let result = QuoteRequest::new(VehicleKind::Sedan, Condition::Running, TransportMode::Open)
            .evaluate()
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn invalid_input_on_either_path_fails() {
        let request = QuoteRequest::new(VehicleKind::Sedan, Condition::Running, TransportMode::Open)
            .with_base_transport_price(1500.0)
            .with_origin("CA", 0.0);
        assert!(matches!(
            request.evaluate(),
            Err(QuoteError::InvalidInput { field: "vehicle price", .. })
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{"vehicleType":"pickup","baseTransportPrice":1000}"#).unwrap();
        assert_eq!(request.condition, Condition::Running);
        assert_eq!(request.transport_mode, TransportMode::Open);
        assert_eq!(request.evaluate().unwrap().breakdown.unwrap().total_price, 1200);
    }
}
