//! State-driven landed cost: a fixed transport add-on per origin state.
//!
//! This path does not look at vehicle type or condition. It is kept apart
//! from [`crate::pricing`] on purpose and the two never feed each other.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ensure_positive, QuoteError},
    rates::resolve_origin,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandedCostResult {
    pub vehicle_price: f64,
    pub transport_cost: u32,
    pub total_cost: f64,
    pub estimated_days: u32,
    pub origin_display_name: String,
    /// `None` when the state code was unknown and the fallback applied.
    pub origin_code: Option<String>,
}

impl LandedCostResult {
    pub fn used_fallback(&self) -> bool {
        self.origin_code.is_none()
    }
}

pub fn compute_landed_cost(
    state_code: &str,
    vehicle_price: f64,
) -> Result<LandedCostResult, QuoteError> {
    let vehicle_price = ensure_positive("vehicle price", vehicle_price)?;
    let origin = resolve_origin(state_code);
    let transport_cost = origin.transport_cost();

    Ok(LandedCostResult {
        vehicle_price,
        transport_cost,
        total_cost: vehicle_price + f64::from(transport_cost),
        estimated_days: origin.estimated_days(),
        origin_display_name: origin.display_name().to_string(),
        origin_code: origin.code().map(str::to_string),
    })
}
