//! Vehicle-driven transport quote: a base price scaled by three independent
//! multipliers.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ensure_positive, QuoteError},
    rates::{Condition, TransportMode, VehicleCategory, VehicleKind, VehicleTypeRate},
};

/// Base transport price the calculator starts from, in USD.
pub const DEFAULT_BASE_TRANSPORT_PRICE: f64 = 1500.0;

// 2^64, exactly representable; anything at or above it does not fit a u64.
const U64_CEILING: f64 = 18_446_744_073_709_551_616.0;

/// Every factor that went into an adjusted price, for rendering a breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub vehicle_type: VehicleKind,
    pub category: VehicleCategory,
    pub condition: Condition,
    pub transport_mode: TransportMode,
    pub vehicle_multiplier: f64,
    pub condition_multiplier: f64,
    pub transport_multiplier: f64,
    pub total_price: u64,
}

impl PriceBreakdown {
    pub fn vehicle_rate(&self) -> &'static VehicleTypeRate {
        self.vehicle_type.rate()
    }

    /// Product of the three multipliers.
    pub fn combined_multiplier(&self) -> f64 {
        self.vehicle_multiplier * self.condition_multiplier * self.transport_multiplier
    }
}

/// Typed entry point. Rounds once, half away from zero, after all
/// multiplications.
pub fn adjusted_price(
    base_price: f64,
    vehicle: VehicleKind,
    condition: Condition,
    transport: TransportMode,
) -> Result<PriceBreakdown, QuoteError> {
    let base_price = ensure_positive("base price", base_price)?;

    let rate = vehicle.rate();
    let vehicle_multiplier = rate.multiplier;
    let condition_multiplier = condition.multiplier();
    let transport_multiplier = transport.multiplier();

    let total =
        (base_price * vehicle_multiplier * condition_multiplier * transport_multiplier).round();
    // The quote must be a whole number of dollars that fits the result type.
    if !(1.0..U64_CEILING).contains(&total) {
        tracing::debug!(base_price, total, "adjusted price out of range");
        return Err(QuoteError::InvalidInput {
            field: "base price",
            value: base_price,
        });
    }

    Ok(PriceBreakdown {
        base_price,
        vehicle_type: vehicle,
        category: rate.category,
        condition,
        transport_mode: transport,
        vehicle_multiplier,
        condition_multiplier,
        transport_multiplier,
        total_price: total as u64,
    })
}

/// String-keyed entry point for callers holding raw ids.
///
/// Unknown vehicle types fail with [`QuoteError::UnknownVehicleType`];
/// unknown condition or transport keys with [`QuoteError::InvalidKey`].
pub fn compute_adjusted_price(
    base_price: f64,
    vehicle_type_id: &str,
    condition_key: &str,
    transport_mode_key: &str,
) -> Result<PriceBreakdown, QuoteError> {
    let vehicle = vehicle_type_id.parse::<VehicleKind>()?;
    let condition = condition_key.parse::<Condition>()?;
    let transport = transport_mode_key.parse::<TransportMode>()?;
    adjusted_price(base_price, vehicle, condition, transport)
}
