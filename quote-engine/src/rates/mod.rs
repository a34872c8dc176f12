//! Static reference tables the quote calculations read from.

pub mod condition;
pub mod states;
pub mod transport;
pub mod vehicle;

pub use condition::{condition_rate, Condition, ConditionRate};
pub use states::{
    resolve_origin, state_record, StateTransportRecord, TransportOrigin, FALLBACK_DISPLAY_NAME,
    FALLBACK_ESTIMATED_DAYS, FALLBACK_TRANSPORT_COST, STATE_RECORDS,
};
pub use transport::{transport_mode_rate, TransportMode, TransportModeRate};
pub use vehicle::{
    vehicle_type_rate, Dimensions, VehicleCategory, VehicleKind, VehicleTypeRate,
    VEHICLE_TYPE_RATES,
};

/// Percentage shown beside a multiplier, e.g. `+15%` for 1.15.
pub fn surcharge_label(multiplier: f64) -> String {
    let percent = ((multiplier - 1.0) * 100.0).round() as i64;
    match percent {
        0 => "Standard".to_string(),
        p if p > 0 => format!("+{p}%"),
        p => format!("{p}%"),
    }
}
