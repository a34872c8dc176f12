//! Quote engine for vehicles shipped from US auctions to Georgia.
//!
//! Two independent calculations share one set of static rate tables:
//!
//! - [`compute_adjusted_price`] scales a base transport price by vehicle
//!   type, condition and carrier multipliers.
//! - [`compute_landed_cost`] adds a per-state transport cost to a vehicle's
//!   sale price, falling back to a default record for unknown states.
//!
//! [`format_price`] renders any USD amount as USD or GEL.

pub mod currency;
pub mod error;
pub mod landed_cost;
pub mod pricing;
pub mod quote;
pub mod rates;

pub use currency::{exchange_rate_label, format_price, Currency, USD_TO_GEL_RATE};
pub use error::QuoteError;
pub use landed_cost::{compute_landed_cost, LandedCostResult};
pub use pricing::{adjusted_price, compute_adjusted_price, PriceBreakdown, DEFAULT_BASE_TRANSPORT_PRICE};
pub use quote::{Origin, QuoteRequest, QuoteResult};
pub use rates::{
    condition_rate, resolve_origin, state_record, transport_mode_rate, vehicle_type_rate,
    Condition, StateTransportRecord, TransportMode, TransportOrigin, VehicleCategory, VehicleKind,
    VehicleTypeRate,
};
