use quote_engine::{
    Condition, Currency, TransportMode, VehicleKind, DEFAULT_BASE_TRANSPORT_PRICE,
};
use serde::{Deserialize, Serialize};

/// Selections on the vehicle-type quote calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub vehicle_type: VehicleKind,
    pub condition: Condition,
    pub transport_mode: TransportMode,
    pub base_price: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            vehicle_type: VehicleKind::Sedan,
            condition: Condition::Running,
            transport_mode: TransportMode::Open,
            base_price: DEFAULT_BASE_TRANSPORT_PRICE,
        }
    }
}

/// Last values entered on the landed-cost calculator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandedCostInputs {
    /// Empty until the user picks a state.
    pub state_code: String,
    pub vehicle_price: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub currency: Currency,
    pub calculator: CalculatorInputs,
    pub landed: LandedCostInputs,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.currency = persisted.currency;
        self.calculator = persisted.calculator;
        self.landed = persisted.landed;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            currency: self.currency,
            calculator: self.calculator.clone(),
            landed: self.landed.clone(),
        }
    }

    /// Formats a USD amount in the currently selected currency.
    pub fn format_price(&self, amount_usd: f64) -> String {
        quote_engine::format_price(amount_usd, self.currency)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub calculator: CalculatorInputs,
    #[serde(default)]
    pub landed: LandedCostInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_round_trip_restores_selections() {
        let mut state = AppState::default();
        state.currency = Currency::Gel;
        state.calculator.vehicle_type = VehicleKind::Van;
        state.landed.state_code = "NJ".to_string();

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored, state);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let persisted: PersistedState = serde_json::from_str(r#"{"currency":"GEL"}"#).unwrap();
        assert_eq!(persisted.currency, Currency::Gel);
        assert_eq!(persisted.calculator.base_price, DEFAULT_BASE_TRANSPORT_PRICE);
        assert!(persisted.landed.state_code.is_empty());
    }

    #[test]
    fn formats_in_selected_currency() {
        let mut state = AppState::default();
        assert_eq!(state.format_price(1500.0), "$1,500.00");
        state.currency = Currency::Gel;
        assert_eq!(state.format_price(100.0), "265,00\u{a0}₾");
    }
}
