//! UI-side state; all pricing lives in `quote_engine`.

pub mod app_state;

pub use app_state::{AppState, CalculatorInputs};
