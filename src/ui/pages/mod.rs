pub mod calculator;
pub mod landed_cost;
pub mod rates;

pub use calculator::CalculatorPage;
pub use landed_cost::LandedCostPage;
pub use rates::RatesPage;

/// Parses a USD amount typed by the user. Accepts `25,000` and `$25000`.
///
/// Positivity is left to the quote engine so its error text reaches the user.
pub(crate) fn parse_usd_amount(input: &str, field: &str) -> Result<f64, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(format!("Enter the {field}."));
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("The {field} must be a number."))
}
