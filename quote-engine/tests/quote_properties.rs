use proptest::prelude::*;
use proptest::test_runner::Config;
use quote_engine::{
    adjusted_price, compute_adjusted_price, compute_landed_cost, format_price, Condition,
    Currency, QuoteError, TransportMode, VehicleKind, USD_TO_GEL_RATE,
};

fn vehicle_strategy() -> impl Strategy<Value = VehicleKind> {
    prop::sample::select(VehicleKind::ALL.to_vec())
}

fn condition_strategy() -> impl Strategy<Value = Condition> {
    prop::sample::select(Condition::ALL.to_vec())
}

fn transport_strategy() -> impl Strategy<Value = TransportMode> {
    prop::sample::select(TransportMode::ALL.to_vec())
}

fn state_code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}"
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn higher_vehicle_multiplier_never_lowers_price(
        base in 1.0f64..1_000_000.0,
        a in vehicle_strategy(),
        b in vehicle_strategy(),
        condition in condition_strategy(),
        transport in transport_strategy(),
    ) {
        let (low, high) = if a.multiplier() <= b.multiplier() { (a, b) } else { (b, a) };
        let low_price = adjusted_price(base, low, condition, transport).unwrap().total_price;
        let high_price = adjusted_price(base, high, condition, transport).unwrap().total_price;
        prop_assert!(low_price <= high_price);
    }

    #[test]
    fn worse_condition_never_lowers_price(
        base in 1.0f64..1_000_000.0,
        vehicle in vehicle_strategy(),
        transport in transport_strategy(),
    ) {
        let prices: Vec<u64> = Condition::ALL
            .iter()
            .map(|condition| adjusted_price(base, vehicle, *condition, transport).unwrap().total_price)
            .collect();
        prop_assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn enclosed_never_cheaper_than_open(
        base in 1.0f64..1_000_000.0,
        vehicle in vehicle_strategy(),
        condition in condition_strategy(),
    ) {
        let open = adjusted_price(base, vehicle, condition, TransportMode::Open).unwrap();
        let enclosed = adjusted_price(base, vehicle, condition, TransportMode::Enclosed).unwrap();
        prop_assert!(open.total_price <= enclosed.total_price);
    }

    #[test]
    fn adjusted_price_is_deterministic(
        base in 1.0f64..1_000_000.0,
        vehicle in vehicle_strategy(),
        condition in condition_strategy(),
        transport in transport_strategy(),
    ) {
        let first = adjusted_price(base, vehicle, condition, transport).unwrap();
        let second = adjusted_price(base, vehicle, condition, transport).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn landed_cost_is_deterministic_and_never_fails_on_state(
        code in state_code_strategy(),
        price in 1.0f64..10_000_000.0,
    ) {
        let first = compute_landed_cost(&code, price).unwrap();
        let second = compute_landed_cost(&code, price).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.total_cost, price + f64::from(first.transport_cost));
    }
}

#[test]
fn neutral_quote_returns_base_price() {
    let breakdown = compute_adjusted_price(1500.0, "sedan", "running", "open").unwrap();
    assert_eq!(breakdown.total_price, 1500);
}

#[test]
fn suv_non_running_enclosed_quote() {
    let breakdown = compute_adjusted_price(1500.0, "suv", "nonRunning", "enclosed").unwrap();
    assert_eq!(breakdown.total_price, (1500.0_f64 * 1.15 * 1.15 * 1.4).round() as u64);
}

#[test]
fn texas_landed_cost() {
    let result = compute_landed_cost("TX", 25000.0).unwrap();
    assert_eq!(result.transport_cost, 1650);
    assert_eq!(result.total_cost, 26650.0);
    assert_eq!(result.estimated_days, 18);
}

#[test]
fn unknown_state_uses_fallback_record() {
    let result = compute_landed_cost("ZZ", 10000.0).unwrap();
    assert_eq!(result.transport_cost, 1700);
    assert_eq!(result.total_cost, 11700.0);
    assert_eq!(result.estimated_days, 20);
}

#[test]
fn invalid_amounts_are_rejected() {
    assert!(matches!(
        compute_adjusted_price(-100.0, "sedan", "running", "open"),
        Err(QuoteError::InvalidInput { .. })
    ));
    assert!(matches!(
        compute_landed_cost("CA", 0.0),
        Err(QuoteError::InvalidInput { .. })
    ));
}

#[test]
fn both_currencies_share_one_rate() {
    let usd = format_price(100.0, Currency::Usd);
    assert!(usd.contains("100"));
    assert!(usd.contains('$'));

    let gel = format_price(100.0, Currency::Gel);
    let expected = format!("{}", (100.0 * USD_TO_GEL_RATE).round() as u64);
    assert!(gel.contains(&expected));
    assert!(gel.contains('₾'));
    assert_eq!(Currency::Gel.convert_from_usd(100.0), 100.0 * USD_TO_GEL_RATE);
}
