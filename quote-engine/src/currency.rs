//! USD/GEL display formatting.
//!
//! All amounts enter as USD. GEL figures are derived with [`USD_TO_GEL_RATE`]
//! and nothing else, so both currencies always agree within a build.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// The only USD to GEL rate used anywhere in the crate.
pub const USD_TO_GEL_RATE: f64 = 2.65;

const NO_BREAK_SPACE: char = '\u{a0}';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GEL")]
    Gel,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Gel];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gel => "GEL",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gel => "₾",
        }
    }

    pub fn convert_from_usd(&self, amount_usd: f64) -> f64 {
        match self {
            Currency::Usd => amount_usd,
            Currency::Gel => amount_usd * USD_TO_GEL_RATE,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuoteError::invalid_key("currency", s))
    }
}

/// Caption shown next to the currency switch.
pub fn exchange_rate_label() -> String {
    format!("1 USD = {USD_TO_GEL_RATE} ₾")
}

/// Renders a USD amount in the requested currency.
///
/// USD follows en-US conventions (`$26,650.00`); GEL follows ka-GE
/// (`70 622,50 ₾`, no-break spaces). Zero and negative amounts are formatted
/// as given.
pub fn format_price(amount_usd: f64, currency: Currency) -> String {
    let amount = currency.convert_from_usd(amount_usd);

    if !amount.is_finite() {
        let body = if amount.is_nan() {
            "NaN"
        } else if amount > 0.0 {
            "∞"
        } else {
            "-∞"
        };
        return match currency {
            Currency::Usd => format!("${body}"),
            Currency::Gel => format!("{body}{NO_BREAK_SPACE}₾"),
        };
    }

    let digits = format!("{:.2}", amount.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let is_zero = whole.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match currency {
        Currency::Usd => format!("{sign}${}.{fraction}", group_digits(whole, ',')),
        Currency::Gel => format!(
            "{sign}{},{fraction}{NO_BREAK_SPACE}₾",
            group_digits(whole, NO_BREAK_SPACE)
        ),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_uses_dollar_prefix_and_comma_grouping() {
        assert_eq!(format_price(100.0, Currency::Usd), "$100.00");
        assert_eq!(format_price(26650.0, Currency::Usd), "$26,650.00");
        assert_eq!(format_price(1_234_567.891, Currency::Usd), "$1,234,567.89");
    }

    #[test]
    fn gel_converts_with_the_canonical_rate() {
        let formatted = format_price(100.0, Currency::Gel);
        assert_eq!(formatted, "265,00\u{a0}₾");
        assert!(formatted.contains(&format!("{}", (100.0 * USD_TO_GEL_RATE).round())));
    }

    #[test]
    fn gel_groups_with_no_break_spaces() {
        assert_eq!(format_price(10000.0, Currency::Gel), "26\u{a0}500,00\u{a0}₾");
    }

    #[test]
    fn zero_and_negative_amounts_pass_through() {
        assert_eq!(format_price(0.0, Currency::Usd), "$0.00");
        assert_eq!(format_price(-100.0, Currency::Usd), "-$100.00");
        assert_eq!(format_price(-100.0, Currency::Gel), "-265,00\u{a0}₾");
    }

    #[test]
    fn very_large_amounts_keep_every_digit() {
        assert_eq!(
            format_price(1e18, Currency::Usd),
            "$1,000,000,000,000,000,000.00"
        );
        assert_eq!(
            format_price(-1e18, Currency::Usd),
            "-$1,000,000,000,000,000,000.00"
        );
        assert!(format_price(1e18, Currency::Gel).starts_with("2\u{a0}650\u{a0}000"));
    }

    #[test]
    fn negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_price(-0.001, Currency::Usd), "$0.00");
    }

    #[test]
    fn non_finite_amounts_do_not_panic() {
        assert_eq!(format_price(f64::NAN, Currency::Usd), "$NaN");
        assert_eq!(format_price(f64::INFINITY, Currency::Gel), "∞\u{a0}₾");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("gel".parse::<Currency>(), Ok(Currency::Gel));
        assert!(matches!(
            "EUR".parse::<Currency>(),
            Err(QuoteError::InvalidKey { kind: "currency", .. })
        ));
    }

    #[test]
    fn rate_label_matches_constant() {
        assert_eq!(exchange_rate_label(), "1 USD = 2.65 ₾");
    }
}
