pub mod currency_selector;
pub mod kpi_card;
pub mod price_breakdown;
pub mod toast;
