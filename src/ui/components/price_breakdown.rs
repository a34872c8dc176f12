use dioxus::prelude::*;
use quote_engine::{rates::surcharge_label, PriceBreakdown};

use crate::{domain::AppState, ui::theme};

/// Line-by-line view of how an adjusted transport price was built.
#[component]
pub fn PriceBreakdownCard(breakdown: PriceBreakdown) -> Element {
    let state = use_context::<Signal<AppState>>();
    let base = state.with(|st| st.format_price(breakdown.base_price));
    let total = state.with(|st| st.format_price(breakdown.total_price as f64));
    let vehicle = breakdown.vehicle_rate();

    let factors = [
        (
            format!("{} {}", vehicle.icon, vehicle.name),
            breakdown.vehicle_multiplier,
        ),
        (
            breakdown.condition.label().to_string(),
            breakdown.condition_multiplier,
        ),
        (
            breakdown.transport_mode.label().to_string(),
            breakdown.transport_multiplier,
        ),
    ];

    rsx! {
        div { class: "{theme::PANEL} space-y-2 text-sm",
            h3 { class: "{theme::SECTION_TITLE}", "Price breakdown" }
            div { class: "flex justify-between",
                span { class: "{theme::TEXT_MUTED}", "Base transport price" }
                span { class: "price-figure", "{base}" }
            }
            for (label, multiplier) in factors {
                div { class: "flex justify-between",
                    span { class: "{theme::TEXT_MUTED}", "{label}" }
                    span { class: "price-figure", "×{multiplier} ({surcharge_label(multiplier)})" }
                }
            }
            div { class: "mt-2 flex justify-between border-t border-slate-800 pt-2",
                span { class: "font-semibold text-sky-200", "Transport total" }
                span { class: "price-figure text-lg font-bold text-sky-200", "{total}" }
            }
        }
    }
}
