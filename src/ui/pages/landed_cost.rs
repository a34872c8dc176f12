use dioxus::prelude::*;
use quote_engine::{compute_landed_cost, rates::STATE_RECORDS, LandedCostResult};

use crate::{
    app::persist_user_state,
    domain::AppState,
    ui::{
        components::{
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        pages::parse_usd_amount,
        theme,
    },
};

#[component]
pub fn LandedCostPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let saved = state.with(|st| st.landed.clone());
    let mut price_input = use_signal(|| {
        saved
            .vehicle_price
            .map(|price| format!("{price:.0}"))
            .unwrap_or_default()
    });
    let mut state_code = use_signal(|| saved.state_code.clone());
    let mut result = use_signal(|| None::<LandedCostResult>);

    let ready = !price_input().trim().is_empty() && !state_code().is_empty();

    let on_calculate = move |evt: FormEvent| {
        evt.prevent_default();
        let code = state_code();
        let calculation = parse_usd_amount(&price_input(), "vehicle price").and_then(|price| {
            compute_landed_cost(&code, price).map_err(|err| err.to_string())
        });

        match calculation {
            Ok(landed) => {
                state.with_mut(|st| {
                    st.landed.state_code = code.clone();
                    st.landed.vehicle_price = Some(landed.vehicle_price);
                });
                persist_user_state(&state);
                if landed.used_fallback() {
                    push_toast(
                        toasts,
                        ToastKind::Info,
                        format!("No rate for state {code}; using the default transport cost."),
                    );
                }
                result.set(Some(landed));
            }
            Err(message) => {
                result.set(None);
                push_toast(toasts, ToastKind::Error, message);
            }
        }
    };

    let display = move |amount: f64| state.with(|st| st.format_price(amount));

    rsx! {
        div { class: "grid gap-6 md:grid-cols-[2fr_3fr]",
            form { class: "{theme::PANEL} space-y-4", onsubmit: on_calculate,
                h2 { class: "{theme::SECTION_TITLE}", "Landed cost calculator" }
                div {
                    label { class: "{theme::LABEL}", "Vehicle price (USD)" }
                    input {
                        class: "{theme::INPUT}",
                        r#type: "text",
                        placeholder: "e.g. 25000",
                        value: price_input(),
                        oninput: move |evt| price_input.set(evt.value()),
                    }
                }
                div {
                    label { class: "{theme::LABEL}", "Origin state" }
                    select {
                        class: "{theme::INPUT}",
                        value: state_code(),
                        onchange: move |evt| state_code.set(evt.value()),
                        option { value: "", "Choose a state" }
                        for record in STATE_RECORDS.iter() {
                            option {
                                key: "{record.code}",
                                value: "{record.code}",
                                selected: record.code == state_code(),
                                "{record.name_ka} ({record.name})"
                            }
                        }
                    }
                }
                button {
                    class: theme::btn_primary(ready),
                    r#type: "submit",
                    disabled: !ready,
                    "Calculate total"
                }
            }

            match result() {
                Some(landed) => rsx! {
                    div { class: "space-y-4",
                        div { class: "grid gap-4 sm:grid-cols-2",
                            KpiCard {
                                title: "Vehicle price".to_string(),
                                value: display(landed.vehicle_price),
                                description: None,
                            }
                            KpiCard {
                                title: "Transport".to_string(),
                                value: display(f64::from(landed.transport_cost)),
                                description: Some(format!("From {}", landed.origin_display_name)),
                            }
                            KpiCard {
                                title: "Total cost".to_string(),
                                value: display(landed.total_cost),
                                description: None,
                            }
                            KpiCard {
                                title: "Delivery time".to_string(),
                                value: format!("{} days", landed.estimated_days),
                                description: Some("Estimated, from auction pickup".to_string()),
                            }
                        }
                        p { class: "text-xs {theme::TEXT_MUTED}",
                            "Includes ocean freight, customs clearance and delivery to Rustavi."
                        }
                    }
                },
                None => rsx! {
                    div { class: "{theme::PANEL} text-sm {theme::TEXT_MUTED}",
                        "Enter a vehicle price and origin state to see the delivered total."
                    }
                },
            }
        }
    }
}
