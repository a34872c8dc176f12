use dioxus::prelude::*;
use quote_engine::{adjusted_price, Condition, TransportMode, VehicleKind};

use crate::{
    app::persist_user_state,
    domain::{AppState, CalculatorInputs},
    ui::{
        components::{
            price_breakdown::PriceBreakdownCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        pages::parse_usd_amount,
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let inputs = state.with(|st| st.calculator.clone());
    let mut base_input = use_signal(|| format!("{:.0}", inputs.base_price));

    let quote = adjusted_price(
        inputs.base_price,
        inputs.vehicle_type,
        inputs.condition,
        inputs.transport_mode,
    );
    let selected = inputs.vehicle_type.rate();
    let examples = selected.examples.join(", ");

    let on_apply_base = move |evt: FormEvent| {
        evt.prevent_default();
        let current = state.with(|st| st.calculator.clone());
        let parsed = parse_usd_amount(&base_input(), "base price").and_then(|base| {
            adjusted_price(base, current.vehicle_type, current.condition, current.transport_mode)
                .map(|_| base)
                .map_err(|err| err.to_string())
        });
        match parsed {
            Ok(base) => {
                update_inputs(state, |inputs| inputs.base_price = base);
                push_toast(toasts, ToastKind::Success, "Base transport price updated.");
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::SECTION_TITLE}", "Vehicle type" }
                div { class: "mt-4 grid gap-3 sm:grid-cols-2 lg:grid-cols-4",
                    for kind in VehicleKind::ALL {
                        button {
                            key: "{kind.id()}",
                            class: theme::choice_button(kind == inputs.vehicle_type),
                            onclick: move |_| update_inputs(state, |inputs| inputs.vehicle_type = kind),
                            div { class: "text-2xl", "{kind.rate().icon}" }
                            div { class: "font-semibold", "{kind.rate().name}" }
                            div { class: "text-xs opacity-70", "{kind.rate().name_ka}" }
                            div { class: "mt-1 text-xs", "{kind.rate().surcharge_label()}" }
                        }
                    }
                }
                div { class: "mt-4 grid gap-2 text-xs {theme::TEXT_MUTED} sm:grid-cols-4",
                    span { "Length: {selected.dimensions.length}" }
                    span { "Width: {selected.dimensions.width}" }
                    span { "Height: {selected.dimensions.height}" }
                    span { "Weight: {selected.dimensions.weight}" }
                }
                p { class: "mt-2 text-xs {theme::TEXT_MUTED}",
                    "e.g. {examples}"
                }
            }

            div { class: "grid gap-6 md:grid-cols-2",
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "Condition" }
                    div { class: "mt-4 grid gap-2",
                        for condition in Condition::ALL {
                            button {
                                key: "{condition.key()}",
                                class: theme::choice_button(condition == inputs.condition),
                                onclick: move |_| update_inputs(state, |inputs| inputs.condition = condition),
                                "{condition.label()} · ×{condition.multiplier()}"
                            }
                        }
                    }
                }
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "Transport" }
                    div { class: "mt-4 grid gap-2",
                        for mode in TransportMode::ALL {
                            button {
                                key: "{mode.key()}",
                                class: theme::choice_button(mode == inputs.transport_mode),
                                onclick: move |_| update_inputs(state, |inputs| inputs.transport_mode = mode),
                                "{mode.label()} · ×{mode.multiplier()}"
                            }
                        }
                    }
                }
            }

            div { class: "grid gap-6 md:grid-cols-2",
                form { class: "{theme::PANEL} space-y-3", onsubmit: on_apply_base,
                    label { class: "{theme::LABEL}", "Base transport price (USD)" }
                    input {
                        class: "{theme::INPUT}",
                        r#type: "text",
                        value: base_input(),
                        oninput: move |evt| base_input.set(evt.value()),
                    }
                    button { class: theme::btn_primary(true), r#type: "submit", "Update base price" }
                }
                match quote {
                    Ok(breakdown) => rsx! { PriceBreakdownCard { breakdown } },
                    Err(err) => rsx! {
                        div { class: "{theme::PANEL} text-sm text-rose-300", "{err}" }
                    },
                }
            }
        }
    }
}

fn update_inputs(mut state: Signal<AppState>, apply: impl FnOnce(&mut CalculatorInputs)) {
    state.with_mut(|st| apply(&mut st.calculator));
    persist_user_state(&state);
}
