use dioxus::prelude::*;
use quote_engine::{exchange_rate_label, Currency};

use crate::{app::persist_user_state, domain::AppState, ui::theme};

/// USD/GEL switch shown in the header.
#[component]
pub fn CurrencySelector() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let current = state.with(|st| st.currency);

    rsx! {
        div { class: "flex items-center gap-2",
            div { class: "flex rounded-lg bg-slate-800 p-1",
                for currency in Currency::ALL {
                    button {
                        key: "{currency.code()}",
                        class: theme::toggle_button(currency == current),
                        title: "{currency.code()}",
                        onclick: move |_| {
                            if state.with(|st| st.currency) != currency {
                                state.with_mut(|st| st.currency = currency);
                                persist_user_state(&state);
                            }
                        },
                        "{currency.symbol()}"
                    }
                }
            }
            if current == Currency::Gel {
                span { class: "text-xs text-slate-500", "({exchange_rate_label()})" }
            }
        }
    }
}
