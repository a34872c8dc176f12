use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::{components::currency_selector::CurrencySelector, theme};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚢" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "US auctions → Georgia · {version_label()}" }
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-center",
                        NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "🚗 Vehicle quote" }
                        NavButton { active: matches!(current_route, Route::LandedCost {}), onclick: move |_| { nav.push(Route::LandedCost {}); }, label: "📦 Landed cost" }
                        NavButton { active: matches!(current_route, Route::Rates {}), onclick: move |_| { nav.push(Route::Rates {}); }, label: "📋 Rates" }
                    }

                    div { class: "flex justify-end",
                        CurrencySelector {}
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
