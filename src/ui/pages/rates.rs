use dioxus::prelude::*;
use quote_engine::{
    rates::{surcharge_label, STATE_RECORDS, VEHICLE_TYPE_RATES},
    Condition, TransportMode,
};

use crate::{domain::AppState, ui::theme};

const TH: &str = "px-3 py-2 text-left text-xs font-semibold uppercase tracking-wide text-slate-500";
const TD: &str = "px-3 py-2";

/// Read-only view of every rate table the quotes draw on.
#[component]
pub fn RatesPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let states = STATE_RECORDS
        .iter()
        .map(|record| {
            (
                record,
                state.with(|st| st.format_price(f64::from(record.base_transport_cost))),
                record.common_auctions.join(", "),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::SECTION_TITLE}", "Vehicle types" }
                table { class: "mt-4 w-full text-sm",
                    thead {
                        tr {
                            th { class: TH, "Type" }
                            th { class: TH, "Category" }
                            th { class: TH, "Multiplier" }
                            th { class: TH, "Max size" }
                        }
                    }
                    tbody {
                        for rate in VEHICLE_TYPE_RATES.iter() {
                            tr { key: "{rate.id}", class: "border-t border-slate-800",
                                td { class: TD, "{rate.icon} {rate.name} · {rate.name_ka}" }
                                td { class: TD, "{rate.category.label()}" }
                                td { class: TD, "×{rate.multiplier} ({rate.surcharge_label()})" }
                                td { class: "{TD} {theme::TEXT_MUTED}",
                                    "{rate.dimensions.length}, {rate.dimensions.weight}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "grid gap-6 md:grid-cols-2",
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "Condition" }
                    ul { class: "mt-4 space-y-2 text-sm",
                        for condition in Condition::ALL {
                            li { key: "{condition.key()}", class: "flex justify-between",
                                span { "{condition.label()}" }
                                span { class: "price-figure",
                                    "×{condition.multiplier()} ({surcharge_label(condition.multiplier())})"
                                }
                            }
                        }
                    }
                }
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "Transport" }
                    ul { class: "mt-4 space-y-2 text-sm",
                        for mode in TransportMode::ALL {
                            li { key: "{mode.key()}", class: "flex justify-between",
                                span { "{mode.label()}" }
                                span { class: "price-figure",
                                    "×{mode.multiplier()} ({surcharge_label(mode.multiplier())})"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "{theme::PANEL}",
                h2 { class: "{theme::SECTION_TITLE}", "Transport from US states" }
                table { class: "mt-4 w-full text-sm",
                    thead {
                        tr {
                            th { class: TH, "State" }
                            th { class: TH, "Transport" }
                            th { class: TH, "Days" }
                            th { class: TH, "Auctions" }
                        }
                    }
                    tbody {
                        for (record, cost, auctions) in states {
                            tr { key: "{record.code}", class: "border-t border-slate-800",
                                td { class: TD, "{record.code} · {record.name_ka} ({record.name})" }
                                td { class: "{TD} price-figure", "{cost}" }
                                td { class: TD, "{record.estimated_days}" }
                                td { class: "{TD} {theme::TEXT_MUTED}", "{auctions}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
