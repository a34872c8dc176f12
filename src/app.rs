use std::rc::Rc;

use dioxus::{prelude::*, signals::Signal};
use dioxus_logger::tracing;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, LandedCostPage, RatesPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{default_store, PreferenceStore},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/landed-cost")]
    LandedCost {},
    #[route("/rates")]
    Rates {},
}

/// Preference storage shared through context.
#[derive(Clone)]
pub struct Preferences(pub Rc<dyn PreferenceStore>);

#[component]
pub fn App() -> Element {
    let preferences = use_context_provider(|| Preferences(default_store()));

    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        let preferences = preferences.clone();
        move || {
            if let Some(saved) = preferences.0.load() {
                tracing::info!("Restored saved preferences");
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Saves the current selections. Failures are logged; quoting keeps working.
pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    let Some(preferences) = try_consume_context::<Preferences>() else {
        tracing::warn!("No preference store in context; selections not saved");
        return;
    };
    if let Err(err) = preferences.0.save(&snapshot) {
        tracing::warn!("Failed to persist preferences: {err}");
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn LandedCost() -> Element {
    rsx! { Shell { LandedCostPage {} } }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}
