use dioxus::prelude::*;

use crate::api::{get_cities, get_provinces, get_schedule};
use crate::components::{Clock, PrayerCard, RegionSelect, ThemeToggle};
use crate::shared::error::FetchError;
use crate::shared::schedule::cards;
use crate::shared::today::{today_key, Clock as _, DatePolicy, SystemClock};
use crate::shared::view_state::{Effect, LoadStatus, ViewState};

/// What the page shows when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep the stale or empty view, like a slow network would.
    #[default]
    Silent,
    /// Offer a small "Coba lagi" button.
    OfferRetry,
}

impl FailurePolicy {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "retry" => FailurePolicy::OfferRetry,
            _ => FailurePolicy::Silent,
        }
    }
}

/// Run the fetches a state transition asked for, feeding results back.
fn dispatch(state: Signal<ViewState>, date_policy: DatePolicy, effects: Vec<Effect>) {
    for effect in effects {
        let mut state = state;
        spawn(async move {
            match effect {
                Effect::LoadProvinces { ticket } => {
                    let result = get_provinces().await.map_err(FetchError::from);
                    state.write().apply_provinces(ticket, result);
                }
                Effect::LoadCities { province, ticket } => {
                    let result = get_cities(province).await.map_err(FetchError::from);
                    let next = state.write().apply_cities(ticket, result);
                    dispatch(state, date_policy, next);
                }
                Effect::LoadSchedule {
                    province,
                    city,
                    ticket,
                } => {
                    let result = get_schedule(province, city).await.map_err(FetchError::from);
                    let today = today_key(SystemClock.now(), date_policy);
                    state.write().apply_schedule(ticket, result, &today);
                }
            }
        });
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ScheduleView(
    #[props(default)] failure_policy: FailurePolicy,
    #[props(default)] date_policy: DatePolicy,
) -> Element {
    let mut state = use_signal(ViewState::default);

    // effects only run on the client, after hydration
    use_effect(move || {
        let effects = state.write().mount();
        dispatch(state, date_policy, effects);
    });

    let view = state.read();
    let province = view.selected_province().to_string();
    let city = view.selected_city().to_string();
    let provinces = view.provinces().value().clone();
    let cities = view.cities().value().clone();
    let today = view.today().cloned();
    let provinces_busy = *view.provinces().status() == LoadStatus::Loading;
    let cities_busy = *view.cities().status() == LoadStatus::Loading;
    let any_failed = view.provinces().failed().is_some()
        || view.cities().failed().is_some()
        || view.schedule().failed().is_some();
    drop(view);

    let tiles = cards(today.as_ref());

    rsx! {
        div { class: "container",
            div { class: "header",
                a {
                    class: "header__title",
                    href: "https://ibrahimrangkuti.github.io/jadwal-shalat",
                    target: "_blank",
                    "Jadwal Shalat"
                }
                ThemeToggle {}
            }
            h2 { class: "region__city", "{city}" }
            span { class: "region__province", "Provinsi {province}" }

            form { class: "selectors",
                RegionSelect {
                    id: "state".to_string(),
                    label: "Provinsi".to_string(),
                    options: provinces,
                    selected: province.clone(),
                    busy: provinces_busy,
                    on_select: move |p: String| {
                        let effects = state.write().select_province(p);
                        dispatch(state, date_policy, effects);
                    },
                }
                RegionSelect {
                    id: "city".to_string(),
                    label: "Kabupaten / Kota".to_string(),
                    options: cities,
                    selected: city.clone(),
                    busy: cities_busy,
                    on_select: move |c: String| {
                        let effects = state.write().select_city(c);
                        dispatch(state, date_policy, effects);
                    },
                }
            }

            if failure_policy == FailurePolicy::OfferRetry && any_failed {
                button {
                    r#type: "button",
                    class: "retry",
                    onclick: move |_| {
                        let effects = state.write().retry_failed();
                        dispatch(state, date_policy, effects);
                    },
                    "Coba lagi"
                }
            }

            p { class: "date-line",
                if let Some(day) = &today {
                    "{day.tanggal} | "
                    Clock {}
                }
            }

            div { class: "cards",
                for (label, time) in tiles {
                    PrayerCard { key: "{label}", label: label, time: time }
                }
            }
        }
        footer { class: "footer",
            p {
                "Made with ❤️ by "
                a { class: "footer__author", href: "https://www.instagram.com/ranqkuty", "ibrahimrangkuti" }
            }
        }
    }
}
