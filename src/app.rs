use dioxus::prelude::*;

use crate::components::{use_theme_provider, FailurePolicy, ScheduleView};
use crate::shared::today::DatePolicy;
use crate::MAIN_CSS;

// Baked in at build time, e.g. `JADWAL_FAILURE_POLICY=retry dx build`
fn failure_policy() -> FailurePolicy {
    option_env!("JADWAL_FAILURE_POLICY")
        .map(FailurePolicy::parse)
        .unwrap_or_default()
}

fn date_policy() -> DatePolicy {
    option_env!("JADWAL_DATE_POLICY")
        .map(DatePolicy::parse)
        .unwrap_or_default()
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let theme = use_theme_provider();
    let mode = theme.get();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Jadwal Shalat" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        // Theme class sits on the page root, not on <html>
        div { class: "page {mode.css_class()}",
            ScheduleView { failure_policy: failure_policy(), date_policy: date_policy() }
        }
    }
}
