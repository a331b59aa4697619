use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn PrayerCard(label: &'static str, time: String) -> Element {
    rsx! {
        div { class: "prayer-card",
            div {
                h2 { class: "prayer-card__label", "{label}" }
                span { class: "prayer-card__time", "{time}" }
            }
        }
    }
}
