use dioxus::prelude::*;

/// Labelled dropdown over a list of region names.
#[allow(non_snake_case)]
#[component]
pub fn RegionSelect(
    id: String,
    label: String,
    options: Vec<String>,
    selected: String,
    /// Sets `aria-busy`; nothing is drawn for it.
    busy: bool,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "region-select",
            label { r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                aria_busy: "{busy}",
                onchange: move |evt: FormEvent| on_select.call(evt.value()),
                for name in options {
                    option {
                        key: "{name}",
                        value: "{name}",
                        selected: name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
