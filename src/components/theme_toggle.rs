use dioxus::prelude::*;

use crate::shared::theme::Theme;

/// Page-wide presentation mode, shared through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    pub fn toggle(&self) {
        let mut current = self.current;
        let next = current().toggled();
        current.set(next);
    }
}

/// Call once at the app root.
pub fn use_theme_provider() -> ThemeContext {
    let current = use_signal(Theme::default);
    use_context_provider(|| ThemeContext { current })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[allow(non_snake_case)]
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let label = theme.get().toggle_label();

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            onclick: move |_| theme.toggle(),
            "{label}"
        }
    }
}
