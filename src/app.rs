use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::RowStore,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ComparePage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        format::DisplaySettings,
        persistence::{load_display_settings, save_display_settings},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/compare")]
    Compare {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    // Product rows are session-only and start from the two-row floor.
    let store = use_signal(RowStore::default);
    use_context_provider(|| store.clone());

    let settings = use_signal(DisplaySettings::default);
    use_hook({
        let mut settings = settings.clone();
        move || {
            if let Some(saved) = load_display_settings() {
                settings.set(saved);
            }
        }
    });
    use_context_provider(|| settings.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_display_settings(settings: &Signal<DisplaySettings>) {
    let snapshot = settings.with(|st| st.clone());
    if let Err(err) = save_display_settings(&snapshot) {
        println!("Failed to persist display settings: {err}");
    }
}

#[component]
pub fn Compare() -> Element {
    rsx! { Shell { ComparePage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
