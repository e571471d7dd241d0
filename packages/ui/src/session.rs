//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{GymConfig, SessionState, SessionStore};

use crate::backend::{make_store, AppBackend};
use crate::notices::{use_advisor, Notices};

const GYM_TOML: &str = include_str!("../gym.toml");

pub type AppSession = Signal<SessionStore<AppBackend>>;

/// Get the session store. Writing through the signal re-renders every reader.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Snapshot of the current session state for rendering.
pub fn use_session_state() -> SessionState {
    use_session().read().state().clone()
}

pub fn use_config() -> GymConfig {
    use_context::<GymConfig>()
}

/// Provider component that loads the config and the persisted session.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_context_provider(|| GymConfig::from_toml_or_default(GYM_TOML));
    use_context_provider(|| Signal::new(make_store(&config.storage.key)));
    use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        {children}
    }
}

/// Button that signs the current user out and returns to the home page.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "btn-ghost".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let mut advisor = use_advisor();

    rsx! {
        button {
            class: "{class}",
            title: "Sign out",
            onclick: move |_| {
                let outcome = session.write().sign_out();
                advisor.advise(&outcome);
            },
            "{label}"
        }
    }
}
