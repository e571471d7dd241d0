use dioxus::prelude::*;

use ui::{Route, SessionProvider};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            Startup {}
            Router::<Route> {}
        }
    }
}

/// Logs where this install keeps its session.
#[component]
fn Startup() -> Element {
    let config = ui::use_config();
    use_effect(move || {
        tracing::info!(
            "Fitness First desktop client started; session at {}",
            ui::storage_location(&config.storage.key)
        );
    });
    rsx! {}
}
