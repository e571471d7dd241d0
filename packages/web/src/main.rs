use dioxus::prelude::*;

use ui::{Route, SessionProvider};

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    #[cfg(feature = "web")]
    {
        use std::rc::Rc;

        // Keep the route in the location fragment (`#/classes`) so the app can be
        // served as static files and back/forward stay with the browser.
        let history = Rc::new(dioxus::web::HashHistory::new(false));
        dioxus::LaunchBuilder::new()
            .with_cfg(dioxus::web::Config::new().history(history))
            .launch(App);
    }

    #[cfg(not(feature = "web"))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }

        SessionProvider {
            Startup {}
            Router::<Route> {}
        }
    }
}

#[component]
fn Startup() -> Element {
    let config = ui::use_config();
    use_effect(move || {
        tracing::info!(
            "Fitness First web client started; session at {}",
            ui::storage_location(&config.storage.key)
        );
    });
    rsx! {}
}
