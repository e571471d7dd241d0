use dioxus::prelude::*;
use store::{normalize_path, Page};

use crate::routes::Route;

/// Catch-all view. When the path only differs from a real page by a trailing
/// `/` or a query, that page is offered as a link.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let requested = format!("/{}", segments.join("/"));
    let path = normalize_path(&requested).to_string();
    let suggestion = Page::from_path(&path);
    tracing::debug!("No route for {}", requested);

    rsx! {
        section {
            h2 { "Page not found" }
            p {
                class: "muted",
                "The route "
                code { "{requested}" }
                " does not exist."
            }
            if let Some(page) = suggestion {
                p {
                    "Did you mean "
                    Link { to: Route::from(page), "{page.path()}" }
                    "?"
                }
            }
        }
    }
}
