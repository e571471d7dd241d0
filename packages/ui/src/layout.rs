use dioxus::prelude::*;

use crate::navbar::Navbar;
use crate::notice_stack::NoticeStack;
use crate::routes::Route;
use crate::session::use_config;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Page chrome shared by every route: header, main outlet and footer.
#[component]
pub fn AppLayout() -> Element {
    let config = use_config();
    let year = current_year();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        a { href: "#main", class: "skip-link", "Skip to content" }
        Navbar {}
        NoticeStack {}

        main {
            id: "main",
            div {
                class: "container",
                id: "view",
                Outlet::<Route> {}
            }
        }

        footer {
            class: "container",
            p { "© {year} {config.site.name} — UI Prototype." }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
