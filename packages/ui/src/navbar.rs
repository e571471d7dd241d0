use dioxus::prelude::*;
use store::Page;

use crate::icons::{FaBars, FaDumbbell};
use crate::routes::Route;
use crate::session::{use_config, use_session_state, SignOutButton};
use crate::Icon;

/// Pages listed in the primary navigation, in display order.
const NAV_LINKS: [(Page, &str); 5] = [
    (Page::Home, "Home"),
    (Page::Classes, "Classes"),
    (Page::Trainers, "Trainers"),
    (Page::Memberships, "Memberships"),
    (Page::Dashboard, "Dashboard"),
];

/// `aria-current` value for a nav link to `page`.
fn aria_current(current: Option<Page>, page: Page) -> Option<&'static str> {
    (current == Some(page)).then_some("page")
}

#[component]
pub fn Navbar() -> Element {
    let config = use_config();
    let state = use_session_state();
    let mut menu_open = use_signal(|| false);
    let nav = use_navigator();
    let current = use_route::<Route>().page();

    rsx! {
        header {
            class: "site",
            div {
                class: "container nav",
                div {
                    class: "brand",
                    "aria-label": "Fitness brand",
                    span { class: "dot", "aria-hidden": "true",
                        Icon { icon: FaDumbbell, width: 10, height: 10 }
                    }
                    Link { to: Route::Home {}, class: "brand-name", "{config.site.name}" }
                }

                nav {
                    class: if menu_open() { "navlinks open" } else { "navlinks" },
                    "aria-label": "Primary",
                    for (page, label) in NAV_LINKS {
                        Link {
                            key: "{page.path()}",
                            to: Route::from(page),
                            active_class: "active",
                            aria_current: aria_current(current, page),
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }

                div {
                    class: "toolbar",
                    if let Some(ref user) = state.user {
                        span { class: "muted", "aria-live": "polite", "Hello, {user.display_name}" }
                        SignOutButton {}
                    } else {
                        button {
                            class: "btn-ghost",
                            title: "Sign in",
                            onclick: move |_| {
                                nav.push(Route::SignIn {});
                            },
                            "Sign in"
                        }
                    }
                    button {
                        class: "menu-btn btn-ghost",
                        "aria-label": "Open menu",
                        "aria-expanded": "{menu_open()}",
                        title: "Menu",
                        onclick: move |_| menu_open.toggle(),
                        Icon { icon: FaBars, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_current_link_is_marked() {
        let current = Route::Classes {}.page();
        let marked: Vec<_> = NAV_LINKS
            .iter()
            .filter(|(page, _)| aria_current(current, *page).is_some())
            .map(|(_, label)| *label)
            .collect();
        assert_eq!(marked, vec!["Classes"]);
        assert_eq!(aria_current(current, Page::Classes), Some("page"));
    }

    #[test]
    fn test_not_found_marks_nothing() {
        let current = Route::NotFound { segments: vec!["nope".to_string()] }.page();
        assert!(NAV_LINKS
            .iter()
            .all(|(page, _)| aria_current(current, *page).is_none()));
    }
}
