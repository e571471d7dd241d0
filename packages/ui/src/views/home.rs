use dioxus::prelude::*;
use store::catalog;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let mut category = use_signal(|| "Any".to_string());
    let mut day = use_signal(|| "Any".to_string());
    let mut status = use_signal(String::new);
    let from_price = starting_price();

    let find_class = move |evt: FormEvent| {
        evt.prevent_default();
        let message = match catalog::quick_match(&category(), &day()) {
            Some(c) => format!(
                "We found {} on {} — coach {}.",
                c.title,
                c.schedule(),
                c.trainer_name()
            ),
            None => "No match found. Try different filters.".to_string(),
        };
        status.set(message);
    };

    rsx! {
        section {
            class: "hero",
            div {
                class: "panel",
                h1 { "Train smarter, feel stronger" }
                p {
                    class: "muted",
                    "Book expert-led classes, track your membership, and manage your training — all in one place."
                }
                div {
                    class: "actions",
                    button {
                        "aria-label": "Browse classes",
                        onclick: move |_| {
                            nav.push(Route::Classes {});
                        },
                        "Browse classes"
                    }
                    button {
                        class: "btn-ghost",
                        "aria-label": "See membership plans",
                        onclick: move |_| {
                            nav.push(Route::Memberships {});
                        },
                        "Memberships"
                    }
                }
            }
            div {
                class: "panel",
                form {
                    id: "quick-book",
                    onsubmit: find_class,
                    h2 { "Quick book" }
                    div {
                        class: "row",
                        label {
                            span { class: "muted", "Category" }
                            select {
                                name: "cat",
                                value: category(),
                                onchange: move |evt| category.set(evt.value()),
                                option { value: "Any", "Any" }
                                for c in catalog::categories() {
                                    option { key: "{c}", value: c, "{c}" }
                                }
                            }
                        }
                        label {
                            span { class: "muted", "Day" }
                            select {
                                name: "day",
                                value: day(),
                                onchange: move |evt| day.set(evt.value()),
                                option { value: "Any", "Any" }
                                for d in catalog::days() {
                                    option { key: "{d}", value: d, "{d}" }
                                }
                            }
                        }
                    }
                    button { r#type: "submit", "Find a class" }
                    div { class: "status", "aria-live": "polite", "{status}" }
                }
            }
        }

        section {
            class: "highlights",
            "aria-label": "Highlights",
            div {
                class: "card-grid",
                article {
                    class: "card",
                    h3 { "Expert Coaches" }
                    p { class: "muted", "Certified trainers who tailor sessions for any level." }
                }
                article {
                    class: "card",
                    h3 { "Flexible Plans" }
                    p { class: "muted", "Start from {from_price}/month. Upgrade anytime." }
                }
                article {
                    class: "card",
                    h3 { "Modern Equipment" }
                    p { class: "muted", "Curated strength, cardio, and mobility zones." }
                }
            }
        }
    }
}

/// Cheapest plan price, for the highlights copy.
fn starting_price() -> String {
    let cheapest = catalog::PLANS
        .iter()
        .map(|p| p.price)
        .fold(f64::INFINITY, f64::min);
    catalog::format_money(cheapest)
}
