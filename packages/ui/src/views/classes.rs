use dioxus::prelude::*;
use store::catalog::{self, ClassFilter};

use crate::notices::use_advisor;
use crate::session::use_session;
use crate::views::DetailsDialog;

#[component]
pub fn Classes() -> Element {
    let mut category = use_signal(|| "All".to_string());
    let mut search = use_signal(String::new);
    let mut details = use_signal(|| Option::<Vec<String>>::None);

    let filter = ClassFilter::default().category(category()).search(search());
    let classes = catalog::filter_classes(&filter);

    rsx! {
        section {
            h2 { "Classes" }
            div {
                class: "row",
                label {
                    span { class: "muted", "Filter by category" }
                    select {
                        id: "class-filter",
                        value: category(),
                        onchange: move |evt| category.set(evt.value()),
                        option { value: "All", "All" }
                        for c in catalog::categories() {
                            option { key: "{c}", value: c, "{c}" }
                        }
                    }
                }
                label {
                    span { class: "muted", "Search" }
                    input {
                        id: "class-search",
                        class: "input",
                        placeholder: "e.g., HIIT, Strength",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
            }
            div {
                class: "card-grid",
                id: "class-list",
                if classes.is_empty() {
                    p { class: "muted", "No classes." }
                }
                for class in classes {
                    ClassCard {
                        key: "{class.id}",
                        class_id: class.id,
                        on_details: move |lines| details.set(Some(lines)),
                    }
                }
            }
        }

        if let Some(lines) = details() {
            DetailsDialog {
                lines: lines,
                on_close: move |_| details.set(None),
            }
        }
    }
}

#[component]
fn ClassCard(class_id: &'static str, on_details: EventHandler<Vec<String>>) -> Element {
    let mut session = use_session();
    let mut advisor = use_advisor();
    let Some(class) = catalog::find_class(class_id) else {
        return rsx! {};
    };
    let coach = class.trainer_name();

    rsx! {
        article {
            class: "card",
            div {
                class: "card-title",
                h3 { "{class.title}" }
                span { class: "pill", "{class.category}" }
            }
            p {
                class: "muted",
                "Level: {class.level} • {class.day} {class.time} • Coach {coach}"
            }
            div {
                class: "actions",
                button {
                    onclick: move |_| {
                        let outcome = session.write().book_class(class_id);
                        advisor.advise(&outcome);
                    },
                    "Book"
                }
                button {
                    class: "btn-ghost",
                    onclick: move |_| on_details.call(class.details()),
                    "Details"
                }
            }
        }
    }
}
