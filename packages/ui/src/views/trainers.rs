use dioxus::prelude::*;
use store::catalog;

#[component]
pub fn Trainers() -> Element {
    rsx! {
        section {
            h2 { "Trainers" }
            div {
                class: "card-grid",
                for trainer in catalog::TRAINERS {
                    article {
                        key: "{trainer.id}",
                        class: "card",
                        h3 { "{trainer.name}" }
                        p { class: "muted", "Focus: {trainer.focus}" }
                        p { "{trainer.bio}" }
                    }
                }
            }
        }
    }
}
