use dioxus::prelude::*;
use store::catalog;

use crate::routes::Route;
use crate::session::use_session;
use crate::views::DetailsDialog;

#[component]
pub fn Memberships() -> Element {
    let mut details = use_signal(|| Option::<Vec<String>>::None);

    rsx! {
        section {
            h2 { "Memberships" }
            div {
                class: "card-grid",
                for plan in catalog::PLANS {
                    PlanCard {
                        key: "{plan.id}",
                        plan_id: plan.id,
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
fn PlanCard(plan_id: &'static str, on_details: EventHandler<Vec<String>>) -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let Some(plan) = catalog::find_plan(plan_id) else {
        return rsx! {};
    };
    let price = plan.price_label();

    rsx! {
        article {
            class: "card plan {plan.tier}",
            h3 {
                class: "card-title",
                span { "{plan.name}" }
                span { "{price}" }
            }
            ul {
                class: "muted",
                for perk in plan.perks {
                    li { key: "{perk}", "{perk}" }
                }
            }
            div {
                class: "actions",
                button {
                    onclick: move |_| {
                        session.write().select_plan(plan_id);
                        nav.push(Route::Checkout {});
                    },
                    "Choose"
                }
                button {
                    class: "btn-ghost",
                    onclick: move |_| on_details.call(plan.details()),
                    "Details"
                }
            }
        }
    }
}
