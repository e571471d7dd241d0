use dioxus::prelude::*;
use store::NoticeLevel;

use crate::notices::use_advisor;
use crate::routes::Route;
use crate::session::{use_session, use_session_state};
use crate::views::ConfirmDialog;

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let mut advisor = use_advisor();
    let nav = use_navigator();
    let state = use_session_state();
    let mut confirming = use_signal(|| false);
    let mut confirming_reset = use_signal(|| false);

    let has_membership = state.membership.is_some();
    let booked = state.booked_classes();

    rsx! {
        section {
            h2 { "Your dashboard" }
            div {
                class: "card",
                h3 { "Membership" }
                if let Some(ref membership) = state.membership {
                    p {
                        "You have the "
                        strong { "{membership.name}" }
                        " plan at "
                        strong { {membership.price_label()} }
                        "."
                    }
                } else {
                    p { "No active membership." }
                }
                div {
                    class: "actions",
                    button {
                        class: "btn-ghost",
                        onclick: move |_| {
                            nav.push(Route::Memberships {});
                        },
                        "Change plan"
                    }
                    button {
                        class: "btn-ghost",
                        "aria-disabled": if has_membership { "false" } else { "true" },
                        onclick: move |_| {
                            if has_membership {
                                confirming.set(true);
                            }
                        },
                        "Cancel"
                    }
                }
            }

            div {
                class: "card",
                h3 { "Bookings" }
                ul {
                    if booked.is_empty() {
                        li { class: "muted", "No bookings yet." }
                    }
                    for class in booked {
                        li {
                            key: "{class.id}",
                            {format!("{} — {} with {}", class.title, class.schedule(), class.trainer_name())}
                        }
                    }
                }
                button {
                    class: "btn-ghost",
                    onclick: move |_| {
                        nav.push(Route::Classes {});
                    },
                    "Book another class"
                }
            }

            div {
                class: "actions",
                button {
                    class: "btn-ghost",
                    onclick: move |_| confirming_reset.set(true),
                    "Reset demo data"
                }
            }
        }

        if confirming() {
            ConfirmDialog {
                message: "Cancel your membership?",
                on_confirm: move |_| {
                    confirming.set(false);
                    let outcome = session.write().cancel_membership();
                    advisor.advise(&outcome);
                },
                on_cancel: move |_| confirming.set(false),
            }
        }

        if confirming_reset() {
            ConfirmDialog {
                message: "Clear your sign-in, bookings, membership and cart?",
                on_confirm: move |_| {
                    confirming_reset.set(false);
                    session.write().reset();
                    advisor.notify(NoticeLevel::Warn, "Demo data reset");
                },
                on_cancel: move |_| confirming_reset.set(false),
            }
        }
    }
}
