use dioxus::prelude::*;
use store::PaymentForm;

use crate::notices::use_advisor;
use crate::routes::Route;
use crate::session::{use_session, use_session_state};

#[component]
pub fn Checkout() -> Element {
    let state = use_session_state();
    let nav = use_navigator();

    let Some(cart) = state.cart.as_ref() else {
        return rsx! {
            section {
                p { class: "muted", "Your cart is empty. Pick a membership first." }
                button {
                    onclick: move |_| {
                        nav.push(Route::Memberships {});
                    },
                    "Browse plans"
                }
            }
        };
    };

    let Some(plan) = state.cart_plan() else {
        tracing::warn!("Cart holds unknown plan {}", cart.plan_id);
        return rsx! {
            section {
                p { class: "muted", "The selected plan is no longer available." }
                button {
                    onclick: move |_| {
                        nav.push(Route::Memberships {});
                    },
                    "Browse plans"
                }
            }
        };
    };
    let price = plan.price_label();

    rsx! {
        section {
            h2 { "Checkout" }
            div {
                class: "card",
                h3 { "Plan: {plan.name} — {price}" }
                PaymentFormView {}
            }
        }
    }
}

/// Mock payment form. The fields are required but never checked or kept.
#[component]
fn PaymentFormView() -> Element {
    let mut session = use_session();
    let mut advisor = use_advisor();
    let mut name = use_signal(String::new);
    let mut card = use_signal(String::new);
    let mut expiry = use_signal(String::new);
    let mut cvc = use_signal(String::new);

    let pay = move |evt: FormEvent| {
        evt.prevent_default();
        let payment = PaymentForm {
            name_on_card: name(),
            card_number: card(),
            expiry: expiry(),
            cvc: cvc(),
        };
        let outcome = session.write().checkout(&payment);
        advisor.advise(&outcome);
    };

    rsx! {
        form {
            id: "checkout-form",
            class: "row",
            onsubmit: pay,
            label {
                span { class: "muted", "Name on card" }
                input {
                    required: true,
                    name: "name",
                    class: "input",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            label {
                span { class: "muted", "Card number" }
                input {
                    required: true,
                    name: "card",
                    inputmode: "numeric",
                    class: "input",
                    placeholder: "4242 4242 4242 4242",
                    value: card(),
                    oninput: move |evt| card.set(evt.value()),
                }
            }
            label {
                span { class: "muted", "Expiry" }
                input {
                    required: true,
                    name: "exp",
                    class: "input",
                    placeholder: "MM/YY",
                    value: expiry(),
                    oninput: move |evt| expiry.set(evt.value()),
                }
            }
            label {
                span { class: "muted", "CVC" }
                input {
                    required: true,
                    name: "cvc",
                    class: "input",
                    placeholder: "123",
                    value: cvc(),
                    oninput: move |evt| cvc.set(evt.value()),
                }
            }
            button { r#type: "submit", "Pay now" }
        }
    }
}
