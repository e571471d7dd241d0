//! Mock sign-in form. Any non-empty email and password are accepted.

use dioxus::prelude::*;

use crate::notices::use_advisor;
use crate::session::use_session;

#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let mut advisor = use_advisor();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = session.write().sign_in(&email(), &password());
        password.set(String::new());
        advisor.advise(&outcome);
    };

    rsx! {
        section {
            h2 { "Sign in" }
            form {
                id: "signin-form",
                class: "row",
                onsubmit: submit,
                label {
                    span { class: "muted", "Email" }
                    input {
                        required: true,
                        name: "email",
                        class: "input",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label {
                    span { class: "muted", "Password" }
                    input {
                        required: true,
                        name: "password",
                        class: "input",
                        r#type: "password",
                        placeholder: "••••••••",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { r#type: "submit", "Sign in" }
            }
        }
    }
}
