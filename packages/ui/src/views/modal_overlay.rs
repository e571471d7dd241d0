use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "card modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Read-only summary of a class or plan.
#[component]
pub fn DetailsDialog(lines: Vec<String>, on_close: EventHandler<()>) -> Element {
    let mut lines = lines.into_iter();
    let title = lines.next().unwrap_or_default();

    rsx! {
        ModalOverlay {
            on_close: on_close,
            h3 { "{title}" }
            for (i, line) in lines.enumerate() {
                p { key: "{i}", class: "muted", "{line}" }
            }
            button { onclick: move |_| on_close.call(()), "Close" }
        }
    }
}

/// Yes/no prompt. Only `on_confirm` should act on the user's behalf.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_cancel,
            p { "{message}" }
            div {
                class: "actions",
                button { onclick: move |_| on_confirm.call(()), "Confirm" }
                button { class: "btn-ghost", onclick: move |_| on_cancel.call(()), "Keep it" }
            }
        }
    }
}
