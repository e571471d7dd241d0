use dioxus::prelude::*;
use store::NoticeLevel;

use crate::notices::use_notices;

/// Transient notices pinned to the top of the viewport.
#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_notices();
    let entries = notices.read().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    role: "status",
                    "aria-live": "polite",
                    class: match notice.level {
                        NoticeLevel::Ok => "notice ok",
                        NoticeLevel::Warn => "notice warn",
                        NoticeLevel::Error => "notice error",
                    },
                    onclick: move |_| notices.write().dismiss(notice.id),
                    "{notice.message}"
                }
            }
        }
    }
}
