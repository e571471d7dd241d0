use std::time::Duration;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::{Advisory, NoticeLevel};

use crate::routes::Route;
use crate::session::use_config;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a notice and remove it again after `dismiss_after`.
pub fn push_notice(
    notices: &mut Signal<Notices>,
    level: NoticeLevel,
    message: &str,
    dismiss_after: Duration,
) {
    let id = notices.write().push(level, message);
    let mut notices = *notices;
    spawn(async move {
        sleep(dismiss_after).await;
        notices.write().dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Turns action outcomes into notices and redirects.
#[derive(Clone, Copy)]
pub struct Advisor {
    notices: Signal<Notices>,
    nav: Navigator,
    dismiss_after: Duration,
}

impl Advisor {
    pub fn notify(&mut self, level: NoticeLevel, message: &str) {
        push_notice(&mut self.notices, level, message, self.dismiss_after);
    }

    /// Surface the outcome's advice, if any, and follow its redirect.
    pub fn advise(&mut self, outcome: &impl Advisory) {
        let Some(advice) = outcome.advice() else {
            return;
        };
        self.notify(advice.level, advice.message);
        if let Some(page) = advice.redirect {
            self.nav.push(Route::from(page));
        }
    }
}

pub fn use_advisor() -> Advisor {
    let config = use_config();
    Advisor {
        notices: use_notices(),
        nav: use_navigator(),
        dismiss_after: Duration::from_millis(config.notices.dismiss_after_ms),
    }
}
