//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_store, storage_location, AppBackend};

pub mod views;

mod layout;
pub use layout::{AppLayout, MAIN_CSS};

mod routes;
pub use routes::Route;

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{
    use_config, use_session, use_session_state, AppSession, SessionProvider, SignOutButton,
};

pub mod notices;
pub use notices::{push_notice, use_advisor, use_notices, Advisor, Notice, Notices};

mod notice_stack;
pub use notice_stack::NoticeStack;
