use dioxus::prelude::*;
use store::Page;

use crate::layout::AppLayout;
use crate::views::{Checkout, Classes, Dashboard, Home, Memberships, NotFound, SignIn, Trainers};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/classes")]
        Classes {},
        #[route("/trainers")]
        Trainers {},
        #[route("/memberships")]
        Memberships {},
        #[route("/checkout")]
        Checkout {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/signin")]
        SignIn {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Classes => Route::Classes {},
            Page::Trainers => Route::Trainers {},
            Page::Memberships => Route::Memberships {},
            Page::Checkout => Route::Checkout {},
            Page::Dashboard => Route::Dashboard {},
            Page::SignIn => Route::SignIn {},
        }
    }
}

impl Route {
    /// The named page behind this route; `None` for not-found.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Home {} => Some(Page::Home),
            Route::Classes {} => Some(Page::Classes),
            Route::Trainers {} => Some(Page::Trainers),
            Route::Memberships {} => Some(Page::Memberships),
            Route::Checkout {} => Some(Page::Checkout),
            Route::Dashboard {} => Some(Page::Dashboard),
            Route::SignIn {} => Some(Page::SignIn),
            Route::NotFound { .. } => None,
        }
    }
}
