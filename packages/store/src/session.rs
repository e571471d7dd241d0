//! # Session state and its transitions
//!
//! [`SessionState`] is the single record persisted between visits. Every user
//! action is a method on it that mutates in place and reports a typed outcome;
//! none of them fail. Outcomes that the user should hear about carry an
//! [`Advice`] (a notice plus an optional redirect).
//!
//! ## Persisted layout
//!
//! ```json
//! {
//!   "user": { "email": "ana@example.com", "name": "ana" },
//!   "bookings": ["c1", "c4"],
//!   "membership": { "id": "plus", "name": "Plus", "price": 34.99, "perks": ["Gym + Classes", "Sauna"] },
//!   "cart": { "planId": "premium" }
//! }
//! ```
//!
//! Each field is `#[serde(default)]`, so a partial object still loads and any
//! field that is missing falls back to its empty value.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{self, MembershipPlan};
use crate::routes::Page;

/// A signed-in (mock) user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
}

impl User {
    /// Build a user from an email address; the display name is the local part.
    pub fn from_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            display_name: display_name_for(email),
        }
    }
}

/// Text before the first `@`, or the whole address if it has none or the
/// local part is empty.
pub fn display_name_for(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => email.to_string(),
    }
}

/// Snapshot of a plan taken when checkout completes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub perks: Vec<String>,
}

impl From<&MembershipPlan> for Membership {
    fn from(plan: &MembershipPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name.to_string(),
            price: plan.price,
            perks: plan.perks.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Membership {
    pub fn price_label(&self) -> String {
        format!("{}/mo", catalog::format_money(self.price))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "planId")]
    pub plan_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookings: Vec<String>,
    #[serde(default)]
    pub membership: Option<Membership>,
    #[serde(default)]
    pub cart: Option<Cart>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields submitted by the mock payment form. Never validated or stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentForm {
    pub name_on_card: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

/// How a notice should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Ok,
    Warn,
    Error,
}

/// What the user is told after an action, and where they are sent next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advice {
    pub message: &'static str,
    pub level: NoticeLevel,
    pub redirect: Option<Page>,
}

impl Advice {
    const fn new(message: &'static str, level: NoticeLevel, redirect: Option<Page>) -> Self {
        Self {
            message,
            level,
            redirect,
        }
    }
}

const SIGN_IN_FIRST: Advice =
    Advice::new("Please sign in first", NoticeLevel::Warn, Some(Page::SignIn));

/// Every action outcome can be turned into an optional notice.
pub trait Advisory {
    fn advice(&self) -> Option<Advice>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn(User),
    MissingFields,
}

impl Advisory for SignInOutcome {
    fn advice(&self) -> Option<Advice> {
        Some(match self {
            SignInOutcome::SignedIn(_) => {
                Advice::new("Signed in (mock)", NoticeLevel::Ok, Some(Page::Dashboard))
            }
            SignInOutcome::MissingFields => Advice::new(
                "Email and password are required",
                NoticeLevel::Warn,
                None,
            ),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    NotSignedIn,
}

impl Advisory for SignOutOutcome {
    fn advice(&self) -> Option<Advice> {
        match self {
            SignOutOutcome::SignedOut => Some(Advice::new(
                "Signed out",
                NoticeLevel::Ok,
                Some(Page::Home),
            )),
            SignOutOutcome::NotSignedIn => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    AlreadyBooked,
    NotSignedIn,
    UnknownClass,
}

impl Advisory for BookingOutcome {
    fn advice(&self) -> Option<Advice> {
        Some(match self {
            BookingOutcome::Booked => Advice::new("Class booked", NoticeLevel::Ok, None),
            BookingOutcome::AlreadyBooked => Advice::new("Already booked", NoticeLevel::Warn, None),
            BookingOutcome::NotSignedIn => SIGN_IN_FIRST,
            BookingOutcome::UnknownClass => {
                Advice::new("That class is not on the timetable", NoticeLevel::Error, None)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutOutcome {
    Completed(Membership),
    EmptyCart,
    NotSignedIn,
    UnknownPlan,
}

impl Advisory for CheckoutOutcome {
    fn advice(&self) -> Option<Advice> {
        match self {
            CheckoutOutcome::Completed(_) => Some(Advice::new(
                "Payment successful (mock)",
                NoticeLevel::Ok,
                Some(Page::Dashboard),
            )),
            CheckoutOutcome::EmptyCart => None,
            CheckoutOutcome::NotSignedIn => Some(SIGN_IN_FIRST),
            CheckoutOutcome::UnknownPlan => Some(Advice::new(
                "That plan is no longer available",
                NoticeLevel::Error,
                Some(Page::Memberships),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    NoMembership,
}

impl Advisory for CancelOutcome {
    fn advice(&self) -> Option<Advice> {
        match self {
            CancelOutcome::Cancelled => {
                Some(Advice::new("Membership cancelled", NoticeLevel::Warn, None))
            }
            CancelOutcome::NoMembership => None,
        }
    }
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_booked(&self, class_id: &str) -> bool {
        self.bookings.iter().any(|b| b == class_id)
    }

    /// Accept any non-empty credentials. The password is checked for presence only.
    pub fn sign_in(&mut self, email: &str, password: &str) -> SignInOutcome {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return SignInOutcome::MissingFields;
        }
        let user = User::from_email(email);
        self.user = Some(user.clone());
        SignInOutcome::SignedIn(user)
    }

    /// Forget the user. Bookings, membership and cart are kept.
    pub fn sign_out(&mut self) -> SignOutOutcome {
        match self.user.take() {
            Some(_) => SignOutOutcome::SignedOut,
            None => SignOutOutcome::NotSignedIn,
        }
    }

    pub fn book_class(&mut self, class_id: &str) -> BookingOutcome {
        if !self.is_signed_in() {
            return BookingOutcome::NotSignedIn;
        }
        if catalog::find_class(class_id).is_none() {
            return BookingOutcome::UnknownClass;
        }
        if self.has_booked(class_id) {
            return BookingOutcome::AlreadyBooked;
        }
        self.bookings.push(class_id.to_string());
        BookingOutcome::Booked
    }

    /// Put a plan in the cart, replacing whatever was there.
    pub fn select_plan(&mut self, plan_id: &str) {
        self.cart = Some(Cart {
            plan_id: plan_id.to_string(),
        });
    }

    /// The plan currently in the cart, if it still exists in the catalog.
    pub fn cart_plan(&self) -> Option<&'static MembershipPlan> {
        self.cart
            .as_ref()
            .and_then(|cart| catalog::find_plan(&cart.plan_id))
    }

    /// Turn the cart into a membership. Payment details are ignored.
    pub fn checkout(&mut self, _payment: &PaymentForm) -> CheckoutOutcome {
        if !self.is_signed_in() {
            return CheckoutOutcome::NotSignedIn;
        }
        let Some(cart) = self.cart.take() else {
            return CheckoutOutcome::EmptyCart;
        };
        match catalog::find_plan(&cart.plan_id) {
            Some(plan) => {
                let membership = Membership::from(plan);
                self.membership = Some(membership.clone());
                CheckoutOutcome::Completed(membership)
            }
            None => CheckoutOutcome::UnknownPlan,
        }
    }

    pub fn cancel_membership(&mut self) -> CancelOutcome {
        match self.membership.take() {
            Some(_) => CancelOutcome::Cancelled,
            None => CancelOutcome::NoMembership,
        }
    }

    /// Drop repeated and unknown booking ids, keeping the first occurrence of
    /// each. Returns `true` if anything was removed.
    pub fn normalize(&mut self) -> bool {
        let before = self.bookings.len();
        let mut seen = HashSet::new();
        self.bookings
            .retain(|id| catalog::find_class(id).is_some() && seen.insert(id.clone()));
        self.bookings.len() != before
    }

    /// Booked classes in booking order, skipping ids the catalog no longer knows.
    pub fn booked_classes(&self) -> Vec<&'static catalog::Class> {
        self.bookings
            .iter()
            .filter_map(|id| catalog::find_class(id))
            .collect()
    }
}
