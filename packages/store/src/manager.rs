//! # Session store — state plus its persistence
//!
//! [`SessionStore`] owns the current [`SessionState`] and a [`StateBackend`].
//! All mutation goes through its methods, and each one that changes the state
//! writes the whole record back before returning. Reads never fail: a missing
//! or malformed value loads as the default state.

use tracing::{debug, info, warn};

use crate::backend::StateBackend;
use crate::session::{
    BookingOutcome, CancelOutcome, CheckoutOutcome, PaymentForm, SessionState, SignInOutcome,
    SignOutOutcome,
};

pub struct SessionStore<B: StateBackend> {
    backend: B,
    key: String,
    state: SessionState,
}

impl<B: StateBackend> SessionStore<B> {
    /// Open the store, loading whatever is persisted under `key`.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load(&backend, &key);
        if !backend.is_persistent() {
            debug!("Session under {} is kept in memory only", key);
        }
        Self {
            backend,
            key,
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Write the full state, replacing the persisted value.
    ///
    /// Failures are logged; the in-memory state stays authoritative.
    pub fn save(&self) {
        if let Err(e) = save(&self.backend, &self.key, &self.state) {
            warn!("Failed to persist session under {}: {}", self.key, e);
        }
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> SignInOutcome {
        let outcome = self.state.sign_in(email, password);
        if let SignInOutcome::SignedIn(ref user) = outcome {
            info!("Signed in as {}", user.display_name);
            self.save();
        }
        outcome
    }

    pub fn sign_out(&mut self) -> SignOutOutcome {
        let outcome = self.state.sign_out();
        if outcome == SignOutOutcome::SignedOut {
            info!("Signed out");
            self.save();
        }
        outcome
    }

    pub fn book_class(&mut self, class_id: &str) -> BookingOutcome {
        let outcome = self.state.book_class(class_id);
        debug!("Booking {}: {:?}", class_id, outcome);
        if outcome == BookingOutcome::Booked {
            self.save();
        }
        outcome
    }

    pub fn select_plan(&mut self, plan_id: &str) {
        debug!("Selected plan {}", plan_id);
        self.state.select_plan(plan_id);
        self.save();
    }

    pub fn checkout(&mut self, payment: &PaymentForm) -> CheckoutOutcome {
        let outcome = self.state.checkout(payment);
        match outcome {
            CheckoutOutcome::Completed(ref membership) => {
                info!("Checkout completed for plan {}", membership.id);
                self.save();
            }
            CheckoutOutcome::UnknownPlan => {
                warn!("Cart referenced a plan that is not in the catalog");
                self.save();
            }
            CheckoutOutcome::EmptyCart | CheckoutOutcome::NotSignedIn => {
                debug!("Checkout skipped: {:?}", outcome);
            }
        }
        outcome
    }

    /// Drop the current membership. The caller is expected to have confirmed.
    pub fn cancel_membership(&mut self) -> CancelOutcome {
        let outcome = self.state.cancel_membership();
        if outcome == CancelOutcome::Cancelled {
            info!("Membership cancelled");
            self.save();
        }
        outcome
    }

    /// Restore the default state and persist it.
    pub fn reset(&mut self) {
        info!("Session reset");
        self.state = SessionState::default();
        self.save();
    }
}

/// Read the persisted session, falling back to defaults.
pub fn load(backend: &impl StateBackend, key: &str) -> SessionState {
    let Some(raw) = backend.get(key) else {
        return SessionState::default();
    };
    if raw.trim().is_empty() {
        return SessionState::default();
    }
    match serde_json::from_str::<SessionState>(&raw) {
        Ok(mut state) => {
            if state.normalize() {
                warn!("Dropped repeated or unknown bookings under {}", key);
            }
            state
        }
        Err(e) => {
            warn!("Discarding malformed session under {}: {}", key, e);
            SessionState::default()
        }
    }
}

/// Serialize and persist the full session.
pub fn save(
    backend: &impl StateBackend,
    key: &str,
    state: &SessionState,
) -> Result<(), crate::StoreError> {
    let json = serde_json::to_string(state)?;
    backend.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryBackend;
    use crate::routes::Page;
    use crate::session::{Advisory, Cart, Membership, User};

    const KEY: &str = "fitness-ui-prototype";

    fn open() -> (MemoryBackend, SessionStore<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let store = SessionStore::open(backend.clone(), KEY);
        (backend, store)
    }

    /// Backend whose writes always fail.
    struct ReadOnly;

    impl StateBackend for ReadOnly {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_missing_value_loads_defaults() {
        let (_, store) = open();
        assert_eq!(store.state(), &SessionState::default());
    }

    #[test]
    fn test_malformed_value_loads_defaults() {
        for raw in ["", "   ", "not json", "{\"bookings\": 5}", "[1,2,3]", "null"] {
            let backend = MemoryBackend::with_value(KEY, raw);
            let store = SessionStore::open(backend, KEY);
            assert_eq!(store.state(), &SessionState::default(), "input {raw:?}");
        }
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let backend = MemoryBackend::new();
        let state = SessionState {
            user: Some(User::from_email("ana@example.com")),
            bookings: vec!["c1".to_string(), "c3".to_string()],
            membership: Some(Membership::from(crate::catalog::find_plan("plus").unwrap())),
            cart: Some(Cart {
                plan_id: "premium".to_string(),
            }),
        };
        save(&backend, KEY, &state).unwrap();
        assert_eq!(load(&backend, KEY), state);
    }

    #[test]
    fn test_roundtrip_default_and_mixed_states() {
        let plus = Membership::from(crate::catalog::find_plan("plus").unwrap());
        let states = [
            SessionState::default(),
            SessionState {
                membership: Some(plus.clone()),
                ..SessionState::default()
            },
            SessionState {
                bookings: vec!["c5".to_string()],
                cart: Some(Cart {
                    plan_id: "basic".to_string(),
                }),
                ..SessionState::default()
            },
            SessionState {
                user: Some(User::from_email("coach")),
                membership: Some(plus),
                ..SessionState::default()
            },
        ];
        for state in states {
            let backend = MemoryBackend::new();
            save(&backend, KEY, &state).unwrap();
            assert_eq!(load(&backend, KEY), state);
        }
    }

    #[test]
    fn test_load_cleans_persisted_bookings() {
        let backend = MemoryBackend::with_value(KEY, r#"{"bookings":["c1","c1","zz","c4"]}"#);
        let store = SessionStore::open(backend, KEY);
        assert_eq!(store.state().bookings, vec!["c1", "c4"]);
    }

    #[test]
    fn test_reads_prototype_layout() {
        let raw = r#"{"user":{"email":"ana@example.com","name":"ana"},"bookings":["c2"],"membership":{"id":"basic","name":"Basic","price":19.99,"perks":["Gym Access","Locker"],"color":"basic"},"cart":null}"#;
        let backend = MemoryBackend::with_value(KEY, raw);
        let state = load(&backend, KEY);
        assert_eq!(state.user.unwrap().display_name, "ana");
        assert_eq!(state.bookings, vec!["c2"]);
        assert_eq!(state.membership.unwrap().price, 19.99);
        assert!(state.cart.is_none());
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (backend, mut store) = open();

        store.sign_in("ana@example.com", "pw");
        assert!(load(&backend, KEY).user.is_some());

        store.book_class("c1");
        assert_eq!(load(&backend, KEY).bookings, vec!["c1"]);

        store.select_plan("premium");
        assert_eq!(load(&backend, KEY).cart.unwrap().plan_id, "premium");

        store.checkout(&PaymentForm::default());
        let persisted = load(&backend, KEY);
        assert_eq!(persisted.membership.unwrap().id, "premium");
        assert!(persisted.cart.is_none());

        store.cancel_membership();
        assert!(load(&backend, KEY).membership.is_none());

        store.sign_out();
        let persisted = load(&backend, KEY);
        assert!(persisted.user.is_none());
        assert_eq!(persisted.bookings, vec!["c1"]);
    }

    #[test]
    fn test_anonymous_booking_scenario() {
        let (backend, mut store) = open();
        let outcome = store.book_class("c1");
        assert_eq!(outcome, BookingOutcome::NotSignedIn);
        assert_eq!(outcome.advice().unwrap().redirect, Some(Page::SignIn));
        assert!(store.state().bookings.is_empty());
        assert!(backend.get(KEY).is_none());
    }

    #[test]
    fn test_double_booking_scenario() {
        let (backend, mut store) = open();
        store.sign_in("ana@example.com", "pw");
        assert_eq!(store.book_class("c1"), BookingOutcome::Booked);
        assert_eq!(store.book_class("c1"), BookingOutcome::AlreadyBooked);
        assert_eq!(store.state().bookings, vec!["c1"]);
        assert_eq!(load(&backend, KEY).bookings, vec!["c1"]);
    }

    #[test]
    fn test_premium_checkout_scenario() {
        let (_, mut store) = open();
        store.sign_in("ana@example.com", "pw");
        store.select_plan("premium");
        store.checkout(&PaymentForm::default());
        assert_eq!(store.state().membership.as_ref().unwrap().id, "premium");
        assert!(store.state().cart.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (backend, mut store) = open();
        store.sign_in("ana@example.com", "pw");
        store.book_class("c5");
        store.reset();
        assert_eq!(store.state(), &SessionState::default());
        assert_eq!(load(&backend, KEY), SessionState::default());
        assert!(backend.get(KEY).is_some());
    }

    #[test]
    fn test_last_write_wins() {
        let (backend, mut first) = open();
        let mut second = SessionStore::open(backend.clone(), KEY);
        first.sign_in("ana@example.com", "pw");
        second.select_plan("basic");

        let persisted = load(&backend, KEY);
        assert!(persisted.user.is_none());
        assert_eq!(persisted.cart.unwrap().plan_id, "basic");
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = SessionStore::open(ReadOnly, KEY);
        store.sign_in("ana@example.com", "pw");
        store.book_class("c2");
        assert_eq!(store.state().bookings, vec!["c2"]);
    }
}
