//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application shell routes on this state alone: while the first session
//! check is in flight nothing identity-dependent may render, and afterwards
//! exactly one of the auth screens or the authenticated shell is mounted.
//!
//! OWNERSHIP
//! =========
//! The store has a single writer: the auth-state subscription installed by
//! the shell. Forms never set the identity directly; they report the
//! provider's result through [`AuthEvents`] and the subscription applies it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, Weak};

use crate::net::types::Identity;

/// Process-wide session record: current identity plus its loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True until the first session check resolves. Never flips back.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

/// Routing decision derived from the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// First session check still in flight; mount no routes.
    Loading,
    /// Resolved, no identity: show the login/signup flow.
    SignedOut,
    /// Resolved with an identity: show the authenticated shell.
    SignedIn,
}

impl SessionState {
    /// Apply the result of the initial session check. A failed fetch is
    /// reported as `None` and lands the user on the login screen.
    pub fn resolve(&mut self, identity: Option<Identity>) {
        self.identity = identity;
        self.loading = false;
    }

    /// Apply a subsequent auth-state change (sign-in, sign-out, refresh).
    pub fn apply_auth_change(&mut self, identity: Option<Identity>) {
        self.identity = identity;
    }

    /// The routing decision for the current state. While `loading` is true
    /// the identity is ignored entirely.
    pub fn gate(&self) -> Gate {
        if self.loading {
            Gate::Loading
        } else if self.identity.is_some() {
            Gate::SignedIn
        } else {
            Gate::SignedOut
        }
    }
}

type AuthHandler = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

/// Auth-state change channel standing in for the provider's
/// `onAuthStateChange` subscription.
///
/// Forms emit the identity the provider returned; the shell's single
/// subscription writes it into the session store. Unsubscribing removes the
/// handler so no further writes reach a torn-down store.
#[derive(Clone, Default)]
pub struct AuthEvents {
    inner: Arc<Mutex<Registry>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, AuthHandler)>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for auth-state changes.
    pub fn subscribe<F>(&self, handler: F) -> AuthSubscription
    where
        F: Fn(Option<Identity>) + Send + Sync + 'static,
    {
        let mut registry = self.inner.lock().expect("auth event registry poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        AuthSubscription { id, registry: Arc::downgrade(&self.inner) }
    }

    /// Notify every live handler of a new auth state. The registry lock is
    /// released before any handler runs, so a handler may subscribe,
    /// unsubscribe, or emit on the same channel without deadlocking.
    pub fn emit(&self, identity: Option<Identity>) {
        let handlers: Vec<AuthHandler> = {
            let registry = self.inner.lock().expect("auth event registry poisoned");
            registry.handlers.iter().map(|(_, handler)| Arc::clone(handler)).collect()
        };
        for handler in handlers {
            handler(identity.clone());
        }
    }

    #[cfg(test)]
    fn handler_count(&self) -> usize {
        self.inner.lock().expect("auth event registry poisoned").handlers.len()
    }
}

/// Handle returned by [`AuthEvents::subscribe`]; call [`unsubscribe`] on
/// teardown so the handler cannot write into a discarded store.
///
/// [`unsubscribe`]: AuthSubscription::unsubscribe
pub struct AuthSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl AuthSubscription {
    /// Remove the handler. Safe to call after the channel itself is gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut registry = inner.lock().expect("auth event registry poisoned");
            registry.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
