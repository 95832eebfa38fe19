use std::sync::{Arc, Mutex};

use super::*;

fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        user_metadata: serde_json::Value::Null,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_loading_without_identity() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.identity.is_none());
}

#[test]
fn gate_is_loading_until_first_resolve() {
    let state = SessionState::default();
    assert_eq!(state.gate(), Gate::Loading);
}

#[test]
fn resolve_without_identity_gates_to_signed_out() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert_eq!(state.gate(), Gate::SignedOut);
}

#[test]
fn resolve_with_identity_gates_to_signed_in() {
    let mut state = SessionState::default();
    state.resolve(Some(identity("u1")));
    assert_eq!(state.gate(), Gate::SignedIn);
}

#[test]
fn loading_state_ignores_identity_for_routing() {
    // An identity must never influence routing before the first resolve.
    let state = SessionState { identity: Some(identity("u1")), loading: true };
    assert_eq!(state.gate(), Gate::Loading);
}

#[test]
fn auth_change_swaps_identity_without_touching_loading() {
    let mut state = SessionState::default();
    state.resolve(Some(identity("u1")));
    state.apply_auth_change(Some(identity("u2")));
    assert!(!state.loading);
    assert_eq!(state.identity.as_ref().map(|i| i.id.as_str()), Some("u2"));

    state.apply_auth_change(None);
    assert_eq!(state.gate(), Gate::SignedOut);
}

// =============================================================
// AuthEvents
// =============================================================

#[test]
fn emit_reaches_subscribed_handler() {
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_handler = seen.clone();
    let _sub = events.subscribe(move |identity| {
        seen_handler.lock().unwrap().push(identity.map(|i| i.id));
    });

    events.emit(Some(identity("u1")));
    events.emit(None);

    assert_eq!(*seen.lock().unwrap(), vec![Some("u1".to_owned()), None]);
}

#[test]
fn unsubscribe_stops_further_deliveries() {
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(0));
    let seen_handler = seen.clone();
    let sub = events.subscribe(move |_| {
        *seen_handler.lock().unwrap() += 1;
    });

    events.emit(None);
    sub.unsubscribe();
    events.emit(Some(identity("u1")));

    assert_eq!(*seen.lock().unwrap(), 1);
    assert_eq!(events.handler_count(), 0);
}

#[test]
fn unsubscribe_only_removes_its_own_handler() {
    let events = AuthEvents::new();
    let first = events.subscribe(|_| {});
    let _second = events.subscribe(|_| {});

    first.unsubscribe();
    assert_eq!(events.handler_count(), 1);
}

#[test]
fn handler_may_reenter_the_channel_during_emit() {
    // Handlers run with the registry lock released, so subscribing or
    // emitting from inside a handler must not deadlock.
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(0));

    let reentrant = events.clone();
    let seen_inner = seen.clone();
    let _sub = events.subscribe(move |identity| {
        if identity.is_some() {
            let seen_nested = seen_inner.clone();
            let sub = reentrant.subscribe(move |_| {
                *seen_nested.lock().unwrap() += 1;
            });
            reentrant.emit(None);
            sub.unsubscribe();
        }
    });

    events.emit(Some(identity("u1")));
    assert_eq!(*seen.lock().unwrap(), 1);
    assert_eq!(events.handler_count(), 1);
}

#[test]
fn unsubscribe_after_channel_dropped_is_harmless() {
    let events = AuthEvents::new();
    let sub = events.subscribe(|_| {});
    drop(events);
    sub.unsubscribe();
}

// =============================================================
// Identity display name
// =============================================================

#[test]
fn display_name_prefers_full_name_metadata() {
    let mut user = identity("u1");
    user.user_metadata = serde_json::json!({ "full_name": "Ada Lovelace" });
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    assert_eq!(identity("u1").display_name(), "u1@example.com");

    let mut blank = identity("u2");
    blank.user_metadata = serde_json::json!({ "full_name": "   " });
    assert_eq!(blank.display_name(), "u2@example.com");
}
