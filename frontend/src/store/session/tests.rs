use super::*;
use crate::store::persist::{StateStorage, StateStore};
use eshop_shared::{AuthResponse, Role, UserInfo};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct MemoryStorage {
    records: RefCell<HashMap<String, String>>,
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> bool {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.records.borrow_mut().remove(key).is_some()
    }
}

fn admin_auth() -> AuthResponse {
    AuthResponse {
        id: "u1".into(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        role: Role::Admin,
        token: "tok-123".into(),
    }
}

#[test]
fn empty_session_is_not_authenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn login_replaces_the_whole_session() {
    let mut session = Session {
        user_id: "old".into(),
        name: "Old".into(),
        email: "old@example.com".into(),
        role: Role::User,
        token: "old-token".into(),
    };

    session = Session::from_auth(admin_auth());
    assert!(session.is_authenticated());
    assert_eq!(session.role, Role::Admin);
    assert!(session.is_admin());
    assert_eq!(session.user_id, "u1");
    assert_eq!(session.token, "tok-123");
}

#[test]
fn non_admin_role_is_not_admin() {
    let session = Session {
        role: Role::User,
        token: "tok".into(),
        ..Session::default()
    };
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn admin_role_without_token_is_neither() {
    // Role is only meaningful while authenticated.
    let session = Session {
        role: Role::Admin,
        ..Session::default()
    };
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn profile_merge_keeps_the_token() {
    let mut session = Session::from_auth(admin_auth());
    session.apply_profile(&UserInfo {
        id: "u1".into(),
        name: "Ada Lovelace".into(),
        email: "ada.l@example.com".into(),
        role: Role::Admin,
        created_at: None,
    });

    assert_eq!(session.name, "Ada Lovelace");
    assert_eq!(session.email, "ada.l@example.com");
    assert_eq!(session.token, "tok-123");
    assert!(session.is_authenticated());
}

#[test]
fn logout_clears_any_prior_state() {
    let mut session = Session::from_auth(admin_auth());
    session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.token.is_empty());
    assert!(session.name.is_empty());
}

#[test]
fn session_round_trips_through_storage() {
    let backend = Rc::new(MemoryStorage::default());
    let store = StateStore::with_backend(backend.clone());

    let session = Session::from_auth(admin_auth());
    store.store_json(eshop_shared::SESSION_STORAGE_KEY, &session);

    // Simulated reload over the same backend.
    let reloaded = StateStore::with_backend(backend);
    let restored: Session = reloaded
        .load_json(eshop_shared::SESSION_STORAGE_KEY)
        .expect("record should exist");
    assert_eq!(restored, session);
    assert!(restored.is_authenticated());
}
