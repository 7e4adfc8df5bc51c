//! Unit tests for the local store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::services::store::{DinerUser, LocalStore, RestaurantIdentity};

fn store() -> (TempDir, LocalStore) {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::at(dir.path().join("local-store.json"));
    (dir, store)
}

fn asha() -> DinerUser {
    DinerUser {
        phone: "9876543210".to_string(),
        name: "Asha".to_string(),
    }
}

#[test]
fn empty_store_reads_as_defaults() {
    let (_dir, store) = store();
    assert!(store.users().unwrap().is_empty());
    assert!(store.session_user().unwrap().is_none());
    assert!(store.favorites("9876543210").unwrap().is_empty());
}

#[test]
fn users_and_session_round_trip() {
    let (_dir, store) = store();
    store.add_user(asha()).unwrap();
    store.set_session_user(Some(asha())).unwrap();

    assert_eq!(store.find_user("9876543210").unwrap(), Some(asha()));
    assert_eq!(store.session_user().unwrap(), Some(asha()));

    store.set_session_user(None).unwrap();
    assert!(store.session_user().unwrap().is_none());
    // Logged-out diner is still registered.
    assert_eq!(store.users().unwrap().len(), 1);
}

#[test]
fn favorites_are_per_diner_and_idempotent() {
    let (_dir, store) = store();
    store.add_favorite("9876543210", "dish-1").unwrap();
    store.add_favorite("9876543210", "dish-1").unwrap();
    store.add_favorite("9876543210", "dish-2").unwrap();
    store.add_favorite("9000000000", "dish-9").unwrap();

    assert_eq!(store.favorites("9876543210").unwrap(), vec!["dish-1", "dish-2"]);
    assert_eq!(store.favorites("9000000000").unwrap(), vec!["dish-9"]);

    store.remove_favorite("9876543210", "dish-1").unwrap();
    assert_eq!(store.favorites("9876543210").unwrap(), vec!["dish-2"]);
}

#[test]
fn eat_later_round_trip() {
    let (_dir, store) = store();
    store.add_eat_later("9876543210", "dish-3").unwrap();
    assert_eq!(store.eat_later("9876543210").unwrap(), vec!["dish-3"]);
    store.remove_eat_later("9876543210", "dish-3").unwrap();
    assert!(store.eat_later("9876543210").unwrap().is_empty());
}

#[test]
fn restaurant_identity_round_trip() {
    let (_dir, store) = store();
    store
        .set_restaurant(RestaurantIdentity {
            name: Some("Spice Route".to_string()),
            restaurant_id: Some("spice-route".to_string()),
            ..RestaurantIdentity::default()
        })
        .unwrap();
    let identity = store.restaurant().unwrap();
    assert_eq!(identity.name.as_deref(), Some("Spice Route"));
    assert!(identity.logo.is_none());
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let (_dir, store) = store();
    store.add_user(asha()).unwrap();
    fs::write(store.path(), "not json {").unwrap();

    assert!(store.users().unwrap().is_empty());
    // And the store heals on the next write.
    store.add_user(asha()).unwrap();
    assert_eq!(store.users().unwrap().len(), 1);
}

#[test]
fn display_name_truncates_long_first_names() {
    let short = DinerUser {
        phone: "1".to_string(),
        name: "Asha Rao".to_string(),
    };
    assert_eq!(short.display_name(), "Asha");

    let long = DinerUser {
        phone: "2".to_string(),
        name: "Venkatanarasimharajuvaripeta Rao".to_string(),
    };
    assert_eq!(long.display_name(), "Venkatanarasimh...");
}
