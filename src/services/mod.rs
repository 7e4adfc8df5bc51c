//! Platform services.
//!
//! Each submodule is a self-contained service with its own error type.
//! Services are constructed once during startup (see
//! [`crate::service_manager::Services`]) and shared via `Arc` references.

/// Diner accounts, favorites, and eat-later lists.
pub mod diner;

/// Hotel, dish, and owner CRUD over the platform REST API.
pub mod menu;

/// Exclusive playback coordination for the dish media carousel.
pub mod playback;

/// Local key-value persistence.
pub mod store;
