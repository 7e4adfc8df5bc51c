//! Odymenu - Mobile-first restaurant menu platform, service side.
//!
//! Odymenu packages the platform logic behind the Ody diner and owner
//! surfaces into reusable services. The main features include:
//!
//! - Exclusive playback coordination for the dish media carousel
//! - Hotel, dish, and owner CRUD over the platform REST API
//! - Diner accounts with favorites and eat-later lists
//! - Local key-value persistence for session and draft state
//! - CLI interface for operating on menus from the terminal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use odymenu::config::Config;
//! use odymenu::services::playback::PlaybackService;
//!
//! let config = Config::default();
//! let playback = PlaybackService::new(config.playback.clone());
//! println!("settle delay: {:?}", playback.settle_delay());
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for menu management.
pub mod cli;

/// Configuration reference generation from schemas.
pub mod docs;

/// Platform services: playback coordination, menu CRUD, diner accounts,
/// local persistence.
pub mod services;

/// Simple service instance manager.
pub mod service_manager;

/// Runtime state shared between CLI invocations.
pub mod runtime_state;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{OdyError, Result};
