//! CLI command implementations, grouped by category.

pub mod config;
pub mod diner;
pub mod dish;
pub mod hotel;

mod utils;
