//! Command-line interface for the menu platform.
//!
//! Provides a hierarchical command system for restaurant onboarding,
//! dish management, and diner accounts. Commands are organized by
//! category and automatically generate help text from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
