//! Configuration inspection commands.
mod get;
mod path;

use std::sync::Arc;

pub use get::GetCommand;
pub use path::PathCommand;

use crate::{cli::CommandRegistry, config::Config};

/// Registers all configuration-related commands with the command registry.
///
/// Registers commands in the "config" category for inspecting the
/// loaded configuration and locating the config file.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config` - Shared configuration for the commands
pub fn register_commands(registry: &mut CommandRegistry, config: Arc<Config>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(config.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PathCommand::new()));
}
