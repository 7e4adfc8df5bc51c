//! Dish management commands.
mod add;
mod list;
mod remove;
mod update;

pub use add::AddCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use update::UpdateCommand;

use crate::cli::CommandRegistry;

/// Registers all dish-related commands with the command registry
///
/// Registers commands in the "dish" category for listing and editing a
/// restaurant's dishes.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "dish";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(AddCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(UpdateCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(RemoveCommand::new()));
}
