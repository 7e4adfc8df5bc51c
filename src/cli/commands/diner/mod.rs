//! Diner account and list commands.
mod eat_later;
mod favorite;
mod login;
mod logout;
mod register;

pub use eat_later::EatLaterCommand;
pub use favorite::FavoriteCommand;
pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use register::RegisterCommand;

use crate::cli::CommandRegistry;

/// Registers all diner-related commands with the command registry
///
/// Registers commands in the "diner" category for local accounts and
/// the favorites and eat-later lists.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "diner";

    registry.register_command(CATEGORY_NAME, Box::new(RegisterCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(LoginCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(LogoutCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(FavoriteCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(EatLaterCommand::new()));
}
