//! Restaurant onboarding and profile commands.
mod active;
mod info;
mod qr;
mod set_image;
mod signup;

pub use active::ActiveCommand;
pub use info::InfoCommand;
pub use qr::QrCommand;
pub use set_image::SetImageCommand;
pub use signup::SignupCommand;

use crate::cli::CommandRegistry;

/// Registers all restaurant-related commands with the command registry
///
/// Registers commands in the "hotel" category for onboarding restaurants
/// and managing their public profile.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "hotel";

    registry.register_command(CATEGORY_NAME, Box::new(SignupCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(InfoCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(ActiveCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(SetImageCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(QrCommand::new()));
}
