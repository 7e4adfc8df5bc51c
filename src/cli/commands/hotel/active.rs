use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    runtime_state::RuntimeState,
};

use super::super::utils::{menu_err, menu_service};

/// Command to get or set the active restaurant
///
/// The active restaurant is what dish commands act on when no slug is
/// given. It persists between CLI calls.
pub struct ActiveCommand;

impl ActiveCommand {
    /// Creates a new ActiveCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for ActiveCommand {
    /// Get or set the active restaurant
    ///
    /// # Arguments
    ///
    /// * `args` - Optional restaurant slug to select
    ///
    /// # Errors
    ///
    /// Returns CliError if the given slug does not exist
    async fn execute(&self, args: &[String]) -> CommandResult {
        match args.first() {
            None => match RuntimeState::get_active_hotel().await? {
                Some(slug) => Ok(format!("Active restaurant: {slug}")),
                None => Ok("No active restaurant selected".to_string()),
            },
            Some(slug) => {
                let menu = menu_service()?;
                let hotel = menu.api().hotel_by_slug(slug).await.map_err(menu_err)?;

                RuntimeState::set_active_hotel(Some(hotel.slug.clone())).await?;
                Ok(format!("Active restaurant set to: {}", hotel.slug))
            }
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "active".to_string(),
            description: "Get or set the active restaurant".to_string(),
            category: "hotel".to_string(),
            args: vec![CommandArg {
                name: "slug".to_string(),
                description: "Restaurant menu id to select. Shows the current one if omitted."
                    .to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "odymenu hotel active".to_string(),
                "odymenu hotel active spice-garden".to_string(),
            ],
        }
    }
}
