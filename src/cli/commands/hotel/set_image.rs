use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::menu::HotelPatch,
};

use super::super::utils::{menu_err, menu_service, resolve_hotel_slug};

/// Command to set a restaurant's logo or cover image
pub struct SetImageCommand;

impl SetImageCommand {
    /// Creates a new SetImageCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for SetImageCommand {
    /// Set the logo or cover image URL of a restaurant
    ///
    /// # Arguments
    ///
    /// * `args` - Image kind ("logo" or "cover"), image URL, optional slug
    ///
    /// # Errors
    ///
    /// Returns CliError for an unknown image kind or API failure
    async fn execute(&self, args: &[String]) -> CommandResult {
        let kind = args[0].as_str();
        let url = args[1].clone();

        let patch = match kind {
            "logo" => HotelPatch {
                logo_url: Some(url),
                ..HotelPatch::default()
            },
            "cover" => HotelPatch {
                cover_url: Some(url),
                ..HotelPatch::default()
            },
            other => {
                return Err(CliError::InvalidArgument {
                    arg: "kind".to_string(),
                    reason: format!("Expected 'logo' or 'cover', got '{other}'"),
                });
            }
        };

        let slug = resolve_hotel_slug(args.get(2)).await?;
        let menu = menu_service()?;
        let hotel = menu
            .api()
            .update_hotel(&slug, &patch)
            .await
            .map_err(menu_err)?;

        Ok(format!("Updated {kind} for '{}'", hotel.name))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set-image".to_string(),
            description: "Set a restaurant's logo or cover image".to_string(),
            category: "hotel".to_string(),
            args: vec![
                CommandArg {
                    name: "kind".to_string(),
                    description: "Which image slot to set: 'logo' or 'cover'".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "url".to_string(),
                    description: "Image URL to store".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "slug".to_string(),
                    description: "Restaurant menu id. Uses the active restaurant if not specified."
                        .to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "odymenu hotel set-image logo https://cdn.example.com/logo.png".to_string(),
                "odymenu hotel set-image cover https://cdn.example.com/cover.jpg spice-garden"
                    .to_string(),
            ],
        }
    }
}
