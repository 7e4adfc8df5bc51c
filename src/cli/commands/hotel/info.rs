use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    formatting::{format_description, format_header},
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::super::utils::{menu_err, menu_service, resolve_hotel_slug};

/// Command to show a restaurant's public profile
///
/// Uses the active restaurant when no slug is given.
pub struct InfoCommand;

impl InfoCommand {
    /// Creates a new InfoCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for InfoCommand {
    /// Show restaurant details
    ///
    /// # Arguments
    ///
    /// * `args` - Optional restaurant slug
    ///
    /// # Errors
    ///
    /// Returns CliError if the restaurant cannot be found
    async fn execute(&self, args: &[String]) -> CommandResult {
        let slug = resolve_hotel_slug(args.first()).await?;
        let menu = menu_service()?;
        let hotel = menu.api().hotel_by_slug(&slug).await.map_err(menu_err)?;

        let mut lines = vec![
            format_header(&hotel.name),
            format!("  Menu id:  {}", hotel.slug),
            format!("  Owner:    {}", hotel.owner_name),
            format!("  Location: {}, {}", hotel.city, hotel.state),
            format!("  Contact:  {}", hotel.gmail),
        ];

        if let Some(logo) = &hotel.logo_url {
            lines.push(format!("  Logo:     {}", format_description(logo)));
        }
        if let Some(cover) = &hotel.cover_url {
            lines.push(format!("  Cover:    {}", format_description(cover)));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "info".to_string(),
            description: "Show a restaurant's public profile".to_string(),
            category: "hotel".to_string(),
            args: vec![CommandArg {
                name: "slug".to_string(),
                description: "Restaurant menu id. Uses the active restaurant if not specified."
                    .to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "odymenu hotel info".to_string(),
                "odymenu hotel info spice-garden".to_string(),
            ],
        }
    }
}
