use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::menu::MenuService,
};

use super::super::utils::{menu_err, menu_service, resolve_hotel_slug};

/// Command to print the QR payload for a restaurant's public menu
///
/// Diners scanning the table QR land on this URL. The command verifies
/// the restaurant exists before emitting anything.
pub struct QrCommand;

impl QrCommand {
    /// Creates a new QrCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for QrCommand {
    /// Print the public menu URL a QR code should encode
    ///
    /// # Arguments
    ///
    /// * `args` - Public site origin, optional restaurant slug
    ///
    /// # Errors
    ///
    /// Returns CliError if the restaurant cannot be found
    async fn execute(&self, args: &[String]) -> CommandResult {
        let origin = args[0].trim_end_matches('/');
        let slug = resolve_hotel_slug(args.get(1)).await?;

        let menu = menu_service()?;
        let hotel = menu.api().hotel_by_slug(&slug).await.map_err(menu_err)?;

        Ok(MenuService::menu_url(origin, &hotel.slug))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "qr".to_string(),
            description: "Print the QR payload for a restaurant's public menu".to_string(),
            category: "hotel".to_string(),
            args: vec![
                CommandArg {
                    name: "origin".to_string(),
                    description: "Public site origin, e.g. https://menu.example.com".to_string(),
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
                "odymenu hotel qr https://menu.example.com".to_string(),
                "odymenu hotel qr https://menu.example.com spice-garden".to_string(),
            ],
        }
    }
}
