use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::menu::DishDraft,
};

use super::super::utils::{menu_err, menu_service, resolve_hotel_slug};

/// Command to add a dish to the active restaurant
///
/// Runs the same draft validation as the owner flow: the name and price
/// must be present, the veg choice explicit, and a video link (when
/// given) must be a recognizable YouTube URL.
pub struct AddCommand;

impl AddCommand {
    /// Creates a new AddCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for AddCommand {
    /// Add a dish to the active restaurant
    ///
    /// # Arguments
    ///
    /// * `args` - name, veg flag, price, then optional quantity, description, video link
    ///
    /// # Errors
    ///
    /// Returns CliError if validation fails or the API rejects the dish
    async fn execute(&self, args: &[String]) -> CommandResult {
        let veg = match args[1].to_lowercase().as_str() {
            "true" | "veg" | "yes" | "1" => true,
            "false" | "non-veg" | "no" | "0" => false,
            other => {
                return Err(CliError::InvalidArgument {
                    arg: "veg".to_string(),
                    reason: format!("Expected 'veg' or 'non-veg', got '{other}'"),
                });
            }
        };

        let draft = DishDraft {
            name: args[0].clone(),
            veg: Some(veg),
            price: args[2].clone(),
            quantity: args.get(3).cloned().unwrap_or_default(),
            description: args.get(4).cloned().unwrap_or_default(),
            video_link: args.get(5).cloned().unwrap_or_default(),
            ..DishDraft::default()
        };

        let slug = resolve_hotel_slug(None).await?;
        let menu = menu_service()?;
        let hotel = menu.api().hotel_by_slug(&slug).await.map_err(menu_err)?;

        let dish = menu.add_dish(&hotel.id, &draft).await.map_err(menu_err)?;

        Ok(format!("Added '{}' with id {}", dish.name, dish.id))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "add".to_string(),
            description: "Add a dish to the active restaurant".to_string(),
            category: "dish".to_string(),
            args: vec![
                CommandArg {
                    name: "name".to_string(),
                    description: "Dish name".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "veg".to_string(),
                    description: "Diet classification: 'veg' or 'non-veg'".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "price".to_string(),
                    description: "Price, must be a positive number".to_string(),
                    required: true,
                    value_type: ArgType::Number,
                },
                CommandArg {
                    name: "quantity".to_string(),
                    description: "Serving size label, e.g. '250 g'".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "description".to_string(),
                    description: "Short description shown under the name".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "video-link".to_string(),
                    description: "YouTube link for the video slide".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "odymenu dish add \"Paneer Tikka\" veg 249".to_string(),
                "odymenu dish add \"Butter Chicken\" non-veg 349 \"500 g\" \"House specialty\" https://youtu.be/dQw4w9WgXcQ".to_string(),
            ],
        }
    }
}
