use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::menu::{DishPatch, extract_video_id},
};

use super::super::utils::{menu_err, menu_service};

/// Command to update a single field of a dish
pub struct UpdateCommand;

impl UpdateCommand {
    /// Creates a new UpdateCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for UpdateCommand {
    /// Update one field of an existing dish
    ///
    /// # Arguments
    ///
    /// * `args` - dish id, field name, new value
    ///
    /// # Errors
    ///
    /// Returns CliError for unknown fields, bad values, or API failures
    async fn execute(&self, args: &[String]) -> CommandResult {
        let dish_id = &args[0];
        let field = args[1].as_str();
        let value = args[2].clone();

        let patch = match field {
            "name" => DishPatch {
                name: Some(value),
                ..DishPatch::default()
            },
            "price" => {
                let price = value.parse::<f64>().map_err(|_| CliError::InvalidArgument {
                    arg: "value".to_string(),
                    reason: format!("'{value}' is not a valid price"),
                })?;
                if price <= 0.0 {
                    return Err(CliError::InvalidArgument {
                        arg: "value".to_string(),
                        reason: "Price must be positive".to_string(),
                    });
                }
                DishPatch {
                    price: Some(price),
                    ..DishPatch::default()
                }
            }
            "description" => DishPatch {
                description: Some(value),
                ..DishPatch::default()
            },
            "photo-url" => DishPatch {
                photo_url: Some(value),
                ..DishPatch::default()
            },
            "video-url" => {
                if extract_video_id(value.trim()).is_none() {
                    return Err(CliError::InvalidArgument {
                        arg: "value".to_string(),
                        reason: "Could not read a video id from that YouTube link".to_string(),
                    });
                }
                DishPatch {
                    video_url: Some(value),
                    ..DishPatch::default()
                }
            }
            other => {
                return Err(CliError::InvalidArgument {
                    arg: "field".to_string(),
                    reason: format!(
                        "Unknown field '{other}'. Expected one of: name, price, description, photo-url, video-url"
                    ),
                });
            }
        };

        let menu = menu_service()?;
        let dish = menu
            .api()
            .update_dish(dish_id, &patch)
            .await
            .map_err(menu_err)?;

        Ok(format!("Updated {field} for '{}'", dish.name))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "update".to_string(),
            description: "Update a single field of a dish".to_string(),
            category: "dish".to_string(),
            args: vec![
                CommandArg {
                    name: "dish-id".to_string(),
                    description: "Backend id of the dish, as shown by 'dish list'".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "field".to_string(),
                    description: "Field to change: name, price, description, photo-url, video-url"
                        .to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value for the field".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "odymenu dish update d42 price 299".to_string(),
                "odymenu dish update d42 video-url https://youtu.be/dQw4w9WgXcQ".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(field: &str, value: &str) -> Vec<String> {
        vec!["d42".to_string(), field.to_string(), value.to_string()]
    }

    #[tokio::test]
    async fn video_url_must_parse_to_a_video_id() {
        let result = UpdateCommand::new()
            .execute(&args("video-url", "https://example.com/watch?v=nope"))
            .await;

        assert!(matches!(
            result,
            Err(CliError::InvalidArgument { ref arg, .. }) if arg == "value"
        ));
    }

    #[tokio::test]
    async fn price_must_be_positive() {
        let result = UpdateCommand::new().execute(&args("price", "-5")).await;

        assert!(matches!(
            result,
            Err(CliError::InvalidArgument { ref arg, .. }) if arg == "value"
        ));
    }

    #[tokio::test]
    async fn unknown_fields_are_rejected() {
        let result = UpdateCommand::new().execute(&args("veg", "true")).await;

        assert!(matches!(
            result,
            Err(CliError::InvalidArgument { ref arg, .. }) if arg == "field"
        ));
    }
}
