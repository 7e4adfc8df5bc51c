use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::super::utils::{menu_err, menu_service};

/// Command to remove a dish from the menu
pub struct RemoveCommand;

impl RemoveCommand {
    /// Creates a new RemoveCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for RemoveCommand {
    /// Remove a dish by id
    ///
    /// # Arguments
    ///
    /// * `args` - dish id
    ///
    /// # Errors
    ///
    /// Returns CliError if the API rejects the deletion
    async fn execute(&self, args: &[String]) -> CommandResult {
        let dish_id = &args[0];

        let menu = menu_service()?;
        menu.api().delete_dish(dish_id).await.map_err(menu_err)?;

        Ok(format!("Removed dish {dish_id}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "remove".to_string(),
            description: "Remove a dish from the menu".to_string(),
            category: "dish".to_string(),
            args: vec![CommandArg {
                name: "dish-id".to_string(),
                description: "Backend id of the dish, as shown by 'dish list'".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec!["odymenu dish remove d42".to_string()],
        }
    }
}
