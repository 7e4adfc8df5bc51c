use async_trait::async_trait;

use crate::cli::{
    CliError, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::super::utils::{diner_err, diner_service};

/// Command to manage the logged-in diner's eat-later list
pub struct EatLaterCommand;

impl EatLaterCommand {
    /// Creates a new EatLaterCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for EatLaterCommand {
    /// List, add to, or remove from the eat-later list
    ///
    /// # Arguments
    ///
    /// * `args` - action ("list", "add", "remove"), dish id for add/remove
    ///
    /// # Errors
    ///
    /// Returns CliError when nobody is logged in or the action is unknown
    async fn execute(&self, args: &[String]) -> CommandResult {
        let diner = diner_service()?;

        match args[0].as_str() {
            "list" => {
                let saved = diner.eat_later().map_err(diner_err)?;
                if saved.is_empty() {
                    Ok("Nothing saved for later".to_string())
                } else {
                    Ok(saved.join("\n"))
                }
            }
            "add" => {
                let dish_id = require_dish_id(args)?;
                diner.add_eat_later(dish_id).map_err(diner_err)?;
                Ok(format!("Saved {dish_id} for later"))
            }
            "remove" => {
                let dish_id = require_dish_id(args)?;
                diner.remove_eat_later(dish_id).map_err(diner_err)?;
                Ok(format!("Removed {dish_id} from the eat-later list"))
            }
            other => Err(CliError::InvalidArgument {
                arg: "action".to_string(),
                reason: format!("Expected 'list', 'add' or 'remove', got '{other}'"),
            }),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "eat-later".to_string(),
            description: "Manage the logged-in diner's eat-later list".to_string(),
            category: "diner".to_string(),
            args: vec![
                CommandArg {
                    name: "action".to_string(),
                    description: "'list', 'add' or 'remove'".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "dish-id".to_string(),
                    description: "Dish to add or remove; not used with 'list'".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "odymenu diner eat-later list".to_string(),
                "odymenu diner eat-later add d42".to_string(),
            ],
        }
    }
}

fn require_dish_id(args: &[String]) -> Result<&str, CliError> {
    args.get(1)
        .map(String::as_str)
        .ok_or_else(|| CliError::InvalidArgument {
            arg: "dish-id".to_string(),
            reason: "A dish id is required for this action".to_string(),
        })
}
