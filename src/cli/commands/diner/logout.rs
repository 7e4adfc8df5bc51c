use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    types::{CommandArg, CommandMetadata},
};

use super::super::utils::{diner_err, diner_service};

/// Command to end the current diner session
pub struct LogoutCommand;

impl LogoutCommand {
    /// Creates a new LogoutCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for LogoutCommand {
    /// Log the current diner out
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be cleared
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let diner = diner_service()?;

        match diner.session().map_err(diner_err)? {
            Some(user) => {
                diner.logout().map_err(diner_err)?;
                Ok(format!("Logged out {}", user.display_name()))
            }
            None => Ok("Nobody is logged in".to_string()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "logout".to_string(),
            description: "End the current diner session".to_string(),
            category: "diner".to_string(),
            args: Vec::<CommandArg>::new(),
            examples: vec!["odymenu diner logout".to_string()],
        }
    }
}
