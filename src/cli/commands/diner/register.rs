use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::super::utils::{diner_err, diner_service};

/// Command to register a diner account
///
/// Runs the phone-and-code challenge inline: the issued code is checked
/// immediately since there is no delivery channel on the command line.
pub struct RegisterCommand;

impl RegisterCommand {
    /// Creates a new RegisterCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for RegisterCommand {
    /// Register a diner and open a session
    ///
    /// # Arguments
    ///
    /// * `args` - 10-digit phone number, diner name
    ///
    /// # Errors
    ///
    /// Returns CliError for invalid phone numbers or too-short names
    async fn execute(&self, args: &[String]) -> CommandResult {
        let diner = diner_service()?;

        let challenge = diner.start_challenge(&args[0]).map_err(diner_err)?;
        challenge.verify(challenge.code()).map_err(diner_err)?;

        let user = diner.register(&challenge, &args[1]).map_err(diner_err)?;

        Ok(format!("Welcome, {}! You are now logged in.", user.name))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "register".to_string(),
            description: "Register a diner account and log in".to_string(),
            category: "diner".to_string(),
            args: vec![
                CommandArg {
                    name: "phone".to_string(),
                    description: "10-digit phone number; formatting characters are ignored"
                        .to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "name".to_string(),
                    description: "Diner name, at least 2 characters. Only the first word is kept."
                        .to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec!["odymenu diner register 9876543210 \"Priya Sharma\"".to_string()],
        }
    }
}
