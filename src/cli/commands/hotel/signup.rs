use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    runtime_state::RuntimeState,
    services::menu::OwnerSignup,
};

use super::super::utils::{menu_err, menu_service};

/// Command to register a new restaurant on the platform
///
/// Validates the owner form, claims a unique menu id, and selects the
/// new restaurant as the active one for later dish commands.
pub struct SignupCommand;

impl SignupCommand {
    /// Creates a new SignupCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for SignupCommand {
    /// Register a restaurant owner account
    ///
    /// # Arguments
    ///
    /// * `args` - restaurant-name, owner-name, state, city, restaurant-id, gmail, password
    ///
    /// # Errors
    ///
    /// Returns CliError if validation fails or the menu id is taken
    async fn execute(&self, args: &[String]) -> CommandResult {
        let menu = menu_service()?;

        let form = OwnerSignup {
            restaurant_name: args[0].clone(),
            user_name: args[1].clone(),
            state: args[2].clone(),
            city: args[3].clone(),
            restaurant_id: args[4].clone(),
            gmail: args[5].clone(),
            password: args[6].clone(),
            re_password: args[6].clone(),
        };

        let hotel = menu.signup(&form).await.map_err(menu_err)?;

        RuntimeState::set_active_hotel(Some(hotel.slug.clone())).await?;

        Ok(format!(
            "Registered '{}' with menu id '{}'",
            hotel.name, hotel.slug
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "signup".to_string(),
            description: "Register a new restaurant on the platform".to_string(),
            category: "hotel".to_string(),
            args: vec![
                CommandArg {
                    name: "restaurant-name".to_string(),
                    description: "Display name of the restaurant".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "owner-name".to_string(),
                    description: "Name of the owner account".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "state".to_string(),
                    description: "State the restaurant is in".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "city".to_string(),
                    description: "City the restaurant is in".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "restaurant-id".to_string(),
                    description: "Free-form menu id; lowercased and dashed before use"
                        .to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "gmail".to_string(),
                    description: "Owner contact address, must end with @gmail.com".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "password".to_string(),
                    description: "Account password".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "odymenu hotel signup \"Spice Garden\" Priya Karnataka Bengaluru spice-garden owner@gmail.com s3cret".to_string(),
            ],
        }
    }
}
