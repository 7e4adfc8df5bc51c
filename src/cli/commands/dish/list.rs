use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    formatting::{format_description, format_header},
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::super::utils::{menu_err, menu_service, resolve_hotel_slug};

/// Command to list a restaurant's dishes
///
/// Shows id, veg marker, price, and serving window for each dish, with
/// a note on whether the dish is currently inside its window.
pub struct ListCommand;

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for ListCommand {
    /// List dishes for a restaurant
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
        let dishes = menu.api().dishes(&hotel.id).await.map_err(menu_err)?;

        if dishes.is_empty() {
            return Ok(format!("No dishes yet for '{}'", hotel.name));
        }

        let mut lines = vec![format_header(&format!(
            "{} ({} dishes)",
            hotel.name,
            dishes.len()
        ))];

        for dish in &dishes {
            let marker = match dish.veg {
                Some(true) => "[veg]",
                Some(false) => "[non-veg]",
                None => "[-]",
            };
            let window = format!("{}-{}", dish.timing_from(), dish.timing_to());
            let serving = if dish.available_now() { "" } else { " (off hours)" };

            lines.push(format!(
                "  {}  {} {}  {:.2}  {}{}",
                dish.id, marker, dish.name, dish.price, window, serving
            ));

            if let Some(description) = &dish.description {
                lines.push(format!("      {}", format_description(description)));
            }
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List a restaurant's dishes".to_string(),
            category: "dish".to_string(),
            args: vec![CommandArg {
                name: "slug".to_string(),
                description: "Restaurant menu id. Uses the active restaurant if not specified."
                    .to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "odymenu dish list".to_string(),
                "odymenu dish list spice-garden".to_string(),
            ],
        }
    }
}
