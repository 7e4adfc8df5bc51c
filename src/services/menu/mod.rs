//! Hotel, dish, and owner flows over the platform REST API.
//!
//! Wraps the REST client with the client-side validation the owner and
//! diner surfaces perform before anything hits the network: signup field
//! checks, dish drafts, slug derivation, video link parsing, and the
//! diner-side filter rules.

mod api;
mod error;
mod filters;
mod types;

#[cfg(test)]
mod tests;

pub use api::MenuApi;
pub use error::MenuError;
pub use filters::{Diet, DishTags, FilterSelection, MAX_ACTIVE_TAGS, MenuFilter, matches_search};
pub use types::{
    DEFAULT_TIMING_FROM, DEFAULT_TIMING_TO, Dish, DishPatch, Hotel, HotelPatch, NewDish, NewHotel,
    extract_video_id, slugify,
};

use tracing::info;

use crate::config::ApiConfig;

/// Owner signup form, as collected by the details flow.
#[derive(Debug, Clone, Default)]
pub struct OwnerSignup {
    /// Restaurant display name.
    pub restaurant_name: String,
    /// Owner account name.
    pub user_name: String,
    /// State.
    pub state: String,
    /// City.
    pub city: String,
    /// Free-form restaurant id; slugified before use.
    pub restaurant_id: String,
    /// Owner contact address; must end with `@gmail.com`.
    pub gmail: String,
    /// Chosen password.
    pub password: String,
    /// Password, re-typed.
    pub re_password: String,
}

/// Dish draft, as collected by the add-dish flow.
#[derive(Debug, Clone, Default)]
pub struct DishDraft {
    /// Dish name.
    pub name: String,
    /// Veg/non-veg choice; the flow cannot proceed without one.
    pub veg: Option<bool>,
    /// Price as typed.
    pub price: String,
    /// Serving size label.
    pub quantity: String,
    /// Short description.
    pub description: String,
    /// Serving window start; defaults applied when empty.
    pub timing_from: String,
    /// Serving window end; defaults applied when empty.
    pub timing_to: String,
    /// Photo URL from the visuals step.
    pub photo_url: Option<String>,
    /// YouTube link as pasted.
    pub video_link: String,
}

/// Menu service: validated CRUD for hotels and dishes.
pub struct MenuService {
    api: MenuApi,
}

impl MenuService {
    /// Builds the service from configuration.
    ///
    /// # Errors
    /// Returns error when no API base URL is configured.
    pub fn new(config: &ApiConfig) -> Result<Self, MenuError> {
        Ok(Self {
            api: MenuApi::new(config)?,
        })
    }

    /// The underlying REST client.
    pub fn api(&self) -> &MenuApi {
        &self.api
    }

    /// Validates an owner signup form without touching the network.
    ///
    /// # Errors
    /// Returns [`MenuError::Validation`] with the first failing rule:
    /// every field filled, gmail ending with `@gmail.com`, matching
    /// passwords.
    pub fn validate_signup(form: &OwnerSignup) -> Result<(), MenuError> {
        let fields = [
            &form.restaurant_name,
            &form.user_name,
            &form.state,
            &form.city,
            &form.restaurant_id,
            &form.gmail,
            &form.password,
            &form.re_password,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(MenuError::Validation(
                "Please fill all the fields".to_string(),
            ));
        }
        if !form.gmail.ends_with("@gmail.com") {
            return Err(MenuError::Validation(
                "Gmail must end with @gmail.com".to_string(),
            ));
        }
        if form.password != form.re_password {
            return Err(MenuError::Validation(
                "Password does not match".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates owner login input.
    ///
    /// The backend does the actual credential check; this mirrors the
    /// surface-side gate (gmail shape, minimum password length).
    ///
    /// # Errors
    /// Returns [`MenuError::Validation`] when the input cannot be valid
    /// credentials.
    pub fn validate_login(gmail: &str, password: &str) -> Result<(), MenuError> {
        if !gmail.ends_with("@gmail.com") {
            return Err(MenuError::Validation(
                "Gmail must end with @gmail.com".to_string(),
            ));
        }
        if password.len() < 6 {
            return Err(MenuError::Validation(
                "Incorrect password, try again".to_string(),
            ));
        }
        Ok(())
    }

    /// Runs the full signup: validate, derive the slug, verify it is
    /// free, create the hotel.
    ///
    /// # Errors
    /// Returns a validation error, [`MenuError::SlugTaken`] when the
    /// restaurant id is in use, or any API error from creation.
    pub async fn signup(&self, form: &OwnerSignup) -> Result<Hotel, MenuError> {
        Self::validate_signup(form)?;

        let slug = slugify(&form.restaurant_id);
        if !self.api.slug_available(&slug).await? {
            return Err(MenuError::SlugTaken(slug));
        }

        let hotel = self
            .api
            .create_hotel(&NewHotel {
                slug: slug.clone(),
                name: form.restaurant_name.trim().to_string(),
                owner_name: form.user_name.trim().to_string(),
                state: form.state.trim().to_string(),
                city: form.city.trim().to_string(),
                gmail: form.gmail.trim().to_string(),
                password: form.password.clone(),
            })
            .await?;

        info!(%slug, "Hotel created");
        Ok(hotel)
    }

    /// Validates a dish draft and creates the dish under a hotel.
    ///
    /// # Errors
    /// Returns a validation error for a bad draft, or any API error.
    pub async fn add_dish(&self, hotel_id: &str, draft: &DishDraft) -> Result<Dish, MenuError> {
        let new_dish = Self::draft_to_new_dish(hotel_id, draft)?;
        let dish = self.api.create_dish(&new_dish).await?;
        info!(dish = %dish.name, %hotel_id, "Dish created");
        Ok(dish)
    }

    /// Validates a draft into a create payload.
    ///
    /// # Errors
    /// Returns [`MenuError::Validation`] with the first failing rule:
    /// non-empty name, veg choice made, positive price, parseable video
    /// link when one was pasted.
    pub fn draft_to_new_dish(hotel_id: &str, draft: &DishDraft) -> Result<NewDish, MenuError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(MenuError::Validation("Dish name is required".to_string()));
        }
        let Some(veg) = draft.veg else {
            return Err(MenuError::Validation(
                "Choose Veg or Non-Veg for the dish".to_string(),
            ));
        };
        let price: f64 = draft
            .price
            .trim()
            .parse()
            .map_err(|_| MenuError::Validation("Price must be a number".to_string()))?;
        if price <= 0.0 {
            return Err(MenuError::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }

        let video_url = match draft.video_link.trim() {
            "" => None,
            link => {
                if extract_video_id(link).is_none() {
                    return Err(MenuError::Validation(
                        "Could not read a video id from that YouTube link".to_string(),
                    ));
                }
                Some(link.to_string())
            }
        };

        Ok(NewDish {
            hotel_id: hotel_id.to_string(),
            name: name.to_string(),
            veg,
            price,
            quantity: non_empty(&draft.quantity),
            description: non_empty(&draft.description),
            timing_from: non_empty(&draft.timing_from)
                .unwrap_or_else(|| DEFAULT_TIMING_FROM.to_string()),
            timing_to: non_empty(&draft.timing_to).unwrap_or_else(|| DEFAULT_TIMING_TO.to_string()),
            photo_url: draft.photo_url.clone(),
            video_url,
        })
    }

    /// The diner menu URL for a hotel, used as the QR code payload.
    ///
    /// Rendering the code itself is the caller's concern; the platform
    /// only fixes the payload shape.
    pub fn menu_url(public_origin: &str, slug: &str) -> String {
        format!("{}/hotel/{}", public_origin.trim_end_matches('/'), slug)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
