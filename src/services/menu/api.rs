use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    error::MenuError,
    types::{Dish, DishPatch, Hotel, HotelPatch, NewDish, NewHotel},
};
use crate::config::ApiConfig;

/// REST client for the platform backend.
///
/// Thin JSON request/response wrapper over the hotel and dish endpoints.
/// All responses are decoded into the wire models in
/// [`super::types`].
pub struct MenuApi {
    client: Client,
    base_url: String,
}

impl MenuApi {
    /// Builds a client from configuration.
    ///
    /// # Errors
    /// Returns [`MenuError::MissingBaseUrl`] when no base URL is
    /// configured, and an HTTP error if the client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, MenuError> {
        let base_url = config
            .base_url()
            .ok_or(MenuError::MissingBaseUrl)?
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetches a hotel by its restaurant id.
    ///
    /// # Errors
    /// Returns [`MenuError::HotelNotFound`] on 404, an API error for any
    /// other non-success status.
    pub async fn hotel_by_slug(&self, slug: &str) -> Result<Hotel, MenuError> {
        let url = format!("{}/api/hotels/{}", self.base_url, encode(slug));
        debug!(%slug, "Fetching hotel");
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(MenuError::HotelNotFound(slug.to_string()));
        }
        decode(response, &format!("hotel '{slug}'")).await
    }

    /// Checks whether a restaurant id is still free.
    ///
    /// A 404 from the hotel endpoint means free; a 200 means taken. Any
    /// other status is an error so a flaky backend can never hand out a
    /// duplicate id.
    ///
    /// # Errors
    /// Returns an API error for statuses other than 200 and 404.
    pub async fn slug_available(&self, slug: &str) -> Result<bool, MenuError> {
        let url = format!("{}/api/hotels/{}", self.base_url, encode(slug));
        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(true),
            StatusCode::OK => Ok(false),
            status => Err(MenuError::Api {
                status: status.as_u16(),
                context: format!("slug check '{slug}'"),
            }),
        }
    }

    /// Creates a hotel.
    ///
    /// # Errors
    /// Returns an API error on any non-success status.
    pub async fn create_hotel(&self, hotel: &NewHotel) -> Result<Hotel, MenuError> {
        let url = format!("{}/api/hotels", self.base_url);
        let response = self.client.post(&url).json(hotel).send().await?;
        decode(response, &format!("create hotel '{}'", hotel.slug)).await
    }

    /// Applies a partial update to a hotel.
    ///
    /// # Errors
    /// Returns [`MenuError::HotelNotFound`] on 404, an API error otherwise.
    pub async fn update_hotel(&self, slug: &str, patch: &HotelPatch) -> Result<Hotel, MenuError> {
        let url = format!("{}/api/hotels/{}", self.base_url, encode(slug));
        let response = self.client.patch(&url).json(patch).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(MenuError::HotelNotFound(slug.to_string()));
        }
        decode(response, &format!("update hotel '{slug}'")).await
    }

    /// Lists the dishes of a hotel.
    ///
    /// # Errors
    /// Returns an API error on any non-success status.
    pub async fn dishes(&self, hotel_id: &str) -> Result<Vec<Dish>, MenuError> {
        let url = format!("{}/api/dishes?hotel_id={}", self.base_url, encode(hotel_id));
        let response = self.client.get(&url).send().await?;
        decode(response, &format!("dishes of hotel '{hotel_id}'")).await
    }

    /// Creates a dish.
    ///
    /// # Errors
    /// Returns an API error on any non-success status.
    pub async fn create_dish(&self, dish: &NewDish) -> Result<Dish, MenuError> {
        let url = format!("{}/api/dishes", self.base_url);
        let response = self.client.post(&url).json(dish).send().await?;
        decode(response, &format!("create dish '{}'", dish.name)).await
    }

    /// Applies a partial update to a dish.
    ///
    /// # Errors
    /// Returns an API error on any non-success status.
    pub async fn update_dish(&self, dish_id: &str, patch: &DishPatch) -> Result<Dish, MenuError> {
        let url = format!("{}/api/dishes/{}", self.base_url, encode(dish_id));
        let response = self.client.patch(&url).json(patch).send().await?;
        decode(response, &format!("update dish '{dish_id}'")).await
    }

    /// Deletes a dish.
    ///
    /// # Errors
    /// Returns an API error on any non-success status.
    pub async fn delete_dish(&self, dish_id: &str) -> Result<(), MenuError> {
        let url = format!("{}/api/dishes/{}", self.base_url, encode(dish_id));
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(MenuError::Api {
                status: status.as_u16(),
                context: format!("delete dish '{dish_id}'"),
            })
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, MenuError> {
    let status = response.status();
    if !status.is_success() {
        return Err(MenuError::Api {
            status: status.as_u16(),
            context: context.to_string(),
        });
    }
    Ok(response.json::<T>().await?)
}

/// Percent-encodes a path/query component; everything outside the
/// unreserved set is escaped.
fn encode(component: &str) -> String {
    let mut encoded = String::with_capacity(component.len());
    for byte in component.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
