//! Local key-value persistence.
//!
//! The platform surfaces lean on browser `localStorage` for session and
//! draft state; this is the same idea backed by one JSON file under the
//! app data directory. Read/written synchronously, no schema versioning
//! or migration: invalid content falls back to defaults with a warning.

mod error;

#[cfg(test)]
mod tests;

pub use error::StoreError;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ConfigPaths;
use crate::services::menu::Dish;

/// One registered diner, keyed by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinerUser {
    /// 10-digit phone number.
    pub phone: String,

    /// First name, as entered at registration.
    pub name: String,
}

impl DinerUser {
    /// Display name: first word of the name, truncated with an ellipsis
    /// past 15 characters.
    pub fn display_name(&self) -> String {
        let first = self.name.trim().split_whitespace().next().unwrap_or("");
        if first.chars().count() >= 15 {
            let prefix: String = first.chars().take(15).collect();
            format!("{prefix}...")
        } else {
            first.to_string()
        }
    }
}

/// Branding and identity of the restaurant being set up on this device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantIdentity {
    /// Restaurant display name.
    pub name: Option<String>,

    /// Free-form restaurant id as entered during signup.
    pub restaurant_id: Option<String>,

    /// Owner account name.
    pub owner_name: Option<String>,

    /// Logo image (data URL or file path from the crop step).
    pub logo: Option<String>,

    /// Cover image (data URL or file path from the crop step).
    pub cover: Option<String>,
}

/// Everything the store persists, in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoreData {
    users: Vec<DinerUser>,
    session_user: Option<DinerUser>,
    favorites: HashMap<String, Vec<String>>,
    eat_later: HashMap<String, Vec<String>>,
    restaurant: RestaurantIdentity,
    cached_dishes: Vec<Dish>,
}

/// JSON-file-backed key-value store.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Opens the store at the default location in the app data dir.
    ///
    /// # Errors
    /// Returns error if the data directory cannot be determined or
    /// created.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = ConfigPaths::app_data_dir().map_err(|source| StoreError::Io {
            path: PathBuf::from("~/.odymenu"),
            source,
        })?;
        Ok(Self::at(dir.join("local-store.json")))
    }

    /// Opens a store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Lists registered diners.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn users(&self) -> Result<Vec<DinerUser>, StoreError> {
        Ok(self.load()?.users)
    }

    /// Finds a diner by phone.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn find_user(&self, phone: &str) -> Result<Option<DinerUser>, StoreError> {
        Ok(self.load()?.users.into_iter().find(|u| u.phone == phone))
    }

    /// Appends a diner to the users list.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn add_user(&self, user: DinerUser) -> Result<(), StoreError> {
        self.update(|data| data.users.push(user))
    }

    /// Current session diner, if logged in.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn session_user(&self) -> Result<Option<DinerUser>, StoreError> {
        Ok(self.load()?.session_user)
    }

    /// Sets or clears the session diner.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn set_session_user(&self, user: Option<DinerUser>) -> Result<(), StoreError> {
        self.update(|data| data.session_user = user)
    }

    /// A diner's favorite dish ids.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn favorites(&self, phone: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.load()?.favorites.remove(phone).unwrap_or_default())
    }

    /// Adds a dish to a diner's favorites. Idempotent.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn add_favorite(&self, phone: &str, dish_id: &str) -> Result<(), StoreError> {
        self.update(|data| {
            let list = data.favorites.entry(phone.to_string()).or_default();
            if !list.iter().any(|d| d == dish_id) {
                list.push(dish_id.to_string());
            }
        })
    }

    /// Removes a dish from a diner's favorites.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn remove_favorite(&self, phone: &str, dish_id: &str) -> Result<(), StoreError> {
        self.update(|data| {
            if let Some(list) = data.favorites.get_mut(phone) {
                list.retain(|d| d != dish_id);
            }
        })
    }

    /// A diner's eat-later dish ids.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn eat_later(&self, phone: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.load()?.eat_later.remove(phone).unwrap_or_default())
    }

    /// Adds a dish to a diner's eat-later list. Idempotent.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn add_eat_later(&self, phone: &str, dish_id: &str) -> Result<(), StoreError> {
        self.update(|data| {
            let list = data.eat_later.entry(phone.to_string()).or_default();
            if !list.iter().any(|d| d == dish_id) {
                list.push(dish_id.to_string());
            }
        })
    }

    /// Removes a dish from a diner's eat-later list.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn remove_eat_later(&self, phone: &str, dish_id: &str) -> Result<(), StoreError> {
        self.update(|data| {
            if let Some(list) = data.eat_later.get_mut(phone) {
                list.retain(|d| d != dish_id);
            }
        })
    }

    /// The locally stored restaurant identity.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn restaurant(&self) -> Result<RestaurantIdentity, StoreError> {
        Ok(self.load()?.restaurant)
    }

    /// Updates the locally stored restaurant identity.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn set_restaurant(&self, identity: RestaurantIdentity) -> Result<(), StoreError> {
        self.update(|data| data.restaurant = identity)
    }

    /// The cached dish list for offline-ish rendering.
    ///
    /// # Errors
    /// Returns error if the backing file cannot be read.
    pub fn cached_dishes(&self) -> Result<Vec<Dish>, StoreError> {
        Ok(self.load()?.cached_dishes)
    }

    /// Replaces the cached dish list. There is no invalidation protocol;
    /// the cache is only ever overwritten wholesale.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written.
    pub fn set_cached_dishes(&self, dishes: Vec<Dish>) -> Result<(), StoreError> {
        self.update(|data| data.cached_dishes = dishes)
    }

    fn load(&self) -> Result<StoreData, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No store file, starting empty");
            return Ok(StoreData::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Invalid store file, using defaults");
            StoreData::default()
        }))
    }

    fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn update(&self, mutate: impl FnOnce(&mut StoreData)) -> Result<(), StoreError> {
        let mut data = self.load()?;
        mutate(&mut data);
        self.save(&data)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
