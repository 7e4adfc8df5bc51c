use std::sync::Arc;

use crate::config::Config;
use crate::services::diner::DinerService;
use crate::services::menu::MenuService;
use crate::services::playback::PlaybackService;
use crate::services::store::LocalStore;

/// Container for all application services
///
/// Holds references to all initialized services that can be shared
/// across the application. Services are created once during startup
/// and then shared via Arc references.
pub struct Services {
    /// Playback coordination for embedded dish videos
    pub playback: Arc<PlaybackService>,
    /// Remote menu API for restaurants and dishes
    pub menu: Arc<MenuService>,
    /// Diner accounts, favorites and eat-later lists
    pub diner: Arc<DinerService>,
}

impl Services {
    /// Create all application services
    ///
    /// Initializes all required services using the provided configuration.
    ///
    /// # Errors
    /// Returns error if any service initialization fails
    pub async fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let playback = PlaybackService::new(config.playback.clone());
        let menu = MenuService::new(&config.api)?;
        let store = LocalStore::open_default()?;
        let diner = DinerService::new(store);

        Ok(Self {
            playback: Arc::new(playback),
            menu: Arc::new(menu),
            diner: Arc::new(diner),
        })
    }
}
