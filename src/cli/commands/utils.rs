use crate::{
    cli::CliError,
    config::Config,
    runtime_state::RuntimeState,
    services::{
        diner::{DinerError, DinerService},
        menu::{MenuError, MenuService},
        store::LocalStore,
    },
};

/// Builds a menu service from the current configuration.
///
/// # Errors
///
/// Returns CliError if the configuration cannot be loaded or no API base
/// URL is configured.
pub fn menu_service() -> Result<MenuService, CliError> {
    let config = Config::load().map_err(|e| CliError::ServiceError {
        service: "Config".to_string(),
        details: e.to_string(),
    })?;

    MenuService::new(&config.api).map_err(|e| CliError::ServiceError {
        service: "Menu".to_string(),
        details: e.to_string(),
    })
}

/// Builds a diner service over the default local store.
///
/// # Errors
///
/// Returns CliError if the store directory is inaccessible.
pub fn diner_service() -> Result<DinerService, CliError> {
    let store = LocalStore::open_default().map_err(|e| CliError::ServiceError {
        service: "Store".to_string(),
        details: e.to_string(),
    })?;
    Ok(DinerService::new(store))
}

/// Resolves the restaurant slug a command should act on.
///
/// An explicit argument wins; otherwise the slug persisted by
/// `hotel active` is used.
///
/// # Errors
///
/// Returns CliError if neither source provides a slug.
pub async fn resolve_hotel_slug(explicit: Option<&String>) -> Result<String, CliError> {
    if let Some(slug) = explicit {
        return Ok(slug.clone());
    }

    RuntimeState::get_active_hotel()
        .await?
        .ok_or_else(|| CliError::InvalidArgument {
            arg: "slug".to_string(),
            reason: "No restaurant selected. Pass a slug or run 'odymenu hotel active <slug>'"
                .to_string(),
        })
}

/// Maps a menu service failure into a CLI error.
pub fn menu_err(error: MenuError) -> CliError {
    CliError::ServiceError {
        service: "Menu".to_string(),
        details: error.to_string(),
    }
}

/// Maps a diner service failure into a CLI error.
pub fn diner_err(error: DinerError) -> CliError {
    CliError::ServiceError {
        service: "Diner".to_string(),
        details: error.to_string(),
    }
}
