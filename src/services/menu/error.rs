use thiserror::Error;

/// Errors from the menu service and its REST client.
#[derive(Error, Debug)]
pub enum MenuError {
    /// No API base URL is configured.
    #[error(
        "api.base_url is required. Set it in config.toml or the ODY_API_URL environment \
         variable. There is no localhost fallback."
    )]
    MissingBaseUrl,

    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {context}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// What was being requested.
        context: String,
    },

    /// The requested hotel does not exist.
    #[error("hotel not found: {0}")]
    HotelNotFound(String),

    /// The requested restaurant id is already taken.
    #[error("restaurant id already exists: {0}")]
    SlugTaken(String),

    /// A form or field failed validation before any request was made.
    #[error("{0}")]
    Validation(String),
}
