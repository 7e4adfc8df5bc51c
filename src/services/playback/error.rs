use thiserror::Error;

/// Errors from the playback coordination service.
///
/// Only setup can fail loudly. Calls issued against mounted players
/// during coordination are logged and reported as
/// [`super::PlaybackEvent::PlayerCallFailed`] instead (a stuck player is
/// preferable to a crashed page).
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The embed scripting runtime never reported ready, or player
    /// creation was refused.
    #[error("embed API failed to load: {0}")]
    BootstrapFailed(String),
}

/// Failure reported by an embedded player for a single play/pause/destroy
/// call. Carries only a message; the embed is a black box.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct PlayerCallError(pub String);
