use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use super::{
    error::{PlaybackError, PlayerCallError},
    types::PlayerHandle,
};

/// One mounted video embed instance.
///
/// The embed service is a black box behind this seam: a browser iframe
/// player in production, a scripted fake in tests. Calls are synchronous
/// fire-and-forget from the caller's point of view; the embed keeps
/// processing them internally after they return, which is exactly the lag
/// the arbiter's defensive pauses exist to out-wait.
pub trait EmbeddedPlayer: Send + Sync {
    /// Starts playback.
    ///
    /// # Errors
    /// Returns error if the underlying embed rejected the call, e.g.
    /// because it was already destroyed.
    fn play(&self) -> Result<(), PlayerCallError>;

    /// Pauses playback.
    ///
    /// # Errors
    /// Returns error if the underlying embed rejected the call.
    fn pause(&self) -> Result<(), PlayerCallError>;

    /// Tears the embed down. Further calls against it fail.
    ///
    /// # Errors
    /// Returns error if the underlying embed rejected the call.
    fn destroy(&self) -> Result<(), PlayerCallError>;
}

/// Factory side of the embed service.
#[async_trait]
pub trait EmbedApi: Send + Sync {
    /// Resolves once the embed scripting runtime has loaded.
    ///
    /// # Errors
    /// Returns error if the runtime failed to load.
    async fn ready(&self) -> Result<(), PlaybackError>;

    /// Creates a player for the given video id.
    ///
    /// `muted` controls whether the embed starts with its audio muted;
    /// browsers only allow scripted autoplay for muted players.
    ///
    /// # Errors
    /// Returns error if the embed refused to create the player.
    fn create_player(
        &self,
        video_id: &str,
        muted: bool,
    ) -> Result<Arc<dyn EmbeddedPlayer>, PlaybackError>;
}

/// Once-per-process embed loader.
///
/// The embed script is injected a single time per page load and reused by
/// every card; this mirrors that by funneling every `create_player` call
/// through one shared ready gate.
pub struct EmbedBootstrap {
    api: Arc<dyn EmbedApi>,
    ready: OnceCell<()>,
}

impl EmbedBootstrap {
    /// Wraps an embed API behind the shared ready gate.
    pub fn new(api: Arc<dyn EmbedApi>) -> Self {
        Self {
            api,
            ready: OnceCell::new(),
        }
    }

    /// Waits for the embed runtime, loading it on first use.
    ///
    /// Idempotent: concurrent and repeat callers all share the first
    /// load's outcome.
    ///
    /// # Errors
    /// Returns error if the runtime failed to load.
    pub async fn ensure_ready(&self) -> Result<(), PlaybackError> {
        self.ready
            .get_or_try_init(|| async {
                debug!("Loading embed scripting runtime");
                self.api.ready().await
            })
            .await?;
        Ok(())
    }

    /// Creates a handle for a new player once the runtime is ready.
    ///
    /// # Errors
    /// Returns error if the runtime failed to load or the embed refused
    /// to create the player.
    pub async fn create_player(
        &self,
        video_id: &str,
        muted: bool,
    ) -> Result<PlayerHandle, PlaybackError> {
        self.ensure_ready().await?;
        let player = self.api.create_player(video_id, muted)?;
        Ok(PlayerHandle::new(player))
    }
}
