//! Exclusive playback coordination for the dish media carousel.
//!
//! Ensures that at most one embedded video plays at a time across a
//! swipeable carousel of dish cards. A card mounts a player, feeds
//! viewport and carousel intersection observations into its
//! [`CardVisibility`] detector, and the [`PlaybackArbiter`] serializes
//! pause/play transitions across the whole [`PlayerRegistry`] so rapid
//! scrolling can never leave two embeds audible at once.

mod arbiter;
mod embed;
mod error;
mod events;
mod registry;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use arbiter::PlaybackArbiter;
pub use embed::{EmbedApi, EmbedBootstrap, EmbeddedPlayer};
pub use error::{PlaybackError, PlayerCallError};
pub use events::PlaybackEvent;
pub use registry::PlayerRegistry;
pub use types::{CardState, PlayerHandle, PlayerId, PlayerOp};
pub use visibility::CardVisibility;

use std::sync::Arc;

use async_stream::stream;
use futures::Stream;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::config::PlaybackConfig;

/// Playback coordination service.
///
/// Owns one registry and one arbiter per view lifetime and hands out
/// per-card visibility detectors. Constructed once at startup and shared
/// by reference; independent instances coordinate independent views.
pub struct PlaybackService {
    config: PlaybackConfig,
    registry: Arc<PlayerRegistry>,
    arbiter: Arc<PlaybackArbiter>,
    bootstrap: Option<EmbedBootstrap>,
    events_tx: Arc<broadcast::Sender<PlaybackEvent>>,
}

impl PlaybackService {
    /// Creates a service without an embed backend.
    ///
    /// Cards are mounted from externally created handles; useful for
    /// frontends that own player creation, and for tests.
    pub fn new(config: PlaybackConfig) -> Self {
        let (events_tx, _) = broadcast::channel(256);
        let events_tx = Arc::new(events_tx);
        let registry = Arc::new(PlayerRegistry::new(events_tx.clone()));
        let arbiter = Arc::new(PlaybackArbiter::new(
            registry.clone(),
            config.settle_delay(),
            events_tx.clone(),
        ));

        Self {
            config,
            registry,
            arbiter,
            bootstrap: None,
            events_tx,
        }
    }

    /// Creates a service backed by an embed API for player creation.
    pub fn with_embed(config: PlaybackConfig, api: Arc<dyn EmbedApi>) -> Self {
        let mut service = Self::new(config);
        service.bootstrap = Some(EmbedBootstrap::new(api));
        service
    }

    /// Creates a player for `video_id` and mounts it as a card.
    ///
    /// The player starts muted or not per `playback.autoplay_muted`.
    ///
    /// # Errors
    /// Returns [`PlaybackError::BootstrapFailed`] if no embed backend is
    /// attached or the embed runtime failed to load.
    pub async fn create_card(
        &self,
        video_id: &str,
        has_carousel: bool,
    ) -> Result<CardVisibility, PlaybackError> {
        let bootstrap = self.bootstrap.as_ref().ok_or_else(|| {
            PlaybackError::BootstrapFailed("no embed backend attached".to_string())
        })?;
        let handle = bootstrap
            .create_player(video_id, self.config.autoplay_muted)
            .await?;
        Ok(self.mount_card(handle, has_carousel).await)
    }

    /// Mounts an externally created handle as a card: registers it and
    /// returns its visibility detector.
    pub async fn mount_card(&self, handle: PlayerHandle, has_carousel: bool) -> CardVisibility {
        self.registry.register(handle.clone()).await;
        CardVisibility::new(
            handle,
            self.arbiter.clone(),
            self.config.viewport_threshold,
            self.config.carousel_threshold,
            has_carousel,
        )
    }

    /// Subscribes to playback events.
    pub fn events(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.events_tx.subscribe()
    }

    /// Subscribes to playback events as a stream.
    pub fn event_stream(&self) -> BroadcastStream<PlaybackEvent> {
        BroadcastStream::new(self.events_tx.subscribe())
    }

    /// Stream of changes to the sole playing player.
    ///
    /// Yields the new `current` pointer on every change, `None` when
    /// playback stops. Ends when the service is dropped. A lagging
    /// subscriber skips ahead rather than stalling playback.
    pub fn current_stream(&self) -> impl Stream<Item = Option<PlayerId>> + use<> {
        let mut rx = self.events_tx.subscribe();
        stream! {
            loop {
                match rx.recv().await {
                    Ok(PlaybackEvent::CurrentChanged(current)) => yield current,
                    Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    /// The shared registry.
    pub fn registry(&self) -> &Arc<PlayerRegistry> {
        &self.registry
    }

    /// The shared arbiter.
    pub fn arbiter(&self) -> &Arc<PlaybackArbiter> {
        &self.arbiter
    }

    /// The configured settle delay.
    pub fn settle_delay(&self) -> std::time::Duration {
        self.config.settle_delay()
    }
}
