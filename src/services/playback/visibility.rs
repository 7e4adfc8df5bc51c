use std::sync::Arc;

use tracing::debug;

use super::{
    arbiter::PlaybackArbiter,
    types::{CardState, PlayerHandle, PlayerId, PlayerOp},
};

/// Per-card visibility detector.
///
/// Tracks two independent booleans: whether the card is in the page
/// viewport and whether its video slide is the active carousel slide.
/// The player should play exactly when both are true. On every observed
/// change the detector recomputes the conjunction and drives the arbiter
/// on edges: rising edges request exclusive play, falling edges stop the
/// player immediately, independent of the arbiter's lock state.
///
/// Cards without a carousel root never report carousel visibility and so
/// never play; the video slide only exists inside a carousel.
pub struct CardVisibility {
    handle: PlayerHandle,
    arbiter: Arc<PlaybackArbiter>,
    viewport_threshold: f64,
    carousel_threshold: f64,
    has_carousel: bool,
    in_viewport: bool,
    in_carousel: bool,
    state: CardState,
}

impl CardVisibility {
    /// Attaches a detector for one card.
    ///
    /// The handle must already be registered with the arbiter's registry;
    /// see [`super::PlaybackService::mount_card`].
    pub fn new(
        handle: PlayerHandle,
        arbiter: Arc<PlaybackArbiter>,
        viewport_threshold: f64,
        carousel_threshold: f64,
        has_carousel: bool,
    ) -> Self {
        Self {
            handle,
            arbiter,
            viewport_threshold,
            carousel_threshold,
            has_carousel,
            in_viewport: false,
            in_carousel: false,
            state: CardState::Hidden,
        }
    }

    /// Id of the observed player.
    pub fn player_id(&self) -> PlayerId {
        self.handle.id
    }

    /// Current per-card state.
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Whether both visibility booleans are currently true.
    pub fn should_play(&self) -> bool {
        self.in_viewport && self.in_carousel
    }

    /// Feeds a viewport intersection observation (visible area ratio,
    /// 0.0 to 1.0).
    pub async fn set_viewport_ratio(&mut self, ratio: f64) {
        self.in_viewport = ratio >= self.viewport_threshold;
        self.recompute().await;
    }

    /// Feeds a carousel intersection observation (visible area ratio,
    /// 0.0 to 1.0). Ignored for cards without a carousel root.
    pub async fn set_carousel_ratio(&mut self, ratio: f64) {
        if !self.has_carousel {
            return;
        }
        self.in_carousel = ratio >= self.carousel_threshold;
        self.recompute().await;
    }

    /// Tears the card down: stop, unregister, destroy.
    pub async fn unmount(self) {
        let id = self.handle.id;
        debug!(%id, "Unmounting card");
        self.arbiter.request_stop(id).await;
        self.arbiter.registry().unregister(id).await;
        self.arbiter.best_effort(&self.handle, PlayerOp::Destroy);
    }

    async fn recompute(&mut self) {
        let was_active = matches!(self.state, CardState::Requesting | CardState::Playing);
        let active = self.should_play();

        if active && !was_active {
            self.state = CardState::Requesting;
            self.arbiter.request_exclusive_play(self.handle.id).await;
            // A request arriving mid-sequence loses; stay in Requesting.
            self.state = if self.arbiter.registry().current().await == Some(self.handle.id) {
                CardState::Playing
            } else {
                CardState::Requesting
            };
        } else if !active && was_active {
            self.arbiter.request_stop(self.handle.id).await;
            self.state = self.inactive_state();
        } else if !active {
            self.state = self.inactive_state();
        }
    }

    fn inactive_state(&self) -> CardState {
        if self.in_viewport {
            CardState::VisibleInactive
        } else {
            CardState::Hidden
        }
    }
}
