use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::sync::broadcast;
use tracing::debug;

use super::{
    events::PlaybackEvent,
    registry::PlayerRegistry,
    types::{PlayerHandle, PlayerId, PlayerOp},
};

/// Enforces "at most one player plays at any time" across a registry, even
/// under rapid overlapping visibility changes (fast scrolling, swipes).
///
/// A single boolean lock serializes play sequences. A request arriving
/// while another is in flight is dropped, not queued: under fast scrolling
/// a dropped play is acceptable, an overlapping one is not. The worst case
/// of a wrong choice is a moment with no video playing.
pub struct PlaybackArbiter {
    registry: Arc<PlayerRegistry>,
    in_flight: AtomicBool,
    settle_delay: Duration,
    events_tx: Arc<broadcast::Sender<PlaybackEvent>>,
}

/// Clears the in-flight flag when dropped, so the lock is released on
/// every exit path of the play sequence.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PlaybackArbiter {
    /// Creates an arbiter over the given registry.
    ///
    /// `settle_delay` is the wait inserted before the final defensive
    /// pause; it out-waits the embed's internal lag after a pause call
    /// returns.
    pub fn new(
        registry: Arc<PlayerRegistry>,
        settle_delay: Duration,
        events_tx: Arc<broadcast::Sender<PlaybackEvent>>,
    ) -> Self {
        Self {
            registry,
            in_flight: AtomicBool::new(false),
            settle_delay,
            events_tx,
        }
    }

    /// Requests that the given player become the sole playing one.
    ///
    /// If another request is mid-sequence the requester is paused and the
    /// request dropped. Otherwise the arbiter runs a three-phase pause
    /// sequence (pause all, yield a tick, pause all, wait the settle
    /// delay, pause all) before playing the target and marking it current.
    /// The embed applies pauses asynchronously after the calls return; the
    /// repeated pauses and the delay exist purely to out-wait that lag.
    pub async fn request_exclusive_play(&self, id: PlayerId) {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            debug!(%id, "Play request arrived mid-sequence, dropping");
            if let Some(handle) = self.registry.handle(id).await {
                self.best_effort(&handle, PlayerOp::Pause);
            }
            let _ = self.events_tx.send(PlaybackEvent::PlayRequestDropped(id));
            return;
        }
        let _guard = InFlightGuard(&self.in_flight);

        self.registry.pause_all().await;
        tokio::task::yield_now().await;
        self.registry.pause_all().await;
        tokio::time::sleep(self.settle_delay).await;
        self.registry.pause_all().await;

        // The card may have unmounted during the waits.
        let Some(handle) = self.registry.handle(id).await else {
            debug!(%id, "Player gone before play, sequence abandoned");
            return;
        };

        self.best_effort(&handle, PlayerOp::Play);
        self.registry.set_current(id).await;
    }

    /// Stops the given player immediately.
    ///
    /// Always safe to call, including concurrently with an in-flight play
    /// sequence; the next pause-all inside that sequence will catch any
    /// straggler anyway.
    pub async fn request_stop(&self, id: PlayerId) {
        if let Some(handle) = self.registry.handle(id).await {
            self.best_effort(&handle, PlayerOp::Pause);
        }
        self.registry.clear_current_if(id).await;
    }

    /// The registry this arbiter coordinates.
    pub fn registry(&self) -> &Arc<PlayerRegistry> {
        &self.registry
    }

    pub(super) fn best_effort(&self, handle: &PlayerHandle, op: PlayerOp) {
        let result = match op {
            PlayerOp::Play => handle.player.play(),
            PlayerOp::Pause => handle.player.pause(),
            PlayerOp::Destroy => handle.player.destroy(),
        };
        if let Err(e) = result {
            debug!(id = %handle.id, %op, error = %e, "Ignoring failed player call");
            let _ = self
                .events_tx
                .send(PlaybackEvent::PlayerCallFailed { id: handle.id, op });
        }
    }
}
