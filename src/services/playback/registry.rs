use std::{collections::HashMap, sync::Arc};

use tokio::sync::{RwLock, broadcast};
use tracing::debug;

use super::{
    events::PlaybackEvent,
    types::{PlayerHandle, PlayerId, PlayerOp},
};

/// Registry state guarded as one unit so that membership and the current
/// pointer can never disagree: removing the current member clears the
/// pointer under the same write lock.
#[derive(Default)]
struct RegistryState {
    players: HashMap<PlayerId, PlayerHandle>,
    current: Option<PlayerId>,
}

/// Process-wide set of mounted players plus the single player, if any,
/// authorized to be playing.
///
/// Constructed once per view and passed by reference to card components;
/// multiple independent registries are legal (and used by tests).
pub struct PlayerRegistry {
    state: RwLock<RegistryState>,
    events_tx: Arc<broadcast::Sender<PlaybackEvent>>,
}

impl PlayerRegistry {
    /// Creates an empty registry publishing to the given event channel.
    pub fn new(events_tx: Arc<broadcast::Sender<PlaybackEvent>>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            events_tx,
        }
    }

    /// Adds a player to the registry. Idempotent if already present.
    pub async fn register(&self, handle: PlayerHandle) {
        let id = handle.id;
        let mut state = self.state.write().await;
        if state.players.insert(id, handle).is_none() {
            debug!(%id, "Registered player");
            let _ = self.events_tx.send(PlaybackEvent::Registered(id));
        }
    }

    /// Removes a player from the registry.
    ///
    /// The player is paused first (best effort) so an unmounting card never
    /// leaves audio running. If it was the current player, the current
    /// pointer is cleared in the same step.
    pub async fn unregister(&self, id: PlayerId) {
        let mut state = self.state.write().await;
        let Some(handle) = state.players.remove(&id) else {
            return;
        };
        self.best_effort_pause(&handle);
        if state.current == Some(id) {
            state.current = None;
            let _ = self.events_tx.send(PlaybackEvent::CurrentChanged(None));
        }
        debug!(%id, "Unregistered player");
        let _ = self.events_tx.send(PlaybackEvent::Unregistered(id));
    }

    /// Pauses every registered player and unconditionally clears the
    /// current pointer.
    ///
    /// Per-player failures are logged and ignored so one broken handle
    /// cannot block pausing the rest.
    pub async fn pause_all(&self) {
        let mut state = self.state.write().await;
        for handle in state.players.values() {
            self.best_effort_pause(handle);
        }
        if state.current.take().is_some() {
            let _ = self.events_tx.send(PlaybackEvent::CurrentChanged(None));
        }
    }

    /// Returns the current player id, if any.
    pub async fn current(&self) -> Option<PlayerId> {
        self.state.read().await.current
    }

    /// Returns whether the given player is registered.
    pub async fn contains(&self, id: PlayerId) -> bool {
        self.state.read().await.players.contains_key(&id)
    }

    /// Number of registered players.
    pub async fn len(&self) -> usize {
        self.state.read().await.players.len()
    }

    /// Returns whether the registry holds no players.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.players.is_empty()
    }

    /// Looks up a registered handle.
    pub(super) async fn handle(&self, id: PlayerId) -> Option<PlayerHandle> {
        self.state.read().await.players.get(&id).cloned()
    }

    /// Marks the given registered player as current. Ignored for players
    /// that are no longer members, preserving the membership invariant.
    pub(super) async fn set_current(&self, id: PlayerId) -> bool {
        let mut state = self.state.write().await;
        if !state.players.contains_key(&id) {
            return false;
        }
        state.current = Some(id);
        let _ = self.events_tx.send(PlaybackEvent::CurrentChanged(Some(id)));
        true
    }

    /// Clears the current pointer if it matches the given player.
    pub(super) async fn clear_current_if(&self, id: PlayerId) {
        let mut state = self.state.write().await;
        if state.current == Some(id) {
            state.current = None;
            let _ = self.events_tx.send(PlaybackEvent::CurrentChanged(None));
        }
    }

    fn best_effort_pause(&self, handle: &PlayerHandle) {
        if let Err(e) = handle.player.pause() {
            debug!(id = %handle.id, error = %e, "Ignoring failed pause call");
            let _ = self.events_tx.send(PlaybackEvent::PlayerCallFailed {
                id: handle.id,
                op: PlayerOp::Pause,
            });
        }
    }
}
