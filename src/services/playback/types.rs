use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use super::embed::EmbeddedPlayer;

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for one mounted video embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Allocates the next process-unique id.
    pub fn next() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Handle to one mounted embed: the id plus a non-owning reference to the
/// player instance. The owning card keeps the only strong claim on the
/// player's lifecycle; the registry only ever borrows it for pause calls.
#[derive(Clone)]
pub struct PlayerHandle {
    /// Registry identity of this embed.
    pub id: PlayerId,

    /// The embed instance itself.
    pub player: Arc<dyn EmbeddedPlayer>,
}

impl PlayerHandle {
    /// Wraps an embed instance under a fresh id.
    pub fn new(player: Arc<dyn EmbeddedPlayer>) -> Self {
        Self {
            id: PlayerId::next(),
            player,
        }
    }
}

impl fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerHandle").field("id", &self.id).finish()
    }
}

/// Operation issued against an embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOp {
    /// Start playback.
    Play,

    /// Pause playback.
    Pause,

    /// Tear the embed down.
    Destroy,
}

impl fmt::Display for PlayerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerOp::Play => write!(f, "play"),
            PlayerOp::Pause => write!(f, "pause"),
            PlayerOp::Destroy => write!(f, "destroy"),
        }
    }
}

/// Per-card playback state, derived from the two visibility booleans and
/// the outcome of the last exclusive-play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// Card is not in the page viewport.
    #[default]
    Hidden,

    /// Card is on screen but its video slide is not the active carousel
    /// slide.
    VisibleInactive,

    /// Both visibility booleans are true and an exclusive-play request was
    /// issued, but this card did not win playback.
    Requesting,

    /// This card's player is the current one.
    Playing,
}
