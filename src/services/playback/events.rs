use super::types::{PlayerId, PlayerOp};

/// Events emitted by the playback coordination service.
///
/// Broadcast to any interested observer (UI overlays, diagnostics). The
/// service never waits on receivers; a lagging subscriber only loses
/// events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A player was added to the registry.
    Registered(PlayerId),

    /// A player was removed from the registry.
    Unregistered(PlayerId),

    /// The current (sole playing) player changed.
    CurrentChanged(Option<PlayerId>),

    /// An exclusive-play request arrived while another was in flight and
    /// was dropped rather than queued.
    PlayRequestDropped(PlayerId),

    /// A play/pause/destroy call against an embed failed and was ignored.
    PlayerCallFailed {
        /// Player the call was issued against.
        id: PlayerId,
        /// Operation that failed.
        op: PlayerOp,
    },
}
