use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Playback coordination configuration.
///
/// Tunables for the exclusive-playback mechanism on the dish media
/// carousel. The defaults match the behavior the diner surface was
/// tuned against.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Minimum visible area ratio for a card to count as on screen.
    pub viewport_threshold: f64,

    /// Minimum visible area ratio for the video slide to count as the
    /// active carousel slide.
    pub carousel_threshold: f64,

    /// Delay between the defensive pause phases and the final play call,
    /// in milliseconds.
    ///
    /// The embed player keeps processing a pause for a short while after
    /// the call returns; this delay out-waits that lag. Empirically tuned,
    /// no retry path behind it.
    pub settle_delay_ms: u64,

    /// Whether videos start muted when they gain playback.
    pub autoplay_muted: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            viewport_threshold: 0.25,
            carousel_threshold: 0.5,
            settle_delay_ms: 100,
            autoplay_muted: true,
        }
    }
}

impl PlaybackConfig {
    /// Settle delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
