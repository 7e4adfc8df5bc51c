//! Unit tests for the playback coordination service.
//!
//! Drives the registry, arbiter, and visibility detectors against a
//! scripted in-memory embed. Timing-sensitive tests run on a paused
//! clock so the settle delay elapses instantly.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::config::PlaybackConfig;
use crate::services::playback::{
    CardState, EmbedApi, EmbedBootstrap, EmbeddedPlayer, PlaybackError, PlaybackEvent,
    PlaybackService, PlayerCallError, PlayerHandle, PlayerOp,
};

/// In-memory embed player recording every call.
#[derive(Default)]
struct ScriptedPlayer {
    calls: Mutex<Vec<PlayerOp>>,
    playing: AtomicBool,
    destroyed: AtomicBool,
    fail_pause: AtomicBool,
    fail_destroy: AtomicBool,
}

impl ScriptedPlayer {
    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn calls(&self) -> Vec<PlayerOp> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmbeddedPlayer for ScriptedPlayer {
    fn play(&self) -> Result<(), PlayerCallError> {
        if self.destroyed.load(Ordering::SeqCst) {
            return Err(PlayerCallError("player destroyed".to_string()));
        }
        self.calls.lock().unwrap().push(PlayerOp::Play);
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn pause(&self) -> Result<(), PlayerCallError> {
        if self.fail_pause.load(Ordering::SeqCst) {
            return Err(PlayerCallError("pause rejected".to_string()));
        }
        if self.destroyed.load(Ordering::SeqCst) {
            return Err(PlayerCallError("player destroyed".to_string()));
        }
        self.calls.lock().unwrap().push(PlayerOp::Pause);
        self.playing.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn destroy(&self) -> Result<(), PlayerCallError> {
        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(PlayerCallError("destroy rejected".to_string()));
        }
        self.calls.lock().unwrap().push(PlayerOp::Destroy);
        self.destroyed.store(true, Ordering::SeqCst);
        self.playing.store(false, Ordering::SeqCst);
        Ok(())
    }
}

fn scripted_handle() -> (Arc<ScriptedPlayer>, PlayerHandle) {
    let player = Arc::new(ScriptedPlayer::default());
    let handle = PlayerHandle::new(player.clone());
    (player, handle)
}

fn service() -> PlaybackService {
    PlaybackService::new(PlaybackConfig::default())
}

#[tokio::test(start_paused = true)]
async fn exclusive_play_marks_single_current() {
    let service = service();
    let (player, handle) = scripted_handle();
    let id = handle.id;
    service.registry().register(handle).await;

    service.arbiter().request_exclusive_play(id).await;

    assert_eq!(service.registry().current().await, Some(id));
    assert!(player.is_playing());
}

#[tokio::test(start_paused = true)]
async fn competing_requests_leave_at_most_one_current() {
    let service = service();
    let (player_a, handle_a) = scripted_handle();
    let (player_b, handle_b) = scripted_handle();
    let (id_a, id_b) = (handle_a.id, handle_b.id);
    service.registry().register(handle_a).await;
    service.registry().register(handle_b).await;

    let arbiter = service.arbiter().clone();
    let first = tokio::spawn(async move { arbiter.request_exclusive_play(id_a).await });
    // Let the first request reach its settle-delay sleep.
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }

    let mut events = service.events();
    service.arbiter().request_exclusive_play(id_b).await;
    first.await.unwrap();

    assert_eq!(service.registry().current().await, Some(id_a));
    assert!(player_a.is_playing());
    assert!(!player_b.is_playing());

    let mut dropped = false;
    while let Ok(event) = events.try_recv() {
        if event == PlaybackEvent::PlayRequestDropped(id_b) {
            dropped = true;
        }
    }
    assert!(dropped, "losing request should be reported as dropped");
}

#[tokio::test(start_paused = true)]
async fn unregister_current_clears_current() {
    let service = service();
    let (_player, handle) = scripted_handle();
    let id = handle.id;
    service.registry().register(handle).await;
    service.arbiter().request_exclusive_play(id).await;
    assert_eq!(service.registry().current().await, Some(id));

    service.registry().unregister(id).await;

    assert_eq!(service.registry().current().await, None);
    assert!(!service.registry().contains(id).await);
}

#[tokio::test(start_paused = true)]
async fn pause_all_always_clears_current() {
    let service = service();
    let (player, handle) = scripted_handle();
    let id = handle.id;
    service.registry().register(handle).await;
    service.arbiter().request_exclusive_play(id).await;

    service.registry().pause_all().await;
    assert_eq!(service.registry().current().await, None);
    assert!(!player.is_playing());

    // Idempotent on an already-clear registry.
    service.registry().pause_all().await;
    assert_eq!(service.registry().current().await, None);
}

#[tokio::test(start_paused = true)]
async fn register_is_idempotent() {
    let service = service();
    let (_player, handle) = scripted_handle();
    service.registry().register(handle.clone()).await;
    service.registry().register(handle).await;
    assert_eq!(service.registry().len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn broken_player_does_not_block_pause_all() {
    let service = service();
    let (broken, broken_handle) = scripted_handle();
    broken.fail_pause.store(true, Ordering::SeqCst);
    let (healthy, healthy_handle) = scripted_handle();
    let healthy_id = healthy_handle.id;
    service.registry().register(broken_handle).await;
    service.registry().register(healthy_handle).await;

    service.arbiter().request_exclusive_play(healthy_id).await;

    // The broken pause never stopped the sequence.
    assert_eq!(service.registry().current().await, Some(healthy_id));
    assert!(healthy.is_playing());
}

#[tokio::test(start_paused = true)]
async fn visibility_edges_drive_playback() {
    let service = service();
    let (player, handle) = scripted_handle();
    let mut card = service.mount_card(handle, true).await;

    assert_eq!(card.state(), CardState::Hidden);

    card.set_viewport_ratio(0.3).await;
    assert_eq!(card.state(), CardState::VisibleInactive);
    assert!(!player.is_playing());

    card.set_carousel_ratio(0.8).await;
    assert_eq!(card.state(), CardState::Playing);
    assert!(player.is_playing());

    card.set_viewport_ratio(0.1).await;
    assert_eq!(card.state(), CardState::Hidden);
    assert!(!player.is_playing());
    assert_eq!(service.registry().current().await, None);
}

#[tokio::test(start_paused = true)]
async fn flip_within_tick_stops_then_plays() {
    let service = service();
    let (player, handle) = scripted_handle();
    let id = handle.id;
    let mut card = service.mount_card(handle, true).await;

    card.set_viewport_ratio(1.0).await;
    card.set_carousel_ratio(1.0).await;
    assert_eq!(service.registry().current().await, Some(id));

    // true -> false -> true without yielding in between.
    card.set_carousel_ratio(0.0).await;
    card.set_carousel_ratio(1.0).await;

    assert_eq!(service.registry().current().await, Some(id));
    assert!(player.is_playing());
    let calls = player.calls();
    let last_play = calls.iter().rposition(|op| *op == PlayerOp::Play).unwrap();
    let stop_before = calls[..last_play].iter().any(|op| *op == PlayerOp::Pause);
    assert!(stop_before, "stop must precede the re-play");
}

#[tokio::test(start_paused = true)]
async fn only_fully_visible_card_wins() {
    let service = service();
    let mut cards = Vec::new();
    let mut players = Vec::new();
    for _ in 0..3 {
        let (player, handle) = scripted_handle();
        players.push(player);
        cards.push(service.mount_card(handle, true).await);
    }
    let winner = cards[1].player_id();

    // All three scroll onto the screen, only card 2's video slide is the
    // active carousel slide.
    for card in &mut cards {
        card.set_viewport_ratio(1.0).await;
    }
    cards[0].set_carousel_ratio(0.2).await;
    cards[1].set_carousel_ratio(0.9).await;
    cards[2].set_carousel_ratio(0.0).await;

    assert_eq!(service.registry().current().await, Some(winner));
    assert!(players[1].is_playing());
    assert!(!players[0].is_playing());
    assert!(!players[2].is_playing());
}

#[tokio::test(start_paused = true)]
async fn unmount_while_current_leaves_no_trace() {
    let service = service();
    let (player, handle) = scripted_handle();
    let id = handle.id;
    let mut card = service.mount_card(handle, true).await;
    card.set_viewport_ratio(1.0).await;
    card.set_carousel_ratio(1.0).await;
    assert_eq!(service.registry().current().await, Some(id));

    card.unmount().await;

    assert_eq!(service.registry().current().await, None);
    assert!(!service.registry().contains(id).await);
    assert!(service.registry().is_empty().await);
    assert!(player.destroyed.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn failed_destroy_on_unmount_is_reported() {
    let service = service();
    let (player, handle) = scripted_handle();
    player.fail_destroy.store(true, Ordering::SeqCst);
    let id = handle.id;
    let card = service.mount_card(handle, true).await;

    let mut events = service.events();
    card.unmount().await;

    let mut reported = false;
    while let Ok(event) = events.try_recv() {
        if event
            == (PlaybackEvent::PlayerCallFailed {
                id,
                op: PlayerOp::Destroy,
            })
        {
            reported = true;
        }
    }
    assert!(reported, "failed destroy should surface as an event");
}

#[tokio::test(start_paused = true)]
async fn card_without_carousel_never_plays() {
    let service = service();
    let (player, handle) = scripted_handle();
    let mut card = service.mount_card(handle, false).await;

    card.set_viewport_ratio(1.0).await;
    card.set_carousel_ratio(1.0).await;

    assert_eq!(card.state(), CardState::VisibleInactive);
    assert!(!player.is_playing());
    assert_eq!(service.registry().current().await, None);
}

/// Embed API that counts runtime loads and records creation arguments.
#[derive(Default)]
struct CountingEmbedApi {
    ready_calls: AtomicUsize,
    muted_args: Mutex<Vec<bool>>,
}

#[async_trait]
impl EmbedApi for CountingEmbedApi {
    async fn ready(&self) -> Result<(), PlaybackError> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn create_player(
        &self,
        _video_id: &str,
        muted: bool,
    ) -> Result<Arc<dyn EmbeddedPlayer>, PlaybackError> {
        self.muted_args.lock().unwrap().push(muted);
        Ok(Arc::new(ScriptedPlayer::default()))
    }
}

#[tokio::test]
async fn embed_runtime_loads_once() {
    let api = Arc::new(CountingEmbedApi::default());
    let bootstrap = EmbedBootstrap::new(api.clone());

    let first = bootstrap.create_player("dQw4w9WgXcQ", true).await.unwrap();
    let second = bootstrap.create_player("M7lc1UVf-VE", true).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(api.ready_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn create_card_passes_the_mute_preference() {
    let api = Arc::new(CountingEmbedApi::default());
    let config = PlaybackConfig {
        autoplay_muted: false,
        ..PlaybackConfig::default()
    };
    let service = PlaybackService::with_embed(config, api.clone());

    let _card = service.create_card("dQw4w9WgXcQ", true).await.unwrap();

    assert_eq!(*api.muted_args.lock().unwrap(), vec![false]);

    let muted_service =
        PlaybackService::with_embed(PlaybackConfig::default(), api.clone());
    let _card = muted_service.create_card("M7lc1UVf-VE", true).await.unwrap();

    assert_eq!(*api.muted_args.lock().unwrap(), vec![false, true]);
}
