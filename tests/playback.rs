//! Integration tests for the playback coordination service.
//!
//! Drives the public surface the way a menu view would: mount cards,
//! feed visibility observations, and assert the single-active-player
//! guarantee holds across scrolling patterns.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::panic))]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use odymenu::config::PlaybackConfig;
use odymenu::services::playback::{
    CardState, EmbedApi, EmbeddedPlayer, PlaybackError, PlaybackEvent, PlaybackService,
    PlayerCallError, PlayerHandle, PlayerOp,
};

/// Embedded player double that records every call it receives.
#[derive(Debug, Default)]
struct RecordingPlayer {
    ops: Mutex<Vec<PlayerOp>>,
    playing: AtomicBool,
}

impl RecordingPlayer {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn ops(&self) -> Vec<PlayerOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl EmbeddedPlayer for RecordingPlayer {
    fn play(&self) -> Result<(), PlayerCallError> {
        self.ops.lock().unwrap().push(PlayerOp::Play);
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn pause(&self) -> Result<(), PlayerCallError> {
        self.ops.lock().unwrap().push(PlayerOp::Pause);
        self.playing.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn destroy(&self) -> Result<(), PlayerCallError> {
        self.ops.lock().unwrap().push(PlayerOp::Destroy);
        self.playing.store(false, Ordering::SeqCst);
        Ok(())
    }
}

struct StubEmbedApi;

#[async_trait]
impl EmbedApi for StubEmbedApi {
    async fn ready(&self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn create_player(
        &self,
        _video_id: &str,
        _muted: bool,
    ) -> Result<Arc<dyn EmbeddedPlayer>, PlaybackError> {
        Ok(RecordingPlayer::new())
    }
}

fn service() -> PlaybackService {
    PlaybackService::new(PlaybackConfig::default())
}

mod carousel_scrolling {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn swiping_between_cards_moves_the_single_active_player() {
        let service = service();

        let player_a = RecordingPlayer::new();
        let player_b = RecordingPlayer::new();
        let mut card_a = service
            .mount_card(PlayerHandle::new(player_a.clone()), true)
            .await;
        let mut card_b = service
            .mount_card(PlayerHandle::new(player_b.clone()), true)
            .await;

        // Card A scrolls in and its video slide is centered.
        card_a.set_viewport_ratio(0.8).await;
        card_a.set_carousel_ratio(1.0).await;

        assert_eq!(card_a.state(), CardState::Playing);
        assert!(player_a.is_playing());
        assert_eq!(service.registry().current().await, Some(card_a.player_id()));

        // Swipe: A's slide leaves, B's slide arrives.
        card_a.set_carousel_ratio(0.2).await;
        card_b.set_viewport_ratio(0.9).await;
        card_b.set_carousel_ratio(0.9).await;

        assert_eq!(card_b.state(), CardState::Playing);
        assert!(player_b.is_playing());
        assert!(!player_a.is_playing());
        assert_eq!(service.registry().current().await, Some(card_b.player_id()));
    }

    #[tokio::test(start_paused = true)]
    async fn threshold_misses_never_start_playback() {
        let service = service();

        let player = RecordingPlayer::new();
        let mut card = service
            .mount_card(PlayerHandle::new(player.clone()), true)
            .await;

        // Viewport below threshold while the slide is centered.
        card.set_viewport_ratio(0.2).await;
        card.set_carousel_ratio(1.0).await;
        assert_eq!(card.state(), CardState::Hidden);

        // Slide leaves, then the card scrolls fully in.
        card.set_carousel_ratio(0.4).await;
        card.set_viewport_ratio(0.9).await;
        assert_eq!(card.state(), CardState::VisibleInactive);

        assert!(!player.is_playing());
        assert!(player.ops().is_empty() || !player.ops().contains(&PlayerOp::Play));
    }

    #[tokio::test(start_paused = true)]
    async fn every_player_is_paused_before_the_winner_plays() {
        let service = service();

        let player_a = RecordingPlayer::new();
        let player_b = RecordingPlayer::new();
        let mut card_a = service
            .mount_card(PlayerHandle::new(player_a.clone()), true)
            .await;
        let _card_b = service
            .mount_card(PlayerHandle::new(player_b.clone()), true)
            .await;

        card_a.set_viewport_ratio(1.0).await;
        card_a.set_carousel_ratio(1.0).await;

        // The bystander got pause sweeps even though it never played.
        assert!(player_b.ops().iter().all(|op| *op == PlayerOp::Pause));
        assert!(!player_b.ops().is_empty());

        // The winner's play comes after its own pause sweeps.
        let ops_a = player_a.ops();
        let play_pos = ops_a.iter().position(|op| *op == PlayerOp::Play).unwrap();
        assert!(ops_a[..play_pos].iter().all(|op| *op == PlayerOp::Pause));
        assert_eq!(ops_a[play_pos..], [PlayerOp::Play]);
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn unmounting_the_active_card_clears_everything() {
        let service = service();

        let player = RecordingPlayer::new();
        let mut card = service
            .mount_card(PlayerHandle::new(player.clone()), true)
            .await;
        let id = card.player_id();

        card.set_viewport_ratio(1.0).await;
        card.set_carousel_ratio(1.0).await;
        assert_eq!(service.registry().current().await, Some(id));

        card.unmount().await;

        assert_eq!(service.registry().current().await, None);
        assert!(!service.registry().contains(id).await);
        assert!(player.ops().contains(&PlayerOp::Destroy));
        assert!(!player.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn cards_created_through_the_embed_backend_play_on_visibility() {
        let service =
            PlaybackService::with_embed(PlaybackConfig::default(), Arc::new(StubEmbedApi));

        let mut card = service.create_card("dQw4w9WgXcQ", true).await.unwrap();

        card.set_viewport_ratio(1.0).await;
        card.set_carousel_ratio(1.0).await;

        assert_eq!(card.state(), CardState::Playing);
        assert_eq!(service.registry().current().await, Some(card.player_id()));
    }

    #[tokio::test(start_paused = true)]
    async fn create_card_without_backend_is_an_error() {
        let service = service();
        let result = service.create_card("dQw4w9WgXcQ", true).await;
        assert!(matches!(result, Err(PlaybackError::BootstrapFailed(_))));
    }
}

mod events {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn play_transitions_are_observable() {
        let service = service();
        let mut events = service.events();

        let player = RecordingPlayer::new();
        let mut card = service
            .mount_card(PlayerHandle::new(player.clone()), true)
            .await;
        let id = card.player_id();

        card.set_viewport_ratio(1.0).await;
        card.set_carousel_ratio(1.0).await;

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }

        assert!(seen.contains(&PlaybackEvent::Registered(id)));
        assert!(seen.contains(&PlaybackEvent::CurrentChanged(Some(id))));
    }

    #[tokio::test(start_paused = true)]
    async fn current_stream_follows_the_active_player() {
        use futures::StreamExt;

        let service = service();
        let stream = service.current_stream();
        tokio::pin!(stream);

        let player = RecordingPlayer::new();
        let mut card = service
            .mount_card(PlayerHandle::new(player.clone()), true)
            .await;
        let id = card.player_id();

        card.set_viewport_ratio(1.0).await;
        card.set_carousel_ratio(1.0).await;
        assert_eq!(stream.next().await, Some(Some(id)));

        card.set_carousel_ratio(0.0).await;
        assert_eq!(stream.next().await, Some(None));
    }
}
