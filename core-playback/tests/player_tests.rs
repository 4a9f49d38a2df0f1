//! Audio player component: mount, controls, view, lifecycle.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use bridge_traits::logging::LogLevel;
use bridge_traits::playback::{MediaHandle, PlayRejection};
use common::{capture_logs, settle, FakeHandle};
use core_async::task::run_local;
use core_playback::{AudioPlayer, Icon, PlaybackError};
use core_runtime::WidgetConfig;

fn mount(handle: &Rc<FakeHandle>) -> AudioPlayer {
    AudioPlayer::mount(WidgetConfig::default(), handle.clone()).unwrap()
}

#[test]
fn test_cold_start() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    let state = player.state();
    assert!(!state.is_playing);
    assert_eq!(state.volume, 0.5);
    assert!(!state.is_muted);

    assert_eq!(handle.volume(), 0.5);
    assert!(!handle.muted());
    assert!(handle.is_paused());
    assert_eq!(handle.play_calls.get(), 0);
}

#[test]
fn test_mount_applies_configured_initial_state() {
    let handle = Rc::new(FakeHandle::new());
    let config = WidgetConfig::builder()
        .initial_volume(0.2)
        .initial_muted(true)
        .build()
        .unwrap();

    let player = AudioPlayer::mount(config, handle.clone()).unwrap();

    assert_eq!(handle.volume(), 0.2);
    assert!(handle.muted());
    assert_eq!(player.view().mute_title, "Unmute");
}

#[test]
fn test_mount_rejects_invalid_config() {
    let handle = Rc::new(FakeHandle::new());
    let config = WidgetConfig {
        initial_volume: 3.0,
        ..WidgetConfig::default()
    };

    let result = AudioPlayer::mount(config, handle.clone());

    assert!(matches!(result, Err(PlaybackError::Config(_))));
    assert_eq!(handle.volume_writes.get(), 0);
}

#[test]
fn test_slider_to_zero_then_up() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    player.set_volume(0.0);
    let view = player.view();
    assert!(player.state().is_muted);
    assert_eq!(view.readout, "0%");
    assert_eq!(view.mute_icon, Icon::VolumeX);
    assert!(handle.muted());

    player.set_volume(0.7);
    let view = player.view();
    assert!(!player.state().is_muted);
    assert_eq!(view.readout, "70%");
    assert_eq!(view.slider_title, "Volume: 70%");
    assert_eq!(view.mute_icon, Icon::Volume2);
    assert_eq!(handle.volume(), 0.7);
    assert!(!handle.muted());
}

#[test]
fn test_mute_button_reaches_handle_without_touching_volume() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    player.toggle_mute();
    assert!(handle.muted());
    assert_eq!(handle.volume(), 0.5);
    assert_eq!(player.view().slider.value, 0.0);

    player.toggle_mute();
    assert!(!handle.muted());
    assert_eq!(player.view().slider.value, 0.5);
}

#[test]
fn test_unchanged_volume_does_not_resync() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);
    let writes = handle.volume_writes.get();

    player.set_volume(0.5);
    player.set_muted(false);

    assert_eq!(handle.volume_writes.get(), writes);
}

#[tokio::test]
async fn test_play_then_pause_in_same_tick() {
    let (logs, _guard) = capture_logs();
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    run_local(async {
        player.toggle_play_pause();
        player.toggle_play_pause();
        settle().await;
    })
    .await;

    assert!(!player.state().is_playing);
    assert!(handle.is_paused());
    assert_eq!(player.pending_requests(), 0);
    assert!(logs.entries_at_least(LogLevel::Warn).is_empty());
}

#[tokio::test]
async fn test_play_request_resolves_later() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    run_local(async {
        player.toggle_play_pause();
        assert!(player.state().is_playing);
        assert_eq!(player.view().play_title, "Pause");
        assert_eq!(player.pending_requests(), 1);

        handle.start_pending();
        settle().await;

        assert_eq!(player.pending_requests(), 0);
        assert!(player.state().is_playing);
        assert!(!handle.is_paused());
    })
    .await;
}

#[tokio::test]
async fn test_rapid_toggles_issue_a_request_each() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    run_local(async {
        for _ in 0..5 {
            player.toggle_play_pause();
        }
        settle().await;
    })
    .await;

    assert_eq!(handle.play_calls.get(), 3);
    assert_eq!(handle.pause_calls.get(), 2);
    assert!(player.state().is_playing);
    assert_eq!(handle.waiting_requests(), 1);
}

#[tokio::test]
async fn test_autoplay_block_keeps_playing_flag() {
    let (logs, _guard) = capture_logs();
    let handle = Rc::new(FakeHandle::rejecting(PlayRejection::NotAllowed {
        message: "user gesture required".to_string(),
    }));
    let player = mount(&handle);

    run_local(async {
        player.toggle_play_pause();
        settle().await;
    })
    .await;

    assert!(player.state().is_playing);
    assert_eq!(player.view().play_icon, Icon::Pause);
    assert!(logs.entries_at_least(LogLevel::Warn).is_empty());
}

#[test]
fn test_toggle_without_executor_warns_instead_of_panicking() {
    let (logs, _guard) = capture_logs();
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    player.toggle_play_pause();

    assert!(player.state().is_playing);
    assert_eq!(handle.play_calls.get(), 1);
    assert_eq!(player.pending_requests(), 0);
    let warnings = logs.entries_at_least(LogLevel::Warn);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "Play request outcome will not be reported"
    );

    player.toggle_play_pause();
    assert!(!player.state().is_playing);
    assert_eq!(handle.pause_calls.get(), 1);
}

#[test]
fn test_subscribers_see_changes() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);
    let readouts = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&readouts);
    let _subscription = player.subscribe(move |change| {
        sink.borrow_mut()
            .push(core_playback::volume_percent(change.current.effective_volume()));
    });

    player.set_volume(0.3);
    player.toggle_mute();

    assert_eq!(*readouts.borrow(), vec![30, 0]);
}

#[test]
fn test_drop_releases_once() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    player.release();
    assert!(player.is_released());
    drop(player);

    assert_eq!(handle.release_calls.get(), 1);
}

#[test]
fn test_unmount_releases_and_stops() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);

    player.unmount();

    assert_eq!(handle.release_calls.get(), 1);
    assert!(handle.is_paused());
}

#[test]
fn test_released_player_leaves_handle_alone() {
    let handle = Rc::new(FakeHandle::new());
    let player = mount(&handle);
    player.release();
    let writes = handle.volume_writes.get();

    player.set_volume(0.9);

    assert_eq!(player.state().volume, 0.9);
    assert_eq!(handle.volume_writes.get(), writes);
}
