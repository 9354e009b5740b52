// SPDX-License-Identifier: MPL-2.0
//! End-to-end overlay scenarios through the public API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use approx::assert_abs_diff_eq;
use overlay_player::config::PlayerOptions;
use overlay_player::error::{ErrorKind, PlaybackError};
use overlay_player::overlay::{
    ControlIcon, ControlsVisibility, ControllerBuilder, FrameScheduler, PlaybackOverlayController,
    Wakeup,
};
use overlay_player::player::{MediaPlayback, PlaybackState, PlaybackStatus, StatusRequest};

#[derive(Debug, Default, Clone)]
struct SharedMedia {
    requests: Arc<Mutex<Vec<StatusRequest>>>,
    stopped: Arc<Mutex<bool>>,
}

impl SharedMedia {
    fn requests(&self) -> Vec<StatusRequest> {
        self.requests.lock().expect("lock").clone()
    }

    fn stopped(&self) -> bool {
        *self.stopped.lock().expect("lock")
    }
}

impl MediaPlayback for SharedMedia {
    fn set_status(&mut self, request: StatusRequest) {
        self.requests.lock().expect("lock").push(request);
    }

    fn stop(&mut self) {
        *self.stopped.lock().expect("lock") = true;
    }
}

type Controller = PlaybackOverlayController<SharedMedia, FrameScheduler>;

const FADE: Duration = Duration::from_millis(300);

fn mount(options: PlayerOptions) -> (Controller, SharedMedia) {
    let media = SharedMedia::default();
    let controller = ControllerBuilder::new(options).mount(media.clone(), FrameScheduler::new());
    (controller, media)
}

fn with_source() -> PlayerOptions {
    PlayerOptions::default().with_source("https://example.com/movie.mp4")
}

#[test]
fn playing_status_renders_time_and_pause_icon() {
    let (mut controller, _media) = mount(with_source());
    controller.on_status_update(PlaybackStatus::loaded(5_000, 10_000).playing(true));

    let directives = controller.directives();
    assert_eq!(directives.snapshot.state, PlaybackState::Playing);
    assert_eq!(directives.snapshot.time_label(), "00:05 / 00:10");
    assert_eq!(directives.control_icon, Some(ControlIcon::Pause));
    assert_abs_diff_eq!(directives.slider_fraction.unwrap_or_default(), 0.5);
}

#[test]
fn end_of_media_is_ended_whatever_the_play_intent() {
    let (mut controller, _media) = mount(with_source());
    for (position, should_play) in [(10_000, true), (10_000, false)] {
        controller.on_status_update(PlaybackStatus::loaded(position, 10_000).playing(should_play));
        assert_eq!(controller.state(), PlaybackState::Ended);
    }
}

#[test]
fn finishing_reveals_controls_which_then_stay() {
    let (mut controller, _media) = mount(with_source());
    controller.on_status_update(
        PlaybackStatus::loaded(10_000, 10_000)
            .playing(true)
            .just_finished(true),
    );

    controller.advance_time(FADE);
    assert_eq!(controller.controls_visibility(), ControlsVisibility::Visible);

    controller.advance_time(Duration::from_secs(10));
    assert_eq!(controller.controls_visibility(), ControlsVisibility::Visible);
    assert_eq!(controller.directives().control_icon, Some(ControlIcon::Replay));
}

#[test]
fn toggling_controls_twice_never_fires_twice() {
    let (mut controller, _media) = mount(with_source());
    controller.on_status_update(PlaybackStatus::loaded(0, 60_000).playing(true));

    controller.request_toggle_controls();
    controller.advance_time(Duration::from_millis(100));
    controller.request_toggle_controls();
    controller.advance_time(Duration::from_millis(100));
    controller.request_toggle_controls();

    let auto_hides = controller
        .scheduler()
        .pending()
        .filter(|wakeup| matches!(wakeup, Wakeup::AutoHide(_)))
        .count();
    assert_eq!(auto_hides, 1);

    controller.advance_time(FADE);
    assert_eq!(controller.controls_visibility(), ControlsVisibility::Visible);
    controller.advance_time(Duration::from_millis(2_000));
    controller.advance_time(FADE);
    assert_eq!(controller.controls_visibility(), ControlsVisibility::Hidden);
}

#[test]
fn play_pause_requires_visible_controls() {
    let (mut controller, media) = mount(with_source());
    controller.on_status_update(PlaybackStatus::loaded(1_000, 10_000).playing(true));

    controller.request_toggle_playback();
    assert!(media.requests().is_empty());

    controller.request_toggle_controls();
    controller.advance_time(FADE);
    controller.request_toggle_playback();
    assert_eq!(media.requests(), vec![StatusRequest::pause()]);
    assert_eq!(controller.state(), PlaybackState::Paused);
}

#[test]
fn full_seek_lands_on_duration() {
    let (mut controller, media) = mount(with_source());
    controller.on_status_update(PlaybackStatus::loaded(0, 10_000));

    controller.request_seek(1.0);
    assert_eq!(media.requests(), vec![StatusRequest::seek_to(10_000)]);
}

#[test]
fn missing_source_fails_at_construction() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let controller = ControllerBuilder::new(PlayerOptions::default())
        .on_error(move |event| sink.lock().expect("lock").push(event.clone()))
        .mount(SharedMedia::default(), FrameScheduler::new());

    assert_eq!(controller.state(), PlaybackState::Error);
    let errors = errors.lock().expect("lock");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Fatal);
    assert_eq!(errors[0].error, PlaybackError::MissingSource);
}

#[test]
fn unmount_mid_fade_rejects_late_wakeups() {
    let (mut controller, media) = mount(with_source());
    controller.on_status_update(PlaybackStatus::loaded(0, 10_000).playing(true));
    controller.request_toggle_controls();
    let late: Vec<Wakeup> = controller.scheduler().pending().collect();

    controller.unmount();
    assert!(media.stopped());
    assert_eq!(controller.scheduler().pending_len(), 0);

    for wakeup in late {
        controller.on_wakeup(wakeup);
    }
    controller.unmount();
    assert_eq!(controller.controls_visibility(), ControlsVisibility::Hidden);
    assert!(controller.is_unmounted());
}

#[test]
fn dropping_controller_stops_media() {
    let (controller, media) = mount(with_source());
    drop(controller);
    assert!(media.stopped());
}
