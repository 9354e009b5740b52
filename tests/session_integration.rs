// SPDX-License-Identifier: MPL-2.0
//! Session tests: a controller on tokio talking to a media task over channels.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use overlay_player::config::PlayerOptions;
use overlay_player::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, UserAction};
use overlay_player::error::PlaybackError;
use overlay_player::overlay::{AutoHideDelay, ControlsVisibility, ControllerBuilder, RenderDirectives};
use overlay_player::player::{
    AudioMode, MediaCommand, MediaCommandSender, PlaybackState, PlaybackStatus, StatusRequest,
};
use overlay_player::session::{self, PlayerEvent, TokioScheduler};

fn options() -> PlayerOptions {
    PlayerOptions::default().with_source("file:///movie.mp4")
}

#[tokio::test(start_paused = true)]
async fn commands_reach_the_media_task_in_order() {
    let (events, event_rx) = session::channel();
    let (media, mut media_rx) = MediaCommandSender::channel();
    let controller = ControllerBuilder::new(options()).mount(media, TokioScheduler::new(&events));
    let session = tokio::spawn(session::run(controller, event_rx));

    let sends = [
        PlayerEvent::Status(PlaybackStatus::loaded(2_000, 8_000).playing(true)),
        PlayerEvent::ToggleControls,
    ];
    for event in sends {
        events.send(event).expect("session running");
    }
    tokio::time::sleep(Duration::from_millis(350)).await;
    events
        .send(PlayerEvent::TogglePlayback)
        .expect("session running");
    events
        .send(PlayerEvent::ScrubReleased(0.5))
        .expect("session running");
    events.send(PlayerEvent::Unmount).expect("session running");

    let snapshot = session.await.expect("session task");
    assert_eq!(snapshot.position_millis, 4_000);
    assert_eq!(snapshot.state, PlaybackState::Paused);

    let mut commands = Vec::new();
    while let Ok(command) = media_rx.try_recv() {
        commands.push(command);
    }
    assert_eq!(
        commands,
        vec![
            MediaCommand::SetAudioMode(AudioMode::default()),
            MediaCommand::SetStatus(StatusRequest::pause()),
            MediaCommand::SetStatus(StatusRequest::seek_to(4_000)),
            MediaCommand::Stop,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn controls_hide_after_the_configured_delay() {
    let (events, event_rx) = session::channel();
    let (media, _media_rx) = MediaCommandSender::channel();
    let renders: Arc<Mutex<Vec<RenderDirectives>>> = Arc::default();
    let sink = Arc::clone(&renders);

    let controller = ControllerBuilder::new(PlayerOptions {
        auto_hide_delay: AutoHideDelay::new(1_000),
        ..options()
    })
    .on_render(move |directives| sink.lock().expect("lock").push(directives.clone()))
    .mount(media, TokioScheduler::new(&events));
    let session = tokio::spawn(session::run(controller, event_rx));

    events
        .send(PlayerEvent::Status(PlaybackStatus::loaded(0, 30_000).playing(true)))
        .expect("session running");
    events
        .send(PlayerEvent::ToggleControls)
        .expect("session running");

    tokio::time::sleep(Duration::from_millis(500)).await;
    let visible = renders
        .lock()
        .expect("lock")
        .last()
        .map(|d| d.snapshot.controls_visibility);
    assert_eq!(visible, Some(ControlsVisibility::Visible));

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    events.send(PlayerEvent::Unmount).expect("session running");
    let snapshot = session.await.expect("session task");
    assert_eq!(snapshot.controls_visibility, ControlsVisibility::Hidden);
}

#[tokio::test(start_paused = true)]
async fn session_logs_user_actions() {
    let mut collector = DiagnosticsCollector::default();
    let (events, event_rx) = session::channel();
    let (media, _media_rx) = MediaCommandSender::channel();
    let controller = ControllerBuilder::new(options())
        .diagnostics(collector.handle())
        .mount(media, TokioScheduler::new(&events));
    let session = tokio::spawn(session::run(controller, event_rx));

    events
        .send(PlayerEvent::ToggleControls)
        .expect("session running");
    drop(events);
    session.await.expect("session task");

    collector.process_pending();
    assert!(collector.iter().any(|event| event.kind
        == DiagnosticEventKind::UserAction {
            action: UserAction::ToggleControls,
            details: None,
        }));
}

#[tokio::test(start_paused = true)]
async fn dead_media_task_does_not_stop_the_session() {
    let (events, event_rx) = session::channel();
    let (media, media_rx) = MediaCommandSender::channel();
    drop(media_rx);

    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let controller = ControllerBuilder::new(options())
        .on_error(move |event| {
            sink.lock()
                .expect("lock")
                .push((event.is_fatal(), event.error.clone()));
        })
        .mount(media, TokioScheduler::new(&events));
    let session = tokio::spawn(session::run(controller, event_rx));

    events
        .send(PlayerEvent::Status(PlaybackStatus::loaded(1_000, 5_000)))
        .expect("session running");
    drop(events);

    let snapshot = session.await.expect("session task");
    assert_eq!(snapshot.state, PlaybackState::Paused);
    assert_eq!(
        *errors.lock().expect("lock"),
        vec![(false, PlaybackError::MediaUnavailable)]
    );
}
