// SPDX-License-Identifier: MPL-2.0
//! Tokio event loop driving one controller.
//!
//! Status pushes, gestures and timer wakeups all arrive as [`PlayerEvent`]s
//! on one unbounded channel and are applied strictly in arrival order, so
//! edge-triggered flags like `did_just_finish` are never coalesced away.
//! [`TokioScheduler`] implements the overlay's [`Scheduler`] with sleeping
//! tasks that post their wakeup back into the same channel.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::SendError, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use tokio::task::AbortHandle;

use crate::overlay::{ExternalModes, OverlaySnapshot, PlaybackOverlayController, Scheduler, Wakeup};
use crate::player::{MediaPlayback, PlaybackStatus};

/// Everything that can happen to a mounted player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Status push from the media.
    Status(PlaybackStatus),
    ToggleControls,
    TogglePlayback,
    /// Slider grabbed.
    ScrubStarted,
    /// Slider released at a fraction of the duration.
    ScrubReleased(f64),
    ToggleMute,
    ToggleFullscreen,
    Back,
    ExternalModes(ExternalModes),
    VideoAspectRatio(f32),
    Wakeup(Wakeup),
    /// Ends the session.
    Unmount,
}

/// Cloneable sending side of a session channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: UnboundedSender<PlayerEvent>,
}

impl EventSender {
    /// Queues an event for the session.
    ///
    /// # Errors
    ///
    /// Returns the event back if the session already ended.
    pub fn send(&self, event: PlayerEvent) -> Result<(), SendError<PlayerEvent>> {
        self.tx.send(event)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn downgrade(&self) -> WeakUnboundedSender<PlayerEvent> {
        self.tx.downgrade()
    }
}

/// Creates the event channel for one session.
pub fn channel() -> (EventSender, UnboundedReceiver<PlayerEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, rx)
}

/// [`Scheduler`] backed by tokio timers.
///
/// Holds only a weak sender, so pending timers never keep a session alive
/// after every caller-side sender is gone. Must be used from within a tokio
/// runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: WeakUnboundedSender<PlayerEvent>,
}

impl TokioScheduler {
    pub fn new(events: &EventSender) -> Self {
        Self {
            tx: events.downgrade(),
        }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) -> AbortHandle {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(tx) = tx.upgrade() {
                let _ = tx.send(PlayerEvent::Wakeup(wakeup));
            }
        })
        .abort_handle()
    }

    fn cancel(&mut self, handle: AbortHandle) {
        handle.abort();
    }
}

/// Applies one event to a controller.
pub fn apply<M, S>(controller: &mut PlaybackOverlayController<M, S>, event: PlayerEvent)
where
    M: MediaPlayback,
    S: Scheduler,
{
    match event {
        PlayerEvent::Status(status) => controller.on_status_update(status),
        PlayerEvent::ToggleControls => controller.request_toggle_controls(),
        PlayerEvent::TogglePlayback => controller.request_toggle_playback(),
        PlayerEvent::ScrubStarted => controller.begin_scrub(),
        PlayerEvent::ScrubReleased(fraction) => controller.request_seek(fraction),
        PlayerEvent::ToggleMute => controller.request_mute_toggle(),
        PlayerEvent::ToggleFullscreen => controller.request_fullscreen_toggle(),
        PlayerEvent::Back => controller.request_back(),
        PlayerEvent::ExternalModes(modes) => controller.set_external_modes(modes),
        PlayerEvent::VideoAspectRatio(ratio) => controller.set_video_aspect_ratio(ratio),
        PlayerEvent::Wakeup(wakeup) => controller.on_wakeup(wakeup),
        PlayerEvent::Unmount => controller.unmount(),
    }
}

/// Runs a session until `Unmount` arrives or every sender is dropped.
///
/// The controller is unmounted either way. Returns its final snapshot.
pub async fn run<M, S>(
    mut controller: PlaybackOverlayController<M, S>,
    mut events: UnboundedReceiver<PlayerEvent>,
) -> OverlaySnapshot
where
    M: MediaPlayback,
    S: Scheduler,
{
    while let Some(event) = events.recv().await {
        if event == PlayerEvent::Unmount {
            break;
        }
        apply(&mut controller, event);
    }
    controller.unmount();
    controller.snapshot()
}
