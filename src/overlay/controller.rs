// SPDX-License-Identifier: MPL-2.0
//! The playback overlay state machine.
//!
//! [`PlaybackOverlayController`] turns media status pushes, user gestures and
//! scheduler wakeups into an [`OverlaySnapshot`] and [`RenderDirectives`],
//! and sends play/pause/seek requests back to the media. It owns the single
//! auto-hide timer and the fade animator; everything that happens later is a
//! [`Wakeup`] delivered back through [`PlaybackOverlayController::on_wakeup`].
//!
//! All methods run on one event loop. Nothing here blocks, and the media is
//! never awaited: completion of a command is only observed through the next
//! [`PlaybackOverlayController::on_status_update`].

use std::fmt;
use std::time::Duration;

use super::auto_hide::AutoHideTimer;
use super::fade::FadeAnimator;
use super::layout::{fill_frame, fit_video, VideoSize};
use super::scheduler::{FrameScheduler, Scheduler, Wakeup};
use super::snapshot::{ControlIcon, FullscreenIcon, MuteIcon, OverlaySnapshot, RenderDirectives};
use super::visibility::ControlsVisibility;
use crate::config::PlayerOptions;
use crate::diagnostics::{DiagnosticsHandle, PlayerStateEvent, UserAction};
use crate::error::{ErrorEvent, PlaybackError};
use crate::player::{
    format_mm_ss, position_for_fraction, AudioMode, MediaPlayback, PlaybackState, PlaybackStatus,
    StatusRequest,
};

/// What a mute or fullscreen toggle asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRequest {
    Enter,
    Exit,
}

impl ModeRequest {
    fn toggling(active: bool) -> Self {
        if active {
            Self::Exit
        } else {
            Self::Enter
        }
    }
}

/// Mute and fullscreen modes as reported by the caller.
///
/// The controller never changes these itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExternalModes {
    pub muted: bool,
    pub fullscreen: bool,
}

pub type ErrorCallback = Box<dyn FnMut(&ErrorEvent) + Send>;
pub type StatusCallback = Box<dyn FnMut(&PlaybackStatus) + Send>;
pub type RenderCallback = Box<dyn FnMut(&RenderDirectives) + Send>;
pub type ModeCallback = Box<dyn FnMut(ModeRequest) + Send>;
pub type BackCallback = Box<dyn FnMut() + Send>;

/// Caller-supplied hooks. Every hook is optional.
#[derive(Default)]
pub struct PlayerCallbacks {
    pub error: Option<ErrorCallback>,
    /// Receives every raw status push before the controller reacts to it.
    pub playback: Option<StatusCallback>,
    pub render: Option<RenderCallback>,
    pub mute: Option<ModeCallback>,
    pub fullscreen: Option<ModeCallback>,
    pub back: Option<BackCallback>,
}

impl fmt::Debug for PlayerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerCallbacks")
            .field("error", &self.error.is_some())
            .field("playback", &self.playback.is_some())
            .field("render", &self.render.is_some())
            .field("mute", &self.mute.is_some())
            .field("fullscreen", &self.fullscreen.is_some())
            .field("back", &self.back.is_some())
            .finish()
    }
}

/// Collects options and callbacks before mounting a controller.
#[derive(Debug)]
pub struct ControllerBuilder {
    options: PlayerOptions,
    callbacks: PlayerCallbacks,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ControllerBuilder {
    /// Starts configuring a controller with the given options.
    pub fn new(options: PlayerOptions) -> Self {
        Self {
            options,
            callbacks: PlayerCallbacks::default(),
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn on_error(mut self, callback: impl FnMut(&ErrorEvent) + Send + 'static) -> Self {
        self.callbacks.error = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_playback(mut self, callback: impl FnMut(&PlaybackStatus) + Send + 'static) -> Self {
        self.callbacks.playback = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_render(mut self, callback: impl FnMut(&RenderDirectives) + Send + 'static) -> Self {
        self.callbacks.render = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_mute(mut self, callback: impl FnMut(ModeRequest) + Send + 'static) -> Self {
        self.callbacks.mute = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_fullscreen(mut self, callback: impl FnMut(ModeRequest) + Send + 'static) -> Self {
        self.callbacks.fullscreen = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_back(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.callbacks.back = Some(Box::new(callback));
        self
    }

    /// Replaces all callbacks at once.
    #[must_use]
    pub fn callbacks(mut self, callbacks: PlayerCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Mounts the controller on a media instance.
    ///
    /// A missing source puts the controller in `Error` and reports one fatal
    /// error before this returns. Otherwise the controller starts `Loading`
    /// and configures the audio mode; a refusal is reported as non-fatal.
    pub fn mount<M, S>(self, media: M, scheduler: S) -> PlaybackOverlayController<M, S>
    where
        M: MediaPlayback,
        S: Scheduler,
    {
        PlaybackOverlayController::mount(self, media, scheduler)
    }
}

/// Owns the UI-visible playback state for one mounted player.
///
/// Created through [`ControllerBuilder::mount`].
pub struct PlaybackOverlayController<M, S>
where
    M: MediaPlayback,
    S: Scheduler,
{
    options: PlayerOptions,
    media: M,
    scheduler: S,
    callbacks: PlayerCallbacks,
    diagnostics: Option<DiagnosticsHandle>,

    snapshot: OverlaySnapshot,
    error: Option<PlaybackError>,
    fade: FadeAnimator<S::Handle>,
    auto_hide: AutoHideTimer<S::Handle>,
    modes: ExternalModes,
    video_aspect_ratio: Option<f32>,

    /// Options or the latest status say the video loops.
    looping: bool,
    /// Buffering may still reveal the controls.
    reveal_on_buffering: bool,
    /// Whether playback was running when the slider was grabbed.
    scrub_was_playing: Option<bool>,
    navigating_away: bool,
    unmounted: bool,
}

impl<M, S> PlaybackOverlayController<M, S>
where
    M: MediaPlayback,
    S: Scheduler,
{
    fn mount(builder: ControllerBuilder, media: M, scheduler: S) -> Self {
        let ControllerBuilder {
            options,
            callbacks,
            diagnostics,
        } = builder;

        let looping = options.looping;
        let visibility = if looping {
            ControlsVisibility::Hidden
        } else {
            ControlsVisibility::from_visible(options.default_controls_visible)
        };
        let source = options.source().map(str::to_owned);
        let state = if source.is_some() {
            PlaybackState::Loading
        } else {
            PlaybackState::Error
        };

        let mut controller = Self {
            auto_hide: AutoHideTimer::new(options.auto_hide_delay),
            options,
            media,
            scheduler,
            callbacks,
            diagnostics,
            snapshot: OverlaySnapshot::initial(state, visibility),
            error: None,
            fade: FadeAnimator::new(visibility),
            modes: ExternalModes::default(),
            video_aspect_ratio: None,
            looping,
            reveal_on_buffering: true,
            scrub_was_playing: None,
            navigating_away: false,
            unmounted: false,
        };

        controller.log_state(PlayerStateEvent::Mounted {
            source: source.clone(),
        });

        if source.is_none() {
            controller.error = Some(PlaybackError::MissingSource);
            controller.report_error(ErrorEvent::fatal(PlaybackError::MissingSource));
        } else if let Err(err) = controller.media.set_audio_mode(AudioMode::default()) {
            controller.report_error(ErrorEvent::non_fatal(err));
        }

        controller.emit_render();
        controller
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Applies one status push from the media.
    pub fn on_status_update(&mut self, status: PlaybackStatus) {
        if self.unmounted {
            self.log_warning("status update after unmount ignored");
            return;
        }

        if let Some(callback) = self.callbacks.playback.as_mut() {
            callback(&status);
        }

        if self.snapshot.state.is_error() {
            return;
        }

        let Some(next) = PlaybackState::from_status(&status) else {
            return;
        };

        if next == PlaybackState::Error {
            let reason = status.error.clone().unwrap_or_default();
            self.fail(PlaybackError::Decode(reason));
            return;
        }

        let previous = self.snapshot.state;
        let duration = status.known_duration();
        let position = if duration > 0 {
            status.position_millis.min(duration)
        } else {
            status.position_millis
        };

        self.looping = self.options.looping || status.is_looping;
        self.snapshot.position_millis = position;
        self.snapshot.duration_millis = duration;
        self.snapshot.confirmed = true;
        self.set_state(next);

        if !self.looping && self.fade.target() == ControlsVisibility::Hidden {
            let buffering_reveal = status.is_buffering && self.reveal_on_buffering;
            if status.did_just_finish || buffering_reveal {
                if buffering_reveal {
                    self.reveal_on_buffering = false;
                }
                self.show_controls();
            }
        } else if next.is_playing()
            && !previous.is_playing()
            && self.fade.target().is_visible()
            && self.options.auto_hide_player
            && !self.auto_hide.is_armed()
        {
            // Controls that were already up start their idle countdown once
            // playback actually starts.
            self.arm_auto_hide();
        }

        self.emit_render();
    }

    /// Tap on the overlay surface.
    pub fn request_toggle_controls(&mut self) {
        if self.unmounted || self.navigating_away {
            self.log_warning("controls toggle ignored while leaving the screen");
            return;
        }
        if self.looping {
            self.log_warning("controls toggle ignored for looping video");
            return;
        }
        if self.snapshot.state.is_error() {
            self.log_warning("controls toggle ignored in error state");
            return;
        }

        self.log_action(UserAction::ToggleControls);
        match self.fade.target() {
            ControlsVisibility::Hidden => self.show_controls(),
            ControlsVisibility::Visible => {
                self.reveal_on_buffering = false;
                self.hide_controls();
            }
        }
        self.emit_render();
    }

    /// Play/pause button.
    ///
    /// Silently ignored while the controls are not settled visible, and in
    /// `Loading` or `Error`.
    pub fn request_toggle_playback(&mut self) {
        if self.unmounted || !self.snapshot.controls_visibility.is_visible() {
            return;
        }
        let current = self.snapshot.state;
        if !current.accepts_commands() {
            self.log_warning(format!("playback toggle ignored in {current:?}"));
            return;
        }

        self.log_action(UserAction::TogglePlayback);
        let next = current.toggled();
        if next.is_playing() {
            let request = if current == PlaybackState::Ended {
                self.snapshot.position_millis = 0;
                StatusRequest::play().with_position(0)
            } else {
                StatusRequest::play()
            };
            self.media.set_status(request);
            if self.options.auto_hide_player {
                self.arm_auto_hide();
            }
        } else {
            self.media.set_status(StatusRequest::pause());
            self.auto_hide.disarm(&mut self.scheduler);
        }

        self.snapshot.confirmed = false;
        self.set_state(next);
        self.emit_render();
    }

    /// Slider grabbed. Pauses running playback until the scrub is released.
    pub fn begin_scrub(&mut self) {
        if self.unmounted || !self.snapshot.state.accepts_commands() {
            return;
        }

        self.log_action(UserAction::BeginScrub);
        let was_playing = self.pause_for_scrub();
        self.scrub_was_playing = Some(was_playing);
        self.emit_render();
    }

    /// Slider released at `fraction` of the duration.
    ///
    /// The fraction is clamped to `[0, 1]`. Playback that was running when
    /// the scrub began resumes with the seek in a single request.
    pub fn request_seek(&mut self, fraction: f64) {
        if self.unmounted || !self.snapshot.state.accepts_commands() {
            self.scrub_was_playing = None;
            return;
        }

        let duration = self.snapshot.duration_millis;
        let position = position_for_fraction(fraction, duration);
        self.log_action(UserAction::Seek {
            position_millis: position,
        });

        let was_playing = match self.scrub_was_playing.take() {
            Some(was_playing) => was_playing,
            None => self.pause_for_scrub(),
        };

        let mut request = StatusRequest::seek_to(position);
        if was_playing {
            request = request.with_should_play(true);
        }
        self.media.set_status(request);

        self.snapshot.position_millis = position;
        self.snapshot.confirmed = false;
        if was_playing {
            self.set_state(PlaybackState::Playing);
            if self.options.auto_hide_player && self.fade.target().is_visible() {
                self.arm_auto_hide();
            }
        } else if self.snapshot.state == PlaybackState::Ended && position < duration {
            self.set_state(PlaybackState::Paused);
        }
        self.emit_render();
    }

    /// Mute button. Forwards to the caller's mute callback.
    pub fn request_mute_toggle(&mut self) {
        if self.unmounted || !self.options.mute_visible {
            return;
        }
        self.log_action(UserAction::ToggleMute);
        let request = ModeRequest::toggling(self.modes.muted);
        if let Some(callback) = self.callbacks.mute.as_mut() {
            callback(request);
        }
    }

    /// Fullscreen button. Forwards to the caller's fullscreen callback.
    pub fn request_fullscreen_toggle(&mut self) {
        if self.unmounted || !self.options.fullscreen_visible {
            return;
        }
        self.log_action(UserAction::ToggleFullscreen);
        let request = ModeRequest::toggling(self.modes.fullscreen);
        if let Some(callback) = self.callbacks.fullscreen.as_mut() {
            callback(request);
        }
    }

    /// Back arrow in the header.
    ///
    /// Honored once, and only while the controls are settled visible.
    pub fn request_back(&mut self) {
        if self.unmounted || self.navigating_away || !self.snapshot.controls_visibility.is_visible()
        {
            return;
        }

        self.log_action(UserAction::NavigateBack);
        self.navigating_away = true;
        self.auto_hide.disarm(&mut self.scheduler);
        if let Some(callback) = self.callbacks.back.as_mut() {
            callback();
        }
    }

    /// Records the caller's current mute and fullscreen modes.
    pub fn set_external_modes(&mut self, modes: ExternalModes) {
        if self.unmounted || self.modes == modes {
            return;
        }
        self.modes = modes;
        self.emit_render();
    }

    /// Records the natural aspect ratio (width / height) of the video.
    ///
    /// Until this is known the video fills the configured frame.
    pub fn set_video_aspect_ratio(&mut self, aspect_ratio: f32) {
        if self.unmounted {
            return;
        }
        let aspect_ratio = (aspect_ratio.is_finite() && aspect_ratio > 0.0).then_some(aspect_ratio);
        if self.video_aspect_ratio != aspect_ratio {
            self.video_aspect_ratio = aspect_ratio;
            self.emit_render();
        }
    }

    /// Delivers a scheduled wakeup. Stale tickets are ignored.
    pub fn on_wakeup(&mut self, wakeup: Wakeup) {
        if self.unmounted {
            self.log_warning("wakeup after unmount ignored");
            return;
        }

        match wakeup {
            Wakeup::AutoHide(ticket) => {
                if !self.auto_hide.fire(ticket) {
                    self.log_warning(format!("stale auto-hide ticket {}", ticket.value()));
                    return;
                }
                self.log_state(PlayerStateEvent::AutoHideFired);
                if self.snapshot.state.is_playing()
                    && self.snapshot.controls_visibility.is_visible()
                    && self.fade.target().is_visible()
                {
                    self.hide_controls();
                    self.emit_render();
                }
            }
            Wakeup::FadeFinished(ticket) => match self.fade.finish(ticket) {
                Some(visibility) => {
                    self.snapshot.controls_visibility = visibility;
                    self.log_state(PlayerStateEvent::VisibilitySettled { visibility });
                    // A reveal that outlasted the delay swallowed its firing.
                    if visibility.is_visible()
                        && self.snapshot.state.is_playing()
                        && self.options.auto_hide_player
                        && !self.navigating_away
                        && !self.auto_hide.is_armed()
                    {
                        self.arm_auto_hide();
                    }
                    self.emit_render();
                }
                None => {
                    self.log_warning(format!("stale fade ticket {}", ticket.value()));
                }
            },
        }
    }

    /// Tears the controller down: cancels the timer and any fade, and asks
    /// the media to stop. Every later input is ignored. Calling this more
    /// than once is harmless; dropping the controller calls it too.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        self.auto_hide.disarm(&mut self.scheduler);
        self.fade.cancel(&mut self.scheduler);
        self.media.stop();
        self.log_state(PlayerStateEvent::Unmounted);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> OverlaySnapshot {
        self.snapshot
    }

    pub fn state(&self) -> PlaybackState {
        self.snapshot.state
    }

    /// Settled visibility.
    pub fn controls_visibility(&self) -> ControlsVisibility {
        self.snapshot.controls_visibility
    }

    pub fn is_auto_hide_armed(&self) -> bool {
        self.auto_hide.is_armed()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_animating()
    }

    pub fn error(&self) -> Option<&PlaybackError> {
        self.error.as_ref()
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    pub fn external_modes(&self) -> ExternalModes {
        self.modes
    }

    pub fn is_navigating_away(&self) -> bool {
        self.navigating_away
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Builds the render directives for the current state.
    pub fn directives(&self) -> RenderDirectives {
        let snapshot = self.snapshot;
        let overlay_shown = !self.looping;
        let failed = snapshot.state.is_error();
        let show_timeline = !failed && overlay_shown;

        RenderDirectives {
            snapshot,
            overlay_shown,
            opacity: if overlay_shown {
                self.fade.target_opacity()
            } else {
                0.0
            },
            fade: self.fade.in_flight(),
            interactive: overlay_shown && snapshot.controls_visibility.is_visible(),
            control_icon: ControlIcon::for_state(snapshot.state),
            elapsed_label: (show_timeline && self.options.time_visible)
                .then(|| format_mm_ss(snapshot.position_millis)),
            total_label: (show_timeline && self.options.time_visible)
                .then(|| format_mm_ss(snapshot.duration_millis)),
            slider_fraction: (show_timeline && self.options.slider_visible)
                .then(|| snapshot.slider_fraction()),
            mute_icon: self.options.mute_visible.then_some(if self.modes.muted {
                MuteIcon::VolumeUp
            } else {
                MuteIcon::VolumeOff
            }),
            fullscreen_icon: self.options.fullscreen_visible.then_some(
                if self.modes.fullscreen {
                    FullscreenIcon::Exit
                } else {
                    FullscreenIcon::Enter
                },
            ),
            error: self.error.clone(),
            video_size: self.video_size(),
        }
    }

    fn video_size(&self) -> VideoSize {
        let (width, height) = (self.options.frame_width, self.options.frame_height);
        match self.video_aspect_ratio {
            Some(aspect_ratio) => fit_video(width, height, aspect_ratio),
            None => fill_frame(width, height),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn show_controls(&mut self) {
        self.fade.start(
            ControlsVisibility::Visible,
            self.options.fade_in_duration,
            &mut self.scheduler,
        );
        if self.options.auto_hide_player {
            self.arm_auto_hide();
        }
    }

    fn hide_controls(&mut self) {
        self.auto_hide.disarm(&mut self.scheduler);
        self.fade.start(
            ControlsVisibility::Hidden,
            self.options.fade_out_duration,
            &mut self.scheduler,
        );
    }

    fn arm_auto_hide(&mut self) {
        self.auto_hide.arm(&mut self.scheduler);
        self.log_state(PlayerStateEvent::AutoHideArmed);
    }

    /// Pauses running playback; returns whether it was running.
    fn pause_for_scrub(&mut self) -> bool {
        let was_playing = self.snapshot.state.is_playing();
        if was_playing {
            self.media.set_status(StatusRequest::pause());
            self.auto_hide.disarm(&mut self.scheduler);
            self.snapshot.confirmed = false;
            self.set_state(PlaybackState::Paused);
        }
        was_playing
    }

    fn fail(&mut self, error: PlaybackError) {
        self.auto_hide.disarm(&mut self.scheduler);
        self.scrub_was_playing = None;
        self.set_state(PlaybackState::Error);
        self.error = Some(error.clone());
        self.report_error(ErrorEvent::fatal(error));
        self.emit_render();
    }

    fn set_state(&mut self, to: PlaybackState) {
        let from = self.snapshot.state;
        if from != to {
            self.snapshot.state = to;
            self.log_state(PlayerStateEvent::StateChanged { from, to });
        }
    }

    fn report_error(&mut self, event: ErrorEvent) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_error(event.is_fatal(), event.message.clone());
        }
        if let Some(callback) = self.callbacks.error.as_mut() {
            callback(&event);
        }
    }

    fn emit_render(&mut self) {
        if self.callbacks.render.is_none() {
            return;
        }
        let directives = self.directives();
        if let Some(callback) = self.callbacks.render.as_mut() {
            callback(&directives);
        }
    }

    fn log_action(&self, action: UserAction) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_action(action);
        }
    }

    fn log_state(&self, event: PlayerStateEvent) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_state(event);
        }
    }

    fn log_warning(&self, message: impl Into<String>) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_warning(message);
        }
    }
}

impl<M> PlaybackOverlayController<M, FrameScheduler>
where
    M: MediaPlayback,
{
    /// Moves the virtual clock forward, delivering every wakeup that comes
    /// due on the way, including ones scheduled while handling earlier ones.
    pub fn advance_time(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some(wakeup) = self.scheduler.pop_due(until) {
            self.on_wakeup(wakeup);
        }
        self.scheduler.set_now(until);
    }
}

impl<M, S> Drop for PlaybackOverlayController<M, S>
where
    M: MediaPlayback,
    S: Scheduler,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<M, S> fmt::Debug for PlaybackOverlayController<M, S>
where
    M: MediaPlayback,
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackOverlayController")
            .field("snapshot", &self.snapshot)
            .field("error", &self.error)
            .field("fading", &self.fade.is_animating())
            .field("auto_hide_armed", &self.auto_hide.is_armed())
            .field("looping", &self.looping)
            .field("navigating_away", &self.navigating_away)
            .field("unmounted", &self.unmounted)
            .finish_non_exhaustive()
    }
}
