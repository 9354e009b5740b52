// SPDX-License-Identifier: MPL-2.0
//! What the overlay shows after each event.
//!
//! [`OverlaySnapshot`] is the controller's state as a value; it is rebuilt
//! and replaced whole on every update. [`RenderDirectives`] adds everything
//! a renderer needs on top of it (icons, labels, opacity) so views never
//! reach back into the controller.

use super::fade::FadeDirective;
use super::layout::VideoSize;
use super::visibility::ControlsVisibility;
use crate::error::PlaybackError;
use crate::player::{slider_fraction, time_label, PlaybackState};

/// Immutable view of the overlay state at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySnapshot {
    /// Elapsed milliseconds, never past `duration_millis` when that is known.
    pub position_millis: u64,
    /// Total milliseconds, 0 if unknown.
    pub duration_millis: u64,
    pub state: PlaybackState,
    /// Settled visibility; never reflects a fade in flight.
    pub controls_visibility: ControlsVisibility,
    /// False between an optimistic command and the next status push.
    pub confirmed: bool,
}

impl OverlaySnapshot {
    pub(crate) fn initial(state: PlaybackState, visibility: ControlsVisibility) -> Self {
        Self {
            position_millis: 0,
            duration_millis: 0,
            state,
            controls_visibility: visibility,
            confirmed: true,
        }
    }

    /// `MM:SS / MM:SS` label.
    pub fn time_label(&self) -> String {
        time_label(self.position_millis, self.duration_millis)
    }

    pub fn slider_fraction(&self) -> f64 {
        slider_fraction(self.position_millis, self.duration_millis)
    }
}

/// Icon in the middle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIcon {
    /// Activity indicator while loading or buffering.
    Loading,
    Play,
    Pause,
    Replay,
}

impl ControlIcon {
    /// Icon for a playback state; `Error` shows a message instead of an icon.
    pub fn for_state(state: PlaybackState) -> Option<Self> {
        match state {
            PlaybackState::Loading | PlaybackState::Buffering => Some(Self::Loading),
            PlaybackState::Playing => Some(Self::Pause),
            PlaybackState::Paused => Some(Self::Play),
            PlaybackState::Ended => Some(Self::Replay),
            PlaybackState::Error => None,
        }
    }
}

/// Mute button icon; shows the action the button performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteIcon {
    /// Currently muted, tapping unmutes.
    VolumeUp,
    /// Currently audible, tapping mutes.
    VolumeOff,
}

/// Fullscreen button icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Enter,
    Exit,
}

/// Everything a renderer needs to draw the overlay for one update.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDirectives {
    pub snapshot: OverlaySnapshot,
    /// False for looping videos, which render without any overlay.
    pub overlay_shown: bool,
    /// Opacity the overlay is at or fading towards.
    pub opacity: f32,
    /// Transition in flight, if any.
    pub fade: Option<FadeDirective>,
    /// Controls accept input only once settled visible.
    pub interactive: bool,
    pub control_icon: Option<ControlIcon>,
    pub elapsed_label: Option<String>,
    pub total_label: Option<String>,
    pub slider_fraction: Option<f64>,
    pub mute_icon: Option<MuteIcon>,
    pub fullscreen_icon: Option<FullscreenIcon>,
    /// Error to display instead of the controls.
    pub error: Option<PlaybackError>,
    pub video_size: VideoSize,
}
