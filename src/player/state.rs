// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the overlay.
//!
//! Exactly one state is active at a time:
//! - Loading: Source supplied, media not loaded yet
//! - Error: Missing source or fatal decode failure (terminal)
//! - Playing: Media is advancing
//! - Paused: Media holds its position
//! - Buffering: Media wants to play but is stalled
//! - Ended: Position reached the known duration

use super::status::PlaybackStatus;
use serde::{Deserialize, Serialize};

/// UI-visible playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Loading,
    Error,
    Playing,
    Paused,
    Buffering,
    Ended,
}

impl PlaybackState {
    /// Resolves the state described by a media status.
    ///
    /// Precedence: `Error` (not loaded with an error), then for loaded media
    /// `Ended` when the position reached a known duration, `Buffering`,
    /// `Playing`, and finally `Paused`. Returns `None` for a status that is
    /// neither loaded nor failed; it carries no state information.
    pub fn from_status(status: &PlaybackStatus) -> Option<Self> {
        if !status.is_loaded {
            return status.error.as_ref().map(|_| Self::Error);
        }

        let duration = status.known_duration();
        let state = if duration > 0 && status.position_millis >= duration {
            Self::Ended
        } else if status.is_buffering {
            Self::Buffering
        } else if status.should_play {
            Self::Playing
        } else {
            Self::Paused
        };
        Some(state)
    }

    /// Returns true if the video is currently playing.
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    /// Returns true once the instance has failed for good.
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    /// Returns true when media commands can be issued.
    pub fn accepts_commands(self) -> bool {
        !matches!(self, Self::Loading | Self::Error)
    }

    /// The state a play/pause toggle optimistically moves to.
    ///
    /// Anything that is not playing resumes; playing pauses.
    pub fn toggled(self) -> Self {
        if self == Self::Playing {
            Self::Paused
        } else {
            Self::Playing
        }
    }
}
