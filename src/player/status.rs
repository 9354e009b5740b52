// SPDX-License-Identifier: MPL-2.0
//! Status records exchanged with the media collaborator.
//!
//! [`PlaybackStatus`] is what the media pushes to the controller;
//! [`StatusRequest`] is what the controller asks the media to change.

/// Snapshot of playback progress pushed by the media collaborator.
///
/// This is the sole source of truth for position and duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackStatus {
    /// Whether the media finished loading. When false, only `error` is meaningful.
    pub is_loaded: bool,

    /// Elapsed playback position in milliseconds.
    pub position_millis: u64,

    /// Total duration in milliseconds, if known (live streams have none).
    pub duration_millis: Option<u64>,

    /// Media is stalled waiting for data.
    pub is_buffering: bool,

    /// Media intends to play (as opposed to being paused).
    pub should_play: bool,

    /// Media restarts from the beginning when it reaches the end.
    pub is_looping: bool,

    /// Edge-triggered: set on exactly one status after playback reached the end.
    pub did_just_finish: bool,

    /// Fatal failure reported by the media while not loaded.
    pub error: Option<String>,
}

impl PlaybackStatus {
    /// A loaded status at the given position.
    pub fn loaded(position_millis: u64, duration_millis: u64) -> Self {
        Self {
            is_loaded: true,
            position_millis,
            duration_millis: Some(duration_millis),
            ..Self::default()
        }
    }

    /// An unloaded status carrying a fatal error.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_loaded: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn playing(mut self, should_play: bool) -> Self {
        self.should_play = should_play;
        self
    }

    #[must_use]
    pub fn buffering(mut self, is_buffering: bool) -> Self {
        self.is_buffering = is_buffering;
        self
    }

    #[must_use]
    pub fn looping(mut self, is_looping: bool) -> Self {
        self.is_looping = is_looping;
        self
    }

    #[must_use]
    pub fn just_finished(mut self, did_just_finish: bool) -> Self {
        self.did_just_finish = did_just_finish;
        self
    }

    /// Duration in milliseconds, 0 when unknown.
    pub fn known_duration(&self) -> u64 {
        self.duration_millis.unwrap_or(0)
    }

    /// Returns true if this status carries a fatal load/decode failure.
    pub fn is_fatal(&self) -> bool {
        !self.is_loaded && self.error.is_some()
    }
}

/// Changes requested from the media collaborator.
///
/// Fields left as `None` are not touched by the media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusRequest {
    pub should_play: Option<bool>,
    pub position_millis: Option<u64>,
}

impl StatusRequest {
    pub fn play() -> Self {
        Self {
            should_play: Some(true),
            position_millis: None,
        }
    }

    pub fn pause() -> Self {
        Self {
            should_play: Some(false),
            position_millis: None,
        }
    }

    /// Seek without changing the play/pause intent.
    pub fn seek_to(position_millis: u64) -> Self {
        Self {
            should_play: None,
            position_millis: Some(position_millis),
        }
    }

    #[must_use]
    pub fn with_position(mut self, position_millis: u64) -> Self {
        self.position_millis = Some(position_millis);
        self
    }

    #[must_use]
    pub fn with_should_play(mut self, should_play: bool) -> Self {
        self.should_play = Some(should_play);
        self
    }
}
