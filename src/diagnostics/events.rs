// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for player activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::overlay::ControlsVisibility;
use crate::player::PlaybackState;

/// User-initiated actions on the overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Tap on the overlay surface.
    ToggleControls,

    /// Play/pause button.
    TogglePlayback,

    /// Slider grabbed.
    BeginScrub,

    /// Slider released.
    Seek {
        /// Target position in milliseconds.
        position_millis: u64,
    },

    ToggleMute,

    ToggleFullscreen,

    /// Back arrow in the header.
    NavigateBack,
}

/// State changes inside the controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayerStateEvent {
    Mounted {
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    StateChanged {
        from: PlaybackState,
        to: PlaybackState,
    },
    VisibilitySettled {
        visibility: ControlsVisibility,
    },
    AutoHideArmed,
    AutoHideFired,
    Unmounted,
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    PlayerState {
        event: PlayerStateEvent,
    },

    /// Something was ignored or rejected but playback is fine.
    Warning {
        message: String,
    },

    /// An error was reported through the error callback.
    Error {
        fatal: bool,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "ignored".to_string(),
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn state_change_serializes_snake_case() {
        let kind = DiagnosticEventKind::PlayerState {
            event: PlayerStateEvent::StateChanged {
                from: PlaybackState::Loading,
                to: PlaybackState::Playing,
            },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"type\":\"player_state\""));
        assert!(json.contains("\"event\":\"state_changed\""));
        assert!(json.contains("\"from\":\"loading\""));
        assert!(json.contains("\"to\":\"playing\""));
    }

    #[test]
    fn seek_action_deserializes_from_json() {
        let json = r#"{"type":"user_action","action":{"action":"seek","position_millis":4200}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(
            kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::Seek {
                    position_millis: 4200
                },
                details: None,
            }
        );
    }
}
