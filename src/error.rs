// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Playback(PlaybackError),
}

/// Categories of playback failures surfaced to the caller.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// No video source was supplied when the player was mounted.
    MissingSource,

    /// The media collaborator reported a fatal load or decode failure.
    Decode(String),

    /// Audio routing could not be configured (playback continues).
    AudioMode(String),

    /// The media collaborator is gone and cannot receive commands.
    MediaUnavailable,
}

impl PlaybackError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::MissingSource => "error-player-missing-source",
            PlaybackError::Decode(_) => "error-player-fatal-playback",
            PlaybackError::AudioMode(_) => "error-player-audio-mode",
            PlaybackError::MediaUnavailable => "error-player-media-unavailable",
        }
    }

    /// Returns the raw reason attached to this error, if any.
    ///
    /// Passed to the localized message as the `reason` argument.
    pub fn reason(&self) -> Option<&str> {
        match self {
            PlaybackError::Decode(reason) | PlaybackError::AudioMode(reason) => Some(reason),
            PlaybackError::MissingSource | PlaybackError::MediaUnavailable => None,
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::MissingSource => write!(f, "A video source is required"),
            PlaybackError::Decode(reason) => {
                write!(f, "Encountered a fatal error during playback: {}", reason)
            }
            PlaybackError::AudioMode(reason) => {
                write!(f, "Failed to configure audio mode: {}", reason)
            }
            PlaybackError::MediaUnavailable => write!(f, "Media playback is not running"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Severity of an error reported through the player's error callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Playback cannot continue; the player is now in the `Error` state.
    Fatal,
    /// An auxiliary step failed; playback state is unaffected.
    NonFatal,
}

/// Error delivered to the caller-supplied error callback.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub kind: ErrorKind,
    pub error: PlaybackError,
    /// Pre-rendered English message, for logs and callers without i18n.
    pub message: String,
}

impl ErrorEvent {
    pub fn fatal(error: PlaybackError) -> Self {
        Self::new(ErrorKind::Fatal, error)
    }

    pub fn non_fatal(error: PlaybackError) -> Self {
        Self::new(ErrorKind::NonFatal, error)
    }

    fn new(kind: ErrorKind, error: PlaybackError) -> Self {
        let message = error.to_string();
        Self {
            kind,
            error,
            message,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == ErrorKind::Fatal
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
