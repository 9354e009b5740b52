// SPDX-License-Identifier: MPL-2.0
//! The media collaborator seam.
//!
//! The overlay never decodes anything itself. It talks to whatever plays the
//! video through [`MediaPlayback`], and hears back only through status
//! pushes. [`MediaCommandSender`] is the channel-backed implementation used
//! when the media runs on its own task.

use super::status::StatusRequest;
use crate::diagnostics::DiagnosticsHandle;
use crate::error::PlaybackError;
use tokio::sync::mpsc;

/// Audio routing requested from the platform when the player mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioMode {
    /// Keep audio audible when the device's silent switch is on.
    pub plays_in_silent_mode: bool,
}

impl Default for AudioMode {
    fn default() -> Self {
        Self {
            plays_in_silent_mode: true,
        }
    }
}

/// Asynchronous play/pause/seek primitive driven by the overlay.
///
/// Every method is fire-and-forget. Completion, if it matters, shows up in a
/// later status push; implementations must not call back into the
/// controller synchronously.
pub trait MediaPlayback {
    /// Requests a change of play intent and/or position.
    fn set_status(&mut self, request: StatusRequest);

    /// Best-effort stop, issued when the screen unmounts.
    fn stop(&mut self) {
        self.set_status(StatusRequest::pause());
    }

    /// Configures audio routing.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refused the mode. The player treats
    /// this as non-fatal.
    fn set_audio_mode(&mut self, mode: AudioMode) -> Result<(), PlaybackError> {
        let _ = mode;
        Ok(())
    }
}

/// Commands delivered to a media task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    SetStatus(StatusRequest),
    SetAudioMode(AudioMode),
    Stop,
}

/// Channel-backed [`MediaPlayback`] for media running on another task.
///
/// Commands sent after the media task is gone are dropped. With a
/// diagnostics handle attached, each dropped command is logged as a warning.
#[derive(Clone)]
pub struct MediaCommandSender {
    tx: mpsc::UnboundedSender<MediaCommand>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl MediaCommandSender {
    pub fn new(tx: mpsc::UnboundedSender<MediaCommand>) -> Self {
        Self {
            tx,
            diagnostics: None,
        }
    }

    /// Logs commands the media task never received.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Creates a sender together with the receiving end for the media task.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<MediaCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Sends a command to the media task.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::MediaUnavailable`] if the media task is gone.
    pub fn send(&self, command: MediaCommand) -> Result<(), PlaybackError> {
        self.tx
            .send(command)
            .map_err(|_| PlaybackError::MediaUnavailable)
    }

    fn send_or_log(&self, command: MediaCommand) {
        if self.send(command).is_err() {
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.log_warning(format!("media task gone, dropped {command:?}"));
            }
        }
    }
}

impl std::fmt::Debug for MediaCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCommandSender")
            .field("closed", &self.tx.is_closed())
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl MediaPlayback for MediaCommandSender {
    fn set_status(&mut self, request: StatusRequest) {
        self.send_or_log(MediaCommand::SetStatus(request));
    }

    fn stop(&mut self) {
        self.send_or_log(MediaCommand::Stop);
    }

    fn set_audio_mode(&mut self, mode: AudioMode) -> Result<(), PlaybackError> {
        self.send(MediaCommand::SetAudioMode(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    #[test]
    fn sender_forwards_commands_in_order() {
        let (mut sender, mut rx) = MediaCommandSender::channel();
        sender.set_status(StatusRequest::play());
        sender.set_status(StatusRequest::seek_to(1500));
        sender.stop();

        assert_eq!(
            rx.try_recv().ok(),
            Some(MediaCommand::SetStatus(StatusRequest::play()))
        );
        assert_eq!(
            rx.try_recv().ok(),
            Some(MediaCommand::SetStatus(StatusRequest::seek_to(1500)))
        );
        assert_eq!(rx.try_recv().ok(), Some(MediaCommand::Stop));
    }

    #[test]
    fn audio_mode_fails_once_media_is_gone() {
        let (mut sender, rx) = MediaCommandSender::channel();
        drop(rx);

        let result = sender.set_audio_mode(AudioMode::default());
        assert_eq!(result, Err(PlaybackError::MediaUnavailable));
    }

    #[test]
    fn commands_to_a_dead_task_are_logged() {
        let mut collector = DiagnosticsCollector::default();
        let (sender, rx) = MediaCommandSender::channel();
        let mut sender = sender.with_diagnostics(collector.handle());
        drop(rx);

        sender.set_status(StatusRequest::play());
        sender.stop();
        collector.process_pending();

        let warnings = collector
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. }))
            .count();
        assert_eq!(warnings, 2);
    }

    #[test]
    fn default_stop_pauses() {
        struct Recorder(Vec<StatusRequest>);
        impl MediaPlayback for Recorder {
            fn set_status(&mut self, request: StatusRequest) {
                self.0.push(request);
            }
        }

        let mut media = Recorder(Vec::new());
        media.stop();
        assert_eq!(media.0, vec![StatusRequest::pause()]);
    }
}
