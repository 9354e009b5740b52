// SPDX-License-Identifier: MPL-2.0
//! Playback vocabulary shared by the overlay and the media collaborator.
//!
//! This module provides:
//! - [`PlaybackState`]: the UI-visible state machine
//! - [`PlaybackStatus`] / [`StatusRequest`]: status pushes and change requests
//! - [`MediaPlayback`]: the asynchronous play/pause/seek seam
//! - Time formatting for the overlay labels

pub mod media;
pub mod state;
pub mod status;
pub mod time_units;

pub use media::{AudioMode, MediaCommand, MediaCommandSender, MediaPlayback};
pub use state::PlaybackState;
pub use status::{PlaybackStatus, StatusRequest};
pub use time_units::{format_mm_ss, position_for_fraction, slider_fraction, time_label};
