// SPDX-License-Identifier: MPL-2.0
//! `overlay_player` is the control overlay of a video player: play/pause,
//! scrubbing, mute and fullscreen buttons on a surface that fades in on tap
//! and hides itself again while the video plays.
//!
//! The [`overlay::PlaybackOverlayController`] is a single-threaded state
//! machine fed by media status pushes, user gestures and timer wakeups. It
//! talks to the actual media through the [`player::MediaPlayback`] trait,
//! and [`session`] runs it on tokio. [`ui`] renders its output with iced.

#![doc(html_root_url = "https://docs.rs/overlay_player/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod overlay;
pub mod player;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
