// SPDX-License-Identifier: MPL-2.0
//! The control overlay layered above the video surface.
//!
//! The [`PlaybackOverlayController`] coordinates everything in this module:
//! a [`FadeAnimator`] for the Hidden/Visible transitions, a single
//! [`AutoHideTimer`], and a [`Scheduler`] that delivers both back as
//! [`Wakeup`]s. Its output is an [`OverlaySnapshot`] plus the
//! [`RenderDirectives`] a view draws from.

mod auto_hide;
mod controller;
mod fade;
mod layout;
mod scheduler;
mod snapshot;
mod timing;
mod visibility;

pub use auto_hide::AutoHideTimer;
pub use controller::{
    BackCallback, ControllerBuilder, ErrorCallback, ExternalModes, ModeCallback, ModeRequest,
    PlaybackOverlayController, PlayerCallbacks, RenderCallback, StatusCallback,
};
pub use fade::{FadeAnimator, FadeDirective};
pub use layout::{fill_frame, fit_video, VideoSize};
pub use scheduler::{FrameHandle, FrameScheduler, Scheduler, Ticket, Wakeup};
pub use snapshot::{ControlIcon, FullscreenIcon, MuteIcon, OverlaySnapshot, RenderDirectives};
pub use timing::{AutoHideDelay, FadeDuration};
pub use visibility::ControlsVisibility;
