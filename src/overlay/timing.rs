// SPDX-License-Identifier: MPL-2.0
//! Timing newtypes for the overlay.
//!
//! Type-safe wrappers for the auto-hide delay and the fade durations, in
//! milliseconds. Values are clamped into range on construction, so a
//! configuration file cannot produce a zero-length auto-hide or a fade
//! that outlives the screen.

use crate::config::{
    DEFAULT_AUTO_HIDE_DELAY_MS, DEFAULT_FADE_IN_MS, MAX_AUTO_HIDE_DELAY_MS, MAX_FADE_MS,
    MIN_AUTO_HIDE_DELAY_MS, MIN_FADE_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before visible controls hide themselves while playing.
///
/// # Example
///
/// ```
/// use overlay_player::overlay::AutoHideDelay;
///
/// let delay = AutoHideDelay::new(2000);
/// assert_eq!(delay.value(), 2000);
///
/// // Values outside range are clamped
/// assert_eq!(AutoHideDelay::new(10).value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct AutoHideDelay(u64);

impl AutoHideDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTO_HIDE_DELAY_MS, MAX_AUTO_HIDE_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTO_HIDE_DELAY_MS)
    }
}

impl From<u64> for AutoHideDelay {
    fn from(millis: u64) -> Self {
        Self::new(millis)
    }
}

impl From<AutoHideDelay> for u64 {
    fn from(delay: AutoHideDelay) -> Self {
        delay.0
    }
}

/// Duration of one overlay opacity transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a new fade duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_FADE_MS, MAX_FADE_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(DEFAULT_FADE_IN_MS)
    }
}

impl From<u64> for FadeDuration {
    fn from(millis: u64) -> Self {
        Self::new(millis)
    }
}

impl From<FadeDuration> for u64 {
    fn from(duration: FadeDuration) -> Self {
        duration.0
    }
}
