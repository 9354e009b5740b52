// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: Idle delay before the overlay collapses
//! - **Fade**: Overlay fade-in/fade-out durations
//! - **Frame**: Default video surface size
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default delay before visible controls hide themselves (in milliseconds).
pub const DEFAULT_AUTO_HIDE_DELAY_MS: u64 = 2000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_AUTO_HIDE_DELAY_MS: u64 = 500;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_AUTO_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Fade Defaults
// ==========================================================================

/// Default duration of the Hidden → Visible opacity transition.
pub const DEFAULT_FADE_IN_MS: u64 = 300;

/// Default duration of the Visible → Hidden opacity transition.
pub const DEFAULT_FADE_OUT_MS: u64 = 300;

/// Minimum fade duration. Zero means the transition settles on the next wakeup.
pub const MIN_FADE_MS: u64 = 0;

/// Maximum fade duration (in milliseconds).
pub const MAX_FADE_MS: u64 = 5000;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Default width of the box the video surface is fitted into.
pub const DEFAULT_FRAME_WIDTH: f32 = 640.0;

/// Default height of the box the video surface is fitted into.
pub const DEFAULT_FRAME_HEIGHT: f32 = 360.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_HIDE_DELAY_MS > 0);
    assert!(MAX_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS <= MAX_AUTO_HIDE_DELAY_MS);

    assert!(MAX_FADE_MS >= MIN_FADE_MS);
    assert!(DEFAULT_FADE_IN_MS <= MAX_FADE_MS);
    assert!(DEFAULT_FADE_OUT_MS <= MAX_FADE_MS);
    // A fade must settle before the auto-hide timer can observe it.
    assert!(DEFAULT_FADE_IN_MS < DEFAULT_AUTO_HIDE_DELAY_MS);

    assert!(DEFAULT_FRAME_WIDTH > 0.0);
    assert!(DEFAULT_FRAME_HEIGHT > 0.0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_hide_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTO_HIDE_DELAY_MS, 2000);
        assert!(DEFAULT_AUTO_HIDE_DELAY_MS >= MIN_AUTO_HIDE_DELAY_MS);
        assert!(DEFAULT_AUTO_HIDE_DELAY_MS <= MAX_AUTO_HIDE_DELAY_MS);
    }

    #[test]
    fn fade_defaults_are_valid() {
        assert_eq!(DEFAULT_FADE_IN_MS, 300);
        assert_eq!(DEFAULT_FADE_OUT_MS, 300);
        assert!(DEFAULT_FADE_IN_MS <= MAX_FADE_MS);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert_eq!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, 1000);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
