// SPDX-License-Identifier: MPL-2.0
//! Control surface visibility.

use serde::{Deserialize, Serialize};

/// Settled visibility of the overlay controls.
///
/// Only ever reflects a completed fade, never one in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlsVisibility {
    Visible,
    Hidden,
}

impl ControlsVisibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    /// Opacity of the overlay once settled in this visibility.
    pub fn opacity(self) -> f32 {
        match self {
            Self::Visible => 1.0,
            Self::Hidden => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips() {
        assert_eq!(ControlsVisibility::Visible.toggled(), ControlsVisibility::Hidden);
        assert_eq!(ControlsVisibility::Hidden.toggled(), ControlsVisibility::Visible);
    }

    #[test]
    fn opacity_matches_visibility() {
        assert!(ControlsVisibility::Visible.opacity() > 0.99);
        assert!(ControlsVisibility::Hidden.opacity() < 0.01);
    }
}
