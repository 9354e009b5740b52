// SPDX-License-Identifier: MPL-2.0
//! iced rendering of the playback overlay.
//!
//! Follows the "state down, messages up" pattern: [`overlay::view`] draws one
//! set of render directives, and [`overlay::State::handle`] turns the
//! resulting messages into session events.
//!
//! - [`overlay`] - The overlay view and its message handling
//! - [`design_tokens`] - Colors, opacity, spacing and sizes

pub mod design_tokens;
pub mod overlay;
