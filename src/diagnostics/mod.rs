// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording player activity.
//!
//! Controllers log user actions, state transitions, warnings and errors
//! through a [`DiagnosticsHandle`]. A [`DiagnosticsCollector`] keeps them in
//! a memory-bounded circular buffer and exports them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, PlayerStateEvent, UserAction};
