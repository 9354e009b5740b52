// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides a recording media fake and callback recorders.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::PlaybackError;
use crate::player::{AudioMode, MediaPlayback, StatusRequest};

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Shared list that callbacks push into.
#[derive(Debug)]
pub struct Recorder<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Send + 'static> Recorder<T> {
    pub fn push(&self, item: T) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    /// Drains everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.items.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Callback taking its argument by value.
    pub fn sink_copy(&self) -> impl FnMut(T) + Send + 'static {
        let recorder = self.clone();
        move |item| recorder.push(item)
    }
}

impl<T: Clone + Send + 'static> Recorder<T> {
    /// Callback taking its argument by reference.
    pub fn sink(&self) -> impl FnMut(&T) + Send + 'static {
        let recorder = self.clone();
        move |item: &T| recorder.push(item.clone())
    }
}

impl Recorder<()> {
    pub fn unit_sink(&self) -> impl FnMut() + Send + 'static {
        let recorder = self.clone();
        move || recorder.push(())
    }
}

/// Media fake that records every request.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub requests: Vec<StatusRequest>,
    pub audio_modes: Vec<AudioMode>,
    pub stops: usize,
    /// Reject audio mode configuration.
    pub refuse_audio_mode: bool,
    /// Also report stops here, for checks after the controller is dropped.
    pub stop_hook: Option<Recorder<()>>,
}

impl MediaPlayback for RecordingMedia {
    fn set_status(&mut self, request: StatusRequest) {
        self.requests.push(request);
    }

    fn stop(&mut self) {
        self.stops += 1;
        if let Some(hook) = &self.stop_hook {
            hook.push(());
        }
    }

    fn set_audio_mode(&mut self, mode: AudioMode) -> Result<(), PlaybackError> {
        if self.refuse_audio_mode {
            return Err(PlaybackError::AudioMode("route unavailable".to_string()));
        }
        self.audio_modes.push(mode);
        Ok(())
    }
}
