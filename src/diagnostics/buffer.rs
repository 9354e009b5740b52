// SPDX-License-Identifier: MPL-2.0
//! Fixed-size storage for the diagnostics log.

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};
use std::collections::VecDeque;

/// Number of events kept by the diagnostics buffer (10–10 000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

/// Bounded event log. Once full, each push drops the oldest entry.
///
/// ```
/// use overlay_player::diagnostics::CircularBuffer;
///
/// let mut log = CircularBuffer::with_raw_capacity(2);
/// log.push("mounted");
/// log.push("tap");
/// assert_eq!(log.push("auto-hide"), Some("mounted"));
/// assert_eq!(log.iter().copied().collect::<Vec<_>>(), ["tap", "auto-hide"]);
/// assert_eq!(log.evicted(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    limit: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Unvalidated limit, raised to 1. Handy for tiny test buffers.
    #[must_use]
    pub fn with_raw_capacity(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            evicted: 0,
        }
    }

    /// Appends `item`, returning the entry it pushed out, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let dropped = if self.entries.len() == self.limit {
            self.evicted += 1;
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(item);
        dropped
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Entries pushed out since creation or the last [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.evicted = 0;
    }
}
