// SPDX-License-Identifier: MPL-2.0
//! Deferred wakeups for the overlay.
//!
//! The controller never sleeps. Timers and fade completions are handed to a
//! [`Scheduler`], which later delivers the [`Wakeup`] back to the controller
//! on the same event loop. Each wakeup carries a [`Ticket`]; the owner of the
//! ticket decides whether the wakeup is still current.
//!
//! [`FrameScheduler`] keeps a virtual clock that the host advances, which
//! suits frame-driven hosts and deterministic tests. The tokio-backed
//! scheduler lives in [`crate::session`].

use std::time::Duration;

/// Generation number identifying one scheduled wakeup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Returns the raw generation number.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing tickets.
#[derive(Debug, Clone, Default)]
pub(crate) struct TicketCounter(u64);

impl TicketCounter {
    pub(crate) fn next(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }
}

/// Deferred work delivered back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// The auto-hide delay elapsed.
    AutoHide(Ticket),
    /// An opacity transition reached its target.
    FadeFinished(Ticket),
}

/// Schedules [`Wakeup`]s after a delay.
pub trait Scheduler {
    /// Handle used to cancel a scheduled wakeup.
    type Handle;

    /// Schedules `wakeup` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) -> Self::Handle;

    /// Cancels a scheduled wakeup. Cancelling a delivered wakeup is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle returned by [`FrameScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone)]
struct PendingWakeup {
    id: u64,
    due: Duration,
    wakeup: Wakeup,
}

/// Scheduler driven by a virtual clock.
///
/// Nothing fires on its own: the host advances time and drains the wakeups
/// that came due, in due-time order (ties in scheduling order).
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingWakeup>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of wakeups not yet delivered or cancelled.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Wakeups not yet delivered, in scheduling order.
    pub fn pending(&self) -> impl Iterator<Item = Wakeup> + '_ {
        self.pending.iter().map(|p| p.wakeup)
    }

    /// Removes and returns the earliest wakeup due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Wakeup> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(index, _)| index)?;
        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.wakeup)
    }

    /// Moves the clock forward to `until` without delivering anything.
    pub fn set_now(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Advances the clock by `by` and returns every wakeup that came due.
    ///
    /// Wakeups scheduled while processing the result are not included; hosts
    /// that react to wakeups should drain with [`FrameScheduler::pop_due`].
    pub fn advance(&mut self, by: Duration) -> Vec<Wakeup> {
        let until = self.now + by;
        let mut due = Vec::new();
        while let Some(wakeup) = self.pop_due(until) {
            due.push(wakeup);
        }
        self.set_now(until);
        due
    }
}

impl Scheduler for FrameScheduler {
    type Handle = FrameHandle;

    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) -> FrameHandle {
        self.next_id += 1;
        self.pending.push(PendingWakeup {
            id: self.next_id,
            due: self.now + delay,
            wakeup,
        });
        FrameHandle(self.next_id)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|p| p.id != handle.0);
    }
}
