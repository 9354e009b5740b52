// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timer.
//!
//! At most one timer is ever outstanding. Arming always disarms first, and a
//! firing is accepted only if its ticket matches the outstanding timer, so a
//! wakeup that raced a cancellation is rejected.

use super::scheduler::{Scheduler, Ticket, TicketCounter, Wakeup};
use super::timing::AutoHideDelay;

#[derive(Debug)]
struct PendingTimer<H> {
    ticket: Ticket,
    handle: H,
}

/// Single owned auto-hide timer.
#[derive(Debug)]
pub struct AutoHideTimer<H> {
    delay: AutoHideDelay,
    pending: Option<PendingTimer<H>>,
    tickets: TicketCounter,
}

impl<H> AutoHideTimer<H> {
    pub fn new(delay: AutoHideDelay) -> Self {
        Self {
            delay,
            pending: None,
            tickets: TicketCounter::default(),
        }
    }

    pub fn delay(&self) -> AutoHideDelay {
        self.delay
    }

    /// Returns true if a timer is outstanding.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the outstanding timer, if any.
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Starts the timer, replacing any outstanding one.
    pub fn arm<S>(&mut self, scheduler: &mut S) -> Ticket
    where
        S: Scheduler<Handle = H>,
    {
        self.disarm(scheduler);
        let ticket = self.tickets.next();
        let handle = scheduler.schedule(self.delay.as_duration(), Wakeup::AutoHide(ticket));
        self.pending = Some(PendingTimer { ticket, handle });
        ticket
    }

    /// Cancels the outstanding timer. Returns true if one was cancelled.
    pub fn disarm<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        match self.pending.take() {
            Some(pending) => {
                scheduler.cancel(pending.handle);
                true
            }
            None => false,
        }
    }

    /// Consumes a firing. Returns false for stale or unknown tickets.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
