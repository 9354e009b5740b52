// SPDX-License-Identifier: MPL-2.0
//! Overlay opacity transitions.
//!
//! Fade-in and fade-out are mutually exclusive. Starting a transition while
//! another is in flight cancels the old one outright, so the last requested
//! target always wins. The settled visibility changes only when a transition
//! completes.

use super::scheduler::{Scheduler, Ticket, TicketCounter, Wakeup};
use super::timing::FadeDuration;
use super::visibility::ControlsVisibility;

#[derive(Debug)]
struct InFlight<H> {
    ticket: Ticket,
    target: ControlsVisibility,
    duration: FadeDuration,
    handle: H,
}

/// Description of the transition currently running, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDirective {
    pub target: ControlsVisibility,
    pub duration: FadeDuration,
}

/// Tracks the settled visibility and at most one in-flight transition.
#[derive(Debug)]
pub struct FadeAnimator<H> {
    settled: ControlsVisibility,
    in_flight: Option<InFlight<H>>,
    tickets: TicketCounter,
}

impl<H> FadeAnimator<H> {
    pub fn new(initial: ControlsVisibility) -> Self {
        Self {
            settled: initial,
            in_flight: None,
            tickets: TicketCounter::default(),
        }
    }

    /// Visibility of the last completed transition.
    pub fn settled(&self) -> ControlsVisibility {
        self.settled
    }

    /// Where the overlay is heading: the in-flight target, else the settled state.
    pub fn target(&self) -> ControlsVisibility {
        self.in_flight
            .as_ref()
            .map_or(self.settled, |fade| fade.target)
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<FadeDirective> {
        self.in_flight.as_ref().map(|fade| FadeDirective {
            target: fade.target,
            duration: fade.duration,
        })
    }

    /// Opacity the renderer should be at or heading towards.
    pub fn target_opacity(&self) -> f32 {
        self.target().opacity()
    }

    /// Starts a transition towards `target`.
    ///
    /// Returns `None` when the overlay is already heading there. Otherwise
    /// any in-flight transition is cancelled before the new one is scheduled.
    pub fn start<S>(
        &mut self,
        target: ControlsVisibility,
        duration: FadeDuration,
        scheduler: &mut S,
    ) -> Option<Ticket>
    where
        S: Scheduler<Handle = H>,
    {
        if self.target() == target {
            return None;
        }
        self.cancel(scheduler);

        let ticket = self.tickets.next();
        let handle = scheduler.schedule(duration.as_duration(), Wakeup::FadeFinished(ticket));
        self.in_flight = Some(InFlight {
            ticket,
            target,
            duration,
            handle,
        });
        Some(ticket)
    }

    /// Completes the transition identified by `ticket`.
    ///
    /// Returns the newly settled visibility, or `None` for a stale ticket.
    pub fn finish(&mut self, ticket: Ticket) -> Option<ControlsVisibility> {
        match &self.in_flight {
            Some(fade) if fade.ticket == ticket => {
                self.settled = fade.target;
                self.in_flight = None;
                Some(self.settled)
            }
            _ => None,
        }
    }

    /// Drops the in-flight transition, leaving the settled visibility as is.
    pub fn cancel<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        match self.in_flight.take() {
            Some(fade) => {
                scheduler.cancel(fade.handle);
                true
            }
            None => false,
        }
    }
}
