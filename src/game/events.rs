//! Observation hooks.
//!
//! Presentation layers register callbacks to hear about the three moments
//! that need UI work: a resolution was scheduled (start the reveal
//! animation), a selection was resolved (flip dots), and the game was won.
//!
//! Callbacks run synchronously on the thread driving the controller and
//! must not call back into it.

use serde::{Deserialize, Serialize};

use super::pending::ResolutionTicket;
use crate::core::entity::DotId;
use crate::rules::Outcome;

/// A resolved selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Ticket the resolution was scheduled under.
    pub ticket: ResolutionTicket,
    /// Match result.
    pub outcome: Outcome,
    /// Dots the outcome was applied to, in tap order.
    pub dots: Vec<DotId>,
}

/// Summary of a won game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub epoch: u64,
    pub moves: u32,
    pub sets: usize,
}

/// Everything observers can be told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    ResolutionScheduled(ResolutionTicket),
    Resolved(Resolution),
    Won(WinSummary),
}

type Hook<T> = Box<dyn FnMut(&T)>;

/// Registered callbacks.
#[derive(Default)]
pub struct Observers {
    scheduled: Vec<Hook<ResolutionTicket>>,
    resolved: Vec<Hook<Resolution>>,
    won: Vec<Hook<WinSummary>>,
    events: Vec<Hook<MatchEvent>>,
}

impl Observers {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_resolution_scheduled(&mut self, hook: impl FnMut(&ResolutionTicket) + 'static) {
        self.scheduled.push(Box::new(hook));
    }

    pub fn on_resolved(&mut self, hook: impl FnMut(&Resolution) + 'static) {
        self.resolved.push(Box::new(hook));
    }

    pub fn on_win(&mut self, hook: impl FnMut(&WinSummary) + 'static) {
        self.won.push(Box::new(hook));
    }

    /// Receive every event through one callback.
    pub fn on_event(&mut self, hook: impl FnMut(&MatchEvent) + 'static) {
        self.events.push(Box::new(hook));
    }

    /// Total registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scheduled.len() + self.resolved.len() + self.won.len() + self.events.len()
    }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every callback.
    pub fn clear(&mut self) {
        self.scheduled.clear();
        self.resolved.clear();
        self.won.clear();
        self.events.clear();
    }

    /// Deliver an event to the typed hooks and then the catch-all hooks.
    pub fn emit(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::ResolutionScheduled(ticket) => self.scheduled.iter_mut().for_each(|h| h(ticket)),
            MatchEvent::Resolved(resolution) => self.resolved.iter_mut().for_each(|h| h(resolution)),
            MatchEvent::Won(summary) => self.won.iter_mut().for_each(|h| h(summary)),
        }
        for hook in &mut self.events {
            hook(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("scheduled", &self.scheduled.len())
            .field("resolved", &self.resolved.len())
            .field("won", &self.won.len())
            .field("events", &self.events.len())
            .finish()
    }
}
