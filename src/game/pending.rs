//! Scheduled resolutions.
//!
//! When a selection fills up, the controller does not resolve it right
//! away: the player gets a moment to see the revealed symbols. The wait is
//! modelled as a [`ResolutionTicket`] that the driver redeems later. There
//! are no threads or timers in the engine.
//!
//! Every ticket carries the epoch of the game that issued it. Starting a new
//! game bumps the epoch, so a ticket from an earlier game is recognized as
//! stale and dropped instead of being applied to the new board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for a scheduled resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Game generation that scheduled it.
    pub epoch: u64,
    /// Move number the resolution belongs to (1-based).
    pub move_number: u32,
    /// How long the driver should wait before redeeming it.
    pub delay: Duration,
}

/// A resolution waiting to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingResolution {
    ticket: ResolutionTicket,
    elapsed: Duration,
}

impl PendingResolution {
    pub(crate) fn new(ticket: ResolutionTicket) -> Self {
        Self {
            ticket,
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn ticket(&self) -> ResolutionTicket {
        self.ticket
    }

    /// Accumulate driver time. Returns `true` once the delay has passed.
    pub(crate) fn advance(&mut self, elapsed: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        self.is_due()
    }

    pub(crate) fn is_due(&self) -> bool {
        self.elapsed >= self.ticket.delay
    }

    /// Time left before the resolution is due.
    pub(crate) fn remaining(&self) -> Duration {
        self.ticket.delay.saturating_sub(self.elapsed)
    }
}
