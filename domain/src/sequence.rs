//! Generation counters for async results.
//!
//! Every async kickoff (author lookup, page fetch) takes a [`Ticket`]. When the
//! result arrives it is applied only if the ticket is still the latest one
//! issued. Cancelling the sequencer, for example when a form is torn down,
//! makes every outstanding ticket stale.

/// Proof of which kickoff a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Sequencer {
    latest: u64,
    cancelled: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation; all earlier tickets become stale
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Make outstanding tickets stale without starting new work
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Permanently stop accepting results
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.invalidate();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        !self.cancelled && ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = Sequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(&first));

        let second = seq.issue();
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_invalidate_drops_in_flight_ticket() {
        let mut seq = Sequencer::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(&ticket));
    }

    #[test]
    fn test_cancel_is_permanent() {
        let mut seq = Sequencer::new();
        let ticket = seq.issue();
        seq.cancel();
        assert!(!seq.is_current(&ticket));

        let late = seq.issue();
        assert!(seq.is_cancelled());
        assert!(!seq.is_current(&late));
    }
}
