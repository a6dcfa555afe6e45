use serde::{Deserialize, Serialize};

/// Handle for one outstanding external request (insight text, data fetch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Accepts only the completion of the most recent request, and none at all
/// once the owning panel is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestGuard {
    latest: u64,
    torn_down: bool,
}

impl RequestGuard {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest = self.latest.wrapping_add(1);
        RequestTicket(self.latest)
    }

    #[must_use]
    pub fn accepts(self, ticket: RequestTicket) -> bool {
        !self.torn_down && ticket.0 == self.latest
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    #[must_use]
    pub fn is_torn_down(self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGuard;

    #[test]
    fn superseded_ticket_is_rejected() {
        let mut guard = RequestGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn teardown_rejects_latest_ticket() {
        let mut guard = RequestGuard::default();
        let ticket = guard.begin();
        guard.teardown();
        assert!(!guard.accepts(ticket));
    }
}
