//! Request Tracking
//!
//! Per-button bookkeeping for overlapping favorite-toggle requests.

use serde::Deserialize;

/// How a button treats clicks while an earlier request is still in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every click issues a request; responses apply in arrival order.
    #[default]
    Concurrent,
    /// Clicks are dropped until the outstanding request settles.
    IgnoreWhileInFlight,
    /// Every click issues a request; only the newest one may update the icon.
    LatestWins,
}

/// Handle for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    policy: OverlapPolicy,
    latest: u64,
    in_flight: usize,
}

impl RequestTracker {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    /// Register a click. `None` means the click must not issue a request.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.policy == OverlapPolicy::IgnoreWhileInFlight && self.in_flight > 0 {
            return None;
        }
        self.latest += 1;
        self.in_flight += 1;
        Some(Ticket { generation: self.latest })
    }

    /// Whether a settled request may still update the icon.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        match self.policy {
            OverlapPolicy::LatestWins => ticket.generation == self.latest,
            OverlapPolicy::Concurrent | OverlapPolicy::IgnoreWhileInFlight => true,
        }
    }

    pub fn finish(&mut self, _ticket: Ticket) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_applies_every_response() {
        let mut tracker = RequestTracker::new(OverlapPolicy::Concurrent);
        let first = tracker.begin().unwrap();
        let second = tracker.begin().unwrap();
        assert_eq!(tracker.in_flight(), 2);

        // Second resolves first, then the stale first one still applies
        assert!(tracker.is_current(second));
        tracker.finish(second);
        assert!(tracker.is_current(first));
        tracker.finish(first);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_ignore_while_in_flight() {
        let mut tracker = RequestTracker::new(OverlapPolicy::IgnoreWhileInFlight);
        let ticket = tracker.begin().unwrap();
        assert!(tracker.begin().is_none());
        tracker.finish(ticket);
        assert!(tracker.begin().is_some());
    }

    #[test]
    fn test_latest_wins_discards_stale() {
        let mut tracker = RequestTracker::new(OverlapPolicy::LatestWins);
        let first = tracker.begin().unwrap();
        let second = tracker.begin().unwrap();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        tracker.finish(first);
        tracker.finish(second);
        // A settled generation stays current until a new click
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_policy_from_config_value() {
        let policy: OverlapPolicy = serde_json::from_str(r#""latest_wins""#).unwrap();
        assert_eq!(policy, OverlapPolicy::LatestWins);
    }
}
