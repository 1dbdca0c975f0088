// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Request supersession tracking.
use crate::request::{EquityResult, RequestId};

/// Tracks the latest issued request id and gates result application.
///
/// Results are never cancelled in flight, a result is simply discarded on
/// arrival when a newer request has been issued since, so the applied
/// equities always reflect the most recent board state.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    issued: u64,
    applied: Option<RequestId>,
}

impl RequestTracker {
    /// Creates a tracker with no issued requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next request id.
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        RequestId::new(self.issued)
    }

    /// The most recently issued request id.
    pub fn latest(&self) -> Option<RequestId> {
        (self.issued > 0).then(|| RequestId::new(self.issued))
    }

    /// The id of the last applied result.
    pub fn last_applied(&self) -> Option<RequestId> {
        self.applied
    }

    /// Returns true and records the result as applied iff it answers the
    /// latest issued request, otherwise the result must be discarded.
    pub fn apply(&mut self, result: &EquityResult) -> bool {
        if self.latest() == Some(result.request_id) {
            self.applied = Some(result.request_id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ResultKind;

    fn result(id: RequestId) -> EquityResult {
        EquityResult {
            request_id: id,
            kind: ResultKind::Exact,
            players: Vec::new(),
        }
    }

    #[test]
    fn issue_is_monotonic() {
        let mut tracker = RequestTracker::new();
        assert_eq!(tracker.latest(), None);

        let id1 = tracker.issue();
        let id2 = tracker.issue();
        let id3 = tracker.issue();
        assert!(id1 < id2 && id2 < id3);
        assert_eq!(tracker.latest(), Some(id3));
    }

    #[test]
    fn out_of_order_results() {
        let mut tracker = RequestTracker::new();
        let id1 = tracker.issue();
        let id2 = tracker.issue();
        let id3 = tracker.issue();

        // Results arrive out of order, only the latest issued id applies.
        assert!(tracker.apply(&result(id3)));
        assert!(!tracker.apply(&result(id1)));
        assert!(!tracker.apply(&result(id2)));
        assert_eq!(tracker.last_applied(), Some(id3));
    }

    #[test]
    fn stale_results_discarded() {
        let mut tracker = RequestTracker::new();
        let id1 = tracker.issue();
        assert!(tracker.apply(&result(id1)));

        // A newer request supersedes an already applied result.
        let id2 = tracker.issue();
        assert!(!tracker.apply(&result(id1)));
        assert!(tracker.apply(&result(id2)));
        assert_eq!(tracker.last_applied(), Some(id2));
    }
}
