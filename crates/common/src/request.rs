// =============================================================================
// CaseDesk Common - Request Sequencing
// =============================================================================

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Last-request-wins bookkeeping for overlapping fetches.
///
/// Every fetch takes a token from [`RequestSequence::issue`]. When its
/// response arrives, it is applied only if [`RequestSequence::is_current`]
/// still holds for that token; older responses are dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut seq = RequestSequence::new();

        let first = seq.issue();
        let second = seq.issue();
        assert!(first < second);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_out_of_order_responses() {
        let mut seq = RequestSequence::new();
        let slow = seq.issue();
        let fast = seq.issue();

        // fast resolves first and is applied; slow arrives later and is dropped
        let mut applied = Vec::new();
        for token in [fast, slow] {
            if seq.is_current(token) {
                applied.push(token.value());
            }
        }
        assert_eq!(applied, vec![fast.value()]);
    }
}
