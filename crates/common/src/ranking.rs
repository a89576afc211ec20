// =============================================================================
// CaseDesk Common - Status Rank Table
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::case::CaseStatus;
use crate::error::ConfigError;

/// Label of the catch-all entry for in-progress stages not listed by name.
pub const GENERIC_IN_PROGRESS: &str = "in progress";

/// Default ordering used when sorting by status: open cases by stage, then
/// outcomes from best to worst for the defendant.
pub const DEFAULT_STATUS_ORDER: [&str; 8] = [
    "in progress first instance",
    "in progress appeal",
    "in progress supreme court",
    "in progress",
    "in favour of defendant",
    "settled",
    "dismissed",
    "in favour of plaintiff",
];

/// Ordered list of status labels. Position in the list is the sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StatusRanking {
    labels: Vec<String>,
}

impl Default for StatusRanking {
    fn default() -> Self {
        Self {
            labels: DEFAULT_STATUS_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StatusRanking {
    /// Build a table from labels, normalised the same way wire statuses are.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for label in labels {
            let label = CaseStatus::parse(label.as_ref()).label().to_string();
            if normalized.contains(&label) {
                return Err(ConfigError::DuplicateRank(label));
            }
            normalized.push(label);
        }
        if normalized.is_empty() {
            return Err(ConfigError::EmptyRanking);
        }
        Ok(Self { labels: normalized })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Sort key for a status. Unlisted statuses share the key after the last
    /// entry.
    pub fn rank(&self, status: &CaseStatus) -> usize {
        let label = status.label();
        if let Some(pos) = self.position(label) {
            return pos;
        }
        if status.is_in_progress() {
            if let Some(pos) = self.position(GENERIC_IN_PROGRESS) {
                return pos;
            }
        }
        self.labels.len()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl TryFrom<Vec<String>> for StatusRanking {
    type Error = ConfigError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        StatusRanking::from_labels(labels)
    }
}

impl From<StatusRanking> for Vec<String> {
    fn from(ranking: StatusRanking) -> Self {
        ranking.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rank_order() {
        let ranking = StatusRanking::default();
        let dismissed = ranking.rank(&CaseStatus::parse("dismissed"));
        let appeal = ranking.rank(&CaseStatus::parse("in progress appeal"));
        let plaintiff = ranking.rank(&CaseStatus::parse("in favour of plaintiff"));
        assert!(appeal < dismissed);
        assert!(dismissed < plaintiff);
    }

    #[test]
    fn test_unlisted_stage_uses_generic_entry() {
        let ranking = StatusRanking::default();
        assert_eq!(
            ranking.rank(&CaseStatus::parse("in progress arbitration")),
            ranking.rank(&CaseStatus::parse("in progress"))
        );
    }

    #[test]
    fn test_unrecognized_ranks_last() {
        let ranking = StatusRanking::default();
        assert_eq!(ranking.rank(&CaseStatus::parse("withdrawn")), DEFAULT_STATUS_ORDER.len());
    }

    #[test]
    fn test_legacy_labels_normalize() {
        let ranking = StatusRanking::from_labels(["Won", "lost"]).unwrap();
        assert_eq!(ranking.labels(), &["in favour of defendant", "in favour of plaintiff"]);
        // No generic entry: in-progress cases fall to the end.
        assert_eq!(ranking.rank(&CaseStatus::parse("in progress appeal")), 2);
    }

    #[test]
    fn test_invalid_tables() {
        assert!(matches!(
            StatusRanking::from_labels(Vec::<String>::new()),
            Err(ConfigError::EmptyRanking)
        ));
        assert!(matches!(
            StatusRanking::from_labels(["settled", "SETTLED"]),
            Err(ConfigError::DuplicateRank(_))
        ));
    }
}
