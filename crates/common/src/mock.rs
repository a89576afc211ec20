// =============================================================================
// CaseDesk Common - Mock Data
// =============================================================================
//
// Demo cases for running without a backend. They are stored as backend JSON
// (legacy status vocabulary included) and go through the same boundary
// decoder as live data.

use crate::case::CaseSummary;
use crate::detail::{CaseDetail, TimelineEvent};
use crate::error::FetchError;
use crate::wire::decode_case_list;

const MOCK_CASES_JSON: &str = r#"[
    {
        "id": "1",
        "title": "Smith v. Bayersche Motors",
        "status": "won",
        "jurisdiction": "California",
        "caseType": "Liability",
        "date": "2023-05-15",
        "brandImpactEstimate": {"impact": "Low", "explanation": "Limited local coverage"}
    },
    {
        "id": "2",
        "title": "Johnson Family Trust v. Bayersche",
        "status": "lost",
        "jurisdiction": "New York",
        "caseType": "Liability",
        "date": "2023-08-22",
        "brandImpactEstimate": {"impact": "High", "explanation": "National press picked up the verdict"}
    },
    {
        "id": "3",
        "title": "Martinez Product Liability Claim",
        "status": "in progress",
        "jurisdiction": "Texas",
        "caseType": "Liability",
        "date": "2024-01-10",
        "brandImpactEstimate": {"impact": "Medium"},
        "caseWinLikelihood": {
            "percentage": "42",
            "explanation": "Plaintiff's expert report on brake wear is credible",
            "keyFactors": [
                {"factor": "Maintenance records incomplete", "impact": "negative"},
                {"factor": "No prior recalls for this part", "impact": "positive"}
            ]
        }
    },
    {
        "id": "4",
        "title": "Williams Class Action",
        "status": "in progress",
        "jurisdiction": "Florida",
        "caseType": "Liability",
        "date": "2024-02-28",
        "caseWinLikelihood": {"likelihood": "High", "explanation": "Class certification is doubtful"}
    },
    {
        "id": "5",
        "title": "Garcia v. Bayersche Manufacturing",
        "status": "won",
        "jurisdiction": "Michigan",
        "caseType": "Liability",
        "date": "2023-11-05"
    }
]"#;

/// The bundled demo cases.
pub fn mock_cases() -> Vec<CaseSummary> {
    match decode_case_list(MOCK_CASES_JSON) {
        Ok(cases) => cases,
        Err(e) => {
            tracing::warn!("Bundled mock cases failed to decode: {}", e);
            Vec::new()
        }
    }
}

/// Demo cases matching `query`, mirroring the backend's search endpoint.
pub fn mock_search(query: &str) -> Vec<CaseSummary> {
    mock_cases()
        .into_iter()
        .filter(|c| crate::engine::matches_query(c, query))
        .collect()
}

/// Detail view for a demo case.
pub fn mock_case_detail(id: &str) -> Result<CaseDetail, FetchError> {
    let summary = mock_cases()
        .into_iter()
        .find(|c| c.id == id)
        .ok_or(FetchError::NotFound)?;

    let filed = TimelineEvent {
        date: summary.date.clone(),
        event: "Complaint filed".to_string(),
        description: format!("Complaint filed in {}", summary.jurisdiction.as_deref().unwrap_or("court")),
    };
    let mut detail = CaseDetail::from_summary(summary);
    detail.timeline.push(filed);
    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{CaseStatus, Resolution, Stage};

    #[test]
    fn test_mock_cases_decode_and_migrate() {
        let cases = mock_cases();
        assert_eq!(cases.len(), 5);
        assert_eq!(cases[0].status, CaseStatus::Resolved(Resolution::InFavourOfDefendant));
        assert_eq!(cases[2].status, CaseStatus::InProgress(Stage::Unspecified));
        assert_eq!(cases[2].win_percentage(), Some(42.0));
        assert_eq!(cases[3].win_percentage(), Some(75.0));
    }

    #[test]
    fn test_mock_search() {
        let hits = mock_search("tex");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_mock_detail() {
        let detail = mock_case_detail("3").unwrap();
        assert_eq!(detail.id(), "3");
        assert_eq!(detail.timeline.len(), 1);
        assert!(detail.show_outcome_prediction());
        assert_eq!(mock_case_detail("99"), Err(FetchError::NotFound));
    }
}
