// =============================================================================
// CaseDesk Common - Case List Engine Tests
// =============================================================================

use casedesk_common::mock::mock_cases;
use casedesk_common::wire::decode_case_list;
use casedesk_common::{
    CaseListEngine, CaseListView, CaseSource, CaseSummary, SortDirection, SortField, SortState,
    StatusRanking,
};

fn ids(rows: &[&CaseSummary]) -> Vec<String> {
    rows.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_default_view_is_newest_first() {
    let cases = mock_cases();
    let engine = CaseListEngine::default();
    assert_eq!(ids(&engine.apply(&cases, "")), vec!["4", "3", "5", "2", "1"]);
}

#[test]
fn test_every_filtered_row_matches() {
    let cases = mock_cases();
    let engine = CaseListEngine::default();

    for query in ["", "bayersche", "YORK", "a", "class", "zz"] {
        let rows = engine.apply(&cases, query);
        let needle = query.to_lowercase();
        for row in &rows {
            let in_title = row.title.to_lowercase().contains(&needle);
            let in_jurisdiction = row
                .jurisdiction
                .as_deref()
                .is_some_and(|j| j.to_lowercase().contains(&needle));
            assert!(in_title || in_jurisdiction, "{} should not match {:?}", row.id, query);
        }
        let expected = cases
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.jurisdiction.as_deref().is_some_and(|j| j.to_lowercase().contains(&needle))
            })
            .count();
        assert_eq!(rows.len(), expected, "query {:?}", query);
    }
}

#[test]
fn test_status_sort_with_mixed_vocabularies() {
    let body = r#"[
        {"id": "a", "title": "A", "status": "dismissed", "date": "2023-01-01"},
        {"id": "b", "title": "B", "status": "won", "date": "2023-01-01"},
        {"id": "c", "title": "C", "status": "in progress appeal", "date": "2023-01-01"},
        {"id": "d", "title": "D", "status": "in favour of plaintiff", "date": "2023-01-01"},
        {"id": "e", "title": "E", "status": "in progress", "date": "2023-01-01"},
        {"id": "f", "title": "F", "status": "withdrawn", "date": "2023-01-01"}
    ]"#;
    let cases = decode_case_list(body).unwrap();
    let mut engine = CaseListEngine::new(
        StatusRanking::default(),
        SortState::new(SortField::Status, SortDirection::Asc),
    );

    assert_eq!(ids(&engine.apply(&cases, "")), vec!["c", "e", "b", "a", "d", "f"]);

    engine.set_sort(SortField::Status);
    assert_eq!(ids(&engine.apply(&cases, "")), vec!["d", "a", "b", "e", "c", "f"]);
}

#[test]
fn test_empty_and_failed_render_differently() {
    let engine = CaseListEngine::default();

    let loaded = CaseSource::Loaded(mock_cases());
    let empty = CaseListView::present(&loaded, &engine, "zz");
    assert_eq!(empty, CaseListView::Empty);

    let failed = CaseSource::Failed("connection refused".into());
    let failure = CaseListView::present(&failed, &engine, "zz");
    assert_eq!(failure, CaseListView::LoadFailed("connection refused"));
    assert_ne!(empty.message(), failure.message());
}
