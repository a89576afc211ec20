// =============================================================================
// CaseDesk Common - Case List Engine
// =============================================================================
// Table of Contents:
// 1. Sort Field & Direction
// 2. Sort State
// 3. Filtering
// 4. Sorting
// 5. Engine
// =============================================================================
//
// Pure transformation from (cases, query, sort) to display order. Nothing in
// here mutates or reorders the caller's collection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::case::CaseSummary;
use crate::error::ConfigError;
use crate::ranking::StatusRanking;

// -----------------------------------------------------------------------------
// 1. Sort Field & Direction
// -----------------------------------------------------------------------------

/// Column the case table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    Status,
    Jurisdiction,
    CaseType,
    Date,
    BrandImpact,
    Risk,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Title,
        SortField::Status,
        SortField::Jurisdiction,
        SortField::CaseType,
        SortField::Date,
        SortField::BrandImpact,
        SortField::Risk,
    ];

    /// Wire / config name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Status => "status",
            SortField::Jurisdiction => "jurisdiction",
            SortField::CaseType => "caseType",
            SortField::Date => "date",
            SortField::BrandImpact => "brandImpact",
            SortField::Risk => "risk",
        }
    }

    /// Column heading.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Status => "Status",
            SortField::Jurisdiction => "Jurisdiction",
            SortField::CaseType => "Case Type",
            SortField::Date => "Date",
            SortField::BrandImpact => "Brand Impact",
            SortField::Risk => "Risk",
        }
    }
}

impl FromStr for SortField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], "").to_ascii_lowercase();
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ConfigError::UnknownSortField(s.to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ConfigError::UnknownSortDirection(s.to_string())),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Sort State
// -----------------------------------------------------------------------------

/// Current ordering of the case table. Starts at newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column click: same column flips, a new column starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flip();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Arrow for a column heading, or `None` if the column is not active.
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.field == field).then_some(match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        })
    }
}

// -----------------------------------------------------------------------------
// 3. Filtering
// -----------------------------------------------------------------------------

/// Search text as both the backend request and the local filter see it.
pub fn normalize_query(query: &str) -> &str {
    query.trim()
}

/// Whether a case matches a search query (title or jurisdiction, any case).
pub fn matches_query(case: &CaseSummary, query: &str) -> bool {
    let needle = normalize_query(query).to_lowercase();
    if needle.is_empty() {
        return true;
    }
    case.title.to_lowercase().contains(&needle)
        || case
            .jurisdiction
            .as_deref()
            .is_some_and(|j| j.to_lowercase().contains(&needle))
}

/// Cases matching `query`, in input order.
pub fn filter_cases<'a>(cases: &'a [CaseSummary], query: &str) -> Vec<&'a CaseSummary> {
    cases.iter().filter(|c| matches_query(c, query)).collect()
}

// -----------------------------------------------------------------------------
// 4. Sorting
// -----------------------------------------------------------------------------

/// Compare two optional keys; `None` goes last whichever way we sort.
fn compare_present<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(cmp(&a, &b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ordering of two cases under a sort state.
pub fn compare_cases(
    a: &CaseSummary,
    b: &CaseSummary,
    sort: SortState,
    ranking: &StatusRanking,
) -> Ordering {
    let direction = sort.direction;
    match sort.field {
        SortField::Title => direction.apply(a.title.cmp(&b.title)),
        SortField::Jurisdiction => compare_present(
            a.jurisdiction.as_deref(),
            b.jurisdiction.as_deref(),
            direction,
            |x, y| x.cmp(y),
        ),
        SortField::CaseType => compare_present(
            a.case_type.as_deref(),
            b.case_type.as_deref(),
            direction,
            |x, y| x.cmp(y),
        ),
        SortField::Date => compare_present(
            a.date.timestamp_millis(),
            b.date.timestamp_millis(),
            direction,
            |x, y| x.cmp(y),
        ),
        SortField::Status => {
            let unranked = ranking.labels().len();
            let rank = |c: &CaseSummary| Some(ranking.rank(&c.status)).filter(|r| *r < unranked);
            compare_present(rank(a), rank(b), direction, |x, y| x.cmp(y))
        }
        SortField::BrandImpact => direction.apply(
            a.brand_impact()
                .severity_rank()
                .cmp(&b.brand_impact().severity_rank()),
        ),
        SortField::Risk => compare_present(a.win_percentage(), b.win_percentage(), direction, |x, y| {
            x.total_cmp(y)
        }),
    }
}

/// Sorted copy of `cases`. Stable for equal keys in both directions.
pub fn sort_cases<'a>(
    cases: &[&'a CaseSummary],
    sort: SortState,
    ranking: &StatusRanking,
) -> Vec<&'a CaseSummary> {
    let mut sorted = cases.to_vec();
    sorted.sort_by(|a, b| compare_cases(a, b, sort, ranking));
    sorted
}

// -----------------------------------------------------------------------------
// 5. Engine
// -----------------------------------------------------------------------------

/// Filter + sort over a case collection, holding the current sort state.
#[derive(Debug, Clone, Default)]
pub struct CaseListEngine {
    ranking: StatusRanking,
    sort: SortState,
}

impl CaseListEngine {
    pub fn new(ranking: StatusRanking, sort: SortState) -> Self {
        Self { ranking, sort }
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.sort.set_sort(field);
    }

    /// Cases to display for `query`, in display order.
    pub fn apply<'a>(&self, cases: &'a [CaseSummary], query: &str) -> Vec<&'a CaseSummary> {
        let filtered = filter_cases(cases, query);
        sort_cases(&filtered, self.sort, &self.ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{CaseStatus, Level, WinLikelihood};

    fn case(id: &str, title: &str, status: &str, date: &str) -> CaseSummary {
        CaseSummary::new(id, title, CaseStatus::parse(status), date)
    }

    fn ids(cases: &[&CaseSummary]) -> Vec<String> {
        cases.iter().map(|c| c.id.clone()).collect()
    }

    fn pct(p: f64) -> WinLikelihood {
        WinLikelihood::Percentage {
            percentage: p,
            explanation: None,
            key_factors: vec![],
        }
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("caseType".parse::<SortField>().unwrap(), SortField::CaseType);
        assert_eq!("brand_impact".parse::<SortField>().unwrap(), SortField::BrandImpact);
        assert_eq!("DATE".parse::<SortField>().unwrap(), SortField::Date);
        assert!(matches!(
            "colour".parse::<SortField>(),
            Err(ConfigError::UnknownSortField(_))
        ));
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }

    #[test]
    fn test_sort_state_toggle() {
        let mut state = SortState::default();
        assert_eq!(state, SortState::new(SortField::Date, SortDirection::Desc));

        state.set_sort(SortField::Date);
        assert_eq!(state.direction, SortDirection::Asc);
        state.set_sort(SortField::Date);
        assert_eq!(state, SortState::default());

        state.set_sort(SortField::Title);
        assert_eq!(state, SortState::new(SortField::Title, SortDirection::Asc));
        assert_eq!(state.indicator(SortField::Title), Some("↑"));
        assert_eq!(state.indicator(SortField::Date), None);
    }

    #[test]
    fn test_filter_empty_query_passes_everything() {
        let cases = vec![case("1", "Alpha", "settled", "2023-01-01"), case("2", "Beta", "won", "2024-01-01")];
        assert_eq!(ids(&filter_cases(&cases, "")), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_title_or_jurisdiction() {
        let cases = vec![
            case("1", "Smith v. Motors", "won", "2023-01-01").with_jurisdiction("California"),
            case("2", "Johnson Claim", "lost", "2023-01-02").with_jurisdiction("Texas"),
            case("3", "Texan Recall", "settled", "2023-01-03"),
        ];
        assert_eq!(ids(&filter_cases(&cases, "tex")), vec!["2", "3"]);
        assert_eq!(ids(&filter_cases(&cases, "SMITH")), vec!["1"]);
        assert!(filter_cases(&cases, "zz").is_empty());
    }

    #[test]
    fn test_filter_ignores_surrounding_whitespace() {
        let cases = vec![
            case("1", "Smith v. Motors", "won", "2023-01-01").with_jurisdiction("California"),
            case("2", "Johnson Claim", "lost", "2023-01-02").with_jurisdiction("Texas"),
        ];
        assert_eq!(ids(&filter_cases(&cases, "   ")), vec!["1", "2"]);
        assert_eq!(ids(&filter_cases(&cases, "  tex ")), vec!["2"]);

        // Same normalisation as the search request
        assert_eq!(crate::api::cases_path("   "), "/cases/");
        assert_eq!(crate::api::cases_path("  tex "), "/cases/?search=tex");
    }

    #[test]
    fn test_date_desc() {
        let cases = vec![
            case("a", "Alpha", "settled", "2023-01-01"),
            case("b", "Beta", "settled", "2024-01-01"),
        ];
        let engine = CaseListEngine::default();
        assert_eq!(ids(&engine.apply(&cases, "")), vec!["b", "a"]);
    }

    #[test]
    fn test_bad_dates_sort_last_both_ways() {
        let cases = vec![
            case("bad", "Bad", "settled", "not a date"),
            case("old", "Old", "settled", "2020-01-01"),
            case("new", "New", "settled", "2024-01-01"),
        ];
        let ranking = StatusRanking::default();
        let all = filter_cases(&cases, "");

        let asc = sort_cases(&all, SortState::new(SortField::Date, SortDirection::Asc), &ranking);
        assert_eq!(ids(&asc), vec!["old", "new", "bad"]);
        let desc = sort_cases(&all, SortState::new(SortField::Date, SortDirection::Desc), &ranking);
        assert_eq!(ids(&desc), vec!["new", "old", "bad"]);
    }

    #[test]
    fn test_status_follows_rank_table() {
        let cases = vec![
            case("1", "A", "dismissed", "2023-01-01"),
            case("2", "B", "in progress appeal", "2023-01-01"),
            case("3", "C", "in favour of plaintiff", "2023-01-01"),
        ];
        let ranking = StatusRanking::default();
        let sorted = sort_cases(
            &filter_cases(&cases, ""),
            SortState::new(SortField::Status, SortDirection::Asc),
            &ranking,
        );
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let cases = vec![
            case("1", "Same", "settled", "2023-01-01"),
            case("2", "Same", "settled", "2023-01-01"),
            case("3", "Other", "settled", "2023-01-01"),
            case("4", "Same", "settled", "2023-01-01"),
        ];
        let ranking = StatusRanking::default();
        let all = filter_cases(&cases, "");

        let asc = sort_cases(&all, SortState::new(SortField::Title, SortDirection::Asc), &ranking);
        assert_eq!(ids(&asc), vec!["3", "1", "2", "4"]);
        let desc = sort_cases(&all, SortState::new(SortField::Title, SortDirection::Desc), &ranking);
        assert_eq!(ids(&desc), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_brand_impact_missing_is_low() {
        let cases = vec![
            case("low", "L", "settled", "2023-01-01").with_brand_impact(Level::Low),
            case("none", "N", "settled", "2023-01-01"),
            case("high", "H", "settled", "2023-01-01").with_brand_impact(Level::High),
            case("mid", "M", "settled", "2023-01-01").with_brand_impact(Level::Medium),
        ];
        let sorted = sort_cases(
            &filter_cases(&cases, ""),
            SortState::new(SortField::BrandImpact, SortDirection::Asc),
            &StatusRanking::default(),
        );
        assert_eq!(ids(&sorted), vec!["high", "mid", "low", "none"]);
    }

    #[test]
    fn test_risk_uses_win_percentage() {
        let cases = vec![
            case("safe", "S", "in progress", "2023-01-01").with_win_likelihood(pct(80.0)),
            case("unknown", "U", "in progress", "2023-01-01"),
            case("risky", "R", "in progress", "2023-01-01").with_win_likelihood(pct(20.0)),
            case("legacy", "L", "in progress", "2023-01-01").with_win_likelihood(WinLikelihood::Qualitative {
                likelihood: Level::Medium,
                explanation: None,
            }),
        ];
        let ranking = StatusRanking::default();
        let all = filter_cases(&cases, "");

        let asc = sort_cases(&all, SortState::new(SortField::Risk, SortDirection::Asc), &ranking);
        assert_eq!(ids(&asc), vec!["risky", "legacy", "safe", "unknown"]);
        let desc = sort_cases(&all, SortState::new(SortField::Risk, SortDirection::Desc), &ranking);
        assert_eq!(ids(&desc), vec!["safe", "legacy", "risky", "unknown"]);
    }

    #[test]
    fn test_toggle_twice_restores_order() {
        let cases = vec![
            case("1", "B", "settled", "2022-06-01"),
            case("2", "A", "won", "2024-01-01"),
            case("3", "C", "lost", "2023-01-01"),
        ];
        let mut engine = CaseListEngine::default();
        let before = ids(&engine.apply(&cases, ""));
        engine.set_sort(SortField::Date);
        assert_ne!(ids(&engine.apply(&cases, "")), before);
        engine.set_sort(SortField::Date);
        assert_eq!(ids(&engine.apply(&cases, "")), before);
    }

    #[test]
    fn test_apply_does_not_touch_source() {
        let cases = vec![
            case("1", "Alpha", "settled", "2023-01-01"),
            case("2", "Beta", "settled", "2024-01-01"),
        ];
        let snapshot = cases.clone();
        let _ = CaseListEngine::default().apply(&cases, "a");
        assert_eq!(cases, snapshot);
    }
}
