// =============================================================================
// CaseDesk Common - Backend Endpoints
// =============================================================================

/// Base URL of a locally running backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// `/cases/`, with `?search=` when the query is non-empty.
pub fn cases_path(query: &str) -> String {
    let query = crate::engine::normalize_query(query);
    if query.is_empty() {
        "/cases/".to_string()
    } else {
        format!("/cases/?search={}", urlencoding::encode(query))
    }
}

pub fn case_path(id: &str) -> String {
    format!("/cases/{}", urlencoding::encode(id))
}

pub const STATS_PATH: &str = "/stats/";
pub const CAR_STATS_PATH: &str = "/stats/cars";
pub const PART_STATS_PATH: &str = "/stats/parts";
pub const STATUS_STATS_PATH: &str = "/stats/status";

/// Join a base URL and an endpoint path.
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_path() {
        assert_eq!(cases_path(""), "/cases/");
        assert_eq!(cases_path("  "), "/cases/");
        assert_eq!(cases_path("new york"), "/cases/?search=new%20york");
        assert_eq!(cases_path("a&b"), "/cases/?search=a%26b");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("http://localhost:8000/api/", "/stats/"), "http://localhost:8000/api/stats/");
        assert_eq!(join(DEFAULT_API_BASE_URL, &case_path("abc 1")), "http://localhost:8000/api/cases/abc%201");
    }
}
