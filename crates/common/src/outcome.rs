// =============================================================================
// CaseDesk Common - View Outcomes
// =============================================================================
// Table of Contents:
// 1. Case Source
// 2. Case List View
// 3. Case Lookup
// 4. Trends View
// =============================================================================
//
// Loading, empty, not-found and failed are separate states with separate
// copy. None of them is ever folded into another.

use crate::case::CaseSummary;
use crate::detail::CaseDetail;
use crate::engine::CaseListEngine;
use crate::error::FetchError;
use crate::stats::{CarStats, PartStats, StatusStats, TrendStats};

/// Shown when a query matches nothing.
pub const EMPTY_RESULT_MESSAGE: &str = "No cases found matching your search.";
/// Shown when the case list could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load cases.";
pub const TRENDS_FAILED_MESSAGE: &str = "Failed to load trend data";
pub const CASE_NOT_FOUND_TITLE: &str = "Case Not Found";

// -----------------------------------------------------------------------------
// 1. Case Source
// -----------------------------------------------------------------------------

/// The source collection fed to the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaseSource {
    #[default]
    Loading,
    Loaded(Vec<CaseSummary>),
    Failed(String),
}

impl CaseSource {
    /// Fold a fetch result into a source, logging failures.
    pub fn from_result(result: Result<Vec<CaseSummary>, FetchError>) -> Self {
        match result {
            Ok(cases) => CaseSource::Loaded(cases),
            Err(e) => {
                tracing::warn!("Failed to load cases: {}", e);
                CaseSource::Failed(e.to_string())
            }
        }
    }

    /// Cases to feed the engine; empty unless loaded.
    pub fn cases(&self) -> &[CaseSummary] {
        match self {
            CaseSource::Loaded(cases) => cases,
            _ => &[],
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Case List View
// -----------------------------------------------------------------------------

/// What the case table should render.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseListView<'a> {
    Loading,
    Rows(Vec<&'a CaseSummary>),
    Empty,
    LoadFailed(&'a str),
}

impl<'a> CaseListView<'a> {
    /// Run the engine over a source and classify the result.
    pub fn present(source: &'a CaseSource, engine: &CaseListEngine, query: &str) -> Self {
        match source {
            CaseSource::Loading => CaseListView::Loading,
            CaseSource::Failed(message) => CaseListView::LoadFailed(message),
            CaseSource::Loaded(cases) => {
                let rows = engine.apply(cases, query);
                if rows.is_empty() {
                    CaseListView::Empty
                } else {
                    CaseListView::Rows(rows)
                }
            }
        }
    }

    /// Display order; always empty for the non-row states.
    pub fn rows(&self) -> &[&'a CaseSummary] {
        match self {
            CaseListView::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Copy for the non-row states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CaseListView::Loading => Some("Loading cases..."),
            CaseListView::Empty => Some(EMPTY_RESULT_MESSAGE),
            CaseListView::LoadFailed(_) => Some(LOAD_FAILED_MESSAGE),
            CaseListView::Rows(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Case Lookup
// -----------------------------------------------------------------------------

/// State of the case detail page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaseLookup {
    #[default]
    Loading,
    Found(Box<CaseDetail>),
    NotFound(String),
    LoadFailed(String),
}

impl CaseLookup {
    pub fn from_result(id: &str, result: Result<CaseDetail, FetchError>) -> Self {
        match result {
            Ok(detail) => CaseLookup::Found(Box::new(detail)),
            Err(FetchError::NotFound) => {
                tracing::debug!("Case {} not found", id);
                CaseLookup::NotFound(id.to_string())
            }
            Err(e) => {
                tracing::warn!("Failed to load case {}: {}", id, e);
                CaseLookup::LoadFailed(e.to_string())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Trends View
// -----------------------------------------------------------------------------

/// Everything the trends page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsData {
    pub overview: TrendStats,
    pub cars: Vec<CarStats>,
    pub parts: Vec<PartStats>,
    pub statuses: Vec<StatusStats>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrendsView {
    #[default]
    Loading,
    Loaded(Box<TrendsData>),
    Failed(String),
}

impl TrendsView {
    /// The overview drives the page; a failed overview fails the page.
    /// Chart series degrade to empty on their own.
    pub fn from_results(
        overview: Result<TrendStats, FetchError>,
        cars: Result<Vec<CarStats>, FetchError>,
        parts: Result<Vec<PartStats>, FetchError>,
        statuses: Result<Vec<StatusStats>, FetchError>,
    ) -> Self {
        let overview = match overview {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!("Failed to load trend stats: {}", e);
                return TrendsView::Failed(e.to_string());
            }
        };
        TrendsView::Loaded(Box::new(TrendsData {
            overview,
            cars: series_or_empty("car", cars),
            parts: series_or_empty("part", parts),
            statuses: series_or_empty("status", statuses),
        }))
    }
}

fn series_or_empty<T>(name: &str, result: Result<Vec<T>, FetchError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to load {} stats: {}", name, e);
        Vec::new()
    })
}
