// =============================================================================
// CaseDesk Common - Library Root
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================
//
// Shared case schema, the case list engine and everything both frontends
// (browser and terminal) need to talk to the case backend.

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod case;
pub mod config;
pub mod detail;
pub mod engine;
pub mod error;
pub mod format;
pub mod mock;
pub mod outcome;
pub mod ranking;
pub mod request;
pub mod stats;
pub mod wire;

#[cfg(feature = "http")]
pub mod client;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use case::{CaseDate, CaseStatus, CaseSummary, Level, WinLikelihood};
pub use config::DashboardConfig;
pub use detail::CaseDetail;
pub use engine::{CaseListEngine, SortDirection, SortField, SortState};
pub use error::{ConfigError, FetchError, RecordError};
pub use outcome::{CaseListView, CaseLookup, CaseSource, TrendsView};
pub use ranking::StatusRanking;
pub use request::{RequestSequence, RequestToken};

#[cfg(feature = "http")]
pub use client::CaseClient;
