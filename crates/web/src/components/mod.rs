// =============================================================================
// CaseDesk Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Case Components
// =============================================================================

pub mod argumentation;
pub mod case_table;
pub mod charts;
pub mod common;
pub mod footer;
pub mod nav;
pub mod outcome_prediction;
pub mod timeline;

pub use argumentation::ArgumentationSection;
pub use case_table::CaseTable;
pub use charts::BarChart;
pub use common::{Badge, Card, ErrorDisplay, LoadingSpinner};
pub use footer::Footer;
pub use nav::TopNavigation;
pub use outcome_prediction::OutcomePrediction;
pub use timeline::Timeline;
