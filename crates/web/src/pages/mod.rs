// =============================================================================
// CaseDesk Web - Pages
// =============================================================================

pub mod case_detail;
pub mod cases;
pub mod not_found;
pub mod trends;

pub use case_detail::CaseDetailPage;
pub use cases::CasesPage;
pub use not_found::NotFoundPage;
pub use trends::TrendsPage;
