// =============================================================================
// CaseDesk Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{CaseDetailPage, CasesPage, NotFoundPage, TrendsPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    let dark_mode = app_state.dark_mode;
    provide_context(app_state);

    view! {
        <div class="app" class:dark=move || dark_mode.get()>
            <Router>
                // -------------------------------------------------------------
                // 3. Router Configuration
                // -------------------------------------------------------------
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=CasesPage />
                    <Route path=path!("/cases") view=CasesPage />
                    <Route path=path!("/cases/:id") view=CaseDetailPage />
                    <Route path=path!("/trends") view=TrendsPage />
                </Routes>
            </Router>
        </div>
    }
}
