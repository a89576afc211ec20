// =============================================================================
// CaseDesk Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::components::TopNavigation;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <TopNavigation active="" />
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <a href="/cases" class="btn btn-primary">"Back to Cases"</a>
            </div>
        </div>
    }
}
