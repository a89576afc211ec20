// =============================================================================
// CaseDesk Web - Top Navigation Component
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Top navigation bar.
///
/// # Arguments
/// * `active` - The currently active section ("cases" or "trends")
#[component]
pub fn TopNavigation(#[prop(default = "cases")] active: &'static str) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let dark_mode = app_state.dark_mode;
    let use_mock = app_state.use_mock;

    let link_class = move |page: &str| {
        if page == active { "top-nav-link active" } else { "top-nav-link" }
    };

    view! {
        <nav class="top-nav">
            <a href="/cases" class="nav-logo">"CaseDesk"</a>

            <div class="nav-links">
                <a href="/cases" class=link_class("cases")>"Cases"</a>
                <a href="/trends" class=link_class("trends")>"Trends"</a>
            </div>

            <div class="nav-right">
                {use_mock.then(|| view! {
                    <span class="badge badge-outline" title="Showing bundled demo data">"Demo data"</span>
                })}
                <button
                    class="btn btn-ghost"
                    title="Toggle dark mode"
                    on:click=move |_| app_state.toggle_dark_mode()
                >
                    {move || if dark_mode.get() { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
