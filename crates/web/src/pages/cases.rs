// =============================================================================
// CaseDesk Web - Cases Page
// =============================================================================
// Table of Contents:
// 1. Cases Page
// 2. Search Bar
// =============================================================================

use casedesk_common::{CaseSource, RequestSequence};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CaseTable, Footer, TopNavigation};
use crate::state::{is_live_and_current, AppState};

// -----------------------------------------------------------------------------
// 1. Cases Page
// -----------------------------------------------------------------------------

/// Searchable, sortable list of all litigation cases.
#[component]
pub fn CasesPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let list = app_state.case_list;
    let source = RwSignal::new(CaseSource::Loading);
    let requests = StoredValue::new(RequestSequence::new());

    // Refetch on mount and on every query change
    Effect::new(move |_| {
        let query = list.query.get();
        let backend = app_state.backend();
        let Some(token) = requests.try_update_value(|seq| seq.issue()) else {
            return;
        };

        spawn_local(async move {
            let result = backend.list_cases(&query).await;
            if is_live_and_current(requests, token) {
                let _ = source.try_set(CaseSource::from_result(result));
            } else {
                log::debug!("Dropping stale case list response #{}", token.value());
            }
        });
    });

    view! {
        <div class="page page-cases">
            <TopNavigation active="cases" />

            <main class="page-content">
                <div class="page-header">
                    <h1>"Litigation Cases"</h1>
                    <p class="text-muted">"Track, search and prioritise active and closed cases."</p>
                </div>

                <SearchBar />
                <CaseTable source=source />
            </main>

            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Search Bar
// -----------------------------------------------------------------------------

#[component]
fn SearchBar() -> impl IntoView {
    let list = expect_context::<AppState>().case_list;

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                class="search-input"
                placeholder="Search by title or jurisdiction..."
                prop:value=move || list.query.get()
                on:input=move |ev| list.query.set(event_target_value(&ev))
            />
            <Show when=move || !list.query.get().is_empty()>
                <button class="btn btn-ghost search-clear" on:click=move |_| list.query.set(String::new())>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
