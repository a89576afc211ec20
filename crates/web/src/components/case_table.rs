// =============================================================================
// CaseDesk Web - Case Table Component
// =============================================================================
// Table of Contents:
// 1. Case Table
// 2. Case Row
// =============================================================================

use casedesk_common::format::{format_date, format_percentage, level_tone, status_label, status_tone};
use casedesk_common::outcome::{EMPTY_RESULT_MESSAGE, LOAD_FAILED_MESSAGE};
use casedesk_common::{CaseListView, CaseSource, CaseSummary, SortField};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::common::{Badge, ErrorDisplay, LoadingSpinner};
use crate::state::AppState;

const COLUMNS: [SortField; 7] = SortField::ALL;

// -----------------------------------------------------------------------------
// 1. Case Table
// -----------------------------------------------------------------------------

/// Sortable case table over a loaded (or loading / failed) source.
#[component]
pub fn CaseTable(source: RwSignal<CaseSource>) -> impl IntoView {
    let list = expect_context::<AppState>().case_list;

    let body = move || {
        let query = list.query.get();
        source.with(|src| {
            list.engine.with(|engine| match CaseListView::present(src, engine, &query) {
                CaseListView::Rows(rows) => rows
                    .into_iter()
                    .map(|case| view! { <CaseRow case=case.clone() /> })
                    .collect_view()
                    .into_any(),
                CaseListView::Loading => view! {
                    <tr><td colspan="7"><LoadingSpinner message="Loading cases..." /></td></tr>
                }
                .into_any(),
                CaseListView::LoadFailed(detail) => view! {
                    <tr><td colspan="7">
                        <ErrorDisplay message=LOAD_FAILED_MESSAGE detail=detail.to_string() />
                    </td></tr>
                }
                .into_any(),
                CaseListView::Empty => view! {
                    <tr><td colspan="7" class="table-empty">{EMPTY_RESULT_MESSAGE}</td></tr>
                }
                .into_any(),
            })
        })
    };

    view! {
        <div class="table-container">
            <table class="case-table">
                <thead>
                    <tr>
                        {COLUMNS
                            .into_iter()
                            .map(|field| view! {
                                <th>
                                    <button
                                        class="btn btn-ghost th-sort"
                                        on:click=move |_| list.set_sort(field)
                                    >
                                        {field.label()}
                                        <span class="sort-indicator">
                                            {move || list.sort_state().indicator(field).unwrap_or("")}
                                        </span>
                                    </button>
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Case Row
// -----------------------------------------------------------------------------

#[component]
fn CaseRow(case: CaseSummary) -> impl IntoView {
    let navigate = use_navigate();
    let href = format!("/cases/{}", case.id);

    let impact = case.brand_impact_estimate.as_ref().map(|e| e.impact);
    let risk = case.win_percentage().map(format_percentage);

    view! {
        <tr class="case-row" on:click=move |_| navigate(&href, Default::default())>
            <td class="case-title">{case.title.clone()}</td>
            <td><Badge label=status_label(&case.status) tone=status_tone(&case.status) /></td>
            <td>{case.jurisdiction.clone().unwrap_or_default()}</td>
            <td>{case.case_type.clone().unwrap_or_default()}</td>
            <td>{format_date(&case.date)}</td>
            <td>{impact.map(|level| view! { <Badge label=level.as_str() tone=level_tone(level) /> })}</td>
            <td class="case-risk">{risk}</td>
        </tr>
    }
}
