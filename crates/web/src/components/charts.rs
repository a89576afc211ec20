// =============================================================================
// CaseDesk Web - Bar Chart Component
// =============================================================================

use casedesk_common::stats::Bar;
use leptos::prelude::*;

/// Horizontal bar chart; bar lengths are relative to the largest count.
#[component]
pub fn BarChart(bars: Vec<Bar>, #[prop(optional, into)] color: String) -> impl IntoView {
    if bars.is_empty() {
        return view! { <p class="text-muted">"No data available."</p> }.into_any();
    }

    let fill_class = format!("bar-fill {}", color);

    view! {
        <div class="bar-chart">
            {bars
                .into_iter()
                .map(|bar| view! {
                    <div class="bar-row">
                        <span class="bar-label">{bar.label}</span>
                        <div class="bar-track">
                            <div
                                class=fill_class.clone()
                                style=format!("width: {:.1}%", bar.fraction * 100.0)
                            ></div>
                        </div>
                        <span class="bar-count">{bar.count}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
