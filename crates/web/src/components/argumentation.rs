// =============================================================================
// CaseDesk Web - Argumentation Section
// =============================================================================

use leptos::prelude::*;

use crate::components::common::Card;

/// Plaintiff's arguments, our defense and suggestions from similar cases.
#[component]
pub fn ArgumentationSection(
    plaintiff: Vec<String>,
    defense: Option<String>,
    suggestions: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="argumentation">
            <Card title="Plaintiff's Argumentation">
                {if plaintiff.is_empty() {
                    view! { <p class="text-muted">"No plaintiff argumentation on record."</p> }.into_any()
                } else {
                    view! {
                        <ul class="bullet-list">
                            {plaintiff.into_iter().map(|arg| view! { <li>{arg}</li> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </Card>

            <Card title="Our Defense">
                <p>{defense.unwrap_or_else(|| "No defense argumentation on record.".to_string())}</p>
            </Card>

            <Card title="Suggestions from Similar Cases" class="card-info">
                <ul class="bullet-list">
                    {suggestions.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                </ul>
            </Card>
        </div>
    }
}
