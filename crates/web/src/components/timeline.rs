// =============================================================================
// CaseDesk Web - Case Timeline Component
// =============================================================================

use casedesk_common::detail::TimelineEvent;
use casedesk_common::format::format_date;
use leptos::prelude::*;

use crate::components::common::Card;

/// Vertical timeline of case events, oldest first.
#[component]
pub fn Timeline(events: Vec<TimelineEvent>) -> impl IntoView {
    let is_empty = events.is_empty();

    view! {
        <Card title="Case Timeline">
            {if is_empty {
                view! { <p class="text-muted">"No timeline events recorded."</p> }.into_any()
            } else {
                view! {
                    <ol class="timeline">
                        {events
                            .into_iter()
                            .map(|event| view! {
                                <li class="timeline-item">
                                    <span class="timeline-dot"></span>
                                    <time class="timeline-date">{format_date(&event.date)}</time>
                                    <h4 class="timeline-event">{event.event}</h4>
                                    <p class="timeline-description">{event.description}</p>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                }
                .into_any()
            }}
        </Card>
    }
}
