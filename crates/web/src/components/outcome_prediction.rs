// =============================================================================
// CaseDesk Web - Outcome Prediction Component
// =============================================================================

use casedesk_common::format::{format_percentage, win_badge};
use casedesk_common::WinLikelihood;
use leptos::prelude::*;

use crate::components::common::Badge;

/// Win probability bar, explanation and key factors.
#[component]
pub fn OutcomePrediction(prediction: Option<WinLikelihood>) -> impl IntoView {
    let Some(prediction) = prediction else {
        return view! {
            <p class="text-muted">"No outcome prediction available for this case yet."</p>
        }
        .into_any();
    };

    let percentage = prediction.win_percentage();
    let (label, tone) = win_badge(&prediction);
    let explanation = prediction.explanation().map(str::to_string);
    let factors = prediction.key_factors().to_vec();

    view! {
        <div class="outcome-prediction">
            <h4>"Win Probability"</h4>
            <div class="progress-row">
                <div class="progress">
                    <div class="progress-fill" style=format!("width: {}%", percentage)></div>
                </div>
                <span class="progress-value">{format_percentage(percentage)}</span>
                <Badge label=label tone=tone />
            </div>

            {explanation.map(|e| view! { <p class="text-muted">{e}</p> })}

            {(!factors.is_empty()).then(|| view! {
                <h4>"Key Factors"</h4>
                <ul class="bullet-list">
                    {factors
                        .into_iter()
                        .map(|kf| view! {
                            <li>
                                <span class="factor">{kf.factor}</span>
                                <span class="factor-impact">{format!("({})", kf.impact)}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            })}
        </div>
    }
    .into_any()
}
