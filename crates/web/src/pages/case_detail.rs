// =============================================================================
// CaseDesk Web - Case Detail Page
// =============================================================================
// Table of Contents:
// 1. Case Detail Page
// 2. Case Header
// 3. General Info
// 4. Case Details
// 5. Evidence and Case Law
// 6. Not Found
// =============================================================================

use casedesk_common::format::{format_date, level_tone, status_label, status_tone, strength_tone};
use casedesk_common::outcome::CASE_NOT_FOUND_TITLE;
use casedesk_common::{CaseDetail, CaseLookup, RequestSequence};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::{
    ArgumentationSection, Badge, Card, ErrorDisplay, Footer, LoadingSpinner, OutcomePrediction,
    Timeline, TopNavigation,
};
use crate::state::{is_live_and_current, AppState};

// -----------------------------------------------------------------------------
// 1. Case Detail Page
// -----------------------------------------------------------------------------

/// Full record for one case - accessed via /cases/:id
#[component]
pub fn CaseDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let params = use_params_map();
    let case_id = move || params.read().get("id").unwrap_or_default();

    let lookup = RwSignal::new(CaseLookup::Loading);
    let requests = StoredValue::new(RequestSequence::new());

    Effect::new(move |_| {
        let id = case_id();
        let backend = app_state.backend();
        let Some(token) = requests.try_update_value(|seq| seq.issue()) else {
            return;
        };
        lookup.set(CaseLookup::Loading);

        spawn_local(async move {
            let result = backend.get_case(&id).await;
            if is_live_and_current(requests, token) {
                let _ = lookup.try_set(CaseLookup::from_result(&id, result));
            }
        });
    });

    view! {
        <div class="page page-case-detail">
            <TopNavigation active="cases" />

            <main class="page-content">
                <a href="/cases" class="btn btn-ghost back-link">"← Back to Cases"</a>

                {move || match lookup.get() {
                    CaseLookup::Loading => view! {
                        <LoadingSpinner message="Loading case..." />
                    }
                    .into_any(),
                    CaseLookup::Found(detail) => view! { <CaseDetailView detail=*detail /> }.into_any(),
                    CaseLookup::NotFound(_) => view! { <CaseNotFound /> }.into_any(),
                    CaseLookup::LoadFailed(err) => view! {
                        <ErrorDisplay message="Failed to load case." detail=err />
                    }
                    .into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn CaseDetailView(detail: CaseDetail) -> impl IntoView {
    let show_prediction = detail.show_outcome_prediction();
    let prediction = detail.summary.case_win_likelihood.clone();
    let timeline: Vec<_> = detail.sorted_timeline().into_iter().cloned().collect();

    view! {
        <CaseHeader detail=detail.clone() />

        <div class="detail-grid">
            <div class="detail-main">
                {detail.case_summary.clone().map(|text| view! {
                    <Card title="Case Summary">
                        <p>{text}</p>
                    </Card>
                })}

                <Timeline events=timeline />
                <CaseDetailsCard detail=detail.clone() />
                <ArgumentationSection
                    plaintiff=detail.plaintiff_argumentation.clone()
                    defense=detail.defense_argumentation.clone()
                    suggestions=detail.suggestions.clone()
                />
                <EvidenceCard detail=detail.clone() />
                <CaseLawCard similar=detail.similar_cases.clone() />
            </div>

            <aside class="detail-side">
                <GeneralInfo detail=detail.clone() />
                {show_prediction.then(|| view! {
                    <Card title="Outcome Prediction">
                        <OutcomePrediction prediction=prediction />
                    </Card>
                })}
            </aside>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Case Header
// -----------------------------------------------------------------------------

#[component]
fn CaseHeader(detail: CaseDetail) -> impl IntoView {
    let status = detail.summary.status.clone();

    view! {
        <div class="page-header case-header">
            <h1>{detail.summary.title.clone()}</h1>
            <div class="case-header-meta">
                <Badge label=status_label(&status) tone=status_tone(&status) />
                <span class="text-muted">{format!("Case #{}", detail.id())}</span>
                <span class="text-muted">{format_date(&detail.summary.date)}</span>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. General Info
// -----------------------------------------------------------------------------

#[component]
fn GeneralInfo(detail: CaseDetail) -> impl IntoView {
    let summary = &detail.summary;
    let rows: Vec<(&'static str, Option<String>)> = vec![
        ("Jurisdiction", summary.jurisdiction.clone()),
        ("Case Type", summary.case_type.clone()),
        ("Filed", Some(format_date(&summary.date))),
        ("Affected Car", detail.affected_car.clone()),
        ("Affected Part", detail.affected_part.clone()),
        ("Claimants", detail.number_of_claimants.map(|n| n.to_string())),
    ];
    let impact = summary.brand_impact_estimate.clone();

    view! {
        <Card title="General Info">
            <dl class="info-list">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="info-row">
                            <dt>{label}</dt>
                            <dd>{value.unwrap_or_else(|| "Not specified".to_string())}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            {impact.map(|estimate| view! {
                <div class="info-row">
                    <dt>"Brand Impact"</dt>
                    <dd><Badge label=estimate.impact.as_str() tone=level_tone(estimate.impact) /></dd>
                </div>
                {estimate.explanation.map(|e| view! { <p class="text-muted">{e}</p> })}
            })}
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 4. Case Details
// -----------------------------------------------------------------------------

#[component]
fn CaseDetailsCard(detail: CaseDetail) -> impl IntoView {
    let facts: Vec<(&'static str, Option<String>)> = vec![
        ("Harm Type", detail.harm_type.clone()),
        ("Cause", detail.cause.clone()),
        ("Time to Resolution", detail.time_to_resolution_months.clone().map(|m| format!("{} months", m))),
        ("Settlement Amount", detail.settlement_amount.clone()),
        ("Defense Cost Estimate", detail.defense_cost_estimate.clone()),
    ];
    let laws = detail.relevant_laws.clone();
    let defects = detail.defect_type.clone();
    let assessments = [
        ("Media Coverage", detail.media_coverage_level.clone()),
        ("Expected Brand Impact", detail.expected_brand_impact.clone()),
    ];

    view! {
        <Card title="Case Details">
            <dl class="info-list">
                {facts
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| (label, v)))
                    .map(|(label, value)| view! {
                        <div class="info-row">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>

            {(!defects.is_empty()).then(|| view! {
                <h4>"Defect Type"</h4>
                <div class="tag-list">
                    {defects.into_iter().map(|d| view! { <span class="tag">{d}</span> }).collect_view()}
                </div>
            })}

            {(!laws.is_empty()).then(|| view! {
                <h4>"Relevant Laws"</h4>
                <ul class="bullet-list">
                    {laws.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
                </ul>
            })}

            {assessments
                .into_iter()
                .filter_map(|(label, a)| a.map(|a| (label, a)))
                .map(|(label, assessment)| view! {
                    <div class="assessment">
                        <h4>{label}</h4>
                        <Badge label=assessment.level.as_str() tone=level_tone(assessment.level) />
                        {assessment.explanation.map(|e| view! { <p class="text-muted">{e}</p> })}
                    </div>
                })
                .collect_view()}
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 5. Evidence and Case Law
// -----------------------------------------------------------------------------

#[component]
fn EvidenceCard(detail: CaseDetail) -> impl IntoView {
    let evidence = detail.evidence;

    view! {
        <Card title="Evidence">
            {if evidence.is_empty() {
                view! { <p class="text-muted">"No evidence listed for this case."</p> }.into_any()
            } else {
                view! {
                    <ul class="evidence-list">
                        {evidence
                            .into_iter()
                            .map(|item| view! {
                                <li class="evidence-item">
                                    <p>{item.text}</p>
                                    {item.relevance.map(|r| view! { <p class="text-muted">{r}</p> })}
                                    {item.strength.map(|s| view! {
                                        <Badge label=s.as_str() tone=strength_tone(s) />
                                    })}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </Card>
    }
}

#[component]
fn CaseLawCard(similar: Vec<String>) -> impl IntoView {
    view! {
        <Card title="Case Law">
            {if similar.is_empty() {
                view! { <p class="text-muted">"No case law found for this case."</p> }.into_any()
            } else {
                view! {
                    <ul class="bullet-list">
                        {similar
                            .into_iter()
                            .map(|id| view! {
                                <li><a href=format!("/cases/{}", id)>{format!("Case #{}", id)}</a></li>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 6. Not Found
// -----------------------------------------------------------------------------

#[component]
fn CaseNotFound() -> impl IntoView {
    view! {
        <div class="not-found-content">
            <h1>{CASE_NOT_FOUND_TITLE}</h1>
            <p>"The case you're looking for doesn't exist."</p>
            <a href="/cases" class="btn btn-primary">"Back to Cases"</a>
        </div>
    }
}
