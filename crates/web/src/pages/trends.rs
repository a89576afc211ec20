// =============================================================================
// CaseDesk Web - Litigation Trends Page
// =============================================================================
// Table of Contents:
// 1. Tabs
// 2. Trends Page
// 3. Overview Cards
// =============================================================================

use casedesk_common::outcome::{TrendsData, TRENDS_FAILED_MESSAGE};
use casedesk_common::stats::{car_bars, part_bars, status_bars, TrendStats};
use casedesk_common::TrendsView;
use leptos::prelude::*;

use crate::components::{BarChart, Card, ErrorDisplay, Footer, LoadingSpinner, TopNavigation};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Tabs
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrendsTab {
    Overview,
    Cars,
    Parts,
    Outcomes,
}

impl TrendsTab {
    const ALL: [TrendsTab; 4] = [Self::Overview, Self::Cars, Self::Parts, Self::Outcomes];

    fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Cars => "Cars",
            Self::Parts => "Parts",
            Self::Outcomes => "Outcomes",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Trends Page
// -----------------------------------------------------------------------------

/// Aggregate statistics across the case collection.
#[component]
pub fn TrendsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let trends = RwSignal::new(TrendsView::Loading);
    let active_tab = RwSignal::new(TrendsTab::Overview);

    let backend = app_state.backend();
    wasm_bindgen_futures::spawn_local(async move {
        let view = backend.trends().await;
        // The page may have been left while the stats were loading
        if trends.try_set(view).is_some() {
            log::debug!("Trends page gone; dropping stats response");
        }
    });

    view! {
        <div class="page page-trends">
            <TopNavigation active="trends" />

            <main class="page-content">
                <div class="page-header">
                    <h1>"Litigation Trends"</h1>
                </div>

                {move || match trends.get() {
                    TrendsView::Loading => view! {
                        <LoadingSpinner message="Loading trend data..." />
                    }
                    .into_any(),
                    TrendsView::Failed(err) => view! {
                        <ErrorDisplay message=TRENDS_FAILED_MESSAGE detail=err />
                    }
                    .into_any(),
                    TrendsView::Loaded(data) => view! {
                        <div class="tabs">
                            {TrendsTab::ALL
                                .into_iter()
                                .map(|tab| view! {
                                    <button
                                        class="tab"
                                        class:active=move || active_tab.get() == tab
                                        on:click=move |_| active_tab.set(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                        <TrendsTabContent data=*data tab=active_tab />
                    }
                    .into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn TrendsTabContent(data: TrendsData, tab: RwSignal<TrendsTab>) -> impl IntoView {
    let data = StoredValue::new(data);

    move || {
        let (overview, cars, parts, outcomes) = data.with_value(|data| {
            (
                data.overview.clone(),
                car_bars(&data.cars),
                part_bars(&data.parts),
                status_bars(&data.statuses),
            )
        });

        let cars = view! {
            <Card title="Affected Cars">
                <BarChart bars=cars color="bar-blue" />
            </Card>
        };
        let parts = view! {
            <Card title="Affected Parts">
                <BarChart bars=parts color="bar-purple" />
            </Card>
        };
        let outcomes = view! {
            <Card title="Case Outcomes">
                <BarChart bars=outcomes color="bar-green" />
            </Card>
        };

        match tab.get() {
            TrendsTab::Overview => view! {
                <OverviewCards stats=overview />
                <div class="chart-grid">
                    {outcomes}
                    {cars}
                </div>
                {parts}
            }
            .into_any(),
            TrendsTab::Cars => cars.into_any(),
            TrendsTab::Parts => parts.into_any(),
            TrendsTab::Outcomes => outcomes.into_any(),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Overview Cards
// -----------------------------------------------------------------------------

#[component]
fn OverviewCards(stats: TrendStats) -> impl IntoView {
    view! {
        <div class="stat-grid">
            <Card title="Total Cases">
                <div class="stat-value">{stats.total_cases}</div>
                <p class="text-muted">{format!("{} in progress", stats.in_progress_cases)}</p>
            </Card>
            <Card title="Won Cases">
                <div class="stat-value text-green">{stats.won_cases}</div>
                <p class="text-muted">{format!("{}% success rate", stats.win_rate)}</p>
            </Card>
            <Card title="Lost Cases">
                <div class="stat-value text-red">{stats.lost_cases}</div>
                <p class="text-muted">{format!("{}% loss rate", stats.loss_rate)}</p>
            </Card>
        </div>
    }
}
