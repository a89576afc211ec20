// =============================================================================
// CaseDesk CLI - Data Source
// =============================================================================

use casedesk_common::mock::{mock_case_detail, mock_cases, mock_search};
use casedesk_common::outcome::TrendsData;
use casedesk_common::stats::{mock_car_stats, mock_part_stats, status_stats, TrendStats};
use casedesk_common::{CaseClient, CaseDetail, CaseSummary, DashboardConfig, FetchError, TrendsView};

/// Where the CLI reads cases from.
pub enum Source {
    Live(CaseClient),
    Mock,
}

impl Source {
    pub fn from_config(config: &DashboardConfig) -> Result<Self, FetchError> {
        if config.use_mock_data {
            tracing::info!("Using bundled mock data");
            return Ok(Source::Mock);
        }
        tracing::info!("Using backend at {}", config.api_base_url);
        Ok(Source::Live(CaseClient::new(config.api_base_url.as_str())?))
    }

    pub async fn list_cases(&self, query: &str) -> Result<Vec<CaseSummary>, FetchError> {
        match self {
            Source::Live(client) => client.list_cases(query).await,
            Source::Mock => Ok(mock_search(query)),
        }
    }

    pub async fn get_case(&self, id: &str) -> Result<CaseDetail, FetchError> {
        match self {
            Source::Live(client) => client.get_case(id).await,
            Source::Mock => mock_case_detail(id),
        }
    }

    /// Overview plus chart series; a failed series comes back empty.
    pub async fn trends(&self) -> TrendsView {
        match self {
            Source::Live(client) => {
                let (overview, cars, parts, statuses) = futures::join!(
                    client.trend_stats(),
                    client.car_stats(),
                    client.part_stats(),
                    client.status_stats(),
                );
                TrendsView::from_results(overview, cars, parts, statuses)
            }
            Source::Mock => {
                let cases = mock_cases();
                TrendsView::Loaded(Box::new(TrendsData {
                    overview: TrendStats::from_cases(&cases),
                    cars: mock_car_stats(),
                    parts: mock_part_stats(),
                    statuses: status_stats(&cases),
                }))
            }
        }
    }
}
