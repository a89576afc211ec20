// =============================================================================
// CaseDesk Web - Stats API
// =============================================================================

use casedesk_common::api;
use casedesk_common::mock::mock_cases;
use casedesk_common::stats::{
    mock_car_stats, mock_part_stats, status_stats, CarStats, PartStats, StatusStats, TrendStats,
};
use casedesk_common::{FetchError, TrendsView};

use super::Backend;

impl Backend {
    pub async fn trend_stats(&self) -> Result<TrendStats, FetchError> {
        match self {
            Backend::Live(client) => client.get(api::STATS_PATH).await,
            Backend::Mock => Ok(TrendStats::from_cases(&mock_cases())),
        }
    }

    pub async fn car_stats(&self) -> Result<Vec<CarStats>, FetchError> {
        match self {
            Backend::Live(client) => client.get(api::CAR_STATS_PATH).await,
            Backend::Mock => Ok(mock_car_stats()),
        }
    }

    pub async fn part_stats(&self) -> Result<Vec<PartStats>, FetchError> {
        match self {
            Backend::Live(client) => client.get(api::PART_STATS_PATH).await,
            Backend::Mock => Ok(mock_part_stats()),
        }
    }

    pub async fn status_stats(&self) -> Result<Vec<StatusStats>, FetchError> {
        match self {
            Backend::Live(client) => client.get(api::STATUS_STATS_PATH).await,
            Backend::Mock => Ok(status_stats(&mock_cases())),
        }
    }

    /// All four stats endpoints, fetched concurrently.
    pub async fn trends(&self) -> TrendsView {
        let (overview, cars, parts, statuses) = futures::join!(
            self.trend_stats(),
            self.car_stats(),
            self.part_stats(),
            self.status_stats(),
        );
        TrendsView::from_results(overview, cars, parts, statuses)
    }
}
