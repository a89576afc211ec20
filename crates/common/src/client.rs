// =============================================================================
// CaseDesk Common - Native Backend Client
// =============================================================================
// Table of Contents:
// 1. Client
// 2. Case Endpoints
// 3. Stats Endpoints
// =============================================================================

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api;
use crate::case::CaseSummary;
use crate::detail::CaseDetail;
use crate::error::FetchError;
use crate::stats::{CarStats, PartStats, StatusStats, TrendStats};
use crate::wire::{decode_case_detail, decode_case_list};

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

// -----------------------------------------------------------------------------
// 1. Client
// -----------------------------------------------------------------------------

/// reqwest-backed client for the case backend.
#[derive(Debug, Clone)]
pub struct CaseClient {
    base_url: String,
    client: reqwest::Client,
}

impl CaseClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// GET a path and return the body of a 2xx response.
    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let url = api::join(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            FetchError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!("GET {} returned {}", url, status);
            Err(FetchError::from_status(status.as_u16(), body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // -------------------------------------------------------------------------
    // 2. Case Endpoints
    // -------------------------------------------------------------------------

    /// `GET /cases/?search=`; invalid records are dropped with a warning.
    pub async fn list_cases(&self, query: &str) -> Result<Vec<CaseSummary>, FetchError> {
        let body = self.get_text(&api::cases_path(query)).await?;
        decode_case_list(&body)
    }

    /// `GET /cases/{id}`; a 404 comes back as [`FetchError::NotFound`].
    pub async fn get_case(&self, id: &str) -> Result<CaseDetail, FetchError> {
        let body = self.get_text(&api::case_path(id)).await?;
        decode_case_detail(&body)
    }

    // -------------------------------------------------------------------------
    // 3. Stats Endpoints
    // -------------------------------------------------------------------------

    pub async fn trend_stats(&self) -> Result<TrendStats, FetchError> {
        self.get_json(api::STATS_PATH).await
    }

    pub async fn car_stats(&self) -> Result<Vec<CarStats>, FetchError> {
        self.get_json(api::CAR_STATS_PATH).await
    }

    pub async fn part_stats(&self) -> Result<Vec<PartStats>, FetchError> {
        self.get_json(api::PART_STATS_PATH).await
    }

    pub async fn status_stats(&self) -> Result<Vec<StatusStats>, FetchError> {
        self.get_json(api::STATUS_STATS_PATH).await
    }
}
