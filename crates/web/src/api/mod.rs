// =============================================================================
// CaseDesk Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. API Client
// 3. Backend Selection
// =============================================================================

pub mod cases;
pub mod stats;

use casedesk_common::api;
use casedesk_common::FetchError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

// -----------------------------------------------------------------------------
// 2. API Client
// -----------------------------------------------------------------------------

/// Error body FastAPI-style backends send with non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for API requests.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn build_request(&self, endpoint: &str) -> RequestBuilder {
        Request::get(&api::join(&self.base_url, endpoint)).header("Accept", "application/json")
    }

    /// Handle API response.
    async fn handle_response(response: Response) -> Result<String, FetchError> {
        let status = response.status();

        match status {
            200..=299 => response
                .text()
                .await
                .map_err(|e| FetchError::Decode(e.to_string())),
            _ => {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .map(|b| b.detail)
                    .unwrap_or(body);
                Err(FetchError::from_status(status, message))
            }
        }
    }

    /// GET request returning the raw body of a 2xx response.
    pub async fn get_text(&self, endpoint: &str) -> Result<String, FetchError> {
        let response = self
            .build_request(endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let result = Self::handle_response(response).await;
        if let Err(e) = &result {
            if !e.is_not_found() {
                log::warn!("GET {} failed: {}", endpoint, e);
            }
        }
        result
    }

    /// GET request decoded as JSON.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let body = self.get_text(endpoint).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// -----------------------------------------------------------------------------
// 3. Backend Selection
// -----------------------------------------------------------------------------

/// Where page data comes from.
#[derive(Clone, Debug)]
pub enum Backend {
    Live(ApiClient),
    /// Bundled demo data; no network.
    Mock,
}

impl Backend {
    pub fn live(base_url: &str) -> Self {
        Backend::Live(ApiClient::new(base_url))
    }
}
