// =============================================================================
// CaseDesk Common - Configuration
// =============================================================================

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_BASE_URL;
use crate::engine::{CaseListEngine, SortDirection, SortField, SortState};
use crate::error::ConfigError;
use crate::ranking::StatusRanking;

/// Env var overriding the backend base URL.
pub const ENV_API_URL: &str = "CASEDESK_API_URL";
/// Env var switching to the bundled mock data (`1`, `true`, `yes`).
pub const ENV_USE_MOCK: &str = "CASEDESK_USE_MOCK";

/// Dashboard settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend base URL, e.g. `http://localhost:8000/api`
    pub api_base_url: String,

    /// Order used when sorting by status
    pub status_ranking: StatusRanking,

    /// Initial sort column
    pub default_sort: SortField,

    /// Initial sort direction
    pub default_direction: SortDirection,

    /// Serve the bundled demo cases instead of calling the backend
    pub use_mock_data: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let sort = SortState::default();
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            status_ranking: StatusRanking::default(),
            default_sort: sort.field,
            default_direction: sort.direction,
            use_mock_data: false,
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        config.apply_env();
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the process env in practice).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(flag) = lookup(ENV_USE_MOCK) {
            self.use_mock_data = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
    }

    pub fn sort_state(&self) -> SortState {
        SortState::new(self.default_sort, self.default_direction)
    }

    /// Engine primed with this config's ranking and initial sort.
    pub fn engine(&self) -> CaseListEngine {
        CaseListEngine::new(self.status_ranking.clone(), self.sort_state())
    }
}
