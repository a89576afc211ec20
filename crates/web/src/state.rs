// =============================================================================
// CaseDesk Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Case List State
// 3. App State
// 4. Page Requests
// =============================================================================

use casedesk_common::config::{ENV_API_URL, ENV_USE_MOCK};
use casedesk_common::{
    CaseListEngine, DashboardConfig, RequestSequence, RequestToken, SortField, SortState,
};
use gloo_storage::Storage;
use leptos::prelude::*;

use crate::api::Backend;

const SORT_KEY: &str = "case_sort";
const DARK_MODE_KEY: &str = "dark_mode";

// -----------------------------------------------------------------------------
// 2. Case List State
// -----------------------------------------------------------------------------

/// State owned by the cases page: search text and the list engine (which
/// carries the sort state). Lives in the app state so it survives
/// navigating to a case and back.
#[derive(Clone, Copy)]
pub struct CaseListState {
    pub query: RwSignal<String>,
    pub engine: RwSignal<CaseListEngine>,
}

impl CaseListState {
    fn new(config: &DashboardConfig) -> Self {
        let mut engine = config.engine();
        // A sort picked in an earlier session wins over the configured default.
        if let Ok(saved) = gloo_storage::LocalStorage::get::<SortState>(SORT_KEY) {
            engine = CaseListEngine::new(config.status_ranking.clone(), saved);
        }
        Self {
            query: RwSignal::new(String::new()),
            engine: RwSignal::new(engine),
        }
    }

    /// Column header click.
    pub fn set_sort(&self, field: SortField) {
        self.engine.update(|engine| engine.set_sort(field));
        let sort = self.engine.with_untracked(|engine| engine.sort_state());
        let _ = gloo_storage::LocalStorage::set(SORT_KEY, sort);
    }

    pub fn sort_state(&self) -> SortState {
        self.engine.with(|engine| engine.sort_state())
    }
}

// -----------------------------------------------------------------------------
// 3. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// API base URL.
    pub api_url: String,

    /// Serve bundled demo data instead of calling the backend.
    pub use_mock: bool,

    /// Whether the app is in dark mode.
    pub dark_mode: RwSignal<bool>,

    /// Cases page state.
    pub case_list: CaseListState,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        // Build-time overrides, e.g. `CASEDESK_API_URL=... trunk build`
        let mut config = DashboardConfig::default();
        config.apply_overrides(|key| match key {
            ENV_API_URL => option_env!("CASEDESK_API_URL").map(String::from),
            ENV_USE_MOCK => option_env!("CASEDESK_USE_MOCK").map(String::from),
            _ => None,
        });

        let dark_mode: bool = gloo_storage::LocalStorage::get(DARK_MODE_KEY).unwrap_or(false);

        log::info!(
            "Backend: {}",
            if config.use_mock_data { "mock data" } else { config.api_base_url.as_str() }
        );

        Self {
            api_url: config.api_base_url.clone(),
            use_mock: config.use_mock_data,
            dark_mode: RwSignal::new(dark_mode),
            case_list: CaseListState::new(&config),
        }
    }

    /// Backend handle for a fetch.
    pub fn backend(&self) -> Backend {
        if self.use_mock {
            Backend::Mock
        } else {
            Backend::live(&self.api_url)
        }
    }

    /// Toggle dark mode and persist preference.
    pub fn toggle_dark_mode(&self) {
        let new_value = !self.dark_mode.get();
        self.dark_mode.set(new_value);
        let _ = gloo_storage::LocalStorage::set(DARK_MODE_KEY, new_value);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 4. Page Requests
// -----------------------------------------------------------------------------

/// Whether a finished fetch may still update its page.
///
/// False once a newer request was issued, and also once the page that owns
/// `requests` has been unmounted; responses can land after navigation.
pub fn is_live_and_current(requests: StoredValue<RequestSequence>, token: RequestToken) -> bool {
    requests
        .try_with_value(|seq| seq.is_current(token))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(requests: StoredValue<RequestSequence>) -> RequestToken {
        requests.try_update_value(|seq| seq.issue()).unwrap()
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let owner = Owner::new();
        let requests = owner.with(|| StoredValue::new(RequestSequence::new()));

        let first = issue(requests);
        assert!(is_live_and_current(requests, first));

        let second = issue(requests);
        assert!(!is_live_and_current(requests, first));
        assert!(is_live_and_current(requests, second));
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let owner = Owner::new();
        let (requests, source) = owner.with(|| {
            (
                StoredValue::new(RequestSequence::new()),
                RwSignal::new(casedesk_common::CaseSource::Loading),
            )
        });
        let token = issue(requests);

        // Navigating away disposes everything the page owned
        drop(owner);

        assert!(!is_live_and_current(requests, token));
        assert!(source.try_set(casedesk_common::CaseSource::Loaded(Vec::new())).is_some());
    }
}
