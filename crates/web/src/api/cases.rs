// =============================================================================
// CaseDesk Web - Cases API
// =============================================================================

use casedesk_common::api;
use casedesk_common::mock::{mock_case_detail, mock_search};
use casedesk_common::wire::{decode_case_detail, decode_case_list};
use casedesk_common::{CaseDetail, CaseSummary, FetchError};

use super::Backend;

impl Backend {
    /// Cases matching `query` (all cases when empty).
    pub async fn list_cases(&self, query: &str) -> Result<Vec<CaseSummary>, FetchError> {
        match self {
            Backend::Live(client) => {
                let body = client.get_text(&api::cases_path(query)).await?;
                decode_case_list(&body)
            }
            Backend::Mock => Ok(mock_search(query)),
        }
    }

    /// Full case record; an unknown id is [`FetchError::NotFound`].
    pub async fn get_case(&self, id: &str) -> Result<CaseDetail, FetchError> {
        match self {
            Backend::Live(client) => {
                let body = client.get_text(&api::case_path(id)).await?;
                decode_case_detail(&body)
            }
            Backend::Mock => mock_case_detail(id),
        }
    }
}
