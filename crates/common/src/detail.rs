// =============================================================================
// CaseDesk Common - Case Detail
// =============================================================================
// Table of Contents:
// 1. Detail Record
// 2. Timeline & Evidence
// 3. Assessments
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::case::{CaseDate, CaseSummary, Level};

// -----------------------------------------------------------------------------
// 1. Detail Record
// -----------------------------------------------------------------------------

/// Full case record shown on the detail page.
///
/// Only the summary part is validated strictly. Everything else is
/// descriptive and degrades to empty or `None` when the extraction pipeline
/// could not fill it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetail {
    #[serde(flatten)]
    pub summary: CaseSummary,
    pub harm_type: Option<String>,
    pub cause: Option<String>,
    pub case_summary: Option<String>,
    pub relevant_laws: Vec<String>,
    pub timeline: Vec<TimelineEvent>,
    pub defect_type: Vec<String>,
    pub number_of_claimants: Option<u32>,
    pub time_to_resolution_months: Option<String>,
    pub settlement_amount: Option<String>,
    pub defense_cost_estimate: Option<String>,
    pub affected_car: Option<String>,
    pub affected_part: Option<String>,
    pub media_coverage_level: Option<Assessment>,
    pub expected_brand_impact: Option<Assessment>,
    pub plaintiff_argumentation: Vec<String>,
    pub defense_argumentation: Option<String>,
    pub suggestions: Vec<String>,
    pub evidence: Vec<Evidence>,
    pub similar_cases: Vec<String>,
}

impl CaseDetail {
    /// Detail with only the summary filled in.
    pub fn from_summary(summary: CaseSummary) -> Self {
        Self {
            summary,
            harm_type: None,
            cause: None,
            case_summary: None,
            relevant_laws: Vec::new(),
            timeline: Vec::new(),
            defect_type: Vec::new(),
            number_of_claimants: None,
            time_to_resolution_months: None,
            settlement_amount: None,
            defense_cost_estimate: None,
            affected_car: None,
            affected_part: None,
            media_coverage_level: None,
            expected_brand_impact: None,
            plaintiff_argumentation: Vec::new(),
            defense_argumentation: None,
            suggestions: Vec::new(),
            evidence: Vec::new(),
            similar_cases: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// The outcome prediction panel only makes sense while the case is open.
    pub fn show_outcome_prediction(&self) -> bool {
        self.summary.status.is_in_progress()
    }

    /// Timeline ordered oldest first; undated events go last.
    pub fn sorted_timeline(&self) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self.timeline.iter().collect();
        events.sort_by_key(|e| (e.date.instant().is_none(), e.date.instant()));
        events
    }
}

// -----------------------------------------------------------------------------
// 2. Timeline & Evidence
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: CaseDate,
    pub event: String,
    #[serde(default)]
    pub description: String,
}

/// How strongly a piece of evidence supports its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceStrength {
    Strong,
    Moderate,
    Weak,
}

impl EvidenceStrength {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strong" => Some(EvidenceStrength::Strong),
            "moderate" | "medium" => Some(EvidenceStrength::Moderate),
            "weak" => Some(EvidenceStrength::Weak),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceStrength::Strong => "Strong",
            EvidenceStrength::Moderate => "Moderate",
            EvidenceStrength::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub text: String,
    #[serde(default)]
    pub relevance: Option<String>,
    #[serde(default)]
    pub strength: Option<EvidenceStrength>,
}

// -----------------------------------------------------------------------------
// 3. Assessments
// -----------------------------------------------------------------------------

/// A level with the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub level: Level,
    #[serde(default)]
    pub explanation: Option<String>,
}
