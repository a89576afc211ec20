// =============================================================================
// CaseDesk Common - Wire Records & Boundary Validation
// =============================================================================
// Table of Contents:
// 1. Loose Value Shapes
// 2. Raw Summary
// 3. Raw Detail
// 4. List Decoding
// =============================================================================
//
// Backend JSON is loosely typed. Everything is read into the `Raw*` structs
// below first and then validated into the closed schema in `case` and
// `detail`, so nothing downstream has to second-guess a record's shape.

use serde::Deserialize;

use crate::case::{
    CaseDate, CaseStatus, CaseSummary, ImpactEstimate, KeyFactor, Level, StatusVocabulary,
    WinLikelihood,
};
use crate::detail::{Assessment, CaseDetail, Evidence, EvidenceStrength, TimelineEvent};
use crate::error::{FetchError, RecordError};

/// Placeholder the extraction pipeline writes when it found nothing.
pub const NOT_SPECIFIED: &str = "Not specified";

// -----------------------------------------------------------------------------
// 1. Loose Value Shapes
// -----------------------------------------------------------------------------

/// A number that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumOrText {
    Num(f64),
    Text(String),
}

impl NumOrText {
    /// Text form, with `"Not specified"` and blanks mapped to `None`.
    pub fn into_text(self) -> Option<String> {
        match self {
            NumOrText::Num(n) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
            NumOrText::Num(n) => Some(n.to_string()),
            NumOrText::Text(s) => specified(s),
        }
    }

    /// Numeric form; tolerates a trailing `%`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            NumOrText::Num(n) => Some(*n),
            NumOrText::Text(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        }
    }
}

/// A field that is sometimes a single string and sometimes a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        let items = match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        };
        items.into_iter().filter_map(specified).collect()
    }
}

/// `None` for blanks and the not-specified placeholder.
pub fn specified(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_SPECIFIED) {
        None
    } else {
        Some(s)
    }
}

// -----------------------------------------------------------------------------
// 2. Raw Summary
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawImpactEstimate {
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWinLikelihood {
    #[serde(default)]
    pub percentage: Option<NumOrText>,
    #[serde(default)]
    pub likelihood: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub key_factors: Option<Vec<KeyFactor>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCaseSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub brand_impact_estimate: Option<RawImpactEstimate>,
    #[serde(default)]
    pub case_win_likelihood: Option<RawWinLikelihood>,
}

fn validate_impact(raw: RawImpactEstimate) -> Result<Option<ImpactEstimate>, RecordError> {
    let Some(impact) = raw.impact.and_then(specified) else {
        return Ok(None);
    };
    let impact = Level::parse(&impact).ok_or(RecordError::InvalidValue {
        field: "brandImpactEstimate.impact",
        value: impact,
    })?;
    Ok(Some(ImpactEstimate {
        impact,
        explanation: raw.explanation.and_then(specified),
    }))
}

fn validate_likelihood(raw: RawWinLikelihood) -> Result<WinLikelihood, RecordError> {
    let explanation = raw.explanation.and_then(specified);

    if let Some(percentage) = raw.percentage {
        let value = percentage.to_number().ok_or_else(|| RecordError::InvalidValue {
            field: "caseWinLikelihood.percentage",
            value: format!("{:?}", percentage),
        })?;
        if !(0.0..=100.0).contains(&value) {
            return Err(RecordError::PercentageOutOfRange(value));
        }
        return Ok(WinLikelihood::Percentage {
            percentage: value,
            explanation,
            key_factors: raw.key_factors.unwrap_or_default(),
        });
    }

    if let Some(likelihood) = raw.likelihood {
        let level = Level::parse(&likelihood).ok_or(RecordError::InvalidValue {
            field: "caseWinLikelihood.likelihood",
            value: likelihood,
        })?;
        tracing::debug!("Migrating qualitative win likelihood {:?}", level);
        return Ok(WinLikelihood::Qualitative {
            likelihood: level,
            explanation,
        });
    }

    Err(RecordError::EmptyLikelihood)
}

fn non_empty(field: &'static str, value: Option<String>) -> Result<String, RecordError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(field)),
    }
}

impl TryFrom<RawCaseSummary> for CaseSummary {
    type Error = RecordError;

    fn try_from(raw: RawCaseSummary) -> Result<Self, Self::Error> {
        let id = non_empty("id", raw.id)?;
        let title = non_empty("title", raw.title)?;
        let status_raw = non_empty("status", raw.status)?;

        let (status, vocabulary) = CaseStatus::from_wire(&status_raw);
        match vocabulary {
            StatusVocabulary::Current => {}
            StatusVocabulary::Legacy => {
                tracing::debug!("Case {}: migrated legacy status {:?} to {:?}", id, status_raw, status.label());
            }
            StatusVocabulary::Unknown => {
                tracing::warn!("Case {}: unrecognized status {:?}", id, status_raw);
            }
        }

        let date = CaseDate::parse(raw.date.unwrap_or_default());
        if !date.is_valid() {
            tracing::warn!("Case {}: unparseable filing date {:?}", id, date.raw());
        }

        let brand_impact_estimate = match raw.brand_impact_estimate {
            Some(estimate) => validate_impact(estimate)?,
            None => None,
        };
        let case_win_likelihood = raw.case_win_likelihood.map(validate_likelihood).transpose()?;

        Ok(CaseSummary {
            id,
            title,
            status,
            jurisdiction: raw.jurisdiction.and_then(specified),
            case_type: raw.case_type.and_then(specified),
            date,
            brand_impact_estimate,
            case_win_likelihood,
        })
    }
}

// -----------------------------------------------------------------------------
// 3. Raw Detail
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawTimelineEvent {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvidence {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub relevance: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
}

/// Media coverage / expected brand impact: an object or a bare level.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAssessment {
    Structured {
        #[serde(default)]
        level: Option<String>,
        #[serde(default)]
        impact: Option<String>,
        #[serde(default)]
        explanation: Option<String>,
    },
    Plain(String),
}

impl RawAssessment {
    /// Descriptive extras are lenient: an unusable level drops the block.
    fn into_assessment(self, field: &str) -> Option<Assessment> {
        let (level, explanation) = match self {
            RawAssessment::Structured {
                level,
                impact,
                explanation,
            } => (level.or(impact), explanation),
            RawAssessment::Plain(level) => (Some(level), None),
        };
        let level_text = level?;
        match Level::parse(&level_text) {
            Some(level) => Some(Assessment {
                level,
                explanation: explanation.and_then(specified),
            }),
            None => {
                tracing::debug!("Dropping {} with level {:?}", field, level_text);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCaseDetail {
    #[serde(flatten)]
    pub summary: RawCaseSummary,
    #[serde(default)]
    pub harm_type: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub case_summary: Option<String>,
    #[serde(default)]
    pub relevant_laws: Option<Vec<String>>,
    #[serde(default)]
    pub timeline: Option<Vec<RawTimelineEvent>>,
    #[serde(default)]
    pub defect_type: Option<OneOrMany>,
    #[serde(default)]
    pub number_of_claimants: Option<NumOrText>,
    #[serde(default)]
    pub time_to_resolution_months: Option<NumOrText>,
    #[serde(default)]
    pub settlement_amount: Option<NumOrText>,
    #[serde(default)]
    pub defense_cost_estimate: Option<NumOrText>,
    #[serde(default)]
    pub affected_car: Option<String>,
    #[serde(default)]
    pub affected_part: Option<String>,
    #[serde(default)]
    pub media_coverage_level: Option<RawAssessment>,
    #[serde(default)]
    pub expected_brand_impact: Option<RawAssessment>,
    #[serde(default)]
    pub plaintiff_argumentation: Option<OneOrMany>,
    #[serde(default)]
    pub offense_argumentation: Option<OneOrMany>,
    #[serde(default)]
    pub defense_argumentation: Option<String>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub evidence: Option<Vec<RawEvidence>>,
    #[serde(default)]
    pub similar_cases: Option<Vec<String>>,
}

impl TryFrom<RawCaseDetail> for CaseDetail {
    type Error = RecordError;

    fn try_from(raw: RawCaseDetail) -> Result<Self, Self::Error> {
        let summary = CaseSummary::try_from(raw.summary)?;

        let timeline = raw
            .timeline
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| {
                let event = e.event.and_then(specified)?;
                Some(TimelineEvent {
                    date: CaseDate::parse(e.date.unwrap_or_default()),
                    event,
                    description: e.description.unwrap_or_default(),
                })
            })
            .collect();

        let evidence = raw
            .evidence
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| {
                let text = e.text.and_then(specified)?;
                Some(Evidence {
                    text,
                    relevance: e.relevance.and_then(specified),
                    strength: e.strength.as_deref().and_then(EvidenceStrength::parse),
                })
            })
            .collect();

        // Older records carry the plaintiff's case under `offenseArgumentation`.
        let plaintiff_argumentation = raw
            .plaintiff_argumentation
            .or(raw.offense_argumentation)
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        let number_of_claimants = raw
            .number_of_claimants
            .and_then(|n| n.to_number())
            .filter(|n| *n >= 0.0)
            .map(|n| n as u32);

        Ok(CaseDetail {
            summary,
            harm_type: raw.harm_type.and_then(specified),
            cause: raw.cause.and_then(specified),
            case_summary: raw.case_summary.and_then(specified),
            relevant_laws: raw.relevant_laws.unwrap_or_default(),
            timeline,
            defect_type: raw.defect_type.map(OneOrMany::into_vec).unwrap_or_default(),
            number_of_claimants,
            time_to_resolution_months: raw.time_to_resolution_months.and_then(NumOrText::into_text),
            settlement_amount: raw.settlement_amount.and_then(NumOrText::into_text),
            defense_cost_estimate: raw.defense_cost_estimate.and_then(NumOrText::into_text),
            affected_car: raw.affected_car.and_then(specified),
            affected_part: raw.affected_part.and_then(specified),
            media_coverage_level: raw
                .media_coverage_level
                .and_then(|a| a.into_assessment("mediaCoverageLevel")),
            expected_brand_impact: raw
                .expected_brand_impact
                .and_then(|a| a.into_assessment("expectedBrandImpact")),
            plaintiff_argumentation,
            defense_argumentation: raw.defense_argumentation.and_then(specified),
            suggestions: raw.suggestions.unwrap_or_default(),
            evidence,
            similar_cases: raw.similar_cases.unwrap_or_default(),
        })
    }
}

// -----------------------------------------------------------------------------
// 4. List Decoding
// -----------------------------------------------------------------------------

/// Decode a `/cases/` response body.
///
/// A body that is not a JSON array is a load failure. Individual records
/// that fail validation are dropped and logged so one bad row cannot blank
/// the whole table.
pub fn decode_case_list(body: &str) -> Result<Vec<CaseSummary>, FetchError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(validate_case_list(values))
}

/// Validate already-parsed JSON values into summaries, dropping bad rows.
pub fn validate_case_list(values: Vec<serde_json::Value>) -> Vec<CaseSummary> {
    let total = values.len();
    let cases: Vec<CaseSummary> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<CaseSummary>(value) {
            Ok(case) => Some(case),
            Err(e) => {
                tracing::warn!("Dropping case record #{}: {}", index, e);
                None
            }
        })
        .collect();

    if cases.len() < total {
        tracing::warn!("Kept {} of {} case records", cases.len(), total);
    }
    cases
}

/// Decode a `/cases/{id}` response body.
pub fn decode_case_detail(body: &str) -> Result<CaseDetail, FetchError> {
    let raw: RawCaseDetail = serde_json::from_str(body)?;
    Ok(CaseDetail::try_from(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{Resolution, Stage};

    #[test]
    fn test_summary_validation_requires_id_title_status() {
        let missing_title: RawCaseSummary =
            serde_json::from_str(r#"{"id": "7", "status": "settled", "date": "2023-01-01"}"#).unwrap();
        assert_eq!(
            CaseSummary::try_from(missing_title),
            Err(RecordError::MissingField("title"))
        );

        let blank_id: RawCaseSummary =
            serde_json::from_str(r#"{"id": "  ", "title": "X", "status": "settled"}"#).unwrap();
        assert_eq!(CaseSummary::try_from(blank_id), Err(RecordError::MissingField("id")));
    }

    #[test]
    fn test_summary_normalizes_optional_fields() {
        let case: CaseSummary = serde_json::from_str(
            r#"{
                "id": "3",
                "title": "Martinez Product Liability Claim",
                "status": "in progress",
                "jurisdiction": "Texas",
                "caseType": "Not specified",
                "date": "2024-01-10",
                "brandImpactEstimate": {"impact": "high", "explanation": "Recall coverage"}
            }"#,
        )
        .unwrap();

        assert_eq!(case.status, CaseStatus::InProgress(Stage::Unspecified));
        assert_eq!(case.jurisdiction.as_deref(), Some("Texas"));
        assert_eq!(case.case_type, None);
        assert_eq!(case.brand_impact(), Level::High);
    }

    #[test]
    fn test_likelihood_shapes() {
        let pct: RawWinLikelihood =
            serde_json::from_str(r#"{"percentage": "62", "explanation": "Strong expert"}"#).unwrap();
        assert_eq!(validate_likelihood(pct).unwrap().win_percentage(), 62.0);

        let pct_num: RawWinLikelihood = serde_json::from_str(r#"{"percentage": 12.5}"#).unwrap();
        assert_eq!(validate_likelihood(pct_num).unwrap().win_percentage(), 12.5);

        let qualitative: RawWinLikelihood = serde_json::from_str(r#"{"likelihood": "High"}"#).unwrap();
        assert!(matches!(
            validate_likelihood(qualitative).unwrap(),
            WinLikelihood::Qualitative { likelihood: Level::High, .. }
        ));

        let out_of_range: RawWinLikelihood = serde_json::from_str(r#"{"percentage": "140"}"#).unwrap();
        assert_eq!(
            validate_likelihood(out_of_range),
            Err(RecordError::PercentageOutOfRange(140.0))
        );

        let empty: RawWinLikelihood = serde_json::from_str(r#"{"explanation": "?"}"#).unwrap();
        assert_eq!(validate_likelihood(empty), Err(RecordError::EmptyLikelihood));
    }

    #[test]
    fn test_decode_case_list_drops_bad_rows() {
        let body = r#"[
            {"id": "1", "title": "Smith v. Bayersche Motors", "status": "won", "jurisdiction": "California", "caseType": "Liability", "date": "2023-05-15"},
            {"id": "2", "status": "lost"},
            {"id": "3", "title": "Bad likelihood", "status": "settled", "date": "2023-01-01", "caseWinLikelihood": {"percentage": "lots"}},
            {"id": 4}
        ]"#;

        let cases = decode_case_list(body).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].status, CaseStatus::Resolved(Resolution::InFavourOfDefendant));
    }

    #[test]
    fn test_decode_case_list_rejects_non_array() {
        assert!(matches!(
            decode_case_list(r#"{"detail": "oops"}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_case_detail() {
        let body = r#"{
            "id": "abc123",
            "title": "Weber v. Bayersche",
            "status": "in progress appeal",
            "jurisdiction": "Bavaria",
            "caseType": "Product Liability",
            "date": "2024-03-02",
            "harmType": "Injury",
            "relevantLaws": ["ProdHaftG §1"],
            "timeline": [
                {"date": "2024-03-02", "event": "Filed", "description": "Complaint filed"},
                {"date": "2024-04-01", "description": "no event name"}
            ],
            "defectType": "Brake failure",
            "numberOfClaimants": "3",
            "timeToResolutionMonths": "Not specified",
            "settlementAmount": 250000,
            "mediaCoverageLevel": {"level": "Medium", "explanation": "Regional press"},
            "expectedBrandImpact": "Severe",
            "plaintiffArgumentation": ["Defective design", "Failure to warn"],
            "evidence": [{"text": "Brake log", "relevance": "Shows fault", "strength": "Strong"}],
            "similarCases": ["xyz789"],
            "caseWinLikelihood": {"percentage": "38", "keyFactors": [{"factor": "Expert report", "impact": "negative"}]}
        }"#;

        let detail = decode_case_detail(body).unwrap();
        assert_eq!(detail.summary.status, CaseStatus::InProgress(Stage::Appeal));
        assert_eq!(detail.timeline.len(), 1);
        assert_eq!(detail.defect_type, vec!["Brake failure".to_string()]);
        assert_eq!(detail.number_of_claimants, Some(3));
        assert_eq!(detail.time_to_resolution_months, None);
        assert_eq!(detail.settlement_amount.as_deref(), Some("250000"));
        assert_eq!(detail.media_coverage_level.as_ref().map(|a| a.level), Some(Level::Medium));
        assert!(detail.expected_brand_impact.is_none());
        assert_eq!(detail.plaintiff_argumentation.len(), 2);
        assert_eq!(detail.evidence[0].strength, Some(EvidenceStrength::Strong));
        assert_eq!(detail.summary.case_win_likelihood.as_ref().unwrap().key_factors().len(), 1);
    }

    #[test]
    fn test_decode_case_detail_reads_legacy_offense_field() {
        let body = r#"{"id": "1", "title": "Old", "status": "lost", "date": "2023-08-22",
                       "offenseArgumentation": "The brakes failed."}"#;
        let detail = decode_case_detail(body).unwrap();
        assert_eq!(detail.plaintiff_argumentation, vec!["The brakes failed.".to_string()]);
    }
}
