// =============================================================================
// CaseDesk Common - Case Schema
// =============================================================================
// Table of Contents:
// 1. Case Dates
// 2. Severity Levels
// 3. Case Status
// 4. Brand Impact & Win Likelihood
// 5. Case Summary
// =============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::wire::RawCaseSummary;

// -----------------------------------------------------------------------------
// 1. Case Dates
// -----------------------------------------------------------------------------

/// A date as sent by the backend, kept verbatim alongside its parsed instant.
///
/// Unparseable values are not an error: they are displayed as-is and sort
/// after every parseable date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CaseDate {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl CaseDate {
    /// Parse an ISO-8601 date (`2023-05-15`) or date-time.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_instant(raw.trim());
        Self { raw, instant }
    }

    /// The string exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// Calendar date, if the value parsed.
    pub fn date(&self) -> Option<NaiveDate> {
        self.instant.map(|i| i.date_naive())
    }

    /// Milliseconds since the Unix epoch, if the value parsed.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.instant.map(|i| i.timestamp_millis())
    }

    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
}

impl From<String> for CaseDate {
    fn from(raw: String) -> Self {
        CaseDate::parse(raw)
    }
}

impl From<CaseDate> for String {
    fn from(date: CaseDate) -> Self {
        date.raw
    }
}

// -----------------------------------------------------------------------------
// 2. Severity Levels
// -----------------------------------------------------------------------------

/// High / Medium / Low rating used for brand impact, media coverage and
/// qualitative win likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    /// Parse a level, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Level::High),
            "medium" => Some(Level::Medium),
            "low" => Some(Level::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "High",
            Level::Medium => "Medium",
            Level::Low => "Low",
        }
    }

    /// Severity order: High sorts first.
    pub fn severity_rank(&self) -> u8 {
        match self {
            Level::High => 0,
            Level::Medium => 1,
            Level::Low => 2,
        }
    }
}

impl TryFrom<String> for Level {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Level::parse(&value).ok_or(RecordError::InvalidValue {
            field: "level",
            value,
        })
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// 3. Case Status
// -----------------------------------------------------------------------------

/// Court stage of an unresolved case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    FirstInstance,
    Appeal,
    SupremeCourt,
    /// Plain "in progress" with no stage attached.
    Unspecified,
    /// Some other "in progress ..." label, stored lowercased.
    Other(String),
}

/// How a resolved case ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    InFavourOfDefendant,
    InFavourOfPlaintiff,
    Settled,
    Dismissed,
}

/// Which vocabulary a wire status string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVocabulary {
    /// The seven-value, stage-aware vocabulary.
    Current,
    /// The old `won` / `lost` / `in progress` vocabulary, migrated on read.
    Legacy,
    /// Not part of either vocabulary.
    Unknown,
}

/// Case status, tagged by family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    InProgress(Stage),
    Resolved(Resolution),
    /// A status outside the known vocabularies, kept verbatim (lowercased).
    Unrecognized(String),
}

impl CaseStatus {
    /// Classify a wire status string and report which vocabulary it used.
    pub fn from_wire(raw: &str) -> (Self, StatusVocabulary) {
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

        let current = match normalized.as_str() {
            "in progress first instance" => Some(CaseStatus::InProgress(Stage::FirstInstance)),
            "in progress appeal" => Some(CaseStatus::InProgress(Stage::Appeal)),
            "in progress supreme court" => Some(CaseStatus::InProgress(Stage::SupremeCourt)),
            "in favour of defendant" => Some(CaseStatus::Resolved(Resolution::InFavourOfDefendant)),
            "in favour of plaintiff" => Some(CaseStatus::Resolved(Resolution::InFavourOfPlaintiff)),
            "settled" => Some(CaseStatus::Resolved(Resolution::Settled)),
            "dismissed" => Some(CaseStatus::Resolved(Resolution::Dismissed)),
            _ => None,
        };
        if let Some(status) = current {
            return (status, StatusVocabulary::Current);
        }

        let legacy = match normalized.as_str() {
            "won" => Some(CaseStatus::Resolved(Resolution::InFavourOfDefendant)),
            "lost" => Some(CaseStatus::Resolved(Resolution::InFavourOfPlaintiff)),
            "in progress" => Some(CaseStatus::InProgress(Stage::Unspecified)),
            _ => None,
        };
        if let Some(status) = legacy {
            return (status, StatusVocabulary::Legacy);
        }

        if normalized.contains("in progress") {
            return (
                CaseStatus::InProgress(Stage::Other(normalized)),
                StatusVocabulary::Current,
            );
        }

        (CaseStatus::Unrecognized(normalized), StatusVocabulary::Unknown)
    }

    /// Classify a wire status string.
    pub fn parse(raw: &str) -> Self {
        Self::from_wire(raw).0
    }

    /// Canonical lowercase label, as used by the rank table.
    pub fn label(&self) -> &str {
        match self {
            CaseStatus::InProgress(Stage::FirstInstance) => "in progress first instance",
            CaseStatus::InProgress(Stage::Appeal) => "in progress appeal",
            CaseStatus::InProgress(Stage::SupremeCourt) => "in progress supreme court",
            CaseStatus::InProgress(Stage::Unspecified) => "in progress",
            CaseStatus::InProgress(Stage::Other(label)) => label,
            CaseStatus::Resolved(Resolution::InFavourOfDefendant) => "in favour of defendant",
            CaseStatus::Resolved(Resolution::InFavourOfPlaintiff) => "in favour of plaintiff",
            CaseStatus::Resolved(Resolution::Settled) => "settled",
            CaseStatus::Resolved(Resolution::Dismissed) => "dismissed",
            CaseStatus::Unrecognized(label) => label,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, CaseStatus::InProgress(_))
    }
}

impl From<String> for CaseStatus {
    fn from(raw: String) -> Self {
        CaseStatus::parse(&raw)
    }
}

impl From<CaseStatus> for String {
    fn from(status: CaseStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// -----------------------------------------------------------------------------
// 4. Brand Impact & Win Likelihood
// -----------------------------------------------------------------------------

/// Reputational risk rating attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub impact: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One factor behind a win percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFactor {
    pub factor: String,
    pub impact: String,
}

/// Estimated chance of a favourable outcome.
///
/// Two shapes exist in the wild. `Percentage` is canonical; `Qualitative`
/// is the older shape and maps onto a percentage through
/// [`WinLikelihood::LEGACY_PERCENTAGES`] wherever a number is needed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WinLikelihood {
    #[serde(rename_all = "camelCase")]
    Percentage {
        percentage: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        key_factors: Vec<KeyFactor>,
    },
    Qualitative {
        likelihood: Level,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
}

/// Win outlook badge for an in-progress case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinOutlook {
    LikelyWin,
    LikelyLoss,
}

impl WinLikelihood {
    /// Percentages assumed for the qualitative shape (High, Medium, Low).
    pub const LEGACY_PERCENTAGES: [f64; 3] = [75.0, 50.0, 25.0];

    /// Win chance in percent, converting the qualitative shape.
    pub fn win_percentage(&self) -> f64 {
        match self {
            WinLikelihood::Percentage { percentage, .. } => *percentage,
            WinLikelihood::Qualitative { likelihood, .. } => {
                Self::LEGACY_PERCENTAGES[likelihood.severity_rank() as usize]
            }
        }
    }

    pub fn explanation(&self) -> Option<&str> {
        match self {
            WinLikelihood::Percentage { explanation, .. }
            | WinLikelihood::Qualitative { explanation, .. } => explanation.as_deref(),
        }
    }

    pub fn key_factors(&self) -> &[KeyFactor] {
        match self {
            WinLikelihood::Percentage { key_factors, .. } => key_factors,
            WinLikelihood::Qualitative { .. } => &[],
        }
    }

    /// Below 50% reads as a likely loss.
    pub fn outlook(&self) -> WinOutlook {
        if self.win_percentage() < 50.0 {
            WinOutlook::LikelyLoss
        } else {
            WinOutlook::LikelyWin
        }
    }
}

// -----------------------------------------------------------------------------
// 5. Case Summary
// -----------------------------------------------------------------------------

/// Read-only projection of a case used by the case list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCaseSummary")]
pub struct CaseSummary {
    pub id: String,
    pub title: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    pub date: CaseDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_impact_estimate: Option<ImpactEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_win_likelihood: Option<WinLikelihood>,
}

impl CaseSummary {
    /// Minimal summary, mostly useful for fixtures.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: CaseStatus,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            jurisdiction: None,
            case_type: None,
            date: CaseDate::parse(date),
            brand_impact_estimate: None,
            case_win_likelihood: None,
        }
    }

    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }

    pub fn with_brand_impact(mut self, impact: Level) -> Self {
        self.brand_impact_estimate = Some(ImpactEstimate {
            impact,
            explanation: None,
        });
        self
    }

    pub fn with_win_likelihood(mut self, likelihood: WinLikelihood) -> Self {
        self.case_win_likelihood = Some(likelihood);
        self
    }

    /// Brand impact used for sorting; a missing estimate counts as Low.
    pub fn brand_impact(&self) -> Level {
        self.brand_impact_estimate
            .as_ref()
            .map(|e| e.impact)
            .unwrap_or(Level::Low)
    }

    pub fn win_percentage(&self) -> Option<f64> {
        self.case_win_likelihood.as_ref().map(WinLikelihood::win_percentage)
    }
}
