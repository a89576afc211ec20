// =============================================================================
// CaseDesk Common - Display Formatting
// =============================================================================
// Table of Contents:
// 1. Text
// 2. Tones
// 3. Badges
// =============================================================================

use crate::case::{CaseDate, CaseStatus, Level, Resolution, WinLikelihood, WinOutlook};
use crate::detail::EvidenceStrength;

// -----------------------------------------------------------------------------
// 1. Text
// -----------------------------------------------------------------------------

/// `May 15, 2023`; unparseable dates come back verbatim.
pub fn format_date(date: &CaseDate) -> String {
    match date.date() {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => date.raw().to_string(),
    }
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Status as shown in badges: `In progress appeal`, `Settled`, ...
pub fn status_label(status: &CaseStatus) -> String {
    capitalize_first(status.label())
}

/// `"38%"`, dropping a zero fraction.
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{:.1}%", value)
    }
}

// -----------------------------------------------------------------------------
// 2. Tones
// -----------------------------------------------------------------------------

/// Semantic colour of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Red,
    Yellow,
    Gray,
    LightGray,
    Primary,
    Secondary,
    Outline,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Blue => "badge badge-blue",
            Tone::Green => "badge badge-green",
            Tone::Red => "badge badge-red",
            Tone::Yellow => "badge badge-yellow",
            Tone::Gray => "badge badge-gray",
            Tone::LightGray => "badge badge-light-gray",
            Tone::Primary => "badge badge-primary",
            Tone::Secondary => "badge badge-secondary",
            Tone::Outline => "badge badge-outline",
        }
    }
}

pub fn status_tone(status: &CaseStatus) -> Tone {
    match status {
        CaseStatus::InProgress(_) => Tone::Blue,
        CaseStatus::Resolved(Resolution::InFavourOfDefendant) => Tone::Green,
        CaseStatus::Resolved(Resolution::InFavourOfPlaintiff) => Tone::Red,
        CaseStatus::Resolved(Resolution::Settled) => Tone::Yellow,
        CaseStatus::Resolved(Resolution::Dismissed) => Tone::Gray,
        CaseStatus::Unrecognized(_) => Tone::LightGray,
    }
}

/// Impact / media coverage: High is bad news.
pub fn level_tone(level: Level) -> Tone {
    match level {
        Level::High => Tone::Red,
        Level::Medium => Tone::Yellow,
        Level::Low => Tone::Green,
    }
}

pub fn strength_tone(strength: EvidenceStrength) -> Tone {
    match strength {
        EvidenceStrength::Strong => Tone::Primary,
        EvidenceStrength::Moderate => Tone::Secondary,
        EvidenceStrength::Weak => Tone::Outline,
    }
}

// -----------------------------------------------------------------------------
// 3. Badges
// -----------------------------------------------------------------------------

/// Label and tone of the win outlook badge.
pub fn win_badge(likelihood: &WinLikelihood) -> (&'static str, Tone) {
    match likelihood.outlook() {
        WinOutlook::LikelyLoss => ("Likely to lose", Tone::Yellow),
        WinOutlook::LikelyWin => ("Likely to win", Tone::Green),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&CaseDate::parse("2023-05-15")), "May 15, 2023");
        assert_eq!(format_date(&CaseDate::parse("2024-01-05T08:00:00Z")), "Jan 5, 2024");
        assert_eq!(format_date(&CaseDate::parse("Q3 2021")), "Q3 2021");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(&CaseStatus::parse("in progress appeal")), "In progress appeal");
        assert_eq!(status_label(&CaseStatus::parse("won")), "In favour of defendant");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_tones() {
        assert_eq!(status_tone(&CaseStatus::parse("in progress supreme court")), Tone::Blue);
        assert_eq!(status_tone(&CaseStatus::parse("lost")), Tone::Red);
        assert_eq!(status_tone(&CaseStatus::parse("withdrawn")), Tone::LightGray);
        assert_eq!(level_tone(Level::High), Tone::Red);
        assert_eq!(strength_tone(EvidenceStrength::Weak), Tone::Outline);
    }

    #[test]
    fn test_win_badge_threshold() {
        let at = |p: f64| WinLikelihood::Percentage {
            percentage: p,
            explanation: None,
            key_factors: vec![],
        };
        assert_eq!(win_badge(&at(49.9)), ("Likely to lose", Tone::Yellow));
        assert_eq!(win_badge(&at(50.0)), ("Likely to win", Tone::Green));
        assert_eq!(format_percentage(38.0), "38%");
        assert_eq!(format_percentage(12.5), "12.5%");
    }
}
