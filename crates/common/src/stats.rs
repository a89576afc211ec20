// =============================================================================
// CaseDesk Common - Trend Statistics
// =============================================================================
// Table of Contents:
// 1. Stats Records
// 2. Local Aggregation
// 3. Chart Bars
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::case::{CaseStatus, CaseSummary, Resolution};

// -----------------------------------------------------------------------------
// 1. Stats Records
// -----------------------------------------------------------------------------

/// Overview numbers from `GET /stats/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    pub total_cases: u32,
    pub won_cases: u32,
    pub lost_cases: u32,
    /// Older backends do not report settlements.
    #[serde(default)]
    pub settled_cases: u32,
    pub in_progress_cases: u32,
    pub win_rate: f64,
    pub loss_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarStats {
    pub model: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartStats {
    pub part: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStats {
    pub status: String,
    pub count: u32,
}

// -----------------------------------------------------------------------------
// 2. Local Aggregation
// -----------------------------------------------------------------------------

/// Percentage of `part` in `total`, one decimal place. Zero when empty.
pub fn rate(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(total) * 1000.0).round() / 10.0
}

impl TrendStats {
    /// Compute the overview from a case list (mock mode and the CLI).
    pub fn from_cases(cases: &[CaseSummary]) -> Self {
        let total = cases.len() as u32;
        let won = count_status(cases, |s| *s == CaseStatus::Resolved(Resolution::InFavourOfDefendant));
        let lost = count_status(cases, |s| *s == CaseStatus::Resolved(Resolution::InFavourOfPlaintiff));

        Self {
            total_cases: total,
            won_cases: won,
            lost_cases: lost,
            settled_cases: count_status(cases, |s| *s == CaseStatus::Resolved(Resolution::Settled)),
            in_progress_cases: count_status(cases, CaseStatus::is_in_progress),
            win_rate: rate(won, total),
            loss_rate: rate(lost, total),
        }
    }
}

fn count_status(cases: &[CaseSummary], pred: impl Fn(&CaseStatus) -> bool) -> u32 {
    cases.iter().filter(|c| pred(&c.status)).count() as u32
}

/// Case counts per status label, in first-seen order.
pub fn status_stats(cases: &[CaseSummary]) -> Vec<StatusStats> {
    let mut stats: Vec<StatusStats> = Vec::new();
    for case in cases {
        let label = case.status.label();
        match stats.iter_mut().find(|s| s.status == label) {
            Some(entry) => entry.count += 1,
            None => stats.push(StatusStats {
                status: label.to_string(),
                count: 1,
            }),
        }
    }
    stats
}

/// Car model distribution served by the backend's demo data.
pub fn mock_car_stats() -> Vec<CarStats> {
    [("Model S", 35), ("Model X", 42), ("Model Y", 28), ("Model Z", 22)]
        .into_iter()
        .map(|(model, count)| CarStats {
            model: model.to_string(),
            count,
        })
        .collect()
}

/// Car part distribution served by the backend's demo data.
pub fn mock_part_stats() -> Vec<PartStats> {
    [
        ("Braking System", 32),
        ("Engine", 28),
        ("Suspension", 24),
        ("Electrical System", 26),
        ("Transmission", 17),
    ]
    .into_iter()
    .map(|(part, count)| PartStats {
        part: part.to_string(),
        count,
    })
    .collect()
}

// -----------------------------------------------------------------------------
// 3. Chart Bars
// -----------------------------------------------------------------------------

/// One bar of a horizontal bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: u32,
    /// Length relative to the largest bar, in `0.0..=1.0`.
    pub fraction: f64,
}

/// Scale a series against its maximum.
pub fn bars_from<I, S>(series: I) -> Vec<Bar>
where
    I: IntoIterator<Item = (S, u32)>,
    S: Into<String>,
{
    let items: Vec<(String, u32)> = series.into_iter().map(|(l, c)| (l.into(), c)).collect();
    let max = items.iter().map(|(_, c)| *c).max().unwrap_or(0);
    items
        .into_iter()
        .map(|(label, count)| Bar {
            label,
            count,
            fraction: if max == 0 {
                0.0
            } else {
                f64::from(count) / f64::from(max)
            },
        })
        .collect()
}

pub fn car_bars(stats: &[CarStats]) -> Vec<Bar> {
    bars_from(stats.iter().map(|s| (s.model.clone(), s.count)))
}

pub fn part_bars(stats: &[PartStats]) -> Vec<Bar> {
    bars_from(stats.iter().map(|s| (s.part.clone(), s.count)))
}

pub fn status_bars(stats: &[StatusStats]) -> Vec<Bar> {
    bars_from(stats.iter().map(|s| (s.status.clone(), s.count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: &str, status: &str) -> CaseSummary {
        CaseSummary::new(id, id, CaseStatus::parse(status), "2023-01-01")
    }

    #[test]
    fn test_trend_stats_from_cases() {
        let cases = vec![
            case("1", "won"),
            case("2", "lost"),
            case("3", "in progress"),
            case("4", "in progress appeal"),
            case("5", "won"),
            case("6", "settled"),
        ];
        let stats = TrendStats::from_cases(&cases);
        assert_eq!(stats.total_cases, 6);
        assert_eq!(stats.won_cases, 2);
        assert_eq!(stats.lost_cases, 1);
        assert_eq!(stats.settled_cases, 1);
        assert_eq!(stats.in_progress_cases, 2);
        assert_eq!(stats.win_rate, 33.3);
        assert_eq!(stats.loss_rate, 16.7);
    }

    #[test]
    fn test_empty_stats_have_zero_rates() {
        let stats = TrendStats::from_cases(&[]);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.loss_rate, 0.0);
    }

    #[test]
    fn test_trend_stats_without_settled() {
        let stats: TrendStats = serde_json::from_str(
            r#"{"totalCases": 5, "wonCases": 2, "lostCases": 1, "inProgressCases": 2, "winRate": 40.0, "lossRate": 20.0}"#,
        )
        .unwrap();
        assert_eq!(stats.settled_cases, 0);
    }

    #[test]
    fn test_status_stats_counts() {
        let cases = vec![case("1", "won"), case("2", "won"), case("3", "dismissed")];
        let stats = status_stats(&cases);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].status, "in favour of defendant");
        assert_eq!(stats[0].count, 2);
    }

    #[test]
    fn test_bars_scale_to_max() {
        let bars = car_bars(&mock_car_stats());
        let max = bars.iter().find(|b| b.label == "Model X").unwrap();
        assert_eq!(max.fraction, 1.0);
        assert!(bars.iter().all(|b| b.fraction > 0.0 && b.fraction <= 1.0));

        let empty = bars_from(vec![("a", 0u32)]);
        assert_eq!(empty[0].fraction, 0.0);
    }
}
