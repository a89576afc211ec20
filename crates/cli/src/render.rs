// =============================================================================
// CaseDesk CLI - Terminal Rendering
// =============================================================================
// Table of Contents:
// 1. Colours
// 2. Case Table
// 3. Case Detail
// 4. Trends
// =============================================================================

use std::fmt::Write as _;

use casedesk_common::format::{
    format_date, format_percentage, level_tone, status_label, status_tone, strength_tone, win_badge, Tone,
};
use casedesk_common::outcome::TrendsData;
use casedesk_common::stats::{car_bars, part_bars, status_bars, Bar};
use casedesk_common::{CaseDetail, CaseSummary, SortField, SortState};
use colored::{ColoredString, Colorize};

const NOT_SPECIFIED: &str = "-";
const BAR_WIDTH: usize = 30;

// -----------------------------------------------------------------------------
// 1. Colours
// -----------------------------------------------------------------------------

/// Terminal equivalent of a badge colour.
pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Blue => text.blue(),
        Tone::Green => text.green(),
        Tone::Red => text.red(),
        Tone::Yellow => text.yellow(),
        Tone::Gray | Tone::LightGray => text.dimmed(),
        Tone::Primary => text.cyan().bold(),
        Tone::Secondary | Tone::Outline => text.normal(),
    }
}

// -----------------------------------------------------------------------------
// 2. Case Table
// -----------------------------------------------------------------------------

struct Column {
    field: SortField,
    width: usize,
}

const COLUMNS: [Column; 7] = [
    Column { field: SortField::Title, width: 38 },
    Column { field: SortField::Status, width: 22 },
    Column { field: SortField::Jurisdiction, width: 14 },
    Column { field: SortField::CaseType, width: 18 },
    Column { field: SortField::Date, width: 13 },
    Column { field: SortField::BrandImpact, width: 12 },
    Column { field: SortField::Risk, width: 6 },
];

/// Pad or cut `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn header(sort: SortState) -> String {
    COLUMNS
        .iter()
        .map(|col| {
            let label = match sort.indicator(col.field) {
                Some(arrow) => format!("{} {}", col.field.label(), arrow),
                None => col.field.label().to_string(),
            };
            fit(&label, col.width)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn row(case: &CaseSummary) -> String {
    let cells = [
        (case.title.clone(), None),
        (status_label(&case.status), Some(status_tone(&case.status))),
        (case.jurisdiction.clone().unwrap_or_else(|| NOT_SPECIFIED.into()), None),
        (case.case_type.clone().unwrap_or_else(|| NOT_SPECIFIED.into()), None),
        (format_date(&case.date), None),
        match &case.brand_impact_estimate {
            Some(estimate) => (estimate.impact.as_str().to_string(), Some(level_tone(estimate.impact))),
            None => (NOT_SPECIFIED.to_string(), None),
        },
        (
            case.win_percentage().map(format_percentage).unwrap_or_else(|| NOT_SPECIFIED.into()),
            None,
        ),
    ];

    // Pad before colouring so escape codes don't skew the widths
    cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|((text, tone), col)| {
            let padded = fit(text, col.width);
            match tone {
                Some(tone) => paint(&padded, *tone).to_string(),
                None => padded,
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Header, rule and one line per case.
pub fn case_table(cases: &[&CaseSummary], sort: SortState) -> String {
    let header = header(sort);
    let mut out = String::new();
    let _ = writeln!(out, "{}", header.bold());
    let _ = writeln!(out, "{}", "─".repeat(header.chars().count()).dimmed());
    for case in cases {
        let _ = writeln!(out, "{}", row(case));
    }
    out
}

// -----------------------------------------------------------------------------
// 3. Case Detail
// -----------------------------------------------------------------------------

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.bold().underline());
}

fn field(out: &mut String, label: &str, value: Option<&str>) {
    let _ = writeln!(out, "  {:<22}{}", format!("{}:", label).dimmed(), value.unwrap_or("Not specified"));
}

fn bullets(out: &mut String, items: &[String], empty: &str) {
    if items.is_empty() {
        let _ = writeln!(out, "  {}", empty.dimmed());
    }
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}

pub fn case_detail(detail: &CaseDetail) -> String {
    let summary = &detail.summary;
    let mut out = String::new();

    let _ = writeln!(out, "{}", summary.title.bold());
    let _ = writeln!(
        out,
        "{}  Case #{}  {}",
        paint(&status_label(&summary.status), status_tone(&summary.status)),
        summary.id,
        format_date(&summary.date)
    );

    section(&mut out, "General Info");
    field(&mut out, "Jurisdiction", summary.jurisdiction.as_deref());
    field(&mut out, "Case Type", summary.case_type.as_deref());
    field(&mut out, "Affected Car", detail.affected_car.as_deref());
    field(&mut out, "Affected Part", detail.affected_part.as_deref());
    field(
        &mut out,
        "Claimants",
        detail.number_of_claimants.map(|n| n.to_string()).as_deref(),
    );
    if let Some(estimate) = &summary.brand_impact_estimate {
        let _ = writeln!(
            out,
            "  {:<22}{}",
            "Brand Impact:".dimmed(),
            paint(estimate.impact.as_str(), level_tone(estimate.impact))
        );
    }
    if let Some(text) = &detail.case_summary {
        let _ = writeln!(out, "\n  {}", text);
    }

    section(&mut out, "Case Timeline");
    let timeline = detail.sorted_timeline();
    if timeline.is_empty() {
        let _ = writeln!(out, "  {}", "No timeline events recorded.".dimmed());
    }
    for event in timeline {
        let _ = writeln!(out, "  {:<14}{}", format_date(&event.date), event.event.bold());
        if !event.description.is_empty() {
            let _ = writeln!(out, "  {:<14}{}", "", event.description);
        }
    }

    section(&mut out, "Case Details");
    field(&mut out, "Harm Type", detail.harm_type.as_deref());
    field(&mut out, "Cause", detail.cause.as_deref());
    field(&mut out, "Settlement Amount", detail.settlement_amount.as_deref());
    field(&mut out, "Defense Cost", detail.defense_cost_estimate.as_deref());
    if !detail.relevant_laws.is_empty() {
        field(&mut out, "Relevant Laws", Some(detail.relevant_laws.join(", ").as_str()));
    }

    section(&mut out, "Plaintiff's Argumentation");
    bullets(&mut out, &detail.plaintiff_argumentation, "No plaintiff argumentation on record.");
    section(&mut out, "Our Defense");
    let _ = writeln!(
        out,
        "  {}",
        detail.defense_argumentation.as_deref().unwrap_or("No defense argumentation on record.")
    );
    if !detail.suggestions.is_empty() {
        section(&mut out, "Suggestions from Similar Cases");
        bullets(&mut out, &detail.suggestions, "");
    }

    section(&mut out, "Evidence");
    if detail.evidence.is_empty() {
        let _ = writeln!(out, "  {}", "No evidence listed for this case.".dimmed());
    }
    for item in &detail.evidence {
        let strength = item
            .strength
            .map(|s| format!(" [{}]", paint(s.as_str(), strength_tone(s))))
            .unwrap_or_default();
        let _ = writeln!(out, "  • {}{}", item.text, strength);
    }

    section(&mut out, "Case Law");
    let similar: Vec<String> = detail.similar_cases.iter().map(|id| format!("Case #{}", id)).collect();
    bullets(&mut out, &similar, "No case law found for this case.");

    if detail.show_outcome_prediction() {
        section(&mut out, "Outcome Prediction");
        match &summary.case_win_likelihood {
            None => {
                let _ = writeln!(out, "  {}", "No outcome prediction available for this case yet.".dimmed());
            }
            Some(likelihood) => {
                let (label, tone) = win_badge(likelihood);
                let _ = writeln!(
                    out,
                    "  Win probability: {}  {}",
                    format_percentage(likelihood.win_percentage()).bold(),
                    paint(label, tone)
                );
                if let Some(explanation) = likelihood.explanation() {
                    let _ = writeln!(out, "  {}", explanation);
                }
                for factor in likelihood.key_factors() {
                    let _ = writeln!(out, "  • {} ({})", factor.factor, factor.impact);
                }
            }
        }
    }

    out
}

// -----------------------------------------------------------------------------
// 4. Trends
// -----------------------------------------------------------------------------

/// Text bar scaled to [`BAR_WIDTH`].
pub fn bar_line(bar: &Bar) -> String {
    let filled = (bar.fraction * BAR_WIDTH as f64).round() as usize;
    format!("  {} {} {}", fit(&bar.label, 18), "█".repeat(filled.min(BAR_WIDTH)), bar.count)
}

fn chart(out: &mut String, title: &str, bars: &[Bar]) {
    section(out, title);
    if bars.is_empty() {
        let _ = writeln!(out, "  {}", "No data available.".dimmed());
    }
    for bar in bars {
        let _ = writeln!(out, "{}", bar_line(bar));
    }
}

pub fn trends(data: &TrendsData) -> String {
    let stats = &data.overview;
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Litigation Trends".bold());
    let _ = writeln!(out, "  {:<14}{} ({} in progress)", "Total Cases:", stats.total_cases, stats.in_progress_cases);
    let _ = writeln!(
        out,
        "  {:<14}{} ({}% success rate)",
        "Won Cases:",
        stats.won_cases.to_string().green(),
        stats.win_rate
    );
    let _ = writeln!(
        out,
        "  {:<14}{} ({}% loss rate)",
        "Lost Cases:",
        stats.lost_cases.to_string().red(),
        stats.loss_rate
    );

    chart(&mut out, "Case Outcomes", &status_bars(&data.statuses));
    chart(&mut out, "Affected Cars", &car_bars(&data.cars));
    chart(&mut out, "Affected Parts", &part_bars(&data.parts));
    out
}
