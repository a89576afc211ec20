//! # CaseDesk CLI
//!
//! Terminal client for the litigation case dashboard.
//!
//! ## Usage
//!
//! ```bash
//! # All cases, newest first
//! casedesk list
//!
//! # Search, sorted by status rank
//! casedesk list --search texas --sort status
//!
//! # One case
//! casedesk show 3
//!
//! # Trend overview against the bundled demo data
//! casedesk --mock stats
//! ```

mod render;
mod source;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use casedesk_common::outcome::{CASE_NOT_FOUND_TITLE, EMPTY_RESULT_MESSAGE, LOAD_FAILED_MESSAGE, TRENDS_FAILED_MESSAGE};
use casedesk_common::{
    CaseListEngine, CaseListView, CaseLookup, CaseSource, DashboardConfig, SortDirection, SortField, SortState, TrendsView,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::source::Source;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "casedesk")]
#[command(about = "Litigation case dashboard in the terminal")]
#[command(version)]
struct Args {
    /// Backend API base URL
    #[arg(long, env = "CASEDESK_API_URL", global = true)]
    api_url: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "CASEDESK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Use the bundled demo data instead of the backend
    #[arg(long, env = "CASEDESK_USE_MOCK", global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List cases, filtered and sorted
    List {
        /// Case-insensitive match on title or jurisdiction
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort column (title, status, jurisdiction, case-type, date, brand-impact, risk)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long, conflicts_with = "asc")]
        desc: bool,

        /// Sort ascending
        #[arg(long)]
        asc: bool,
    },

    /// Show one case in full
    Show {
        /// Case id
        id: String,
    },

    /// Print aggregate trend statistics
    Stats,
}

// ============================================================================
// Configuration
// ============================================================================

/// File (or defaults), then environment, then flags.
fn resolve_config(args: &Args) -> anyhow::Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DashboardConfig::from_env(),
    };
    if let Some(url) = &args.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    if args.mock {
        config.use_mock_data = true;
    }
    Ok(config)
}

/// Sort requested on the command line, falling back to the configured one.
fn requested_sort(
    config: &DashboardConfig,
    field: Option<SortField>,
    desc: bool,
    asc: bool,
) -> SortState {
    let mut sort = config.sort_state();
    if let Some(field) = field {
        sort = SortState::new(field, SortDirection::Asc);
    }
    if desc {
        sort.direction = SortDirection::Desc;
    } else if asc {
        sort.direction = SortDirection::Asc;
    }
    sort
}

// ============================================================================
// Commands
// ============================================================================

/// How a command ended; decides the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Printed something, including the empty-result message.
    Done,
    LoadFailed,
    CaseNotFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::LoadFailed => ExitCode::FAILURE,
            Outcome::CaseNotFound => ExitCode::from(2),
        }
    }
}

async fn list(
    source: &Source,
    config: &DashboardConfig,
    search: &str,
    sort: SortState,
) -> Outcome {
    let cases = CaseSource::from_result(source.list_cases(search).await);
    let engine = CaseListEngine::new(config.status_ranking.clone(), sort);

    match CaseListView::present(&cases, &engine, search) {
        CaseListView::Rows(rows) => {
            print!("{}", render::case_table(&rows, sort));
            let count = format!("{} of {} case(s)", rows.len(), cases.cases().len());
            println!("{}", count.dimmed());
            Outcome::Done
        }
        CaseListView::Empty => {
            println!("{}", EMPTY_RESULT_MESSAGE);
            Outcome::Done
        }
        CaseListView::LoadFailed(detail) => {
            eprintln!("{} {}", LOAD_FAILED_MESSAGE.red().bold(), detail);
            Outcome::LoadFailed
        }
        CaseListView::Loading => Outcome::LoadFailed,
    }
}

async fn show(source: &Source, id: &str) -> Outcome {
    match CaseLookup::from_result(id, source.get_case(id).await) {
        CaseLookup::Found(detail) => {
            print!("{}", render::case_detail(&detail));
            Outcome::Done
        }
        CaseLookup::NotFound(id) => {
            eprintln!("{}", CASE_NOT_FOUND_TITLE.yellow().bold());
            eprintln!("No case with id {}.", id);
            Outcome::CaseNotFound
        }
        CaseLookup::LoadFailed(detail) => {
            eprintln!("{} {}", "Failed to load case.".red().bold(), detail);
            Outcome::LoadFailed
        }
        CaseLookup::Loading => Outcome::LoadFailed,
    }
}

async fn stats(source: &Source) -> Outcome {
    match source.trends().await {
        TrendsView::Loaded(data) => {
            print!("{}", render::trends(&data));
            Outcome::Done
        }
        TrendsView::Failed(detail) => {
            eprintln!("{} {}", TRENDS_FAILED_MESSAGE.red().bold(), detail);
            Outcome::LoadFailed
        }
        TrendsView::Loading => Outcome::LoadFailed,
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(&args)?;
    let source = Source::from_config(&config).context("failed to create HTTP client")?;

    let outcome = match &args.command {
        Command::List { search, sort, desc, asc } => {
            let sort = requested_sort(&config, *sort, *desc, *asc);
            list(&source, &config, search, sort).await
        }
        Command::Show { id } => show(&source, id).await,
        Command::Stats => stats(&source).await,
    };
    Ok(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_common::CaseClient;

    #[test]
    fn test_parse_list_args() {
        let args = Args::try_parse_from(["casedesk", "list", "--search", "texas", "--sort", "case-type", "--desc"])
            .unwrap();
        match args.command {
            Command::List { search, sort, desc, asc } => {
                assert_eq!(search, "texas");
                assert_eq!(sort, Some(SortField::CaseType));
                assert!(desc);
                assert!(!asc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_mock_flag_after_subcommand() {
        let args = Args::try_parse_from(["casedesk", "show", "3", "--mock"]).unwrap();
        assert!(args.mock);
    }

    #[test]
    fn test_requested_sort_defaults_to_config() {
        let config = DashboardConfig::default();
        assert_eq!(requested_sort(&config, None, false, false), SortState::default());
    }

    #[test]
    fn test_requested_sort_new_field_starts_ascending() {
        let config = DashboardConfig::default();
        let sort = requested_sort(&config, Some(SortField::Status), false, false);
        assert_eq!(sort, SortState::new(SortField::Status, SortDirection::Asc));

        let sort = requested_sort(&config, Some(SortField::Status), true, false);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from(["casedesk", "--mock", "--api-url", "http://x/api/", "stats"]).unwrap();
        let config = resolve_config(&args).unwrap();
        assert!(config.use_mock_data);
        assert_eq!(config.api_base_url, "http://x/api");
    }

    /// Live source whose backend port has nobody listening.
    async fn dead_backend() -> Source {
        let port = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        Source::Live(CaseClient::new(format!("http://127.0.0.1:{}/api", port)).unwrap())
    }

    #[tokio::test]
    async fn test_list_empty_result_is_not_a_failure() {
        let config = DashboardConfig::default();
        let outcome = list(&Source::Mock, &config, "zz", SortState::default()).await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            list(&Source::Mock, &config, "", SortState::default()).await,
            Outcome::Done
        );
    }

    #[tokio::test]
    async fn test_list_load_failure_exits_nonzero() {
        let config = DashboardConfig::default();
        let outcome = list(&dead_backend().await, &config, "zz", SortState::default()).await;
        assert_eq!(outcome, Outcome::LoadFailed);
    }

    #[tokio::test]
    async fn test_show_not_found_vs_load_failure() {
        assert_eq!(show(&Source::Mock, "3").await, Outcome::Done);
        assert_eq!(show(&Source::Mock, "no-such-case").await, Outcome::CaseNotFound);
        assert_eq!(show(&dead_backend().await, "3").await, Outcome::LoadFailed);
    }

    #[tokio::test]
    async fn test_stats_failure_exits_nonzero() {
        assert_eq!(stats(&Source::Mock).await, Outcome::Done);
        assert_eq!(stats(&dead_backend().await).await, Outcome::LoadFailed);
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(format!("{:?}", ExitCode::from(Outcome::Done)), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(format!("{:?}", ExitCode::from(Outcome::LoadFailed)), format!("{:?}", ExitCode::FAILURE));
        assert_eq!(format!("{:?}", ExitCode::from(Outcome::CaseNotFound)), format!("{:?}", ExitCode::from(2)));
    }
}
