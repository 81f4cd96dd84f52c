use alerter::{SquadAlerter, SquadReport, Tier};
use analytics::insights::{
    PerformanceInsights, RevenueInsights, TransferDirection, TransferInsights, analyze_performance,
    analyze_revenue, analyze_transfers,
};
use analytics::{InMemoryTeams, SeasonInsights, SeasonReport};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::cli::AlertingArgs;
use configuration::{init_tracing, load_config};
use core_types::{AlertPriority, Season, TeamSnapshot};
use indicatif::{ProgressBar, ProgressStyle};
use planner::tasks_from_alerts;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The main entry point for the SquadWatch application.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Commands::Alerts(args) = &cli.command {
        args.alerting.apply(&mut config.alerting);
    }
    let _log_guard = init_tracing(&config.logging)?;

    match cli.command {
        Commands::Alerts(args) => {
            let as_of = config.alerting.resolve_as_of();
            handle_alerts(&args, SquadAlerter::new(config.alerting, as_of)?)
        }
        Commands::Insights(args) => {
            let as_of = args.as_of.unwrap_or_else(|| config.alerting.resolve_as_of());
            handle_insights(&args, as_of)
        }
        Commands::Season(args) => {
            let as_of = args.as_of.unwrap_or_else(|| config.alerting.resolve_as_of());
            handle_season(&args, as_of)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Squad alerting and position benchmarking for football clubs.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. Defaults to ./squadwatch.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the squad alerts of a team.
    Alerts(AlertsArgs),
    /// Summarize a team's transfers, performance and squad value.
    Insights(InsightsArgs),
    /// Benchmark every team of a season.
    Season(SeasonArgs),
}

#[derive(Parser)]
struct AlertsArgs {
    /// Team snapshot as JSON.
    #[arg(long)]
    team: PathBuf,

    #[command(flatten)]
    alerting: AlertingArgs,

    /// Only list alerts of at least this priority (low, medium, high or critical).
    #[arg(long)]
    min_priority: Option<AlertPriority>,

    /// Print the full report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct InsightsArgs {
    /// Team snapshot as JSON.
    #[arg(long)]
    team: PathBuf,

    /// The reference date for ages (format: YYYY-MM-DD).
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

#[derive(Parser)]
struct SeasonArgs {
    /// Season with its fixtures as JSON.
    #[arg(long)]
    season: PathBuf,

    /// JSON array with a snapshot of every team in the season.
    #[arg(long)]
    teams: PathBuf,

    /// The reference date for ages (format: YYYY-MM-DD).
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Print the full report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Input file loaded.");
    Ok(parsed)
}

fn handle_alerts(args: &AlertsArgs, alerter: SquadAlerter) -> anyhow::Result<()> {
    let team: TeamSnapshot = read_json(&args.team)?;
    let report = alerter.run(&team);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Squad alerts for {} as of {}", report.team_name, report.as_of);
    let min_priority = args.min_priority.unwrap_or(AlertPriority::Low);
    println!("{}", alerts_table(&report, min_priority));
    println!("{}", benchmarks_table(&report));

    let tasks = tasks_from_alerts(&report.alerts);
    if !tasks.is_empty() {
        println!("Scouting tasks:");
        for task in tasks {
            println!("  - {}", task.key());
        }
    }
    Ok(())
}

fn alerts_table(report: &SquadReport, min_priority: AlertPriority) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Type", "Priority", "Position", "Player"]);
    for alert in report.alerts.iter().filter(|a| a.priority >= min_priority) {
        table.add_row(vec![
            alert.alert_type.to_string(),
            format!("{:?}", alert.priority),
            alert.position.name().to_string(),
            alert.player.clone().unwrap_or_default(),
        ]);
    }
    table
}

fn benchmarks_table(report: &SquadReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Position",
        "Players",
        "Starter",
        "Back-up",
        "Secondary",
    ]);
    for group in &report.benchmarks.groups {
        let mut row = vec![group.position.name().to_string(), group.members.len().to_string()];
        for tier in Tier::ALL {
            let bench = group.tier(tier);
            row.push(format!(
                "{:.1}/{:.1} (#{}/#{})",
                bench.skill, bench.potential, bench.skill_rank, bench.potential_rank
            ));
        }
        table.add_row(row);
    }
    table
}

#[derive(Serialize)]
struct TeamInsights {
    inbound_transfers: TransferInsights,
    outbound_transfers: TransferInsights,
    performance: PerformanceInsights,
    revenue: RevenueInsights,
}

fn handle_insights(args: &InsightsArgs, as_of: NaiveDate) -> anyhow::Result<()> {
    let team: TeamSnapshot = read_json(&args.team)?;
    let insights = TeamInsights {
        inbound_transfers: analyze_transfers(&team, TransferDirection::Inbound),
        outbound_transfers: analyze_transfers(&team, TransferDirection::Outbound),
        performance: analyze_performance(&team),
        revenue: analyze_revenue(&team, as_of),
    };
    println!("{}", serde_json::to_string_pretty(&insights)?);
    Ok(())
}

fn handle_season(args: &SeasonArgs, as_of: NaiveDate) -> anyhow::Result<()> {
    let season: Season = read_json(&args.season)?;
    let teams: Vec<TeamSnapshot> = read_json(&args.teams)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Analyzing {} {}...", season.league_name, season.season_name));

    let insights = SeasonInsights::load(season, &InMemoryTeams::new(teams))?;
    let report = insights.analyze(as_of);
    spinner.finish_with_message(format!("Analyzed {} teams.", insights.teams().len()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", season_table(&report));
    }
    Ok(())
}

fn season_table(report: &SeasonReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Team",
        "PPG",
        "Formation",
        "Core skill",
        "Inbound fees",
        "Mean age",
        "Total ETV",
    ]);
    let rows = report
        .performance
        .iter()
        .zip(&report.inbound_transfers)
        .zip(&report.revenue);
    for ((performance, inbound), revenue) in rows {
        table.add_row(vec![
            performance.team_name.clone(),
            format!("{:.1}", performance.points_per_game),
            performance.primary_formation.clone().unwrap_or_else(|| "-".to_string()),
            format!("{:.1}", performance.mean_skill_core),
            inbound.total_fees.to_string(),
            format!("{:.1}", revenue.mean_age),
            revenue.total_etv.to_string(),
        ]);
    }
    table
}
