use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use nursery_dashboard::{ActivityLine, Dashboard, DashboardConfig, InventoryCard, JsonSnapshotSource, StatisticsView};

/// Print the nursery inventory dashboard as JSON.
///
/// Logs go to stderr; the report is the only thing written to stdout.
#[derive(Debug, Parser)]
#[command(name = "nursery-dashboard")]
#[command(version)]
struct Cli {
    /// Case-insensitive search over common, scientific and local names
    #[arg(long, default_value = "")]
    search: String,

    /// Only show seedlings in this category id
    #[arg(long, default_value = "")]
    category: String,

    /// Only show this stock status (available, low-stock, out-of-stock)
    #[arg(long, default_value = "")]
    status: String,

    /// Snapshot directory (overrides NURSERY_SNAPSHOT_DIR)
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Report {
    statistics: StatisticsView,
    cards: Vec<InventoryCard>,
    activities: Vec<ActivityLine>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, warnings) = DashboardConfig::load_env();
    nursery_observability::init_with(config.log_format);
    for warning in &warnings {
        warning.log();
    }
    if let Some(dir) = cli.snapshot_dir {
        config.snapshot_dir = dir;
    }

    tracing::info!(dir = %config.snapshot_dir.display(), "loading snapshot");
    let source = JsonSnapshotSource::new(config.snapshot_dir.clone());
    let mut dashboard = Dashboard::new(source, config);

    dashboard
        .refresh_all()
        .context("failed to load inventory snapshot")?;

    let filter = dashboard.filter_from_inputs(&cli.search, &cli.category, &cli.status);
    let stats = dashboard.statistics();
    let cards = dashboard.cards(&filter);

    tracing::info!(
        total_units = stats.total_units,
        species = stats.distinct_species_count,
        reserved_units = stats.reserved_units,
        total_value = %stats.total_value,
        shown = cards.len(),
        "dashboard ready"
    );

    let report = Report {
        statistics: dashboard.statistics_view(),
        cards,
        activities: dashboard.activity_feed(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
