//! `shelfwise-cli`
//!
//! **Responsibility:** command-line harness around the update engine.
//!
//! Seeds a catalog (the built-in opening stock or a JSON file), prints the
//! day-0 report, then advances the requested number of days and prints a
//! report after each one. The harness adds no rules of its own.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use shelfwise_inventory::{Catalog, DayReport};
use shelfwise_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "shelfwise")]
#[command(about = "Simulate nightly quality updates for a shop catalog", long_about = None)]
pub struct Cli {
    /// Number of days to simulate
    #[arg(short, long, env = "SHELFWISE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON catalog file (array of {"name", "sellIn", "quality"}); the
    /// built-in opening stock is used when omitted
    #[arg(short, long, env = "SHELFWISE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, env = "SHELFWISE_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Calendar date of day 0 (YYYY-MM-DD); defaults to today (UTC)
    #[arg(long, env = "SHELFWISE_START_DATE")]
    pub start_date: Option<NaiveDate>,

    /// Log output format: compact, pretty or json
    #[arg(long, env = "SHELFWISE_LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,
}

/// How day reports are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable blocks, one per day
    Text,
    /// One JSON object per line, one line per day
    Json,
}

/// Read a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("failed to open catalog {}", path.display()))?;
    let catalog = Catalog::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    Ok(catalog)
}

/// Run the simulation described by `cli`, writing reports to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => {
            debug!("using built-in opening stock");
            Catalog::seed()
        }
    };
    let start_date = cli.start_date.unwrap_or_else(|| Utc::now().date_naive());

    let mut shop = catalog.into_shop().context("catalog rejected")?;
    info!(items = shop.items().len(), days = cli.days, %start_date, "starting simulation");

    write_report(&shop.report(start_date), cli.format, out)?;
    for _ in 0..cli.days {
        shop.advance_day();
        write_report(&shop.report(start_date), cli.format, out)?;
    }

    out.flush().context("failed to flush report output")?;
    Ok(())
}

fn write_report(report: &DayReport, format: ReportFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => writeln!(out, "{report}")?,
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
