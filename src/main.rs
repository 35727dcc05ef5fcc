use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use payroll::{Config, ReportAssembler, Snapshot};

/// Computes the monthly timesheet and payroll report for one site.
#[derive(Debug, Parser)]
#[command(name = "payroll", version)]
struct Cli {
    /// JSON snapshot with month, siteId, managerName, employees, positions and timeEntries
    snapshot: PathBuf,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    log::info!("Configuration loaded (environment: {})", config.environment);

    let snapshot = Snapshot::load(&cli.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", cli.snapshot.display()))?;

    let assembler = ReportAssembler::new(config.report_settings());
    let report = assembler.build_report(snapshot.as_input())?;

    if !report.is_valid() {
        for shortfall in &report.validity.shortfalls {
            log::warn!(
                "{}: {} of {} planned hours recorded",
                shortfall.name,
                shortfall.actual_hours,
                shortfall.planned_hours
            );
        }
        log::warn!("Report is not ready for submission");
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
