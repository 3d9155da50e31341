//! CLI definition and dispatch.

use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use crate::adapters::console_report_adapter::ConsoleReportAdapter;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::{analyze, PsmReport};
use crate::domain::config_validation::{validate_analysis_config, validate_grid_config};
use crate::domain::crossing::CrossingScanner;
use crate::domain::error::PsmError;
use crate::domain::intersection::{Intersector, DEFAULT_PARALLEL_TOLERANCE};
use crate::domain::price_grid::{
    PriceGrid, DEFAULT_HIGHEST_PRICE, DEFAULT_INCREMENT, DEFAULT_LOWEST_PRICE,
};
use crate::domain::summary::SummaryTable;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::response_port::ResponsePort;

#[derive(Parser, Debug)]
#[command(name = "psmeter", about = "Price Sensitivity Meter survey analysis")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the four PSM price points from a survey CSV
    Analyze {
        input: PathBuf,
        #[command(flatten)]
        options: AnalysisOptions,
    },
    /// Print the cumulative response table as CSV
    Table {
        input: PathBuf,
        #[command(flatten)]
        options: AnalysisOptions,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Command-line values override the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct AnalysisOptions {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub lowest: Option<i64>,
    #[arg(long)]
    pub highest: Option<i64>,
    #[arg(long)]
    pub increment: Option<i64>,
    /// Slope difference below which two segments count as parallel
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Treat the first row as data even if it looks like a header
    #[arg(long)]
    pub no_header_detect: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub grid: PriceGrid,
    pub intersector: Intersector,
    pub detect_header: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: PriceGrid::default(),
            intersector: Intersector::default(),
            detect_header: true,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze { input, options } => run_analyze(&input, &options),
        Command::Table { input, options } => run_table(&input, &options),
        Command::Validate { config } => run_validate(&config),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, PsmError> {
    info!("Loading config from {}", path.display());
    let adapter = FileConfigAdapter::from_file(path)?;
    validate_grid_config(&adapter)?;
    validate_analysis_config(&adapter)?;
    Ok(adapter)
}

pub fn build_settings(
    config: Option<&dyn ConfigPort>,
    options: &AnalysisOptions,
) -> Result<Settings, PsmError> {
    let int = |section: &str, key: &str, default: i64| {
        config.map_or(default, |c| c.get_int(section, key, default))
    };
    let double = |section: &str, key: &str, default: f64| {
        config.map_or(default, |c| c.get_double(section, key, default))
    };

    let grid = PriceGrid::new(
        options
            .lowest
            .unwrap_or_else(|| int("grid", "lowest_price", DEFAULT_LOWEST_PRICE)),
        options
            .highest
            .unwrap_or_else(|| int("grid", "highest_price", DEFAULT_HIGHEST_PRICE)),
        options
            .increment
            .unwrap_or_else(|| int("grid", "increment", DEFAULT_INCREMENT)),
    )?;

    let parallel_tolerance = options.tolerance.unwrap_or_else(|| {
        double("analysis", "parallel_tolerance", DEFAULT_PARALLEL_TOLERANCE)
    });
    let denominator_floor = double("analysis", "denominator_floor", 0.0);
    let intersector = Intersector::try_new(parallel_tolerance, denominator_floor)?;

    let detect_header = !options.no_header_detect
        && config.is_none_or(|c| c.get_bool("input", "detect_header", true));

    Ok(Settings {
        grid,
        intersector,
        detect_header,
    })
}

fn resolve(input: &PathBuf, options: &AnalysisOptions) -> Result<(CsvAdapter, Settings), PsmError> {
    let config = options.config.as_ref().map(load_config).transpose()?;
    let settings = build_settings(config.as_ref().map(|c| c as &dyn ConfigPort), options)?;
    info!(
        lowest = settings.grid.lowest,
        highest = settings.grid.highest,
        increment = settings.grid.increment,
        tolerance = settings.intersector.parallel_tolerance,
        "price grid ready"
    );
    let adapter = CsvAdapter::new(input.clone()).with_header_detection(settings.detect_header);
    Ok((adapter, settings))
}

pub fn build_table(
    responses: &dyn ResponsePort,
    settings: &Settings,
) -> Result<SummaryTable, PsmError> {
    let responses = responses.load_responses()?;
    info!("Loaded {} survey responses", responses.len());
    if responses.is_empty() {
        return Err(PsmError::NoResponses);
    }
    Ok(SummaryTable::from_responses(&settings.grid, &responses))
}

/// Load, aggregate, analyze and report.
pub fn run_analysis_pipeline(
    responses: &dyn ResponsePort,
    settings: &Settings,
    report: &mut dyn ReportPort,
) -> Result<PsmReport, PsmError> {
    let table = build_table(responses, settings)?;
    let scanner = CrossingScanner::new(settings.intersector);
    let result = analyze(&table, &scanner)?;
    report.write_report(&result)?;
    Ok(result)
}

fn run_analyze(input: &PathBuf, options: &AnalysisOptions) -> Result<(), PsmError> {
    let (adapter, settings) = resolve(input, options)?;
    let mut report = ConsoleReportAdapter::new(io::stdout().lock());
    run_analysis_pipeline(&adapter, &settings, &mut report)?;
    Ok(())
}

fn run_table(input: &PathBuf, options: &AnalysisOptions) -> Result<(), PsmError> {
    let (adapter, settings) = resolve(input, options)?;
    let table = build_table(&adapter, &settings)?;
    ConsoleReportAdapter::new(io::stdout().lock()).write_table(&table)
}

fn run_validate(config_path: &PathBuf) -> Result<(), PsmError> {
    let adapter = load_config(config_path)?;
    let settings = build_settings(Some(&adapter), &AnalysisOptions::default())?;
    eprintln!(
        "Grid: {} to {} step {} ({} buckets)",
        settings.grid.lowest,
        settings.grid.highest,
        settings.grid.increment,
        settings.grid.len()
    );
    eprintln!(
        "Parallel tolerance: {}",
        settings.intersector.parallel_tolerance
    );
    eprintln!("Configuration is valid.");
    Ok(())
}
