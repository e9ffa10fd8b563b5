//! Command-line interface components.
//!
//! Argument parsing, logging setup, configuration loading and the final
//! human-readable report for the `hypocat` binary.

use anyhow::Context;
use clap::Parser;
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::constants::OUTPUT_EXTENSION;
use crate::converter::CatalogConverter;
use crate::models::ConversionStats;
use crate::writer::write_table;
use crate::{CatalogError, Result};

#[derive(Parser, Debug, Clone)]
#[command(name = "hypocat")]
#[command(about = "Convert fixed-column hypocenter catalogs to CSV tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the hypocenter catalog text file
    #[arg(value_name = "CATALOG")]
    pub input_path: PathBuf,

    /// Output CSV file (defaults to the catalog path with a .csv extension)
    #[arg(short, long, value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// TOML file overriding the column layout and markers
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Parse and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing output file
    #[arg(long = "force")]
    pub force_overwrite: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and summary; skipped-line warnings and errors still print
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the output path, defaulting to the input path with a .csv extension
    pub fn get_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => self.input_path.with_extension(OUTPUT_EXTENSION),
        }
    }

    /// Determine the log level from verbosity flags.
    ///
    /// Quiet mode stays at `warn` so every skipped line is still reported.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check paths before any work starts
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_file() {
            return Err(CatalogError::configuration(format!(
                "Catalog file does not exist: {}",
                self.input_path.display()
            )));
        }

        let output_path = self.get_output_path();
        if output_path == self.input_path {
            return Err(CatalogError::configuration(format!(
                "Output path would overwrite the catalog: {}",
                output_path.display()
            )));
        }

        if !self.dry_run && !self.force_overwrite && output_path.exists() {
            return Err(CatalogError::OutputExists { path: output_path });
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(CatalogError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hypocat={}", log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    let init_result = if args.quiet {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result.map_err(|e| {
        CatalogError::configuration(format!("Failed to initialise logging: {}", e))
    })?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar over catalog lines
pub fn create_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Run a conversion as described by `args`
pub async fn run(args: Args) -> anyhow::Result<ConversionStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    info!("Starting hypocat");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = ConverterConfig::load(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    debug!("Loaded configuration: {:?}", config);

    let mut converter = CatalogConverter::new(&config);
    if args.show_progress() {
        converter = converter.with_progress(create_progress_bar("decoding"));
    }

    let result = converter
        .convert_path(&args.input_path)
        .await
        .with_context(|| format!("Failed to convert {}", args.input_path.display()))?;

    let output_path = args.get_output_path();
    if args.dry_run {
        info!("Dry run - not writing {}", output_path.display());
    } else {
        write_table(&output_path, &result.records)
            .await
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    }

    if !args.quiet {
        print_summary(&args, &output_path, &result.stats, start_time.elapsed());
    }

    info!(
        "Converted {} records from {}",
        result.stats.records_parsed,
        args.input_path.display()
    );
    Ok(result.stats)
}

/// Print the conversion summary to stdout
fn print_summary(args: &Args, output_path: &Path, stats: &ConversionStats, elapsed: Duration) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Catalog:".bright_cyan(),
        args.input_path.display()
    );
    if args.dry_run {
        println!("  {} {}", "Output:".bright_cyan(), "(dry run, not written)".bright_black());
    } else {
        println!("  {} {}", "Output:".bright_cyan(), output_path.display());
    }
    println!(
        "  {} {}",
        "Records written:".bright_cyan(),
        stats.records_parsed.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Lines skipped:".bright_cyan(),
        stats.skipped_lines.to_string().bright_white()
    );

    if stats.has_failures() {
        println!(
            "  {} {} ({:.1}% decoded)",
            "Lines failed:".bright_red(),
            stats.lines_failed.to_string().bright_red().bold(),
            stats.success_rate()
        );
        println!(
            "    {} {}, {} {}",
            stats.field_errors.to_string().bright_white(),
            "field parse".bright_black(),
            stats.bounds_errors.to_string().bright_white(),
            "column bounds".bright_black()
        );
        for error in &stats.errors {
            println!("    {} {}", "•".bright_red(), error);
        }
        let unlisted = stats.lines_failed.saturating_sub(stats.errors.len());
        if unlisted > 0 {
            println!("    {} more not shown", unlisted);
        }
    }

    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(elapsed)
    );
}
