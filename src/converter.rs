//! Catalog conversion pipeline.
//!
//! Reads a whole catalog into memory, hands each line to the
//! [`CatalogLineParser`], keeps decoded records in input order and writes
//! the table once at the end. A malformed line is logged and counted; only
//! input/output failures stop a conversion.

use indicatif::ProgressBar;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::ConverterConfig;
use crate::constants::BYTE_ORDER_MARK;
use crate::models::{CatalogRecord, ConversionStats};
use crate::parser::{CatalogLineParser, LineOutcome};
use crate::writer::write_table;
use crate::{CatalogError, Result};

/// Records decoded from one catalog, in input order, with statistics
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    pub records: Vec<CatalogRecord>,
    pub stats: ConversionStats,
}

/// Drives the line parser over a whole catalog
pub struct CatalogConverter {
    parser: CatalogLineParser,
    max_reported_errors: usize,
    progress: ProgressBar,
}

impl CatalogConverter {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            parser: CatalogLineParser::new(config),
            max_reported_errors: config.max_reported_errors,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-line progress on the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Decode every line, keeping successes in order and counting the rest
    pub fn convert<'a, I>(&self, lines: I) -> ConversionResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records = Vec::new();
        let mut stats = ConversionStats::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            stats.total_lines += 1;
            self.progress.inc(1);

            match self.parser.parse(line) {
                LineOutcome::Record(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                LineOutcome::Skipped => {
                    stats.skipped_lines += 1;
                }
                LineOutcome::Failed(failure) => {
                    let kind = failure.error.kind();
                    warn!("Skipped line {} ({}): {}", line_number, kind, failure);
                    stats.record_failure(
                        kind,
                        format!("Line {}: {}", line_number, failure),
                        self.max_reported_errors,
                    );
                }
            }
        }

        debug!(
            "Converted {} of {} lines ({} skipped, {} field errors, {} bounds errors)",
            stats.records_parsed,
            stats.total_lines,
            stats.skipped_lines,
            stats.field_errors,
            stats.bounds_errors
        );

        ConversionResult { records, stats }
    }

    /// Read a catalog file and decode it without writing anything
    pub async fn convert_path(&self, input: &Path) -> Result<ConversionResult> {
        let content = read_catalog(input).await?;
        let text = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&content);
        let lines: Vec<&str> = text.lines().collect();

        self.progress.set_length(lines.len() as u64);
        let result = self.convert(lines);
        self.progress.finish_and_clear();

        Ok(result)
    }

    /// Read, decode and write one catalog
    pub async fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionStats> {
        info!("Converting catalog: {}", input.display());

        let result = self.convert_path(input).await?;
        let written = write_table(output, &result.records).await?;

        info!("Wrote {} records to {}", written, output.display());
        Ok(result.stats)
    }
}

/// Convert `input` to a CSV table at `output` with the given settings.
///
/// Returns the conversion statistics; `records_parsed` is the number of rows
/// written.
pub async fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConverterConfig,
) -> Result<ConversionStats> {
    CatalogConverter::new(config).convert_file(input, output).await
}

/// Read a whole catalog as UTF-8 text
pub async fn read_catalog(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::ReadInput {
            path: path.to_path_buf(),
            source,
        })
}
