//! CSV table writing for decoded catalogs
//!
//! The table is rendered into memory first and written to disk in one call,
//! so the output file only ever holds a complete table.

use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::constants::OUTPUT_COLUMNS;
use crate::models::CatalogRecord;
use crate::{CatalogError, Result};

/// Write the header row and one row per record to `sink`
pub fn write_records<W: Write>(records: &[CatalogRecord], sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(OUTPUT_COLUMNS)?;

    for record in records {
        writer.write_record(record.to_row())?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the full table as CSV bytes
pub fn render_table(records: &[CatalogRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(buffer)
}

/// Write the full table to `path`, creating parent directories as needed.
///
/// Returns the number of data rows written.
pub async fn write_table(path: &Path, records: &[CatalogRecord]) -> Result<usize> {
    let bytes = render_table(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| CatalogError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, &bytes)
        .await
        .map_err(|source| CatalogError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Wrote {} bytes ({} rows) to {}",
        bytes.len(),
        records.len(),
        path.display()
    );
    Ok(records.len())
}
