//! Tabular export of job records
//!
//! Writes any subset of records as CSV with the fixed column order
//! `Company, Position, Date posted, Link` — the contract consumers of the
//! export file rely on.

use anyhow::{Context, Result};
use std::path::Path;

use crate::scrape::JobRecord;

/// Column headers, in the order every export carries them
pub const EXPORT_COLUMNS: [&str; 4] = ["Company", "Position", "Date posted", "Link"];

/// Write records to a CSV file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row fails to write.
pub fn export_records(records: &[JobRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;

    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.write_record([
            &record.company,
            &record.position,
            &record.date_posted,
            &record.link,
        ])?;
    }
    writer.flush()?;

    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(())
}
