use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::{Field, Record};

/// Writes a header of column labels, then one row per record in the given order.
pub fn export_records_csv<'a, I>(path: &Path, columns: &[Field], records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create csv: {}", path.display()))?;

    writer
        .write_record(columns.iter().map(|column| column.label()))
        .context("failed to write csv header")?;

    let mut row_count = 0_usize;
    for record in records {
        writer
            .write_record(columns.iter().map(|column| record.field(*column)))
            .context("failed to write csv record")?;
        row_count += 1;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush csv: {}", path.display()))?;
    tracing::info!(rows = row_count, path = %path.display(), "exported filtered view");
    Ok(row_count)
}

/// Suggested file name for an export, e.g. `regulations-0314.csv`.
pub fn default_export_file_name() -> String {
    format!("regulations-{}.csv", chrono::Local::now().format("%m%d"))
}
