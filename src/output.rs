//! Export of flat records to CSV and JSON, and logging of feed summaries.
//!
//! CSV output starts with a UTF-8 byte-order mark so spreadsheet tools pick
//! the right encoding; JSON output keeps non-ASCII text unescaped.

use anyhow::{Context, Result};
use csv::Writer;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::classify::EntityKind;
use crate::record::{FlatRecord, columns_for};
use crate::summary::FeedSummary;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Logs a feed summary as pretty-printed JSON.
pub fn print_summary(summary: &FeedSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Union of the records' columns in first-seen order.
pub fn combined_columns(records: &[FlatRecord]) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = Vec::new();
    for record in records {
        for column in record.columns() {
            if !columns.contains(column) {
                columns.push(*column);
            }
        }
    }
    columns
}

/// Writes all records as one table. Columns a record's kind does not have are
/// left as empty cells. Nothing but the BOM is written for an empty slice.
pub fn write_csv<W: Write>(records: &[FlatRecord], mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM)?;
    if records.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    let columns = combined_columns(records);
    let mut csv = Writer::from_writer(writer);
    csv.write_record(&columns)?;
    for record in records {
        csv.write_record(columns.iter().map(|c| record.get(c).unwrap_or_default()))?;
    }
    csv.flush()?;

    Ok(())
}

/// Writes records as a pretty-printed JSON array, one object per record.
pub fn write_json<W: Write>(records: &[FlatRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Creates `path` and writes the combined CSV table into it.
pub fn write_csv_file(path: &Path, records: &[FlatRecord]) -> Result<()> {
    let file = create(path)?;
    write_csv(records, file)?;
    debug!(path = %path.display(), rows = records.len(), "CSV written");
    Ok(())
}

/// Creates `path` and writes the JSON array into it.
pub fn write_json_file(path: &Path, records: &[FlatRecord]) -> Result<()> {
    let file = create(path)?;
    write_json(records, file)?;
    debug!(path = %path.display(), rows = records.len(), "JSON written");
    Ok(())
}

/// Writes one CSV per entity kind next to `base`, named
/// `<stem>_<kind>s.csv`, each with that kind's fixed columns. Kinds with no
/// records get no file. Returns the paths written.
pub fn write_csv_by_kind(base: &Path, records: &[FlatRecord]) -> Result<Vec<PathBuf>> {
    let mut by_kind: BTreeMap<EntityKind, Vec<&FlatRecord>> = BTreeMap::new();
    for record in records {
        by_kind.entry(record.kind()).or_default().push(record);
    }

    let mut written = Vec::new();
    for (kind, rows) in by_kind {
        let path = kind_path(base, kind);
        let mut file = create(&path)?;
        file.write_all(UTF8_BOM)?;

        let mut csv = Writer::from_writer(file);
        csv.write_record(columns_for(kind))?;
        for row in &rows {
            csv.write_record(row.values())?;
        }
        csv.flush()?;

        debug!(path = %path.display(), kind = kind.as_str(), rows = rows.len(), "CSV written");
        written.push(path);
    }

    Ok(written)
}

fn kind_path(base: &Path, kind: EntityKind) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("feed");
    base.with_file_name(format!("{}_{}s.csv", stem, kind.as_str()))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}
