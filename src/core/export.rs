// LogTally - core/export.rs
//
// JSON rendering of the level summary and optional detail listing.
// Core layer: writes to any Write trait object.

use crate::core::model::{Level, LogRecord};
use crate::core::summary::LevelCounts;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// One row of the summary in the JSON report.
#[derive(Debug, Serialize)]
pub struct LevelRow {
    pub level: Level,
    pub count: usize,
}

/// Detail section of the JSON report, present only when a level was requested.
#[derive(Debug, Serialize)]
pub struct FilterSection<'a> {
    pub level: Level,
    pub records: Vec<&'a LogRecord>,
}

/// Serialisable report: the same content as the text table and listing.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Known levels in display order, absent ones as 0.
    pub counts: Vec<LevelRow>,

    /// Total records loaded, including levels outside the known set.
    pub total: usize,

    /// `null` when no filter level was given.
    pub filter: Option<FilterSection<'a>>,
}

/// Assemble a report from the aggregated counts and optional filter result.
pub fn build_report<'a>(
    counts: &LevelCounts,
    filtered: Option<(Level, Vec<&'a LogRecord>)>,
) -> Report<'a> {
    Report {
        counts: counts
            .known()
            .map(|(level, count)| LevelRow { level, count })
            .collect(),
        total: counts.total(),
        filter: filtered.map(|(level, records)| FilterSection { level, records }),
    }
}

/// Write `report` as pretty-printed JSON followed by a newline.
pub fn export_json<W: Write>(report: &Report<'_>, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|source| ExportError::Json { source })?;
    writeln!(writer)?;
    Ok(())
}
