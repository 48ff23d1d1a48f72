// LogTally - app/analyse.rs
//
// End-to-end pipeline for one invocation:
//   validate filter level -> load file -> count -> (filter) -> render.
//
// Nothing is written to the output until the whole file has loaded, so a
// failing run never leaves a partial report behind.

use crate::core::export;
use crate::core::filter::filter_by_level;
use crate::core::model::Level;
use crate::core::parser::load_file;
use crate::core::summary::count_by_level;
use crate::ui::report;
use crate::util::error::{ExportError, Result, UsageError};
use std::io::Write;
use std::path::PathBuf;

/// Output flavour for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Summary table plus optional detail listing.
    #[default]
    Text,
    /// Single pretty-printed JSON document.
    Json,
}

/// Everything one run needs, resolved from CLI and config.
#[derive(Debug, Clone, Default)]
pub struct AnalyseOptions {
    /// Log file to read. `None` is a usage error.
    pub path: Option<PathBuf>,
    /// Optional filter level as typed by the user.
    pub level: Option<String>,
    /// Colourise text output.
    pub colour: bool,
    /// Text or JSON.
    pub format: OutputFormat,
}

/// Resolve a user-supplied filter level against the known set.
pub fn validate_level(raw: &str) -> std::result::Result<Level, UsageError> {
    Level::from_token(raw).ok_or_else(|| UsageError::UnknownLevel {
        level: raw.to_uppercase(),
        valid: Level::ALL.iter().map(|l| l.as_str()).collect(),
    })
}

/// Run the pipeline and write the report to `out`.
pub fn run<W: Write>(options: &AnalyseOptions, out: &mut W) -> Result<()> {
    let path = options.path.as_ref().ok_or(UsageError::MissingPath)?;

    // The level is checked before the file is touched.
    let level = options.level.as_deref().map(validate_level).transpose()?;

    let records = load_file(path)?;
    let counts = count_by_level(&records);

    tracing::info!(
        file = %path.display(),
        records = records.len(),
        levels = counts.distinct_levels(),
        "Log file analysed"
    );

    let filtered = level.map(|l| (l, filter_by_level(&records, l.as_str())));

    match options.format {
        OutputFormat::Text => {
            report::render_summary(&counts, out, options.colour).map_err(ExportError::from)?;
            if let Some((level, matched)) = &filtered {
                report::render_details(*level, matched, out, options.colour)
                    .map_err(ExportError::from)?;
            }
        }
        OutputFormat::Json => {
            let json_report = export::build_report(&counts, filtered);
            export::export_json(&json_report, &mut *out)?;
        }
    }

    out.flush().map_err(ExportError::from)?;
    Ok(())
}
