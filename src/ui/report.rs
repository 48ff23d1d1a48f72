// LogTally - ui/report.rs
//
// Text rendering of the summary table and the per-level detail listing.
// Writes to any `Write` so the binary targets stdout and tests target a
// byte buffer.

use crate::core::model::{Level, LogRecord};
use crate::core::summary::LevelCounts;
use crate::ui::theme::{level_tone, paint};
use crate::util::constants;
use std::io::{self, Write};

/// Write the summary table: header, separator, then one row per known
/// level in fixed order. Levels outside the known set are never shown.
pub fn render_summary<W: Write>(counts: &LevelCounts, out: &mut W, colour: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", constants::SUMMARY_HEADER)?;
    writeln!(out, "{}", constants::SUMMARY_SEPARATOR)?;
    for (level, count) in counts.known() {
        let row = format!(
            "{:<width$} | {count}",
            level.as_str(),
            width = constants::LEVEL_COLUMN_WIDTH
        );
        writeln!(out, "{}", paint(&row, level_tone(level), colour))?;
    }
    Ok(())
}

/// Write the detail listing for `level`: one `date time - message` line per
/// record, or a notice when there are none.
pub fn render_details<W: Write>(
    level: Level,
    records: &[&LogRecord],
    out: &mut W,
    colour: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if records.is_empty() {
        writeln!(out, "No records found for level '{level}'.")?;
        return Ok(());
    }

    writeln!(out, "Log details for level '{level}':")?;
    let tone = level_tone(level);
    for record in records {
        let line = format!("{} {} - {}", record.date, record.time, record.message);
        writeln!(out, "{}", paint(&line, tone, colour))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::count_by_level;

    fn rec(level: &str, time: &str, message: &str) -> LogRecord {
        LogRecord {
            date: "2024-01-01".to_string(),
            time: time.to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    fn render_summary_text(records: &[LogRecord]) -> String {
        let counts = count_by_level(records);
        let mut buf = Vec::new();
        render_summary(&counts, &mut buf, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_layout() {
        let records = vec![
            rec("INFO", "10:00:00", "starting service"),
            rec("ERROR", "10:00:05", "connection failed"),
        ];
        let text = render_summary_text(&records);
        let expected = "\n\
            Level            | Count\n\
            -----------------|----------\n\
            INFO             | 1\n\
            DEBUG            | 0\n\
            ERROR            | 1\n\
            WARNING          | 0\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_hides_unknown_levels() {
        let records = vec![rec("TRACE", "10:00:00", "t"), rec("FATAL", "10:00:01", "f")];
        let text = render_summary_text(&records);
        assert!(!text.contains("TRACE"));
        assert!(!text.contains("FATAL"));
        assert_eq!(text.lines().filter(|l| l.ends_with("| 0")).count(), 4);
    }

    #[test]
    fn test_summary_order_is_independent_of_input_order() {
        let records = vec![
            rec("WARNING", "10:00:00", "w"),
            rec("DEBUG", "10:00:01", "d"),
            rec("INFO", "10:00:02", "i"),
        ];
        let text = render_summary_text(&records);
        let rows: Vec<&str> = text
            .lines()
            .skip(3)
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(rows, vec!["INFO", "DEBUG", "ERROR", "WARNING"]);
    }

    #[test]
    fn test_details_lists_records() {
        let r = rec("ERROR", "10:00:05", "connection failed");
        let mut buf = Vec::new();
        render_details(Level::Error, &[&r], &mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\nLog details for level 'ERROR':\n2024-01-01 10:00:05 - connection failed\n"
        );
    }

    #[test]
    fn test_details_empty_prints_notice() {
        let mut buf = Vec::new();
        render_details(Level::Debug, &[], &mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\nNo records found for level 'DEBUG'.\n");
    }

    #[test]
    fn test_colour_wraps_rows() {
        let counts = count_by_level(&[rec("INFO", "10:00:00", "x")]);
        let mut buf = Vec::new();
        render_summary(&counts, &mut buf, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.lines().nth(1), Some(constants::SUMMARY_HEADER));
    }
}
