// LogTally - core/filter.rs
//
// Level filter over a loaded record list.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::LogRecord;

/// Records whose level equals `level` (uppercased before comparison),
/// in their original order.
///
/// An empty result is not an error; validating `level` against the known
/// set is the caller's job.
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    let wanted = level.to_uppercase();
    let matched: Vec<&LogRecord> = records.iter().filter(|r| r.level == wanted).collect();

    tracing::debug!(
        level = %wanted,
        matched = matched.len(),
        total = records.len(),
        "Applied level filter"
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(level: &str, message: &str) -> LogRecord {
        LogRecord {
            date: "2024-01-01".to_string(),
            time: "10:00:00".to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_filter_keeps_original_order() {
        let records = vec![
            rec("ERROR", "first"),
            rec("INFO", "skip"),
            rec("ERROR", "second"),
            rec("DEBUG", "skip"),
            rec("ERROR", "third"),
        ];
        let msgs: Vec<&str> = filter_by_level(&records, "ERROR")
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(msgs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_uppercases_requested_level() {
        let records = vec![rec("WARNING", "w"), rec("INFO", "i")];
        let result = filter_by_level(&records, "warning");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "w");
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        let records = vec![rec("INFO", "i")];
        assert!(filter_by_level(&records, "DEBUG").is_empty());
    }
}
