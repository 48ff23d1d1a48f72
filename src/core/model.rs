// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Log Record (output of parsing)
// =============================================================================

/// A single parsed log line.
///
/// Built once by the parser and never mutated. `date` and `time` are kept
/// as the opaque tokens found in the file; no calendar validation is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// First whitespace-delimited token.
    pub date: String,

    /// Second whitespace-delimited token.
    pub time: String,

    /// Third token, uppercased. Any token is accepted here; only the
    /// report and the filter argument are restricted to [`Level`].
    pub level: String,

    /// Remainder of the line after the level token, internal whitespace kept.
    pub message: String,
}

// =============================================================================
// Level
// =============================================================================

/// The closed set of levels the report knows how to display.
///
/// `Level::ALL` is the one ordering used both for the summary table rows
/// and for validating a user-supplied filter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Debug,
    Error,
    Warning,
}

impl Level {
    /// All known levels in summary display order.
    pub const ALL: [Level; 4] = [Level::Info, Level::Debug, Level::Error, Level::Warning];

    /// Uppercase token as it appears in log files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
        }
    }

    /// Resolve a user-supplied level, case-insensitively.
    ///
    /// Returns `None` for anything outside the known set. Surrounding
    /// whitespace is not stripped, so `" error "` is rejected.
    pub fn from_token(token: &str) -> Option<Level> {
        let upper = token.to_uppercase();
        Level::ALL.into_iter().find(|l| l.as_str() == upper)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_is_fixed() {
        let names: Vec<&str> = Level::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["INFO", "DEBUG", "ERROR", "WARNING"]);
    }

    #[test]
    fn test_from_token_is_case_insensitive() {
        assert_eq!(Level::from_token("error"), Some(Level::Error));
        assert_eq!(Level::from_token("Warning"), Some(Level::Warning));
        assert_eq!(Level::from_token("DEBUG"), Some(Level::Debug));
    }

    #[test]
    fn test_from_token_rejects_unknown_levels() {
        assert_eq!(Level::from_token("TRACE"), None);
        assert_eq!(Level::from_token("WARN"), None);
        assert_eq!(Level::from_token(""), None);
        assert_eq!(Level::from_token(" error "), None);
    }

    #[test]
    fn test_level_serialises_uppercase() {
        let json = serde_json::to_string(&Level::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }
}
