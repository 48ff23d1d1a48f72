// LogTally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: every failure names its subsystem
// and keeps its underlying cause reachable through `source()`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTally operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTallyError {
    /// The command line was incomplete or carried an invalid value.
    Usage(UsageError),

    /// The log file could not be loaded.
    Load(LoadError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Report export failed.
    Export(ExportError),
}

impl LogTallyError {
    /// Process exit code for this error. Every failure class exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "Usage error: {e}"),
            Self::Load(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

/// Errors in how the program was invoked.
#[derive(Debug, PartialEq, Eq)]
pub enum UsageError {
    /// No log file path was given.
    MissingPath,

    /// The filter level is not one of the known levels. `valid` lists the
    /// accepted levels in display order.
    UnknownLevel {
        level: String,
        valid: Vec<&'static str>,
    },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(f, "missing log file path. Usage: logtally <PATH> [LEVEL]"),
            Self::UnknownLevel { level, valid } => write!(
                f,
                "unknown log level '{level}'. Valid levels: {}",
                valid.join(", ")
            ),
        }
    }
}

impl std::error::Error for UsageError {}

impl From<UsageError> for LogTallyError {
    fn from(e: UsageError) -> Self {
        Self::Usage(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors produced by the single-line record parser.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line has fewer than the four required whitespace-separated fields.
    TooFewFields { line: String, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { line, found } => write!(
                f,
                "expected {} fields (date time level message), found {found}: '{line}'",
                super::constants::LOG_LINE_FIELDS,
            ),
        }
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors related to reading a log file into records.
#[derive(Debug)]
pub enum LoadError {
    /// The log file does not exist.
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while opening or reading the file.
    Io { path: PathBuf, source: io::Error },

    /// A non-blank line could not be parsed. Aborts the whole load.
    Malformed {
        path: PathBuf,
        line_number: u64,
        source: ParseError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "File not found: '{}'", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading '{}': {source}", path.display())
            }
            Self::Malformed {
                path,
                line_number,
                source,
            } => write!(
                f,
                "Malformed log line in '{}' line {line_number}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::FileNotFound { .. } => None,
        }
    }
}

impl From<LoadError> for LogTallyError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing a report.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the report.
    Io { source: io::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "report write failed: {source}"),
            Self::Json { source } => write!(f, "JSON report failed: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<ExportError> for LogTallyError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// These never abort a run: `platform::config` turns them into warnings
/// and falls back to defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogTallyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Assistant command errors
// ---------------------------------------------------------------------------

/// Input-shape failures raised by contact assistant command handlers.
///
/// All variants collapse to the same user-facing message in
/// `app::assistant::input_error`; the distinction survives only in logs.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was not supplied.
    MissingArgument { command: &'static str },

    /// The command received the wrong number of arguments.
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    /// The named contact does not exist.
    UnknownContact { name: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { command } => {
                write!(f, "'{command}' is missing a required argument")
            }
            Self::WrongArgumentCount {
                command,
                expected,
                found,
            } => write!(
                f,
                "'{command}' expects {expected} argument(s), got {found}"
            ),
            Self::UnknownContact { name } => write!(f, "no contact named '{name}'"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Convenience type alias for LogTally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;
