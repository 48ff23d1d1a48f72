// LogTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogTally";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Parsing
// =============================================================================

/// Number of whitespace-delimited fields in a well-formed log line:
/// date, time, level, message.
pub const LOG_LINE_FIELDS: usize = 4;

// =============================================================================
// Report layout
// =============================================================================

/// Width of the level column in the summary table.
pub const LEVEL_COLUMN_WIDTH: usize = 16;

/// Summary table header row.
pub const SUMMARY_HEADER: &str = "Level            | Count";

/// Summary table separator row.
pub const SUMMARY_SEPARATOR: &str = "-----------------|----------";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing level when neither RUST_LOG, --debug, nor config set one.
///
/// Kept at `warn` so diagnostics on stderr stay quiet during normal runs.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Files
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that disables colour output when set.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

// =============================================================================
// Contact assistant
// =============================================================================

/// The single message shown for every malformed assistant command.
pub const INPUT_ERROR_MESSAGE: &str = "Enter the argument for the command";

/// Prompt printed before each assistant command is read.
pub const ASSISTANT_PROMPT: &str = "Enter a command: ";

/// Greeting printed when the assistant starts.
pub const ASSISTANT_GREETING: &str = "Welcome to the assistant bot!";

/// Farewell printed when the assistant exits.
pub const ASSISTANT_FAREWELL: &str = "Good bye!";
