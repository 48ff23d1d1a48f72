// LogTally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (config.toml, optional)
// 3. Logging initialisation (debug mode support)
// 4. Running the analysis pipeline and mapping failures to exit code 1

use clap::error::ErrorKind;
use clap::Parser;
use logtally::app::analyse::{self, AnalyseOptions, OutputFormat};
use logtally::platform::config::{load_config, PlatformPaths};
use logtally::util;
use std::path::PathBuf;

/// LogTally - Summarise a log file by level.
///
/// Reads `<date> <time> <LEVEL> <message>` lines, prints a count per level
/// (INFO, DEBUG, ERROR, WARNING) and, when LEVEL is given, every record at
/// that level.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file to analyse.
    path: Option<PathBuf>,

    /// Show the records for one level (INFO, DEBUG, ERROR, WARNING; any case).
    level: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Disable coloured output.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Emit the report as JSON instead of a table.
    #[arg(long = "json")]
    json: bool,

    /// Path to an alternative config.toml.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    // Help and version keep clap's own output and exit code 0; every other
    // command-line rejection is a usage error and exits with 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Printing can only fail if stderr is closed; the exit code still stands.
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    // Config is read before logging starts so its [logging] level applies.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (config, config_warnings) = load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    if !cli.extra.is_empty() {
        tracing::debug!(ignored = ?cli.extra, "Ignoring surplus arguments");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogTally starting"
    );

    let colour = config.colour
        && !cli.no_color
        && !cli.json
        && std::env::var_os(util::constants::NO_COLOR_ENV).is_none();

    let options = AnalyseOptions {
        path: cli.path,
        level: cli.level,
        colour,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = analyse::run(&options, &mut out) {
        tracing::error!(error = %e, "Analysis failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
