// LogTally - bin/assistant.rs
//
// Entry point for the interactive contact assistant.

use clap::Parser;
use logtally::app::assistant;
use logtally::util;

/// LogTally assistant - an in-memory contact book driven by typed commands.
///
/// Commands: hello, add <name> <phone>, change <name> <phone>,
/// phone <name>, all, exit, close.
#[derive(Parser, Debug)]
#[command(name = "logtally-assistant", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    util::logging::init(cli.debug, None);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = assistant::run_session(stdin.lock(), &mut out) {
        tracing::error!(error = %e, "Assistant session failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
