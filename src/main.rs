//! versionstore CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, logs failures as a
//! structured error line on stderr and exits non-zero.

use versionstore::cli;
use versionstore::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::error(
            "COMMAND_FAILED",
            &[("code", e.code_str()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
