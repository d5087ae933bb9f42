//! CLI module for versionstore
//!
//! Thin layer over [`crate::version`]: loads the store configuration, runs
//! one pointer or record operation and prints a JSON response.

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ProductionAction};
pub use commands::{execute, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
