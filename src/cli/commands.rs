//! CLI command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::StoreConfig;
use crate::observability::{JsonNoticeLog, Logger, NoticeLog};
use crate::version::{JsonConfigSerializer, VersionEntity, VersionPointerStore, VersionRecordStore};

use super::args::{Cli, Command, ProductionAction};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli.config, cli.command)
}

/// Load the configuration and run one command against stdout.
pub fn run_command(config_path: &Path, cmd: Command) -> CliResult<()> {
    let config = StoreConfig::load(config_path)?;
    let mut stdout = io::stdout();

    execute(&config, cmd, Arc::new(JsonNoticeLog::new()), &mut stdout)
}

/// Run one command with an explicit notice sink and output writer.
pub fn execute<W: Write>(
    config: &StoreConfig,
    cmd: Command,
    notices: Arc<dyn NoticeLog>,
    out: &mut W,
) -> CliResult<()> {
    let root = config.storage_root();
    let pointers =
        VersionPointerStore::with_notice_log(&root, notices).pretty(config.pretty_json);
    let records = VersionRecordStore::new(&root, JsonConfigSerializer::<Value>::new())
        .pretty(config.pretty_json);

    let data = match cmd {
        Command::Latest { set: Some(id) } => {
            pointers.set_latest(&id)?;
            json!({ "latest_version": id })
        }
        Command::Latest { set: None } => json!({ "latest_version": pointers.get_latest()? }),

        Command::Development { set: Some(id) } => {
            pointers.set_development(&id)?;
            json!({ "development_version": id })
        }
        Command::Development { set: None } => {
            json!({ "development_version": pointers.get_development()? })
        }

        Command::Production { action } => production(&pointers, action)?,

        Command::Register { config_file, id } => {
            let content = fs::read_to_string(&config_file).map_err(|e| {
                CliError::io_error(format!(
                    "Failed to read {}: {}",
                    config_file.display(),
                    e
                ))
            })?;
            let snapshot: Value = serde_json::from_str(&content)?;

            let entity = match id {
                Some(id) => VersionEntity::new(id, snapshot),
                None => VersionEntity::generate(snapshot),
            };
            records.save(&entity)?;

            Logger::info("VERSION_REGISTERED", &[("version", entity.id.as_str())]);
            json!({ "id": entity.id })
        }

        Command::Show { id } => {
            let entity = records.load(&id)?;
            serde_json::to_value(records.codec().to_record(&entity)?)?
        }

        Command::List => {
            let listed = records
                .load_all()?
                .iter()
                .map(|entity| records.codec().to_record(entity))
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_value(listed)?
        }
    };

    write_response(out, data)
}

fn production(pointers: &VersionPointerStore, action: ProductionAction) -> CliResult<Value> {
    match action {
        ProductionAction::List => Ok(json!({ "production_version": pointers.get_production()? })),
        ProductionAction::Add { id } => {
            pointers.set_production(&id)?;
            Logger::info("VERSION_PROMOTED", &[("version", id.as_str())]);
            Ok(json!({ "production_version": pointers.get_production()? }))
        }
        ProductionAction::Remove { id } => {
            pointers.remove_production(&id)?;
            Logger::info("VERSION_DEMOTED", &[("version", id.as_str())]);
            Ok(json!({ "production_version": pointers.get_production()? }))
        }
    }
}
