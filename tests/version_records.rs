//! Version Record Tests
//!
//! - Records survive a save/load cycle with id, config and creation date intact
//! - Record listings ignore the pointer document
//! - Malformed timestamps and configs are reported

use std::fs;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use versionstore::version::{
    JsonConfigSerializer, VersionCodec, VersionEntity, VersionError, VersionPointerStore,
    VersionRecord, VersionRecordStore,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AppConfig {
    storage_type: String,
    max_workers: u32,
    tags: Vec<String>,
}

fn app_config() -> AppConfig {
    AppConfig {
        storage_type: "filesystem".into(),
        max_workers: 8,
        tags: vec!["nightly".into()],
    }
}

fn store(tmp: &TempDir) -> VersionRecordStore<JsonConfigSerializer<AppConfig>> {
    VersionRecordStore::new(tmp.path(), JsonConfigSerializer::new())
}

#[test]
fn test_codec_round_trip() {
    let codec = VersionCodec::new(JsonConfigSerializer::<AppConfig>::new());
    let created = DateTime::parse_from_rfc3339("2026-04-12T17:45:03.250+09:00").unwrap();
    let entity = VersionEntity::new("v1", app_config()).with_creation_date(created);

    let record = codec.to_record(&entity).unwrap();
    assert_eq!(record.creation_date, "2026-04-12T17:45:03.250+09:00");

    let restored = codec.from_record(record).unwrap();
    assert_eq!(restored.id, "v1");
    assert_eq!(restored.config, app_config());
    assert_eq!(restored.creation_date.to_rfc3339(), created.to_rfc3339());
}

#[test]
fn test_store_round_trip() {
    let tmp = TempDir::new().unwrap();
    let records = store(&tmp);
    let entity = VersionEntity::generate(app_config());

    records.save(&entity).unwrap();

    assert_eq!(records.load(&entity.id).unwrap(), entity);
}

#[test]
fn test_records_live_beside_pointer_file() {
    let tmp = TempDir::new().unwrap();
    let records = store(&tmp);
    let pointers = VersionPointerStore::new(tmp.path());

    records.save(&VersionEntity::new("v1", app_config())).unwrap();
    records.save(&VersionEntity::new("v2", app_config())).unwrap();
    pointers.set_development("v2").unwrap();
    pointers.set_production("v1").unwrap();

    let mut ids: Vec<_> = records.load_all().unwrap().into_iter().map(|v| v.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["v1", "v2"]);
    assert!(tmp.path().join("version.json").exists());
}

#[test]
fn test_pointers_do_not_require_records() {
    let tmp = TempDir::new().unwrap();
    let records = store(&tmp);
    let pointers = VersionPointerStore::new(tmp.path());

    pointers.set_production("never-registered").unwrap();

    assert!(records.load_all().unwrap().is_empty());
    assert_eq!(pointers.get_production().unwrap(), vec!["never-registered"]);
}

#[test]
fn test_overwrite_replaces_record() {
    let tmp = TempDir::new().unwrap();
    let records = store(&tmp);
    let mut entity = VersionEntity::new("v1", app_config());
    records.save(&entity).unwrap();

    entity.config.max_workers = 2;
    records.save(&entity).unwrap();

    assert_eq!(records.load("v1").unwrap().config.max_workers, 2);
    assert_eq!(records.load_all().unwrap().len(), 1);
}

#[test]
fn test_malformed_timestamp_on_disk() {
    let tmp = TempDir::new().unwrap();
    let records = store(&tmp);
    let record = VersionRecord {
        id: "v1".into(),
        config: serde_json::to_value(app_config()).unwrap(),
        creation_date: "12/04/2026".into(),
    };
    fs::write(
        tmp.path().join("v1.json"),
        serde_json::to_string(&record).unwrap(),
    )
    .unwrap();

    assert!(matches!(
        records.load("v1"),
        Err(VersionError::MalformedTimestamp { .. })
    ));
}

#[test]
fn test_malformed_config_passes_through() {
    let tmp = TempDir::new().unwrap();
    let records = store(&tmp);
    fs::write(
        tmp.path().join("v1.json"),
        r#"{"id": "v1", "config": {"storage_type": 3}, "creation_date": "2026-01-01T00:00:00+00:00"}"#,
    )
    .unwrap();

    assert!(matches!(records.load("v1"), Err(VersionError::Config(_))));
}
