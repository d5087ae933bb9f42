//! Version entity and its on-disk record form.
//!
//! Record format:
//! ```json
//! {
//!   "id": "2b0e8f0c-...",
//!   "config": { ... },
//!   "creation_date": "2026-10-19T09:30:00.123456+02:00"
//! }
//! ```

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{VersionError, VersionResult};
use super::serializer::ConfigSerializer;

/// Fractional second digits kept in stored timestamps.
const SUBSEC_DIGITS: u16 = 6;

/// ISO-8601 layouts with an offset that RFC 3339 parsing does not cover.
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// ISO-8601 layouts without an offset, read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A registered application version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionEntity<C> {
    /// Caller-assigned identifier, unique across the system
    pub id: String,
    /// Configuration snapshot the version was created with
    pub config: C,
    /// When the version was first registered
    pub creation_date: DateTime<FixedOffset>,
}

impl<C> VersionEntity<C> {
    /// Create a version stamped with the current time, to the microsecond.
    pub fn new(id: impl Into<String>, config: C) -> Self {
        Self {
            id: id.into(),
            config,
            creation_date: Utc::now().trunc_subsecs(SUBSEC_DIGITS).into(),
        }
    }

    /// Create a version with a random UUID v4 id.
    pub fn generate(config: C) -> Self {
        Self::new(Uuid::new_v4().to_string(), config)
    }

    pub fn with_creation_date(mut self, creation_date: DateTime<FixedOffset>) -> Self {
        self.creation_date = creation_date;
        self
    }
}

/// Persisted form of a [`VersionEntity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub id: String,
    pub config: Value,
    pub creation_date: String,
}

/// Converts between [`VersionEntity`] and [`VersionRecord`].
#[derive(Debug, Clone, Default)]
pub struct VersionCodec<S> {
    serializer: S,
}

impl<S: ConfigSerializer> VersionCodec<S> {
    pub fn new(serializer: S) -> Self {
        Self { serializer }
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Build the record for an entity. Serializer errors pass through.
    ///
    /// The creation date keeps its offset and at most six fractional digits.
    pub fn to_record(&self, entity: &VersionEntity<S::Config>) -> VersionResult<VersionRecord> {
        let config = self
            .serializer
            .to_json(&entity.config)
            .map_err(VersionError::Config)?;

        Ok(VersionRecord {
            id: entity.id.clone(),
            config,
            creation_date: entity
                .creation_date
                .trunc_subsecs(SUBSEC_DIGITS)
                .to_rfc3339_opts(SecondsFormat::AutoSi, false),
        })
    }

    /// Rebuild an entity from its record.
    pub fn from_record(&self, record: VersionRecord) -> VersionResult<VersionEntity<S::Config>> {
        let creation_date = parse_timestamp(&record.creation_date)?;
        let config = self
            .serializer
            .from_json(record.config)
            .map_err(VersionError::Config)?;

        Ok(VersionEntity {
            id: record.id,
            config,
            creation_date,
        })
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Offsets are preserved. Timestamps without an offset are read as UTC, and a
/// bare date as midnight UTC. Seconds may be omitted.
pub fn parse_timestamp(value: &str) -> VersionResult<DateTime<FixedOffset>> {
    let offset_err = match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&midnight).into());
    }

    Err(VersionError::malformed_timestamp(value, offset_err))
}
