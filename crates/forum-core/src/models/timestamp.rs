//! Lenient timestamp parsing for backend `created_at` fields.
//!
//! The backend emits RFC 3339 strings with an offset, but rows written
//! without a time zone come back as naive ISO 8601; those are taken as UTC.
//! A missing, null or unparseable value becomes `None` so one bad row never
//! fails the whole response.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let parsed = raw.as_str().and_then(parse_timestamp);
    if parsed.is_none() && !raw.is_null() {
        debug!("Unreadable timestamp {}, shown without a time", raw);
    }
    Ok(parsed)
}
