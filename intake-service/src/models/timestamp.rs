//! Submission timestamps travel as ISO-8601 strings, both in stored
//! documents and in API responses. Reads also take a native BSON datetime,
//! which other writers to the same collections may produce.
//!
//! Use with `#[serde(with = "crate::models::timestamp")]`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use mongodb::bson::Bson;
use serde::{de, Deserialize, Deserializer, Serializer};

/// Current time at the precision the string form preserves.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Accepts RFC 3339 with an offset; strings without one are read as UTC.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::String(raw) => parse(&raw)
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e))),
        Bson::DateTime(dt) => Ok(dt.to_chrono()),
        other => Err(de::Error::custom(format!(
            "invalid timestamp: expected string or datetime, found {:?}",
            other.element_type()
        ))),
    }
}
