//! Fixed-width UTC timestamps.
//!
//! Every stored instant is written as `YYYY-MM-DDTHH:MM:SS.ffffffZ`, always
//! with six fractional digits, so string order and chronological order agree.
//! Stores compare these strings directly when answering range queries.

use chrono::{DateTime, NaiveTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// The current instant, truncated to the precision that survives a round trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn to_document_string(instant: &DateTime<Utc>) -> String {
    instant.format(FORMAT).to_string()
}

/// First and last representable instants of `instant`'s UTC calendar day.
pub fn day_bounds(instant: &DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = instant.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end = start + TimeDelta::days(1) - TimeDelta::microseconds(1);
    (start, end)
}

pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_document_string(instant))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
