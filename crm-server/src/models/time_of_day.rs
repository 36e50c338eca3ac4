//! Serde helpers for time-of-day fields
//!
//! Output is always `HH:MM:SS`. Input accepts `HH:MM:SS`, `HH:MM:SS.fff` or `HH:MM`.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%H:%M:%S";
const INPUT_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parse a time-of-day string in any accepted input format.
pub fn parse(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(OUTPUT_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        de::Error::custom(format!("invalid time of day '{}', expected HH:MM[:SS]", raw))
    })
}

/// Same as the parent module, for `Option<NaiveTime>` fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => super::serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| {
                de::Error::custom(format!("invalid time of day '{}', expected HH:MM[:SS]", raw))
            }),
            None => Ok(None),
        }
    }
}
