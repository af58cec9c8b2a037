use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A point in time as it travels between content producer and renderer.
///
/// Either a structured date or the pre-serialized string the producer sent.
/// Strings are kept verbatim; [`Timestamp::to_datetime`] normalizes on read.
#[derive(Debug, Clone)]
pub enum Timestamp {
    Date(DateTime<Utc>),
    Text(String),
}

impl Timestamp {
    /// Best-effort instant for this timestamp. Unrecognised text gives `None`.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Date(dt) => Some(*dt),
            Timestamp::Text(raw) => parse_text(raw),
        }
    }

    /// The string form written on the wire.
    pub fn to_wire_string(&self) -> String {
        match self {
            Timestamp::Date(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Timestamp::Text(raw) => raw.clone(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Timestamp::Text(_))
    }
}

fn parse_text(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_datetime(), other.to_datetime()) {
            (Some(a), Some(b)) => a == b,
            _ => self.to_wire_string() == other.to_wire_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Date(dt)
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Timestamp::Text(raw)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Timestamp::Text(raw.to_owned())
    }
}

// ---------------------- Wire format ----------------------

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Date(_) => serializer.serialize_str(&self.to_wire_string()),
            Timestamp::Text(raw) => serializer.serialize_str(raw),
        }
    }
}

struct TimestampVisitor;

impl<'de> de::Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date string or epoch milliseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Timestamp::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Timestamp::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Utc.timestamp_millis_opt(v)
            .single()
            .map(Timestamp::Date)
            .ok_or_else(|| E::custom(format!("epoch milliseconds out of range: {v}")))
    }

    // `Date.getTime()` can come back as a float; the fraction is kept as nanoseconds.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let out_of_range = || E::custom(format!("epoch milliseconds out of range: {v}"));
        let whole = v.floor();
        if !whole.is_finite() || whole.abs() >= i64::MAX as f64 {
            return Err(out_of_range());
        }
        let sub_nanos = ((v - whole) * 1_000_000.0).round() as i64;

        Utc.timestamp_millis_opt(whole as i64)
            .single()
            .and_then(|dt| dt.checked_add_signed(Duration::nanoseconds(sub_nanos)))
            .map(Timestamp::Date)
            .ok_or_else(out_of_range)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let millis = i64::try_from(v)
            .map_err(|_| E::custom(format!("epoch milliseconds out of range: {v}")))?;
        self.visit_i64(millis)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
