use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parse a clock time in HH:MM format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM format.
pub fn parse_time_hm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}

/// Anchor a schedule clock-time to a calendar date, interpreted in UTC
#[must_use]
pub fn anchor_to_date(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Signed whole minutes from `from` to `to`, rounded to the nearest minute
///
/// Negative when `to` lies before `from`.
#[must_use]
pub fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds();
    #[allow(clippy::cast_precision_loss)]
    let minutes = (millis as f64 / 60_000.0).round();
    #[allow(clippy::cast_possible_truncation)]
    {
        minutes as i64
    }
}

/// Serde adapter for optional HH:MM times in schedule fixtures
pub mod serde_opt_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Returns an error if the value is present but not a valid HH:MM time.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(s) if !s.is_empty() => super::parse_time_hm(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }
}
