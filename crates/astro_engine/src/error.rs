use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ephemeris::EphemerisError;

/// Errors that can abort a chart computation.
///
/// Every variant describes a problem with what the caller supplied (or with
/// what the ephemeris can answer for it); none of them are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid date format: {value:?}. Expected YYYY-MM-DD")]
    InvalidDateFormat { value: String },
    #[error("Invalid time format: {value:?}. Expected 24-hour HH:MM")]
    InvalidTimeFormat { value: String },
    #[error("Invalid date format: {date:?} (expected YYYY-MM-DD) and invalid time format: {time:?} (expected HH:MM)")]
    InvalidDateAndTime { date: String, time: String },
    #[error("Unknown timezone: {name}")]
    UnknownTimezone { name: String },
    #[error("Local time {date} {time} does not exist in {timezone} (skipped by a DST transition)")]
    NonexistentLocalTime {
        date: String,
        time: String,
        timezone: String,
    },
    #[error("Unknown body: {key}")]
    UnknownBody { key: String },
    #[error("Ephemeris unavailable for {key} at {instant}: {message}")]
    EphemerisUnavailable {
        key: String,
        instant: DateTime<Utc>,
        message: String,
    },
    #[error("Position vector has zero length; ecliptic longitude is undefined")]
    DegenerateVector,
}

impl From<EphemerisError> for ChartError {
    fn from(err: EphemerisError) -> Self {
        match err {
            EphemerisError::UnknownBody { key } => ChartError::UnknownBody { key },
            EphemerisError::Unavailable {
                key,
                instant,
                message,
            } => ChartError::EphemerisUnavailable {
                key,
                instant,
                message,
            },
        }
    }
}
