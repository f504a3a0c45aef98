//! Local civil time to universal time.
//!
//! A chart request arrives as a wall-clock reading in a named timezone. It is
//! resolved once, against the zone rules in force at that local instant, into
//! a [`UniversalInstant`] that every later stage shares.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ChartError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// `d` stands for one ASCII digit; every other byte must match exactly.
const DATE_SHAPE: &str = "dddd-dd-dd";
const TIME_SHAPE: &str = "dd:dd";

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian Day of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A point in universal time (UTC, used as a stand-in for UT1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniversalInstant(DateTime<Utc>);

impl UniversalInstant {
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Julian Day (UT) of this instant.
    pub fn julian_day(&self) -> f64 {
        let seconds =
            self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) * 1e-9;
        UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        (self.julian_day() - J2000_JD) / DAYS_PER_CENTURY
    }

    /// The instant `interval` earlier in universal time, or `None` if that
    /// falls outside the representable range.
    pub fn earlier_by(&self, interval: Duration) -> Option<Self> {
        self.0.checked_sub_signed(interval).map(Self)
    }
}

impl fmt::Display for UniversalInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Convert a local `YYYY-MM-DD` date and `HH:MM` time in `timezone` into
/// universal time.
///
/// Date and time are parsed independently; when both are malformed the error
/// names both. An ambiguous wall-clock reading (DST fall-back) resolves to its
/// first occurrence. A reading skipped by a DST gap is an error.
pub fn normalize(date: &str, time: &str, timezone: &str) -> Result<UniversalInstant, ChartError> {
    let parsed_date = matches_shape(date, DATE_SHAPE)
        .then(|| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
        .flatten();
    let parsed_time = matches_shape(time, TIME_SHAPE)
        .then(|| NaiveTime::parse_from_str(time, TIME_FORMAT).ok())
        .flatten();

    let (local_date, local_time) = match (parsed_date, parsed_time) {
        (Some(d), Some(t)) => (d, t),
        (None, Some(_)) => {
            return Err(ChartError::InvalidDateFormat {
                value: date.to_string(),
            })
        }
        (Some(_), None) => {
            return Err(ChartError::InvalidTimeFormat {
                value: time.to_string(),
            })
        }
        (None, None) => {
            return Err(ChartError::InvalidDateAndTime {
                date: date.to_string(),
                time: time.to_string(),
            })
        }
    };

    let zone = resolve_timezone(timezone)?;
    let local = NaiveDateTime::new(local_date, local_time);

    let zoned = match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            return Err(ChartError::NonexistentLocalTime {
                date: date.to_string(),
                time: time.to_string(),
                timezone: timezone.to_string(),
            })
        }
    };

    let instant = UniversalInstant(zoned.with_timezone(&Utc));
    debug!("normalized {date} {time} {timezone} -> {instant}");
    Ok(instant)
}

/// chrono's `%Y` and `%H` accept signs, short fields and padding, so the
/// layout is checked before parsing.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            _ => v == s,
        })
}

/// Look up an IANA zone name. There is no fallback zone.
pub fn resolve_timezone(name: &str) -> Result<Tz, ChartError> {
    name.parse::<Tz>()
        .map_err(|_| ChartError::UnknownTimezone {
            name: name.to_string(),
        })
}
