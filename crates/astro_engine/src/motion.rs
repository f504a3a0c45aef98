//! Direct/retrograde classification from two longitude samples.

use chrono::Duration;

/// Spacing between the two longitude samples, in hours of universal time.
pub const SAMPLE_INTERVAL_HOURS: i64 = 1;

pub fn sample_interval() -> Duration {
    Duration::hours(SAMPLE_INTERVAL_HOURS)
}

/// Net angular change from `previous` to `now`, in [-180, 180).
///
/// Crossing 0° is handled: 359° -> 1° is +2°, not -358°.
pub fn signed_delta(now: f64, previous: f64) -> f64 {
    ((now - previous + 540.0) % 360.0) - 180.0
}

/// True when the body moved backwards through the zodiac over the sample
/// interval. A stationary body (delta exactly 0) counts as direct.
///
/// Motion that reverses within the interval can be misread; the one-hour
/// window is a coarse stand-in for the sign of the longitude speed.
pub fn classify(now: f64, previous: f64) -> bool {
    signed_delta(now, previous) < 0.0
}
