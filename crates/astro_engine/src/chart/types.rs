use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::angles::ChartAngles;
use crate::bodies::Body;
use crate::ephemeris::ObserverLocation;

/// Fixed description reported in the `engine` field of every response
pub const ENGINE_DESCRIPTION: &str =
    "astro_engine: Swiss Ephemeris topocentric longitudes, sidereal-time angle approximation";

/// A validated chart request.
///
/// `date` and `time` are kept as supplied; they are parsed when the chart is
/// computed so that format errors surface as [`crate::ChartError`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    date: String,
    time: String,
    timezone: String,
    lat: f64,
    lon: f64,
}

impl ChartInput {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        timezone: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            timezone: timezone.into(),
            lat,
            lon,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn observer(&self) -> ObserverLocation {
        ObserverLocation::new(self.lat, self.lon)
    }
}

/// Position of one body in a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees (0-360)
    pub lon: f64,
    /// Whether the body is moving backwards through the zodiac
    pub retrograde: bool,
}

/// Stand-in for a chart feature that is not computed.
///
/// Serializes as JSON `null`, so the key is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Unimplemented;

/// A computed chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    #[serde(flatten)]
    pub angles: ChartAngles,
    /// All ten bodies, always
    pub planets: BTreeMap<Body, BodyPosition>,
    /// House cusps are not computed
    pub houses: Unimplemented,
    /// The true lunar node is not computed
    pub true_node: Unimplemented,
}

impl ChartResult {
    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.planets.get(&body)
    }
}

/// Response envelope: engine description, echoed input and the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResponse {
    pub engine: String,
    pub input: ChartInput,
    pub chart: ChartResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimplemented_serializes_as_null() {
        assert_eq!(serde_json::to_string(&Unimplemented).unwrap(), "null");
    }

    #[test]
    fn test_input_echo_uses_request_field_names() {
        let input = ChartInput::new("1990-05-14", "15:30", "America/Toronto", 43.65, -79.38);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["date"], "1990-05-14");
        assert_eq!(value["time"], "15:30");
        assert_eq!(value["timezone"], "America/Toronto");
        assert_eq!(value["lat"], 43.65);
        assert_eq!(value["lon"], -79.38);
    }

    #[test]
    fn test_input_deserializes_from_request_body() {
        let json = r#"{"date":"2024-01-01","time":"00:00","timezone":"UTC","lat":0.0,"lon":0.0}"#;
        let input: ChartInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.timezone(), "UTC");
        assert_eq!(input.observer(), ObserverLocation::new(0.0, 0.0));
    }
}
