#![allow(dead_code)]

use astro_engine::time::J2000_JD;
use astro_engine::{EclipticVector, EphemerisError, EphemerisProvider, ObserverLocation, UniversalInstant};
use std::sync::Mutex;

/// (catalog key, longitude at J2000 in degrees, degrees per day, distance, z)
pub const TRACKS: [(&str, f64, f64, f64, f64); 10] = [
    ("sun", 280.46, 0.985647, 1.0, 0.0),
    ("moon", 218.32, 13.176396, 0.00257, 0.0001),
    ("mercury", 252.25, -1.2, 0.9, 0.02),
    ("venus", 181.98, 1.2, 0.7, -0.01),
    ("mars", 355.43, 0.524, 1.5, 0.03),
    ("jupiter barycenter", 34.35, 0.083, 5.2, -0.1),
    ("saturn barycenter", 50.08, -0.0335, 9.5, 0.2),
    ("uranus barycenter", 314.05, 0.0117, 19.2, -0.05),
    ("neptune barycenter", 304.35, -0.006, 30.1, 0.3),
    ("pluto barycenter", 238.93, -0.004, 39.5, 5.0),
];

/// Deterministic ephemeris: every body moves uniformly in longitude.
#[derive(Default)]
pub struct MockEphemeris {
    queries: Mutex<Vec<(String, UniversalInstant)>>,
}

impl MockEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> Vec<(String, UniversalInstant)> {
        self.queries.lock().unwrap().clone()
    }
}

impl EphemerisProvider for MockEphemeris {
    fn position(
        &self,
        key: &str,
        instant: &UniversalInstant,
        _observer: &ObserverLocation,
    ) -> Result<EclipticVector, EphemerisError> {
        self.queries
            .lock()
            .unwrap()
            .push((key.to_string(), *instant));

        let (_, base, rate, distance, z) = TRACKS
            .iter()
            .find(|(name, ..)| *name == key)
            .copied()
            .ok_or_else(|| EphemerisError::UnknownBody {
                key: key.to_string(),
            })?;

        let theta = (base + rate * (instant.julian_day() - J2000_JD)).to_radians();
        Ok(EclipticVector::new(
            distance * theta.cos(),
            distance * theta.sin(),
            z,
        ))
    }
}

/// Answers like [`MockEphemeris`] except for one key, which is unavailable.
pub struct FailingEphemeris {
    pub failing_key: &'static str,
    pub inner: MockEphemeris,
}

impl FailingEphemeris {
    pub fn new(failing_key: &'static str) -> Self {
        Self {
            failing_key,
            inner: MockEphemeris::new(),
        }
    }
}

impl EphemerisProvider for FailingEphemeris {
    fn position(
        &self,
        key: &str,
        instant: &UniversalInstant,
        observer: &ObserverLocation,
    ) -> Result<EclipticVector, EphemerisError> {
        if key == self.failing_key {
            return Err(EphemerisError::Unavailable {
                key: key.to_string(),
                instant: instant.as_datetime(),
                message: "outside ephemeris range".to_string(),
            });
        }
        self.inner.position(key, instant, observer)
    }
}

/// Ephemeris that knows no bodies at all.
pub struct EmptyCatalog;

impl EphemerisProvider for EmptyCatalog {
    fn position(
        &self,
        key: &str,
        _instant: &UniversalInstant,
        _observer: &ObserverLocation,
    ) -> Result<EclipticVector, EphemerisError> {
        Err(EphemerisError::UnknownBody {
            key: key.to_string(),
        })
    }
}
