use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Observer on the Earth's surface, at sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Geodetic latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

impl ObserverLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Height above the ellipsoid in kilometres. Always sea level.
    pub fn altitude_km(&self) -> f64 {
        0.0
    }
}

/// Cartesian position in an ecliptic-aligned frame.
///
/// x points at the equinox, z at the north ecliptic pole. The distance unit
/// is whatever the provider uses; only the direction matters downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EclipticVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EclipticVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Sub for EclipticVector {
    type Output = EclipticVector;

    fn sub(self, rhs: Self) -> Self::Output {
        EclipticVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
