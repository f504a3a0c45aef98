//! Reduction of ecliptic position vectors to zodiacal longitude.

use crate::ephemeris::EclipticVector;
use crate::error::ChartError;

/// Wrap any angle in degrees into [0, 360).
///
/// The 360 bias before the second modulo keeps negative inputs from
/// producing negative results.
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Ecliptic longitude of `position` in degrees, [0, 360).
///
/// Only the direction of the vector's projection onto the ecliptic plane
/// matters; the z component (ecliptic latitude) and the length are
/// discarded. A vector with no in-plane component (the zero vector, or one
/// pointing at an ecliptic pole) has no longitude and is rejected.
pub fn ecliptic_longitude(position: &EclipticVector) -> Result<f64, ChartError> {
    let EclipticVector { x, y, .. } = *position;
    if !(x.is_finite() && y.is_finite()) || (x == 0.0 && y == 0.0) {
        return Err(ChartError::DegenerateVector);
    }
    Ok((y.atan2(x).to_degrees() + 360.0) % 360.0)
}
