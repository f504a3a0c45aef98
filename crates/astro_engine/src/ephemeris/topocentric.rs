//! Observer displacement from the geocenter.

use crate::ephemeris::types::{EclipticVector, ObserverLocation};

/// WGS84 equatorial radius in km
const WGS84_A_KM: f64 = 6378.137;
/// WGS84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Astronomical unit in km (IAU 2012)
pub const AU_KM: f64 = 149_597_870.7;

/// Geocentric position of the observer in AU, in the ecliptic frame of date.
///
/// `local_sidereal_deg` orients the observer's meridian against the equinox;
/// `obliquity_deg` rotates the equatorial vector into the ecliptic frame.
pub fn observer_offset_au(
    observer: &ObserverLocation,
    local_sidereal_deg: f64,
    obliquity_deg: f64,
) -> EclipticVector {
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let (sin_phi, cos_phi) = observer.lat.to_radians().sin_cos();
    let (sin_theta, cos_theta) = local_sidereal_deg.to_radians().sin_cos();
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();

    let n = WGS84_A_KM / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    let h = observer.altitude_km();
    let rho_cos = (n + h) * cos_phi / AU_KM;
    let rho_sin = (n * (1.0 - e2) + h) * sin_phi / AU_KM;

    // equatorial of date
    let x = rho_cos * cos_theta;
    let y = rho_cos * sin_theta;
    let z = rho_sin;

    EclipticVector::new(x, y * cos_eps + z * sin_eps, -y * sin_eps + z * cos_eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_earth_sized() {
        let observer = ObserverLocation::new(43.65, -79.38);
        let offset = observer_offset_au(&observer, 123.0, 23.44);
        let km = offset.length() * AU_KM;
        assert!(km > 6356.0 && km < 6379.0, "radius = {km} km");
    }

    #[test]
    fn test_equator_observer_lies_in_equatorial_plane() {
        let observer = ObserverLocation::new(0.0, 0.0);
        let offset = observer_offset_au(&observer, 0.0, 23.44);
        // pointing at the equinox: pure +x, no ecliptic-frame y/z
        assert!((offset.x * AU_KM - WGS84_A_KM).abs() < 1e-6);
        assert!(offset.y.abs() < 1e-15);
        assert!(offset.z.abs() < 1e-15);
    }

    #[test]
    fn test_north_pole_tilts_with_obliquity() {
        let observer = ObserverLocation::new(90.0, 0.0);
        let offset = observer_offset_au(&observer, 0.0, 23.44);
        let eps = 23.44_f64.to_radians();
        // celestial pole seen in the ecliptic frame: (0, sin ε, cos ε)
        assert!((offset.y / offset.z - eps.tan()).abs() < 1e-9);
    }
}
