//! Sidereal time and the obliquity of the ecliptic.
//!
//! All functions take a UT Julian Day; UT1 is approximated by UTC, and the
//! same Julian centuries are used where the models ask for TT.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.
//! - Mean obliquity: IAU 2006 (Hilton et al. 2006).
//! - Nutation in longitude: leading lunisolar terms of IAU 2000B,
//!   IERS Conventions 2010, Tables 5.2e and 5.3b.

use crate::time::{UniversalInstant, J2000_JD};

const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Leading IAU 2000B lunisolar terms for Δψ.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S_i, S'_i]`, amplitudes in 0.1 μas.
#[rustfmt::skip]
const NUTATION_TERMS: [[i64; 7]; 5] = [
    //  nl  nl'  nF   nD   nΩ       S_i      S'_i
    [   0,   0,   0,   0,   1, -172064161, -174666],
    [   0,   0,   2,  -2,   2,  -13170906,   -1675],
    [   0,   0,   2,   0,   2,   -2276413,    -234],
    [   0,   0,   0,   0,   2,    2074554,     207],
    [   0,   1,   0,   0,   0,    1475877,   -3633],
];

fn centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Earth Rotation Angle in degrees, [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (360.0 * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = centuries(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / ARCSEC_PER_DEGREE).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = centuries(jd);
    let arcsec = 84381.406
        + t * (-46.836769
            + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 + t * -0.0000000434))));
    arcsec / ARCSEC_PER_DEGREE
}

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let to_rad = |arcsec: f64| (arcsec / ARCSEC_PER_DEGREE).to_radians();

    let l = to_rad(485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4);
    let lp = to_rad(1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4);
    let f = to_rad(335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4);
    let d = to_rad(1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4);
    let om = to_rad(450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4);

    [l, lp, f, d, om]
}

/// Nutation in longitude Δψ in arcseconds.
pub fn nutation_in_longitude_arcsec(jd: f64) -> f64 {
    let t = centuries(jd);
    let args = fundamental_arguments(t);

    NUTATION_TERMS
        .iter()
        .map(|row| {
            let arg: f64 = args
                .iter()
                .zip(&row[..5])
                .map(|(a, &n)| a * n as f64)
                .sum();
            (row[5] as f64 + row[6] as f64 * t) * 1e-7 * arg.sin()
        })
        .sum()
}

/// Equation of the equinoxes (Δψ·cos ε) in degrees.
pub fn equation_of_equinoxes_deg(jd: f64) -> f64 {
    let dpsi_deg = nutation_in_longitude_arcsec(jd) / ARCSEC_PER_DEGREE;
    dpsi_deg * mean_obliquity_deg(jd).to_radians().cos()
}

/// Greenwich Apparent Sidereal Time in degrees, [0, 360).
pub fn gast_deg(jd_ut: f64) -> f64 {
    (gmst_deg(jd_ut) + equation_of_equinoxes_deg(jd_ut)).rem_euclid(360.0)
}

/// Local apparent sidereal time in degrees, [0, 360), for an east-positive
/// longitude in degrees.
pub fn local_apparent_sidereal_deg(instant: &UniversalInstant, longitude_east_deg: f64) -> f64 {
    (gast_deg(instant.julian_day()) + longitude_east_deg).rem_euclid(360.0)
}
