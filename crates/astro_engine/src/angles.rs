//! Ascendant and Midheaven, sidereal-time approximation.
//!
//! Both angles are read straight off local apparent sidereal time:
//! `mc = LAST` and `asc = LAST + 90°`. This is a deliberate simplification.
//! A rigorous MC would project the meridian onto the ecliptic, and a rigorous
//! Ascendant needs the observer's latitude and the obliquity. Here longitude
//! enters only through local sidereal time and latitude has no effect at all.
//! Replacing this with the oblique-ascension formulas changes the output
//! contract and must ship as a versioned behaviour change.

use serde::{Deserialize, Serialize};

use crate::coords::normalize_degrees;
use crate::ephemeris::ObserverLocation;
use crate::sidereal;
use crate::time::UniversalInstant;

/// Chart angles in degrees, [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    #[serde(rename = "asc")]
    pub ascendant: f64,
    #[serde(rename = "mc")]
    pub midheaven: f64,
}

/// Approximate the Ascendant and Midheaven for `observer` at `instant`.
///
/// `observer.lat` is accepted so callers need not change when a latitude
/// dependent formula lands; it is currently unused.
pub fn approximate(instant: &UniversalInstant, observer: &ObserverLocation) -> ChartAngles {
    let sidereal_deg = sidereal::local_apparent_sidereal_deg(instant, observer.lon);

    ChartAngles {
        ascendant: normalize_degrees(sidereal_deg + 90.0),
        midheaven: normalize_degrees(sidereal_deg),
    }
}
