use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::topocentric::observer_offset_au;
use crate::ephemeris::types::{EclipticVector, ObserverLocation};
use crate::sidereal;
use crate::time::UniversalInstant;
use log::{debug, info, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use swisseph::swe::{calc_ut, set_ephe_path};
use thiserror::Error;

pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Errors raised while setting up the Swiss Ephemeris
#[derive(Error, Debug)]
pub enum EphemerisSetupError {
    #[error("Swiss Ephemeris data directory {path} does not exist; set [ephemeris] path or $SWISS_EPHEMERIS_PATH")]
    MissingDirectory { path: String },

    #[error("Swiss Ephemeris data directory {path} is not valid UTF-8")]
    NonUtf8Path { path: String },
}

// Swiss Ephemeris planet numbers. The barycenter keys map onto the planet
// numbers; at chart precision the two coincide.
const SWISS_BODIES: &[(&str, i32)] = &[
    ("sun", 0),
    ("moon", 1),
    ("mercury", 2),
    ("venus", 3),
    ("mars", 4),
    ("jupiter barycenter", 5),
    ("saturn barycenter", 6),
    ("uranus barycenter", 7),
    ("neptune barycenter", 8),
    ("pluto barycenter", 9),
];

/// FLG_SWIEPH: use Swiss Ephemeris files (Moshier fallback when absent)
const FLG_SWIEPH: i32 = 2;
/// FLG_XYZ: cartesian instead of polar coordinates
const FLG_XYZ: i32 = 4096;

/// Serializes every call into the Swiss library, whose data path and file
/// handles are process-global. Held for one synchronous call at a time.
static LIBRARY_LOCK: Mutex<()> = Mutex::new(());

/// Swiss Ephemeris backed [`EphemerisProvider`].
///
/// Construction points the library at the data directory; build one adapter
/// at startup and share it.
#[derive(Debug)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Resolve the data directory (argument, then `$SWISS_EPHEMERIS_PATH`,
    /// then the system default) and hand it to the library.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisSetupError> {
        let path = ephemeris_path
            .or_else(|| env::var_os(EPHEMERIS_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EPHEMERIS_PATH));

        let path_str = path.to_str().ok_or_else(|| EphemerisSetupError::NonUtf8Path {
            path: path.display().to_string(),
        })?;
        if !path.is_dir() {
            return Err(EphemerisSetupError::MissingDirectory {
                path: path_str.to_string(),
            });
        }

        {
            let _guard = LIBRARY_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            set_ephe_path(path_str);
        }
        info!("Swiss Ephemeris reading data files from {path_str}");

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Swiss planet number for a catalog key
    pub fn planet_code(key: &str) -> Option<i32> {
        SWISS_BODIES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, code)| *code)
    }

    /// Geocentric cartesian ecliptic-of-date position in AU
    fn geocentric(
        &self,
        key: &str,
        code: i32,
        instant: &UniversalInstant,
    ) -> Result<EclipticVector, EphemerisError> {
        let jd = instant.julian_day();
        let flags = FLG_SWIEPH | FLG_XYZ;

        let result = {
            let _guard = LIBRARY_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            calc_ut(jd, code as u32, flags as u32)
        }
        .map_err(|e| EphemerisError::Unavailable {
            key: key.to_string(),
            instant: instant.as_datetime(),
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        Ok(EclipticVector::new(out[0], out[1], out[2]))
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn position(
        &self,
        key: &str,
        instant: &UniversalInstant,
        observer: &ObserverLocation,
    ) -> Result<EclipticVector, EphemerisError> {
        let code = Self::planet_code(key).ok_or_else(|| EphemerisError::UnknownBody {
            key: key.to_string(),
        })?;

        let geocentric = self.geocentric(key, code, instant).map_err(|e| {
            warn!("{e}");
            e
        })?;

        let jd = instant.julian_day();
        let offset = observer_offset_au(
            observer,
            sidereal::local_apparent_sidereal_deg(instant, observer.lon),
            sidereal::mean_obliquity_deg(jd),
        );
        let topocentric = geocentric - offset;
        debug!("{key} at {instant}: geocentric {geocentric:?}, topocentric {topocentric:?}");

        Ok(topocentric)
    }
}
