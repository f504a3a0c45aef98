//! Natal chart snapshots: body longitudes, retrograde flags and approximate
//! chart angles for a local date, time, timezone and location.

pub mod angles;
pub mod bodies;
pub mod chart;
pub mod coords;
pub mod ephemeris;
pub mod error;
pub mod motion;
pub mod sidereal;
pub mod status;
pub mod time;
pub mod zodiac;

pub use angles::ChartAngles;
pub use bodies::Body;
pub use chart::{BodyPosition, ChartAssembler, ChartInput, ChartResponse, ChartResult};
pub use ephemeris::{
    EclipticVector, EphemerisError, EphemerisProvider, ObserverLocation, SwissEphemerisAdapter,
};
pub use error::ChartError;
pub use time::UniversalInstant;
