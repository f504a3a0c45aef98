pub mod adapter;
pub mod provider;
pub mod topocentric;
pub mod types;

pub use adapter::{EphemerisSetupError, SwissEphemerisAdapter};
pub use provider::{EphemerisError, EphemerisProvider};
pub use types::{EclipticVector, ObserverLocation};
