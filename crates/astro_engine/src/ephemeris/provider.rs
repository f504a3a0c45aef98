use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ephemeris::types::{EclipticVector, ObserverLocation};
use crate::time::UniversalInstant;

/// Errors an ephemeris provider can report for a single query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Unknown body: {key}")]
    UnknownBody { key: String },
    #[error("Failed to calculate position for {key} at {instant}: {message}")]
    Unavailable {
        key: String,
        instant: DateTime<Utc>,
        message: String,
    },
}

/// Source of body positions.
///
/// Implementations are built once at startup and shared read-only between
/// concurrent chart computations, hence `Send + Sync` and `&self`.
pub trait EphemerisProvider: Send + Sync {
    /// Observer-relative (topocentric) position of the body named by
    /// `key` at `instant`, in an ecliptic-aligned frame.
    fn position(
        &self,
        key: &str,
        instant: &UniversalInstant,
        observer: &ObserverLocation,
    ) -> Result<EclipticVector, EphemerisError>;
}
