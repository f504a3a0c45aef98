use serde::Serialize;

/// Liveness payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Report liveness. Touches no ephemeris or chart state.
pub fn health() -> HealthStatus {
    HealthStatus { status: "ok" }
}
