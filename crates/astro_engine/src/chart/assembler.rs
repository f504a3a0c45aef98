use log::{debug, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::angles;
use crate::bodies::Body;
use crate::chart::types::{
    BodyPosition, ChartInput, ChartResponse, ChartResult, Unimplemented, ENGINE_DESCRIPTION,
};
use crate::coords::ecliptic_longitude;
use crate::ephemeris::{EphemerisProvider, ObserverLocation};
use crate::error::ChartError;
use crate::motion;
use crate::time::{self, UniversalInstant};

/// Builds charts against a shared, read-only ephemeris.
///
/// The provider is constructed once by the caller and injected here; the
/// assembler itself holds no per-request state and can be shared across
/// threads.
#[derive(Clone)]
pub struct ChartAssembler {
    provider: Arc<dyn EphemerisProvider>,
}

impl ChartAssembler {
    pub fn new(provider: Arc<dyn EphemerisProvider>) -> Self {
        Self { provider }
    }

    /// Compute the chart for `input`.
    ///
    /// Any failure (time normalization, ephemeris lookup, coordinate
    /// reduction) aborts the whole chart; there are no partial results.
    pub fn assemble(&self, input: &ChartInput) -> Result<ChartResult, ChartError> {
        let instant = time::normalize(input.date(), input.time(), input.timezone())?;
        let previous = instant
            .earlier_by(motion::sample_interval())
            .ok_or_else(|| ChartError::EphemerisUnavailable {
                key: Body::ALL.map(Body::catalog_key).join(", "),
                instant: instant.as_datetime(),
                message: "previous motion sample is outside the representable time range"
                    .to_string(),
            })?;
        let observer = input.observer();

        let mut planets = BTreeMap::new();
        for body in Body::ALL {
            let position = self.body_position(body, &instant, &previous, &observer)?;
            planets.insert(body, position);
        }

        Ok(ChartResult {
            angles: angles::approximate(&instant, &observer),
            planets,
            houses: Unimplemented,
            true_node: Unimplemented,
        })
    }

    /// Compute the chart and wrap it in the response envelope.
    pub fn respond(&self, input: ChartInput) -> Result<ChartResponse, ChartError> {
        let chart = self.assemble(&input)?;
        Ok(ChartResponse {
            engine: ENGINE_DESCRIPTION.to_string(),
            input,
            chart,
        })
    }

    fn body_position(
        &self,
        body: Body,
        instant: &UniversalInstant,
        previous: &UniversalInstant,
        observer: &ObserverLocation,
    ) -> Result<BodyPosition, ChartError> {
        let lon_now = self.sample_longitude(body, instant, observer)?;
        let lon_previous = self.sample_longitude(body, previous, observer)?;
        let retrograde = motion::classify(lon_now, lon_previous);

        debug!(
            "{body}: {lon_now:.6} (an hour earlier {lon_previous:.6}){}",
            if retrograde { " R" } else { "" }
        );

        Ok(BodyPosition {
            lon: lon_now,
            retrograde,
        })
    }

    fn sample_longitude(
        &self,
        body: Body,
        instant: &UniversalInstant,
        observer: &ObserverLocation,
    ) -> Result<f64, ChartError> {
        let vector = self
            .provider
            .position(body.catalog_key(), instant, observer)
            .map_err(|e| {
                warn!("ephemeris query for {body} failed: {e}");
                e
            })?;
        ecliptic_longitude(&vector)
    }
}
