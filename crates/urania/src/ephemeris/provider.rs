use crate::angles::normalize_degrees;
use crate::ephemeris::types::{
    BodyId, BodyPosition, ChartSnapshot, GeoLocation, HouseCusps, HouseSystem,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by an ephemeris collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris data not available at {path}: {message}")]
    DataUnavailable { path: String, message: String },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: String,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed for {system:?}: {message}")]
    HouseCalculationFailed { system: HouseSystem, message: String },
}

/// Position engine. Implementations wrap an external ephemeris library;
/// calls may block while data files load.
pub trait Ephemeris {
    fn compute_body(&self, instant: DateTime<Utc>, body: &BodyId)
        -> Result<BodyPosition, EphemerisError>;

    fn compute_houses(
        &self,
        instant: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;
}

/// Everything needed to compute one natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
    #[serde(default)]
    pub house_system: HouseSystem,
    #[serde(default = "default_bodies")]
    pub bodies: Vec<BodyId>,
}

fn default_bodies() -> Vec<BodyId> {
    BodyId::STANDARD.to_vec()
}

impl ChartRequest {
    pub fn new(instant: DateTime<Utc>, location: GeoLocation, house_system: HouseSystem) -> Self {
        Self {
            instant,
            location,
            house_system,
            bodies: default_bodies(),
        }
    }
}

/// Compute a chart snapshot by delegating to the ephemeris.
///
/// Longitudes are normalized and retrograde is derived from speed. The
/// first failing body aborts the chart.
pub fn compute_chart(
    ephemeris: &dyn Ephemeris,
    request: &ChartRequest,
) -> Result<ChartSnapshot, EphemerisError> {
    let mut bodies = Vec::with_capacity(request.bodies.len());
    for id in &request.bodies {
        let raw = ephemeris.compute_body(request.instant, id)?;
        bodies.push(BodyPosition::new(id.clone(), raw.longitude, raw.latitude, raw.speed));
    }

    let mut houses = ephemeris.compute_houses(request.instant, request.location, request.house_system)?;
    for cusp in houses.cusps.iter_mut() {
        *cusp = normalize_degrees(*cusp);
    }
    houses.ascendant = normalize_degrees(houses.ascendant);
    houses.midheaven = normalize_degrees(houses.midheaven);
    houses.system = request.house_system;

    let node = bodies
        .iter()
        .find(|b| b.id.is_node())
        .map(|b| b.longitude);

    log::debug!(
        "computed chart at {} ({} bodies, {} houses)",
        request.instant,
        bodies.len(),
        request.house_system.display_name()
    );

    Ok(ChartSnapshot { bodies, houses, node })
}
