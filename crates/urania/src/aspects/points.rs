//! Assembly of the aspectable point set for one chart.

use crate::ephemeris::types::{BodyId, ChartSnapshot};
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const ASCENDANT_NAME: &str = "ASC";
pub const MIDHEAVEN_NAME: &str = "MC";

/// Orb-weighting class of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyClass {
    Luminary,
    Personal,
    Social,
    Outer,
    SensitivePoint,
}

/// A single aspectable location on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    pub class: BodyClass,
}

impl Point {
    fn from_body(id: &BodyId, longitude: f64) -> Self {
        Self {
            name: id.name().to_string(),
            longitude,
            class: id.class(),
        }
    }

    fn sensitive(name: &str, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            longitude,
            class: BodyClass::SensitivePoint,
        }
    }
}

/// Which sensitive points join the aspect set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointInclusion {
    pub asc: bool,
    pub mc: bool,
    pub node: bool,
    pub chiron: bool,
    pub lilith: bool,
}

impl Default for PointInclusion {
    fn default() -> Self {
        Self {
            asc: true,
            mc: true,
            node: true,
            chiron: true,
            lilith: true,
        }
    }
}

/// Build the ordered point set: planetary bodies in input order, then ASC,
/// MC, node, Chiron and Lilith as their flags allow.
///
/// Node, Chiron and Lilith body results are only ever added through their
/// flags, so a chart that carries them in its body list does not produce
/// them twice.
pub fn assemble_points(
    chart: &ChartSnapshot,
    inclusion: &PointInclusion,
) -> Result<Vec<Point>, ChartError> {
    let mut points: Vec<Point> = chart
        .bodies
        .iter()
        .filter(|b| !b.id.is_optional_point())
        .map(|b| Point::from_body(&b.id, b.longitude))
        .collect();

    if inclusion.asc {
        points.push(Point::sensitive(ASCENDANT_NAME, chart.ascendant()));
    }
    if inclusion.mc {
        points.push(Point::sensitive(MIDHEAVEN_NAME, chart.midheaven()));
    }
    if inclusion.node {
        if let Some((id, lon)) = chart.node() {
            points.push(Point::from_body(&id, lon));
        }
    }
    if inclusion.chiron {
        if let Some(body) = chart.body(&BodyId::Chiron) {
            points.push(Point::from_body(&body.id, body.longitude));
        }
    }
    if inclusion.lilith {
        if let Some(body) = chart.body(&BodyId::Lilith) {
            points.push(Point::from_body(&body.id, body.longitude));
        }
    }

    let mut seen = HashSet::with_capacity(points.len());
    for p in &points {
        if !seen.insert(p.name.as_str()) {
            return Err(ChartError::DuplicatePointName(p.name.clone()));
        }
    }

    log::debug!("assembled {} aspectable points", points.len());
    Ok(points)
}
