use crate::angles::normalize_degrees;
use crate::aspects::points::BodyClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, south negative
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

/// Identity of a computed body.
///
/// Sensitive points are looked up by identity, never by their position in
/// the body list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    TrueNode,
    MeanNode,
    Chiron,
    Lilith,
    Other(String),
}

impl BodyId {
    /// Bodies requested from the ephemeris for a standard natal chart.
    pub const STANDARD: [BodyId; 13] = [
        BodyId::Sun,
        BodyId::Moon,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
        BodyId::TrueNode,
        BodyId::Chiron,
        BodyId::Lilith,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "Sun" => BodyId::Sun,
            "Moon" => BodyId::Moon,
            "Mercury" => BodyId::Mercury,
            "Venus" => BodyId::Venus,
            "Mars" => BodyId::Mars,
            "Jupiter" => BodyId::Jupiter,
            "Saturn" => BodyId::Saturn,
            "Uranus" => BodyId::Uranus,
            "Neptune" => BodyId::Neptune,
            "Pluto" => BodyId::Pluto,
            "True Node" => BodyId::TrueNode,
            "Mean Node" => BodyId::MeanNode,
            "Chiron" => BodyId::Chiron,
            "Lilith" => BodyId::Lilith,
            other => BodyId::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Moon => "Moon",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Pluto => "Pluto",
            BodyId::TrueNode => "True Node",
            BodyId::MeanNode => "Mean Node",
            BodyId::Chiron => "Chiron",
            BodyId::Lilith => "Lilith",
            BodyId::Other(name) => name,
        }
    }

    /// Fixed name → class table.
    pub fn class(&self) -> BodyClass {
        match self {
            BodyId::Sun | BodyId::Moon => BodyClass::Luminary,
            BodyId::Mercury | BodyId::Venus | BodyId::Mars => BodyClass::Personal,
            BodyId::Jupiter | BodyId::Saturn => BodyClass::Social,
            BodyId::Uranus | BodyId::Neptune | BodyId::Pluto => BodyClass::Outer,
            _ => BodyClass::SensitivePoint,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, BodyId::TrueNode | BodyId::MeanNode)
    }

    /// Bodies whose inclusion in the aspect set is controlled by a flag.
    pub fn is_optional_point(&self) -> bool {
        matches!(
            self,
            BodyId::TrueNode | BodyId::MeanNode | BodyId::Chiron | BodyId::Lilith
        )
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for BodyId {
    fn from(value: String) -> Self {
        BodyId::from_name(&value)
    }
}

impl From<BodyId> for String {
    fn from(value: BodyId) -> Self {
        value.name().to_string()
    }
}

/// One body result from the ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub id: BodyId,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    #[serde(default)]
    pub retrograde: bool,
}

impl BodyPosition {
    pub fn new(id: BodyId, longitude: f64, latitude: f64, speed: f64) -> Self {
        Self {
            id,
            longitude: normalize_degrees(longitude),
            latitude,
            speed,
            retrograde: speed < 0.0,
        }
    }
}

/// House system codes understood by the ephemeris collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Equal,
    Koch,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 4] = [
        HouseSystem::Placidus,
        HouseSystem::WholeSign,
        HouseSystem::Equal,
        HouseSystem::Koch,
    ];

    /// Single-letter code as used by Swiss Ephemeris.
    pub fn code(&self) -> char {
        match self {
            HouseSystem::Placidus => 'P',
            HouseSystem::WholeSign => 'W',
            HouseSystem::Equal => 'E',
            HouseSystem::Koch => 'K',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.code() == code.to_ascii_uppercase())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Placidus",
            HouseSystem::WholeSign => "Whole Sign",
            HouseSystem::Equal => "Equal",
            HouseSystem::Koch => "Koch",
        }
    }
}

/// House cusps and angles for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    #[serde(default)]
    pub system: HouseSystem,
    /// Cusp longitudes, house 1 first
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

impl HouseCusps {
    pub fn descendant(&self) -> f64 {
        normalize_degrees(self.ascendant + 180.0)
    }

    pub fn imum_coeli(&self) -> f64 {
        normalize_degrees(self.midheaven + 180.0)
    }

    /// House (1-12) containing a longitude.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let lon = normalize_degrees(longitude);
        for i in 0..12 {
            let start = normalize_degrees(self.cusps[i]);
            let end = normalize_degrees(self.cusps[(i + 1) % 12]);
            let inside = if end < start {
                lon >= start || lon < end
            } else {
                lon >= start && lon < end
            };
            if inside {
                return i as u8 + 1;
            }
        }
        1
    }
}

/// Snapshot of one computed chart, as produced by the ephemeris collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// Body results in computation order
    pub bodies: Vec<BodyPosition>,
    pub houses: HouseCusps,
    /// Lunar node longitude. When absent, a node body in `bodies` is used.
    #[serde(default)]
    pub node: Option<f64>,
}

impl ChartSnapshot {
    pub fn new(bodies: Vec<BodyPosition>, houses: HouseCusps) -> Self {
        Self {
            bodies,
            houses,
            node: None,
        }
    }

    pub fn body(&self, id: &BodyId) -> Option<&BodyPosition> {
        self.bodies.iter().find(|b| &b.id == id)
    }

    /// Node longitude and display name, looked up by identity.
    pub fn node(&self) -> Option<(BodyId, f64)> {
        let body = self
            .body(&BodyId::TrueNode)
            .or_else(|| self.body(&BodyId::MeanNode));
        match (self.node, body) {
            (Some(lon), Some(b)) => Some((b.id.clone(), lon)),
            (Some(lon), None) => Some((BodyId::TrueNode, lon)),
            (None, Some(b)) => Some((b.id.clone(), b.longitude)),
            (None, None) => None,
        }
    }

    pub fn ascendant(&self) -> f64 {
        self.houses.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.houses.midheaven
    }
}
