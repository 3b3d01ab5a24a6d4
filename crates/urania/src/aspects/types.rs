use crate::aspects::catalog::AspectCatalog;
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};

/// The aspect selected for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    /// Label of the matched definition ("Trine")
    pub label: String,
    /// Exact angle of the matched definition
    pub angle: f64,
    /// |separation - angle|
    pub delta: f64,
    /// base orb × pair scale at the time of the match
    pub allowed_orb: f64,
    pub color: Color,
    pub width: f32,
}

/// Resolved relationship between two distinct points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectEdge {
    pub point_a: String,
    pub point_b: String,
    /// Shortest angular distance, `[0, 180]`
    pub separation: f64,
    pub matched: Option<AspectMatch>,
}

impl AspectEdge {
    pub fn involves(&self, name: &str) -> bool {
        self.point_a == name || self.point_b == name
    }

    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.point_a == a && self.point_b == b) || (self.point_a == b && self.point_b == a)
    }

    /// Within 0.1° of exact.
    pub fn is_exact(&self) -> bool {
        self.matched.as_ref().is_some_and(|m| m.delta < 0.1)
    }
}

/// All pair edges of one resolve pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectSet {
    pub edges: Vec<AspectEdge>,
}

/// Legend row: one per catalog definition that matched at least once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub angle: f64,
    pub color: Color,
    pub width: f32,
    pub count: usize,
}

impl AspectSet {
    /// Edges that carry a match, as drawn by a renderer.
    pub fn matched(&self) -> impl Iterator<Item = &AspectEdge> {
        self.edges.iter().filter(|e| e.matched.is_some())
    }

    pub fn between(&self, a: &str, b: &str) -> Option<&AspectEdge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// Match counts per definition, in catalog order.
    pub fn legend(&self, catalog: &AspectCatalog) -> Vec<LegendEntry> {
        catalog
            .definitions()
            .iter()
            .filter_map(|def| {
                let count = self
                    .matched()
                    .filter(|e| e.matched.as_ref().is_some_and(|m| m.label == def.label))
                    .count();
                (count > 0).then(|| LegendEntry {
                    label: def.label.clone(),
                    angle: def.angle,
                    color: def.color,
                    width: def.width,
                    count,
                })
            })
            .collect()
    }
}
