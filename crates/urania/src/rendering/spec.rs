use crate::angles::WheelPoint;
use crate::aspects::types::LegendEntry;
use crate::rendering::primitives::{Color, Shape};
use serde::{Deserialize, Serialize};

/// Legend row for a drawn body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyLegendEntry {
    pub name: String,
    pub color: Color,
    pub retrograde: bool,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: WheelPoint,
    pub background_color: Color,
    /// Back to front
    pub shapes: Vec<Shape>,
    pub aspect_legend: Vec<LegendEntry>,
    pub body_legend: Vec<BodyLegendEntry>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: WheelPoint::new(width / 2.0, height / 2.0),
            background_color: Color::BLACK,
            shapes: Vec::new(),
            aspect_legend: Vec::new(),
            body_legend: Vec::new(),
        }
    }

    pub fn aspect_lines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::AspectLine { .. }))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
