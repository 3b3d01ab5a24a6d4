use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};

/// Marker color for a body by display name.
pub fn body_color(name: &str) -> Color {
    match name {
        "Sun" => Color::rgba(255, 212, 0, 255),
        "Moon" => Color::rgba(210, 210, 210, 255),
        "Mercury" => Color::rgba(160, 160, 160, 255),
        "Venus" => Color::rgba(255, 140, 170, 255),
        "Mars" => Color::rgba(230, 60, 60, 255),
        "Jupiter" => Color::rgba(235, 170, 60, 255),
        "Saturn" => Color::rgba(160, 120, 70, 255),
        "Uranus" => Color::rgba(80, 200, 200, 255),
        "Neptune" => Color::rgba(80, 140, 220, 255),
        "Pluto" => Color::rgba(170, 80, 190, 255),
        "True Node" | "Mean Node" => Color::rgba(120, 120, 120, 255),
        "Chiron" => Color::rgba(120, 170, 80, 255),
        "Lilith" => Color::rgba(210, 80, 180, 255),
        _ => Color::rgba(220, 220, 220, 255),
    }
}

/// Colors and stroke widths of the wheel furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub background_color: Color,
    pub outer_ring: Color,
    pub inner_ring: Color,
    pub sign_boundary: Color,
    pub sign_label: Color,
    pub tick: Color,
    pub cusp: Color,
    pub house_number: Color,
    pub ascendant_axis: Color,
    pub descendant_axis: Color,
    pub midheaven_axis: Color,
    pub imum_coeli_axis: Color,
    pub center_marker: Color,
    pub cusp_width: f32,
    pub axis_width: f32,
    pub label_size: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_color: Color::rgba(18, 18, 22, 255),
            outer_ring: Color::rgba(200, 200, 200, 255),
            inner_ring: Color::rgba(90, 90, 90, 255),
            sign_boundary: Color::rgba(160, 160, 160, 255),
            sign_label: Color::rgba(220, 220, 220, 255),
            tick: Color::rgba(120, 120, 120, 255),
            cusp: Color::rgba(190, 190, 190, 255),
            house_number: Color::rgba(200, 200, 200, 255),
            ascendant_axis: Color::rgba(255, 255, 255, 200),
            descendant_axis: Color::rgba(255, 255, 255, 120),
            midheaven_axis: Color::rgba(200, 200, 255, 180),
            imum_coeli_axis: Color::rgba(200, 200, 255, 120),
            center_marker: Color::rgba(180, 180, 180, 220),
            cusp_width: 3.0,
            axis_width: 2.5,
            label_size: 13.0,
        }
    }
}
