//! Projection of chart longitudes onto the 2D wheel.
//!
//! The Ascendant is pinned to 9 o'clock and longitudes run
//! counter-clockwise. All radii are fractions of the canvas size.

use crate::angles::{
    normalize_degrees, polar_to_cartesian, project_to_wheel_angle, WheelPoint, ZodiacSign,
};
use crate::aspects::points::Point;
use crate::ephemeris::types::ChartSnapshot;
use serde::{Deserialize, Serialize};

const ROMAN: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Ring ratios of the wheel, relative to the canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelLayout {
    pub size: f32,
    pub outer_ratio: f32,
    pub inner_ratio: f32,
    pub planet_ratio: f32,
    /// Aspect lines end this far inside the planet ring
    pub line_inset_ratio: f32,
    pub minor_tick_ratio: f32,
    pub major_tick_ratio: f32,
    /// Cusp lines run from the outer ring inward by this much
    pub cusp_length_ratio: f32,
    pub marker_ratio: f32,
    /// Body labels sit this far outside the planet ring
    pub label_offset_ratio: f32,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            size: 680.0,
            outer_ratio: 0.48,
            inner_ratio: 0.33,
            planet_ratio: 0.31,
            line_inset_ratio: 0.03,
            minor_tick_ratio: 0.015,
            major_tick_ratio: 0.03,
            cusp_length_ratio: 0.06,
            marker_ratio: 0.012,
            label_offset_ratio: 0.04,
        }
    }
}

impl WheelLayout {
    pub fn with_size(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn center(&self) -> WheelPoint {
        WheelPoint::new(self.size * 0.5, self.size * 0.5)
    }

    pub fn outer_radius(&self) -> f32 {
        self.size * self.outer_ratio
    }

    pub fn inner_radius(&self) -> f32 {
        self.size * self.inner_ratio
    }

    pub fn planet_radius(&self) -> f32 {
        self.size * self.planet_ratio
    }

    pub fn line_radius(&self) -> f32 {
        self.planet_radius() - self.size * self.line_inset_ratio
    }

    pub fn house_number_radius(&self) -> f32 {
        (self.inner_radius() + self.planet_radius()) * 0.5
    }

    pub fn sign_label_radius(&self) -> f32 {
        (self.outer_radius() + self.inner_radius()) * 0.5
    }

    pub fn cusp_inner_radius(&self) -> f32 {
        self.outer_radius() - self.size * self.cusp_length_ratio
    }

    pub fn tick_length(&self, major: bool) -> f32 {
        if major {
            self.size * self.major_tick_ratio
        } else {
            self.size * self.minor_tick_ratio
        }
    }

    pub fn marker_radius(&self) -> f32 {
        self.size * self.marker_ratio
    }

    pub fn label_radius(&self) -> f32 {
        self.planet_radius() + self.size * self.label_offset_ratio
    }
}

/// A point placed on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub name: String,
    pub longitude: f64,
    pub wheel_angle: f64,
    /// Marker position on the planet ring
    pub marker: WheelPoint,
    /// Label position just outside the planet ring
    pub label: WheelPoint,
    /// Aspect-line endpoint
    pub line_anchor: WheelPoint,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCusp {
    /// 1-12
    pub house: u8,
    pub numeral: String,
    pub longitude: f64,
    pub wheel_angle: f64,
    pub outer: WheelPoint,
    pub inner: WheelPoint,
    pub number_position: WheelPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSign {
    pub sign: ZodiacSign,
    pub start_longitude: f64,
    pub boundary_outer: WheelPoint,
    pub boundary_inner: WheelPoint,
    pub label_position: WheelPoint,
}

/// Degree tick on the outer ring, every 5°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeTick {
    pub longitude: f64,
    pub major: bool,
    pub outer: WheelPoint,
    pub inner: WheelPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedAxis {
    pub longitude: f64,
    pub wheel_angle: f64,
    pub outer: WheelPoint,
    pub inner: WheelPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngles {
    pub ascendant: ProjectedAxis,
    pub descendant: ProjectedAxis,
    pub midheaven: ProjectedAxis,
    pub imum_coeli: ProjectedAxis,
}

/// Everything a renderer needs to draw one chart wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub layout: WheelLayout,
    pub center: WheelPoint,
    /// Ascendant longitude the wheel is rotated by
    pub anchor: f64,
    pub points: Vec<ProjectedPoint>,
    pub cusps: Vec<ProjectedCusp>,
    pub signs: Vec<ProjectedSign>,
    pub ticks: Vec<DegreeTick>,
    pub axes: AxisAngles,
}

impl ChartGeometry {
    pub fn point(&self, name: &str) -> Option<&ProjectedPoint> {
        self.points.iter().find(|p| p.name == name)
    }
}

/// Stateless wheel projector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartProjector;

impl ChartProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project(
        &self,
        chart: &ChartSnapshot,
        points: &[Point],
        layout: &WheelLayout,
    ) -> ChartGeometry {
        let anchor = normalize_degrees(chart.ascendant());
        let center = layout.center();
        let at = |radius: f32, angle: f64| polar_to_cartesian(center, radius, angle);

        let points = points
            .iter()
            .map(|p| {
                let wheel_angle = project_to_wheel_angle(p.longitude, anchor);
                let retrograde = chart
                    .bodies
                    .iter()
                    .find(|b| b.id.name() == p.name)
                    .is_some_and(|b| b.retrograde);
                ProjectedPoint {
                    name: p.name.clone(),
                    longitude: normalize_degrees(p.longitude),
                    wheel_angle,
                    marker: at(layout.planet_radius(), wheel_angle),
                    label: at(layout.label_radius(), wheel_angle),
                    line_anchor: at(layout.line_radius(), wheel_angle),
                    retrograde,
                }
            })
            .collect();

        let cusps = chart
            .houses
            .cusps
            .iter()
            .zip(ROMAN.iter())
            .enumerate()
            .map(|(i, (&cusp, numeral))| {
                let longitude = normalize_degrees(cusp);
                let wheel_angle = project_to_wheel_angle(longitude, anchor);
                ProjectedCusp {
                    house: i as u8 + 1,
                    numeral: numeral.to_string(),
                    longitude,
                    wheel_angle,
                    outer: at(layout.outer_radius(), wheel_angle),
                    inner: at(layout.cusp_inner_radius(), wheel_angle),
                    number_position: at(layout.house_number_radius(), wheel_angle),
                }
            })
            .collect();

        let signs = ZodiacSign::ALL
            .iter()
            .map(|&sign| {
                let start = sign.start_longitude();
                let boundary = project_to_wheel_angle(start, anchor);
                let middle = project_to_wheel_angle(start + 15.0, anchor);
                ProjectedSign {
                    sign,
                    start_longitude: start,
                    boundary_outer: at(layout.outer_radius(), boundary),
                    boundary_inner: at(layout.inner_radius(), boundary),
                    label_position: at(layout.sign_label_radius(), middle),
                }
            })
            .collect();

        let ticks = (0..72u32)
            .map(|step| {
                let longitude = f64::from(step * 5);
                let major = step % 6 == 0;
                let wheel_angle = project_to_wheel_angle(longitude, anchor);
                DegreeTick {
                    longitude,
                    major,
                    outer: at(layout.outer_radius(), wheel_angle),
                    inner: at(layout.outer_radius() - layout.tick_length(major), wheel_angle),
                }
            })
            .collect();

        let axis = |longitude: f64| {
            let longitude = normalize_degrees(longitude);
            let wheel_angle = project_to_wheel_angle(longitude, anchor);
            ProjectedAxis {
                longitude,
                wheel_angle,
                outer: at(layout.outer_radius(), wheel_angle),
                inner: at(layout.inner_radius(), wheel_angle),
            }
        };
        let axes = AxisAngles {
            ascendant: axis(anchor),
            descendant: axis(chart.houses.descendant()),
            midheaven: axis(chart.midheaven()),
            imum_coeli: axis(chart.houses.imum_coeli()),
        };

        ChartGeometry {
            layout: *layout,
            center,
            anchor,
            points,
            cusps,
            signs,
            ticks,
            axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::points::BodyClass;
    use crate::ephemeris::types::{BodyId, BodyPosition, HouseCusps, HouseSystem};

    fn chart(asc: f64) -> ChartSnapshot {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_degrees(asc + i as f64 * 30.0);
        }
        ChartSnapshot::new(
            vec![BodyPosition::new(BodyId::Mars, asc + 90.0, 0.0, -0.2)],
            HouseCusps {
                system: HouseSystem::Equal,
                cusps,
                ascendant: asc,
                midheaven: normalize_degrees(asc + 270.0),
            },
        )
    }

    #[test]
    fn test_layout_radii() {
        let layout = WheelLayout::with_size(1000.0);
        assert!((layout.outer_radius() - 480.0).abs() < 1e-3);
        assert!((layout.inner_radius() - 330.0).abs() < 1e-3);
        assert!((layout.planet_radius() - 310.0).abs() < 1e-3);
        assert!((layout.line_radius() - 280.0).abs() < 1e-3);
        assert!((layout.house_number_radius() - 320.0).abs() < 1e-3);
        assert!((layout.cusp_inner_radius() - 420.0).abs() < 1e-3);
    }

    #[test]
    fn test_ascendant_at_nine_oclock() {
        let layout = WheelLayout::with_size(400.0);
        let geometry = ChartProjector::new().project(&chart(73.0), &[], &layout);
        let asc = geometry.axes.ascendant;
        assert_eq!(asc.wheel_angle, 180.0);
        assert!(asc.outer.x < geometry.center.x);
        assert!((asc.outer.y - geometry.center.y).abs() < 1e-3);
        assert_eq!(geometry.cusps[0].wheel_angle, 180.0);
        assert!((geometry.axes.descendant.wheel_angle).abs() < 1e-9);
    }

    #[test]
    fn test_counts_and_retrograde() {
        let layout = WheelLayout::default();
        let snapshot = chart(10.0);
        let points = vec![Point {
            name: "Mars".to_string(),
            longitude: 100.0,
            class: BodyClass::Personal,
        }];
        let geometry = ChartProjector::new().project(&snapshot, &points, &layout);
        assert_eq!(geometry.cusps.len(), 12);
        assert_eq!(geometry.signs.len(), 12);
        assert_eq!(geometry.ticks.len(), 72);
        assert_eq!(geometry.ticks.iter().filter(|t| t.major).count(), 12);
        assert_eq!(geometry.cusps[11].numeral, "XII");
        let mars = geometry.point("Mars").unwrap();
        assert!(mars.retrograde);
        assert!((mars.wheel_angle - 90.0).abs() < 1e-9);
        let r = mars.line_anchor.distance_to(geometry.center);
        assert!((r - layout.line_radius()).abs() < 1e-2);
    }

    #[test]
    fn test_projection_is_pure() {
        let layout = WheelLayout::default();
        let snapshot = chart(200.0);
        let a = ChartProjector::new().project(&snapshot, &[], &layout);
        let b = ChartProjector::new().project(&snapshot, &[], &layout);
        assert_eq!(a, b);
    }
}
