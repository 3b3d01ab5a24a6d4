use crate::aspects::catalog::AspectCatalog;
use crate::aspects::types::AspectSet;
use crate::chart::projector::{ChartGeometry, ProjectedAxis};
use crate::rendering::primitives::{Color, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{BodyLegendEntry, ChartSpec};
use crate::rendering::visual_config::{body_color, VisualConfig};

/// ChartSpec generator - turns a projected wheel and its aspects into shapes
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default visuals
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    /// Generate a ChartSpec. Only matched aspect edges are drawn, styled by
    /// the definition they matched.
    pub fn generate(
        &self,
        geometry: &ChartGeometry,
        aspects: &AspectSet,
        catalog: &AspectCatalog,
    ) -> ChartSpec {
        let size = geometry.layout.size;
        let mut spec = ChartSpec::new(size, size);
        spec.center = geometry.center;
        spec.background_color = self.visual_config.background_color;

        self.push_rings(&mut spec, geometry);
        self.push_signs(&mut spec, geometry);
        self.push_houses(&mut spec, geometry);
        self.push_axes(&mut spec, geometry);
        self.push_aspects(&mut spec, geometry, aspects);
        self.push_points(&mut spec, geometry);

        spec.shapes.push(Shape::Circle {
            center: geometry.center,
            radius: size * 0.01,
            fill: Some(self.visual_config.center_marker),
            stroke: None,
        });

        spec.aspect_legend = aspects.legend(catalog);
        log::debug!(
            "generated chart spec with {} shapes, {} aspect lines",
            spec.shapes.len(),
            spec.aspect_lines().count()
        );
        spec
    }

    fn push_rings(&self, spec: &mut ChartSpec, geometry: &ChartGeometry) {
        let layout = &geometry.layout;
        for (radius, color, width) in [
            (layout.outer_radius(), self.visual_config.outer_ring, 2.0),
            (layout.inner_radius(), self.visual_config.inner_ring, 1.0),
        ] {
            spec.shapes.push(Shape::Circle {
                center: geometry.center,
                radius,
                fill: None,
                stroke: Some(Stroke { color, width }),
            });
        }
    }

    fn push_signs(&self, spec: &mut ChartSpec, geometry: &ChartGeometry) {
        for sign in &geometry.signs {
            spec.shapes.push(Shape::Line {
                from: sign.boundary_outer,
                to: sign.boundary_inner,
                stroke: Stroke {
                    color: self.visual_config.sign_boundary,
                    width: 2.0,
                },
            });
            spec.shapes.push(Shape::Text {
                position: sign.label_position,
                content: sign.sign.name().to_string(),
                size: self.visual_config.label_size,
                color: self.visual_config.sign_label,
                anchor: TextAnchor::Middle,
            });
        }

        for tick in &geometry.ticks {
            spec.shapes.push(Shape::Line {
                from: tick.outer,
                to: tick.inner,
                stroke: Stroke {
                    color: self.visual_config.tick,
                    width: if tick.major { 2.0 } else { 1.0 },
                },
            });
        }
    }

    fn push_houses(&self, spec: &mut ChartSpec, geometry: &ChartGeometry) {
        for cusp in &geometry.cusps {
            // Angular houses stand out a little
            let width = if cusp.house == 1 || cusp.house == 10 {
                self.visual_config.cusp_width + 0.5
            } else {
                self.visual_config.cusp_width
            };
            spec.shapes.push(Shape::Line {
                from: cusp.inner,
                to: cusp.outer,
                stroke: Stroke {
                    color: self.visual_config.cusp,
                    width,
                },
            });
            spec.shapes.push(Shape::Text {
                position: cusp.number_position,
                content: cusp.numeral.clone(),
                size: self.visual_config.label_size,
                color: self.visual_config.house_number,
                anchor: TextAnchor::Middle,
            });
        }
    }

    fn push_axes(&self, spec: &mut ChartSpec, geometry: &ChartGeometry) {
        let axes = &geometry.axes;
        let styled: [(&ProjectedAxis, Color); 4] = [
            (&axes.ascendant, self.visual_config.ascendant_axis),
            (&axes.descendant, self.visual_config.descendant_axis),
            (&axes.midheaven, self.visual_config.midheaven_axis),
            (&axes.imum_coeli, self.visual_config.imum_coeli_axis),
        ];
        for (axis, color) in styled {
            spec.shapes.push(Shape::Line {
                from: axis.outer,
                to: axis.inner,
                stroke: Stroke {
                    color,
                    width: self.visual_config.axis_width,
                },
            });
        }
    }

    fn push_aspects(&self, spec: &mut ChartSpec, geometry: &ChartGeometry, aspects: &AspectSet) {
        for edge in aspects.matched() {
            let Some(m) = &edge.matched else { continue };
            let (Some(a), Some(b)) = (geometry.point(&edge.point_a), geometry.point(&edge.point_b))
            else {
                log::warn!(
                    "skipping {} line {}-{}: point not on the wheel",
                    m.label,
                    edge.point_a,
                    edge.point_b
                );
                continue;
            };
            spec.shapes.push(Shape::AspectLine {
                from: a.line_anchor,
                to: b.line_anchor,
                label: m.label.clone(),
                color: m.color,
                width: m.width,
            });
        }
    }

    fn push_points(&self, spec: &mut ChartSpec, geometry: &ChartGeometry) {
        let radius = geometry.layout.marker_radius();
        for point in &geometry.points {
            let color = body_color(&point.name);
            spec.shapes.push(Shape::PointMarker {
                center: point.marker,
                name: point.name.clone(),
                radius,
                color,
                retrograde: point.retrograde,
            });
            let content = if point.retrograde {
                format!("{} R", point.name)
            } else {
                point.name.clone()
            };
            spec.shapes.push(Shape::Text {
                position: point.label,
                content,
                size: self.visual_config.label_size,
                color,
                anchor: TextAnchor::Start,
            });
            spec.body_legend.push(BodyLegendEntry {
                name: point.name.clone(),
                color,
                retrograde: point.retrograde,
            });
        }
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
