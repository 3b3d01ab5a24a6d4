use crate::aspects::points::{assemble_points, Point};
use crate::aspects::resolver::AspectResolver;
use crate::aspects::types::AspectSet;
use crate::chart::format::format_longitude;
use crate::chart::projector::{ChartGeometry, ChartProjector};
use crate::config::ChartConfig;
use crate::ephemeris::types::ChartSnapshot;
use crate::error::ChartError;
use crate::rendering::generator::ChartSpecGenerator;
use crate::rendering::spec::ChartSpec;
use serde::{Deserialize, Serialize};

/// Result of one chart pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOutput {
    pub points: Vec<Point>,
    pub aspects: AspectSet,
    pub geometry: ChartGeometry,
}

/// Runs assembly, aspect resolution and projection for a chart snapshot.
///
/// Holds no state between passes; configuration edits made between two
/// `run` calls take effect on the second.
#[derive(Default)]
pub struct ChartEngine {
    resolver: AspectResolver,
    projector: ChartProjector,
    generator: ChartSpecGenerator,
}

impl ChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(generator: ChartSpecGenerator) -> Self {
        Self {
            generator,
            ..Self::default()
        }
    }

    /// The config is validated first, so fields written directly rather
    /// than through the checked setters are still rejected here.
    pub fn run(&self, chart: &ChartSnapshot, config: &ChartConfig) -> Result<ChartOutput, ChartError> {
        config.validate()?;
        let points = assemble_points(chart, &config.inclusion)?;
        let aspects = self.resolver.resolve(&points, &config.catalog, &config.orbs);
        let geometry = self.projector.project(chart, &points, &config.layout);

        log::debug!(
            "chart pass: ASC {}, {} points, {} aspects",
            format_longitude(chart.ascendant(), config.degree_style),
            points.len(),
            aspects.matched().count()
        );

        Ok(ChartOutput {
            points,
            aspects,
            geometry,
        })
    }

    /// Run a pass and turn it into a render spec.
    pub fn render(&self, chart: &ChartSnapshot, config: &ChartConfig) -> Result<ChartSpec, ChartError> {
        let output = self.run(chart, config)?;
        Ok(self.render_output(&output, config))
    }

    /// Render spec for a pass that has already run.
    pub fn render_output(&self, output: &ChartOutput, config: &ChartConfig) -> ChartSpec {
        self.generator
            .generate(&output.geometry, &output.aspects, &config.catalog)
    }
}
