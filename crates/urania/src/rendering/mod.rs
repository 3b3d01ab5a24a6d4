pub mod generator;
pub mod primitives;
pub mod spec;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use primitives::{Color, Shape, Stroke, TextAnchor};
pub use spec::{BodyLegendEntry, ChartSpec};
pub use visual_config::{body_color, VisualConfig};
