pub mod catalog;
pub mod orbs;
pub mod points;
pub mod resolver;
pub mod types;

pub use catalog::{AspectCatalog, AspectDefinition};
pub use orbs::{OrbMultiplier, OrbPolicy};
pub use points::{assemble_points, BodyClass, Point, PointInclusion};
pub use resolver::AspectResolver;
pub use types::{AspectEdge, AspectMatch, AspectSet, LegendEntry};
