//! Aspect detection and wheel projection for natal charts.
//!
//! A pass takes a [`ChartSnapshot`] computed by an ephemeris collaborator,
//! assembles the aspectable points, resolves the best aspect per pair and
//! projects everything onto a wheel anchored at the Ascendant.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod config;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod rendering;

pub use aspects::{AspectCatalog, AspectEdge, AspectMatch, AspectResolver, AspectSet, OrbPolicy};
pub use chart::{ChartGeometry, ChartProjector, WheelLayout};
pub use config::ChartConfig;
pub use engine::{ChartEngine, ChartOutput};
pub use ephemeris::{ChartSnapshot, Ephemeris};
pub use error::ChartError;
