//! Chart configuration: the aspect catalog, orb policy, point inclusion
//! flags and wheel layout, persisted as TOML.
//!
//! A `ChartConfig` is passed into every pass explicitly. Edits go through
//! `&mut ChartConfig` between passes.

use crate::aspects::catalog::AspectCatalog;
use crate::aspects::orbs::OrbPolicy;
use crate::aspects::points::PointInclusion;
use crate::chart::format::DegreeStyle;
use crate::chart::projector::WheelLayout;
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Searched in order by [`ChartConfig::load_default`].
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub orbs: OrbPolicy,
    pub inclusion: PointInclusion,
    pub layout: WheelLayout,
    pub degree_style: DegreeStyle,
    #[serde(rename = "aspects")]
    pub catalog: AspectCatalog,
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let config: ChartConfig =
            toml::from_str(text).map_err(|e| ChartError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ChartError> {
        toml::to_string_pretty(self).map_err(|e| ChartError::ConfigParse(e.to_string()))
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let text = fs::read_to_string(path).map_err(|e| ChartError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Try the common relative locations of `configs/chart.toml`, falling
    /// back to built-in defaults when none exists.
    pub fn load_default() -> Result<Self, ChartError> {
        match DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).find(|p| p.exists()) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!(
                    "no chart config at {:?}, using defaults",
                    DEFAULT_CONFIG_PATHS
                );
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ChartError> {
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|e| ChartError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        self.catalog.validate()?;
        self.orbs.validate()?;
        if !self.layout.size.is_finite() || self.layout.size <= 0.0 {
            return Err(ChartError::invalid(
                "layout.size",
                f64::from(self.layout.size),
                "wheel size must be positive",
            ));
        }
        Ok(())
    }

    /// Restore the aspect catalog, orb multipliers and inclusion flags.
    /// Layout and degree style are left alone.
    pub fn reset_to_defaults(&mut self) {
        self.catalog.reset_to_defaults();
        self.orbs = OrbPolicy::default();
        self.inclusion = PointInclusion::default();
    }
}
