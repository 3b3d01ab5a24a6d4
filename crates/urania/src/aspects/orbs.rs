//! Per-body-class orb weighting.

use crate::aspects::points::{BodyClass, Point};
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Which of the six multipliers an edit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbMultiplier {
    Global,
    Luminaries,
    Personal,
    Social,
    Outer,
    Points,
}

impl OrbMultiplier {
    pub const ALL: [OrbMultiplier; 6] = [
        OrbMultiplier::Global,
        OrbMultiplier::Luminaries,
        OrbMultiplier::Personal,
        OrbMultiplier::Social,
        OrbMultiplier::Outer,
        OrbMultiplier::Points,
    ];

    /// Slider bounds offered to users. Values outside are accepted as long as
    /// they are non-negative.
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            OrbMultiplier::Outer | OrbMultiplier::Points => 0.5..=1.5,
            _ => 0.5..=2.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrbMultiplier::Global => "global",
            OrbMultiplier::Luminaries => "luminaries",
            OrbMultiplier::Personal => "personal",
            OrbMultiplier::Social => "social",
            OrbMultiplier::Outer => "outer",
            OrbMultiplier::Points => "points",
        }
    }
}

/// Orb multipliers. A point's weight is `global * class multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbPolicy {
    pub global: f64,
    pub luminaries: f64,
    pub personal: f64,
    pub social: f64,
    pub outer: f64,
    pub points: f64,
}

impl Default for OrbPolicy {
    fn default() -> Self {
        Self {
            global: 1.00,
            luminaries: 1.60,
            personal: 1.25,
            social: 1.10,
            outer: 0.95,
            points: 0.90,
        }
    }
}

impl OrbPolicy {
    pub fn get(&self, which: OrbMultiplier) -> f64 {
        match which {
            OrbMultiplier::Global => self.global,
            OrbMultiplier::Luminaries => self.luminaries,
            OrbMultiplier::Personal => self.personal,
            OrbMultiplier::Social => self.social,
            OrbMultiplier::Outer => self.outer,
            OrbMultiplier::Points => self.points,
        }
    }

    /// Set one multiplier. Negative or non-finite values are rejected and the
    /// previous value is kept.
    pub fn set(&mut self, which: OrbMultiplier, value: f64) -> Result<(), ChartError> {
        check_multiplier(which, value)?;
        let slot = match which {
            OrbMultiplier::Global => &mut self.global,
            OrbMultiplier::Luminaries => &mut self.luminaries,
            OrbMultiplier::Personal => &mut self.personal,
            OrbMultiplier::Social => &mut self.social,
            OrbMultiplier::Outer => &mut self.outer,
            OrbMultiplier::Points => &mut self.points,
        };
        *slot = value;
        Ok(())
    }

    /// Multiplier for a body class; unclassified points get 1.0.
    pub fn class_multiplier(&self, class: Option<BodyClass>) -> f64 {
        match class {
            Some(BodyClass::Luminary) => self.luminaries,
            Some(BodyClass::Personal) => self.personal,
            Some(BodyClass::Social) => self.social,
            Some(BodyClass::Outer) => self.outer,
            Some(BodyClass::SensitivePoint) => self.points,
            None => 1.0,
        }
    }

    pub fn weight(&self, point: &Point) -> f64 {
        self.global * self.class_multiplier(Some(point.class))
    }

    /// Orb scale for a pair: governed by the stricter of the two weights.
    pub fn pair_scale(&self, a: &Point, b: &Point) -> f64 {
        self.weight(a).min(self.weight(b))
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        OrbMultiplier::ALL
            .iter()
            .try_for_each(|&which| check_multiplier(which, self.get(which)))
    }
}

fn check_multiplier(which: OrbMultiplier, value: f64) -> Result<(), ChartError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::invalid(
            format!("orbs.{}", which.name()),
            value,
            "orb multiplier must be a non-negative number",
        ));
    }
    let range = which.range();
    if !range.contains(&value) {
        log::warn!(
            "orb multiplier {} = {} is outside the usual range {:?}",
            which.name(),
            value,
            range
        );
    }
    Ok(())
}
