//! Configurable catalog of recognized aspects.
//!
//! Catalog order matters only for tie-breaks in the resolver: when two
//! definitions fit a pair equally well, the earlier one wins.

use crate::error::ChartError;
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One recognized aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    /// Display name, also the lookup key for edits ("Trine").
    pub label: String,
    /// Exact separation in degrees, `[0, 180]`.
    pub angle: f64,
    /// Tolerance in degrees before orb-policy scaling.
    pub base_orb: f64,
    pub enabled: bool,
    pub color: Color,
    pub width: f32,
}

impl AspectDefinition {
    fn new(label: &str, angle: f64, base_orb: f64, color: Color, width: f32, enabled: bool) -> Self {
        Self {
            label: label.to_string(),
            angle,
            base_orb,
            enabled,
            color,
            width,
        }
    }

    pub fn is_major(&self) -> bool {
        matches!(self.angle as u32, 0 | 60 | 90 | 120 | 180) && self.angle.fract() == 0.0
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        validate_angle(&self.label, self.angle)?;
        validate_orb(&self.label, self.base_orb)?;
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::invalid(
                format!("{}.width", self.label),
                self.width as f64,
                "line width must be a non-negative number",
            ));
        }
        Ok(())
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_DEFINITIONS: Vec<AspectDefinition> = vec![
        // Major
        AspectDefinition::new("Conjunction", 0.0, 6.0, Color::rgba(230, 230, 230, 190), 2.2, true),
        AspectDefinition::new("Opposition", 180.0, 5.0, Color::rgba(230, 190, 90, 175), 2.0, true),
        AspectDefinition::new("Trine", 120.0, 5.0, Color::rgba(140, 235, 160, 160), 1.9, true),
        AspectDefinition::new("Square", 90.0, 5.0, Color::rgba(255, 120, 120, 180), 1.9, true),
        AspectDefinition::new("Sextile", 60.0, 4.0, Color::rgba(120, 200, 255, 170), 1.8, true),
        // Minor
        AspectDefinition::new("Semisextile", 30.0, 2.2, Color::rgba(180, 180, 180, 120), 1.3, false),
        AspectDefinition::new("Semisquare", 45.0, 2.2, Color::rgba(210, 160, 110, 130), 1.3, false),
        AspectDefinition::new("Sesquiquadrate", 135.0, 2.2, Color::rgba(255, 160, 100, 150), 1.3, false),
        AspectDefinition::new("Quintile", 72.0, 1.8, Color::rgba(200, 160, 255, 140), 1.2, false),
        AspectDefinition::new("Biquintile", 144.0, 1.8, Color::rgba(190, 150, 245, 145), 1.2, false),
        AspectDefinition::new("Quincunx", 150.0, 2.5, Color::rgba(200, 200, 140, 150), 1.5, true),
    ];
}

/// Ordered, editable set of aspect definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectCatalog {
    definitions: Vec<AspectDefinition>,
}

impl Default for AspectCatalog {
    fn default() -> Self {
        Self {
            definitions: DEFAULT_DEFINITIONS.clone(),
        }
    }
}

impl AspectCatalog {
    /// Build a catalog from explicit definitions, validating each entry.
    /// Labels must be unique.
    pub fn from_definitions(definitions: Vec<AspectDefinition>) -> Result<Self, ChartError> {
        let catalog = Self { definitions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// All definitions in catalog order.
    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    /// Enabled definitions in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = &AspectDefinition> {
        self.definitions.iter().filter(|d| d.enabled)
    }

    pub fn get(&self, label: &str) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|d| d.label == label)
    }

    pub fn set_enabled(&mut self, label: &str, enabled: bool) -> Result<(), ChartError> {
        self.lookup_mut(label)?.enabled = enabled;
        Ok(())
    }

    /// Edit angle and base orb together; on error the previous values stay.
    pub fn update_angle_orb(&mut self, label: &str, angle: f64, orb: f64) -> Result<(), ChartError> {
        validate_angle(label, angle)?;
        validate_orb(label, orb)?;
        let def = self.lookup_mut(label)?;
        def.angle = angle;
        def.base_orb = orb;
        Ok(())
    }

    pub fn set_style(&mut self, label: &str, color: Color, width: f32) -> Result<(), ChartError> {
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::invalid(
                format!("{label}.width"),
                width as f64,
                "line width must be a non-negative number",
            ));
        }
        let def = self.lookup_mut(label)?;
        def.color = color;
        def.width = width;
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.definitions = DEFAULT_DEFINITIONS.clone();
    }

    pub fn is_default(&self) -> bool {
        self.definitions == *DEFAULT_DEFINITIONS
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        let mut seen = HashSet::new();
        for def in &self.definitions {
            def.validate()?;
            if !seen.insert(def.label.as_str()) {
                return Err(ChartError::DuplicateAspectLabel(def.label.clone()));
            }
        }
        Ok(())
    }

    fn lookup_mut(&mut self, label: &str) -> Result<&mut AspectDefinition, ChartError> {
        match self.definitions.iter().position(|d| d.label == label) {
            Some(idx) => Ok(&mut self.definitions[idx]),
            None => Err(ChartError::UnknownAspect {
                label: label.to_string(),
                known: self.definitions.iter().map(|d| d.label.clone()).collect(),
            }),
        }
    }
}

fn validate_angle(label: &str, angle: f64) -> Result<(), ChartError> {
    if !angle.is_finite() || !(0.0..=180.0).contains(&angle) {
        return Err(ChartError::invalid(
            format!("{label}.angle"),
            angle,
            "aspect angle must lie in [0, 180]",
        ));
    }
    Ok(())
}

fn validate_orb(label: &str, orb: f64) -> Result<(), ChartError> {
    if !orb.is_finite() || orb <= 0.0 {
        return Err(ChartError::invalid(
            format!("{label}.base_orb"),
            orb,
            "base orb must be greater than zero",
        ));
    }
    Ok(())
}
