use crate::angles::shortest_separation;
use crate::aspects::catalog::{AspectCatalog, AspectDefinition};
use crate::aspects::orbs::OrbPolicy;
use crate::aspects::points::Point;
use crate::aspects::types::{AspectEdge, AspectMatch, AspectSet};

/// Conjunctions tighter than this are dropped: they would draw as a dot.
pub const MIN_CONJUNCTION_SEPARATION: f64 = 0.4;

/// Pairwise aspect resolver.
pub struct AspectResolver;

impl AspectResolver {
    /// Create a new aspect resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve every unordered pair of points against the enabled catalog.
    ///
    /// Each pair appears exactly once, in `(i, j)` order with `i < j`;
    /// pairs without a fitting aspect are kept with `matched: None`.
    pub fn resolve(&self, points: &[Point], catalog: &AspectCatalog, orbs: &OrbPolicy) -> AspectSet {
        let mut edges = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let p = &points[i];
                let q = &points[j];

                let separation = shortest_separation(p.longitude, q.longitude);
                let scale = orbs.pair_scale(p, q);
                let matched = self.best_match(separation, scale, catalog);

                edges.push(AspectEdge {
                    point_a: p.name.clone(),
                    point_b: q.name.clone(),
                    separation,
                    matched,
                });
            }
        }

        let set = AspectSet { edges };
        log::debug!(
            "resolved {} pairs, {} matched",
            set.edges.len(),
            set.matched().count()
        );
        set
    }

    /// Best-fitting enabled definition for one separation, or `None`.
    ///
    /// Smallest delta wins; on equal delta the earlier catalog entry is kept.
    pub fn best_match(
        &self,
        separation: f64,
        scale: f64,
        catalog: &AspectCatalog,
    ) -> Option<AspectMatch> {
        let mut best: Option<(&AspectDefinition, f64)> = None;

        for def in catalog.enabled() {
            let allowed = def.base_orb * scale;
            let delta = (separation - def.angle).abs();
            // NaN compares false here, so malformed longitudes never match
            if delta <= allowed && best.map_or(true, |(_, d)| delta < d) {
                best = Some((def, delta));
            }
        }

        let (def, delta) = best?;
        if def.angle == 0.0 && separation < MIN_CONJUNCTION_SEPARATION {
            return None;
        }

        Some(AspectMatch {
            label: def.label.clone(),
            angle: def.angle,
            delta,
            allowed_orb: def.base_orb * scale,
            color: def.color,
            width: def.width,
        })
    }
}

impl Default for AspectResolver {
    fn default() -> Self {
        Self::new()
    }
}
