use urania::aspects::{
    assemble_points, AspectCatalog, AspectDefinition, AspectResolver, BodyClass, OrbPolicy, Point,
    PointInclusion,
};
use urania::ephemeris::{BodyId, BodyPosition, ChartSnapshot, HouseCusps, HouseSystem};
use urania::rendering::Color;

fn point(name: &str, longitude: f64, class: BodyClass) -> Point {
    Point {
        name: name.to_string(),
        longitude,
        class,
    }
}

fn resolve(points: &[Point], catalog: &AspectCatalog) -> urania::AspectSet {
    AspectResolver::new().resolve(points, catalog, &OrbPolicy::default())
}

#[test]
fn test_sun_moon_opposition() {
    let points = vec![
        point("Sun", 10.0, BodyClass::Luminary),
        point("Moon", 190.0, BodyClass::Luminary),
    ];
    let set = resolve(&points, &AspectCatalog::default());
    let edge = set.between("Sun", "Moon").unwrap();
    assert_eq!(edge.separation, 180.0);
    let m = edge.matched.as_ref().unwrap();
    assert_eq!(m.label, "Opposition");
    assert_eq!(m.delta, 0.0);
    assert!((m.allowed_orb - 8.0).abs() < 1e-12);
}

#[test]
fn test_sun_mercury_no_match_at_28() {
    let points = vec![
        point("Sun", 0.0, BodyClass::Luminary),
        point("Mercury", 28.0, BodyClass::Personal),
    ];
    let set = resolve(&points, &AspectCatalog::default());
    let edge = set.between("Sun", "Mercury").unwrap();
    assert_eq!(edge.separation, 28.0);
    assert!(edge.matched.is_none());

    // Enabling Semisextile brings it within 2.2 × 1.25 = 2.75
    let mut catalog = AspectCatalog::default();
    catalog.set_enabled("Semisextile", true).unwrap();
    let set = resolve(&points, &catalog);
    let m = set.between("Sun", "Mercury").unwrap().matched.clone().unwrap();
    assert_eq!(m.label, "Semisextile");
    assert!((m.allowed_orb - 2.75).abs() < 1e-12);
}

#[test]
fn test_conjunction_suppression_threshold() {
    let catalog = AspectCatalog::default();
    let tight = vec![
        point("Sun", 100.0, BodyClass::Luminary),
        point("Moon", 100.1, BodyClass::Luminary),
    ];
    assert!(resolve(&tight, &catalog).edges[0].matched.is_none());

    let loose = vec![
        point("Sun", 100.0, BodyClass::Luminary),
        point("Moon", 100.5, BodyClass::Luminary),
    ];
    let set = resolve(&loose, &catalog);
    assert_eq!(set.edges[0].matched.as_ref().unwrap().label, "Conjunction");
}

#[test]
fn test_tie_break_prefers_earlier_entry() {
    let red = Color::rgba(255, 0, 0, 255);
    let blue = Color::rgba(0, 0, 255, 255);
    let defs = |first: &str, second: &str| {
        vec![
            AspectDefinition {
                label: first.to_string(),
                angle: 40.0,
                base_orb: 10.0,
                enabled: true,
                color: red,
                width: 1.0,
            },
            AspectDefinition {
                label: second.to_string(),
                angle: 60.0,
                base_orb: 10.0,
                enabled: true,
                color: blue,
                width: 1.0,
            },
        ]
    };
    // 50° sits exactly between 40° and 60°
    let points = vec![
        point("A", 0.0, BodyClass::Social),
        point("B", 50.0, BodyClass::Social),
    ];
    let orbs = OrbPolicy {
        social: 1.0,
        ..OrbPolicy::default()
    };

    let forward = AspectCatalog::from_definitions(defs("Low", "High")).unwrap();
    for _ in 0..10 {
        let set = AspectResolver::new().resolve(&points, &forward, &orbs);
        assert_eq!(set.edges[0].matched.as_ref().unwrap().label, "Low");
    }

    let mut reversed_defs = defs("Low", "High");
    reversed_defs.reverse();
    let reversed = AspectCatalog::from_definitions(reversed_defs).unwrap();
    let set = AspectResolver::new().resolve(&points, &reversed, &orbs);
    assert_eq!(set.edges[0].matched.as_ref().unwrap().label, "High");
}

#[test]
fn test_disable_affects_only_future_passes() {
    let points = vec![
        point("Venus", 10.0, BodyClass::Personal),
        point("Mars", 130.0, BodyClass::Personal),
    ];
    let mut catalog = AspectCatalog::default();
    let before = resolve(&points, &catalog);
    assert_eq!(before.edges[0].matched.as_ref().unwrap().label, "Trine");

    catalog.set_enabled("Trine", false).unwrap();
    let after = resolve(&points, &catalog);
    assert!(after.edges[0].matched.is_none());
    assert_eq!(before.edges[0].matched.as_ref().unwrap().label, "Trine");

    catalog.set_enabled("Trine", true).unwrap();
    assert_eq!(resolve(&points, &catalog), before);
}

#[test]
fn test_every_match_within_allowed_orb() {
    let mut catalog = AspectCatalog::default();
    for label in ["Semisextile", "Semisquare", "Sesquiquadrate", "Quintile", "Biquintile"] {
        catalog.set_enabled(label, true).unwrap();
    }
    let classes = [
        BodyClass::Luminary,
        BodyClass::Personal,
        BodyClass::Social,
        BodyClass::Outer,
        BodyClass::SensitivePoint,
    ];
    let points: Vec<Point> = (0..18)
        .map(|i| point(&format!("P{i}"), i as f64 * 23.7 + 0.3, classes[i % classes.len()]))
        .collect();
    let orbs = OrbPolicy::default();
    let set = AspectResolver::new().resolve(&points, &catalog, &orbs);

    assert_eq!(set.edges.len(), 18 * 17 / 2);
    for edge in &set.edges {
        assert_ne!(edge.point_a, edge.point_b);
        assert!((0.0..=180.0).contains(&edge.separation));
        if let Some(m) = &edge.matched {
            let def = catalog.get(&m.label).unwrap();
            let a = points.iter().find(|p| p.name == edge.point_a).unwrap();
            let b = points.iter().find(|p| p.name == edge.point_b).unwrap();
            let scale = orbs.pair_scale(a, b);
            assert!((edge.separation - def.angle).abs() <= def.base_orb * scale);
            assert_eq!(m.delta, (edge.separation - def.angle).abs());
        }
    }
}

#[test]
fn test_nan_longitude_yields_no_match() {
    let points = vec![
        point("Sun", f64::NAN, BodyClass::Luminary),
        point("Moon", 0.0, BodyClass::Luminary),
    ];
    let set = resolve(&points, &AspectCatalog::default());
    assert_eq!(set.edges.len(), 1);
    assert!(set.edges[0].matched.is_none());
}

#[test]
fn test_reset_restores_default_table() {
    let mut catalog = AspectCatalog::default();
    catalog.set_enabled("Opposition", false).unwrap();
    catalog.set_enabled("Quintile", true).unwrap();
    catalog.update_angle_orb("Trine", 118.0, 9.0).unwrap();
    catalog.set_style("Square", Color::WHITE, 4.0).unwrap();
    assert!(!catalog.is_default());

    catalog.reset_to_defaults();
    assert!(catalog.is_default());
    assert_eq!(
        serde_json::to_string(&catalog).unwrap(),
        serde_json::to_string(&AspectCatalog::default()).unwrap()
    );
}

#[test]
fn test_assembled_chart_resolves_sensitive_points() {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = (95.0 + i as f64 * 30.0) % 360.0;
    }
    let chart = ChartSnapshot::new(
        vec![
            BodyPosition::new(BodyId::Sun, 275.0, 0.0, 1.0),
            BodyPosition::new(BodyId::Moon, 40.0, 0.0, 13.0),
            BodyPosition::new(BodyId::MeanNode, 180.2, 0.0, -0.05),
        ],
        HouseCusps {
            system: HouseSystem::Placidus,
            cusps,
            ascendant: 95.0,
            midheaven: 2.0,
        },
    );
    let points = assemble_points(&chart, &PointInclusion::default()).unwrap();
    let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Sun", "Moon", "ASC", "MC", "Mean Node"]);

    let set = resolve(&points, &AspectCatalog::default());
    assert_eq!(set.edges.len(), 10);
    // Sun 275 vs ASC 95: exact opposition
    assert_eq!(set.between("Sun", "ASC").unwrap().matched.as_ref().unwrap().label, "Opposition");
    // Sun 275 vs MC 2: 87°, square within 5 × 0.9
    assert_eq!(set.between("Sun", "MC").unwrap().matched.as_ref().unwrap().label, "Square");
    let legend = set.legend(&AspectCatalog::default());
    assert!(legend.iter().any(|l| l.label == "Opposition" && l.count >= 1));
}
