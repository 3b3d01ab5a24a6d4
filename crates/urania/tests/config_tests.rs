use std::io::Write;
use tempfile::NamedTempFile;
use urania::aspects::OrbMultiplier;
use urania::chart::DegreeStyle;
use urania::{ChartConfig, ChartError};

#[test]
fn test_save_and_load_roundtrip() {
    let mut config = ChartConfig::default();
    config.orbs.set(OrbMultiplier::Luminaries, 2.0).unwrap();
    config.catalog.set_enabled("Quintile", true).unwrap();
    config.catalog.update_angle_orb("Sextile", 60.0, 3.5).unwrap();
    config.inclusion.lilith = false;
    config.degree_style = DegreeStyle::Ascii;

    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();
    let loaded = ChartConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_default_toml_reproduces_defaults() {
    let text = ChartConfig::default().to_toml_string().unwrap();
    let parsed = ChartConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, ChartConfig::default());
    assert!(parsed.catalog.is_default());
}

#[test]
fn test_invalid_base_orb_in_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
[[aspects]]
label = "Conjunction"
angle = 0.0
base_orb = -2.0
enabled = true
color = "#E6E6E6BE"
width = 2.2
"##
    )
    .unwrap();
    let err = ChartConfig::load(file.path()).unwrap_err();
    match err {
        ChartError::InvalidConfiguration { field, value, .. } => {
            assert_eq!(field, "Conjunction.base_orb");
            assert_eq!(value, -2.0);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_bad_color_is_parse_error() {
    let text = r##"
[[aspects]]
label = "Trine"
angle = 120.0
base_orb = 5.0
enabled = true
color = "green"
width = 1.9
"##;
    assert!(matches!(
        ChartConfig::from_toml_str(text),
        Err(ChartError::ConfigParse(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("chart.toml");
    assert!(matches!(
        ChartConfig::load(&missing),
        Err(ChartError::ConfigIo { .. })
    ));
}

#[test]
fn test_reset_after_edits() {
    let mut config = ChartConfig::default();
    config.orbs.set(OrbMultiplier::Global, 0.7).unwrap();
    config.inclusion.asc = false;
    config.catalog.set_enabled("Trine", false).unwrap();
    config.layout.size = 900.0;
    config.degree_style = DegreeStyle::Ascii;
    config.reset_to_defaults();

    let defaults = ChartConfig::default();
    assert_eq!(config.catalog, defaults.catalog);
    assert_eq!(config.orbs, defaults.orbs);
    assert_eq!(config.inclusion, defaults.inclusion);
    assert_eq!(config.layout.size, 900.0);
    assert_eq!(config.degree_style, DegreeStyle::Ascii);
}

#[test]
fn test_repeated_aspect_label_in_file() {
    let mut text = ChartConfig::default().to_toml_string().unwrap();
    text.push_str(
        r##"
[[aspects]]
label = "Trine"
angle = 100.0
base_orb = 5.0
enabled = true
color = "#8CEBA0A0"
width = 1.9
"##,
    );
    assert_eq!(
        ChartConfig::from_toml_str(&text),
        Err(ChartError::DuplicateAspectLabel("Trine".to_string()))
    );
}

#[test]
fn test_run_rejects_unchecked_field_write() {
    use urania::ephemeris::{BodyId, BodyPosition, ChartSnapshot, HouseCusps, HouseSystem};
    use urania::ChartEngine;

    let chart = ChartSnapshot::new(
        vec![
            BodyPosition::new(BodyId::Sun, 0.0, 0.0, 1.0),
            BodyPosition::new(BodyId::Saturn, 120.0, 0.0, 0.1),
        ],
        HouseCusps {
            system: HouseSystem::Placidus,
            cusps: [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0],
            ascendant: 0.0,
            midheaven: 270.0,
        },
    );
    let mut config = ChartConfig::default();
    config.orbs.outer = -1.0;
    let err = ChartEngine::new().run(&chart, &config).unwrap_err();
    assert!(matches!(err, ChartError::InvalidConfiguration { ref field, .. } if field == "orbs.outer"));

    config.orbs.outer = 1.0;
    assert!(ChartEngine::new().run(&chart, &config).is_ok());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let shipped = ChartConfig::from_toml_str(include_str!("../../../configs/chart.toml")).unwrap();
    assert_eq!(shipped, ChartConfig::default());
}
