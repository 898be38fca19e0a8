use super::*;
use crate::morph::weights::MatchWeights;

#[test]
fn defaults_match_documented_values() {
    let cfg = MorphConfig::default();
    assert_eq!(cfg.slice_count, 60);
    assert_eq!(cfg.svg_width, 600.0);
    assert_eq!(cfg.svg_height, 200.0);
    assert_eq!(cfg.animation.duration_ms, 800.0);
    assert_eq!(cfg.animation.easing, Ease::InOutCubic);
    assert_eq!(cfg.matching, MatcherConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn from_json_fills_omitted_fields() {
    let cfg = MorphConfig::from_json(
        r#"{"slice_count": 40, "animation": {"easing": "linear"}, "matching": {"diverging": {"center": 1.0, "height": 0.0, "usage": 0.5}}}"#,
    )
    .unwrap();
    assert_eq!(cfg.slice_count, 40);
    assert_eq!(cfg.svg_width, 600.0);
    assert_eq!(cfg.animation.duration_ms, 800.0);
    assert_eq!(cfg.animation.easing, Ease::Linear);
    assert_eq!(cfg.matching.converging, MatchWeights::CONVERGING);
    assert_eq!(cfg.matching.diverging.usage, 0.5);

    let back = MorphConfig::from_json(&cfg.to_json().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn from_json_rejects_invalid_values() {
    let err = MorphConfig::from_json(r#"{"slice_count": 0}"#).unwrap_err();
    assert!(err.to_string().contains("slice_count"));

    let err = MorphConfig::from_json(r#"{"svg_height": -1}"#).unwrap_err();
    assert!(err.to_string().contains("svg_height"));

    let err = MorphConfig::from_json(r#"{"animation": {"duration_ms": 0}}"#).unwrap_err();
    assert!(err.to_string().contains("duration_ms"));

    let err = MorphConfig::from_json(
        r#"{"matching": {"converging": {"center": -0.1, "height": 0.3, "usage": 0}}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("matching.converging.center"));

    assert!(matches!(
        MorphConfig::from_json("{not json").unwrap_err(),
        SliceMorphError::Serde(_)
    ));
}

#[test]
fn progress_follows_easing_and_clamps() {
    let linear = AnimationConfig {
        duration_ms: 1000.0,
        easing: Ease::Linear,
    };
    assert_eq!(linear.progress_at(0.0), 0.0);
    assert_eq!(linear.progress_at(250.0), 0.25);
    assert_eq!(linear.progress_at(1000.0), 1.0);
    assert_eq!(linear.progress_at(5000.0), 1.0);
    assert_eq!(linear.progress_at(-10.0), 0.0);
    assert_eq!(linear.progress_at(f64::NAN), 0.0);

    let eased = AnimationConfig::default();
    let quarter = eased.progress_at(200.0);
    assert!((quarter - 0.0625).abs() < 1e-12);
    assert!((eased.progress_at(400.0) - 0.5).abs() < 1e-12);

    let instant = AnimationConfig {
        duration_ms: 0.0,
        easing: Ease::Linear,
    };
    assert_eq!(instant.progress_at(0.0), 1.0);
}

#[test]
fn css_easing_names_are_accepted() {
    let cfg =
        MorphConfig::from_json(r#"{"animation": {"duration_ms": 800, "easing": "ease-in-out"}}"#)
            .unwrap();
    assert_eq!(cfg.animation.easing, Ease::InOutCubic);

    let cfg = MorphConfig::from_json(r#"{"animation": {"easing": "ease-out"}}"#).unwrap();
    assert_eq!(cfg.animation.easing, Ease::OutCubic);

    let err = MorphConfig::from_json(r#"{"animation": {"easing": "bounce"}}"#).unwrap_err();
    assert!(err.to_string().contains("unknown easing"));
}
