use serde_json::json;

use super::*;
use crate::morph::{matcher::match_slice_maps, plan::MatchPair, weights::MatcherConfig};

fn seg(top: f64, bottom: f64) -> Segment {
    Segment { top, bottom }
}

#[test]
fn slice_map_rejects_inverted_and_out_of_range() {
    let ok = SliceMap::new(vec![vec![seg(0.1, 0.2)], vec![]]);
    assert!(validate_slice_map(&ok));

    let inverted = SliceMap::new(vec![vec![seg(0.6, 0.4)]]);
    assert!(!validate_slice_map(&inverted));

    let out_of_range = SliceMap::new(vec![vec![seg(1.2, 1.5)]]);
    assert!(!validate_slice_map(&out_of_range));

    let zero_height = SliceMap::new(vec![vec![seg(0.5, 0.5)]]);
    assert!(!validate_slice_map(&zero_height));

    let nan = SliceMap::new(vec![vec![seg(f64::NAN, 0.5)]]);
    assert!(!validate_slice_map(&nan));
}

#[test]
fn json_structure_is_checked() {
    assert!(validate_slice_map_json(&json!([[{"top": 0.1, "bottom": 0.2}], []])));
    assert!(validate_slice_map_json(&json!([])));

    assert!(!validate_slice_map_json(&json!({"top": 0.1})));
    assert!(!validate_slice_map_json(&json!([{"top": 0.1, "bottom": 0.2}])));
    assert!(!validate_slice_map_json(&json!([[null]])));
    assert!(!validate_slice_map_json(&json!([[{"top": "0.1", "bottom": 0.2}]])));
    assert!(!validate_slice_map_json(&json!([[{"top": 0.1}]])));
    assert!(!validate_slice_map_json(&json!([[{"top": 0.6, "bottom": 0.4}]])));
    assert!(!validate_slice_map_json(&json!([[{"top": 1.2, "bottom": 1.5}]])));
}

#[test]
fn seed_is_not_a_collapse() {
    assert!(is_seed_like(Segment::SEED));
    assert!(!is_center_collapse(Segment::SEED));
    assert!(is_center_collapse(seg(0.495, 0.505)));
    assert!(!is_center_collapse(seg(0.2, 0.21)));
    assert!(!is_center_collapse(seg(0.4, 0.6)));

    let found = find_center_collapse(&[seg(0.4, 0.6), seg(0.499, 0.501), Segment::SEED]);
    assert_eq!(found, vec![1]);
}

#[test]
fn matched_transitions_have_no_issues() {
    let current = SliceMap::new(vec![
        vec![seg(0.2, 0.4), seg(0.5, 0.7), seg(0.8, 0.9)],
        vec![seg(0.4, 0.6)],
        vec![],
        vec![seg(0.3, 0.7)],
    ]);
    let target = SliceMap::new(vec![
        vec![seg(0.4, 0.6)],
        vec![seg(0.1, 0.3), seg(0.45, 0.55), seg(0.7, 0.9)],
        vec![seg(0.3, 0.7)],
        vec![],
    ]);
    let pairs = match_slice_maps(&current, &target, 4, &MatcherConfig::default());

    for step in 0..=50 {
        let report = validate_morphing_segments(&pairs, f64::from(step) / 50.0);
        assert!(report.is_ok(), "step {step}: {:?}", report.issues);
    }
}

#[test]
fn collapsing_pair_is_flagged_mid_transition() {
    // Two mirrored slivers crossing through the center.
    let pairs = MorphPairs::new(vec![MatchPair {
        slice_index: 7,
        current: vec![seg(0.3, 0.31)],
        target: vec![seg(0.69, 0.7)],
    }]);

    assert!(validate_morphing_segments(&pairs, 0.0).is_ok());
    let report = validate_morphing_segments(&pairs, 0.5);
    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, MorphIssueKind::CenterCollapse);
    assert_eq!(issue.slice_index, 7);
    assert_eq!(issue.segment_index, 0);
}

#[test]
fn range_and_inversion_are_flagged() {
    let pairs = MorphPairs::new(vec![MatchPair {
        slice_index: 0,
        current: vec![seg(0.8, 0.6), seg(0.9, 1.4)],
        target: vec![seg(0.8, 0.6), seg(0.9, 1.4)],
    }]);
    let report = validate_morphing_segments(&pairs, 2.0);
    assert_eq!(report.progress, 1.0);

    let kinds: Vec<_> = report.issues.iter().map(|i| (i.segment_index, i.kind)).collect();
    assert_eq!(
        kinds,
        vec![(0, MorphIssueKind::Inverted), (1, MorphIssueKind::OutOfRange)]
    );
}

#[test]
fn uneven_pair_checks_every_segment() {
    let pairs = MorphPairs::new(vec![MatchPair {
        slice_index: 2,
        current: vec![seg(0.1, 0.3)],
        target: vec![seg(0.1, 0.3), seg(0.9, 1.4)],
    }]);
    let report = validate_morphing_segments(&pairs, 1.0);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].segment_index, 1);
    assert_eq!(report.issues[0].current, Segment::SEED);
    assert_eq!(report.issues[0].kind, MorphIssueKind::OutOfRange);
}
