use luminet_core::{score, TagSet};

fn tags(values: &[&str]) -> TagSet {
    values.iter().map(|value| value.to_string()).collect()
}

fn samples() -> Vec<TagSet> {
    vec![
        TagSet::new(),
        tags(&["x"]),
        tags(&["x", "y"]),
        tags(&["y", "z"]),
        tags(&["solar", "energy", "grid", "storage"]),
        tags(&["energy", "policy"]),
    ]
}

#[test]
fn score_is_symmetric_and_bounded() {
    let sets = samples();
    for a in &sets {
        for b in &sets {
            let forward = score(a, b);
            assert_eq!(forward, score(b, a));
            assert!((0.0..=1.0).contains(&forward), "out of bounds: {forward}");
        }
    }
}

#[test]
fn empty_against_empty_is_zero_not_nan() {
    let result = score(&TagSet::new(), &TagSet::new());
    assert!(!result.is_nan());
    assert_eq!(result, 0.0);
}

#[test]
fn identical_non_empty_sets_score_one() {
    for set in samples().into_iter().filter(|set| !set.is_empty()) {
        assert_eq!(score(&set, &set), 1.0);
    }
}

#[test]
fn disjoint_sets_score_zero() {
    assert_eq!(score(&tags(&["x"]), &tags(&["y", "z"])), 0.0);
    assert_eq!(score(&TagSet::new(), &tags(&["y"])), 0.0);
}

#[test]
fn partial_overlap_is_intersection_over_union() {
    let a = tags(&["solar", "energy", "grid", "storage"]);
    let b = tags(&["energy", "policy"]);
    assert_eq!(score(&a, &b), 1.0 / 5.0);
}
