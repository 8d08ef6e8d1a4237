#![forbid(unsafe_code)]
use horaire::{export_policy_json, load_policy_from_file, Policy, SlotGrid};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_and_load_policy_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    let mut policy = Policy::default();
    policy.double_period_subjects.insert("Art".into());
    policy.timing.period_minutes = 45;

    export_policy_json(&path, &policy).unwrap();
    let loaded = load_policy_from_file(&path).unwrap();
    assert_eq!(loaded, policy);
}

#[test]
fn partial_policy_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{ "periods_per_day": 8, "break_period": 4 }"#).unwrap();

    let policy = load_policy_from_file(&path).unwrap();
    assert_eq!(policy.periods_per_day, 8);
    assert_eq!(policy.special_placements(), [("English", 7), ("Git", 8)]);
    assert!(policy.is_double_period("Physics"));

    // le bloc (3,4) touche la pause
    let blocks = policy.grid().double_period_candidates();
    assert_eq!(blocks.len(), 5 * 4);
    assert!(blocks.iter().all(|b| b[0].period != 3));
}

#[test]
fn partial_special_subjects_keep_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{ "special_subjects": { "last": "Git2" } }"#).unwrap();

    let policy = load_policy_from_file(&path).unwrap();
    assert_eq!(policy.special_subjects.penultimate, "English");
    assert_eq!(policy.special_subjects.last, "Git2");
    assert_eq!(policy.special_period("Git2"), Some(9));
}

#[test]
fn invalid_policies_are_rejected() {
    let cases = [
        Policy {
            periods_per_day: 1,
            ..Policy::default()
        },
        Policy {
            break_period: 0,
            ..Policy::default()
        },
        Policy {
            break_period: 8,
            ..Policy::default()
        },
        Policy {
            double_period_starts: vec![9],
            ..Policy::default()
        },
        Policy {
            timing: horaire::Timing {
                period_minutes: 0,
                ..Default::default()
            },
            ..Policy::default()
        },
    ];
    for policy in cases {
        assert!(policy.validate().is_err(), "{policy:?}");
    }

    let mut clash = Policy::default();
    clash.double_period_subjects.insert("English".into());
    assert!(clash.validate().is_err());

    let mut same = Policy::default();
    same.special_subjects.last = same.special_subjects.penultimate.clone();
    assert!(same.validate().is_err());
}

#[test]
fn invalid_policy_file_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{ "break_period": 12 }"#).unwrap();
    assert!(load_policy_from_file(&path).is_err());
}

#[test]
fn default_grid_shape() {
    let grid = Policy::default().grid();
    assert_eq!(grid.all_slots().count(), 45);
    assert_eq!(grid.teaching_slots().count(), 40);
    assert!(grid.teaching_slots().all(|s| s.period != 5));

    let blocks = grid.double_period_candidates();
    assert_eq!(blocks.len(), 25);
    for [a, b] in &blocks {
        assert_eq!(a.day, b.day);
        assert_eq!(b.period, a.period + 1);
        assert!(!grid.is_break(a.period) && !grid.is_break(b.period));
    }
}

#[test]
fn blocks_touching_break_are_skipped() {
    let grid = SlotGrid::new(9, 3, &[1, 2, 3, 6, 7]);
    let starts: Vec<u8> = grid
        .double_period_candidates()
        .iter()
        .take(3)
        .map(|b| b[0].period)
        .collect();
    assert_eq!(starts, vec![1, 6, 7]);
}

#[test]
fn period_labels() {
    let policy = Policy::default();
    let labels: Vec<String> = (1..=9).map(|p| policy.period_label(p)).collect();
    insta::assert_snapshot!(labels.join("\n"), @r"
    8.00 - 8.40
    8.40 - 9.20
    9.20 - 10.00
    10.00 - 10.40
    BREAK
    11.00 - 11.40
    11.40 - 12.20
    12.20 - 13.00
    13.00 - 13.40
    ");
}
