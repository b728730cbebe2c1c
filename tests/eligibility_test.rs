//! Integration tests for the public eligibility API

use clash_inviter::{
    eligibility::{evaluate, is_eligible, FilterCriteria, InviteResult, RejectReason},
    PlayerRecord, PlayerTag,
};
use std::collections::BTreeMap;

fn troops(archer: u32, barbarian: u32) -> BTreeMap<String, u32> {
    [("Archer".to_string(), archer), ("Barbarian".to_string(), barbarian)]
        .into_iter()
        .collect()
}

fn record(tag: &str, town_hall: u32, trophies: u32, troops: BTreeMap<String, u32>) -> PlayerRecord {
    PlayerRecord {
        tag: PlayerTag::new(tag).unwrap(),
        name: String::new(),
        town_hall_level: town_hall,
        exp_level: 0,
        trophies,
        clan: None,
        troops,
    }
}

#[test]
fn test_documented_example() {
    let criteria = FilterCriteria::default();
    assert_eq!(criteria.town_hall_min, 9);
    assert_eq!(criteria.trophies_min, 1000);
    assert_eq!(criteria.troop_min_levels, troops(4, 4));

    let accepted = record("#AAA", 9, 1000, troops(4, 4));
    assert!(is_eligible(&accepted, &criteria));

    let rejected = record("#BBB", 8, 1500, troops(5, 5));
    assert!(!is_eligible(&rejected, &criteria));
    let result = InviteResult::from_evaluation(&rejected, &criteria);
    assert!(result.reason.unwrap().starts_with("townHallLevel"));
}

#[test]
fn test_every_single_failing_threshold_rejects() {
    let criteria = FilterCriteria::default();
    let cases = [
        record("#A", 8, 1000, troops(4, 4)),
        record("#B", 9, 999, troops(4, 4)),
        record("#C", 9, 1000, troops(3, 4)),
        record("#D", 9, 1000, troops(4, 3)),
    ];
    for r in &cases {
        assert!(!is_eligible(r, &criteria), "{} should be rejected", r.tag);
    }
}

#[test]
fn test_one_above_every_threshold_accepts() {
    let r = record("#A", 10, 1001, troops(5, 5));
    assert!(is_eligible(&r, &FilterCriteria::default()));
}

#[test]
fn test_missing_troop_key_rejects() {
    let mut only_archer = BTreeMap::new();
    only_archer.insert("Archer".to_string(), 9);
    let r = record("#A", 12, 4000, only_archer);

    assert_eq!(
        evaluate(&r, &FilterCriteria::default()),
        Err(RejectReason::TroopMissing {
            troop: "Barbarian".to_string()
        })
    );
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let criteria = FilterCriteria::default();
    let r = record("#A", 9, 1000, troops(4, 4));
    let first = InviteResult::from_evaluation(&r, &criteria);
    let second = InviteResult::from_evaluation(&r, &criteria);
    assert_eq!(first, second);
}
