//!
//! The language ranking tests.
//!

use std::collections::BTreeMap;

use crate::model::result::LanguageResult;
use crate::parser::ParsedOutput;

use super::Ranking;

fn result(language: &str, total: Option<f64>) -> LanguageResult {
    LanguageResult::from_parsed(
        language.to_owned(),
        ParsedOutput {
            measurements: BTreeMap::new(),
            total,
        },
    )
}

fn languages(ranking: &Ranking) -> Vec<&str> {
    ranking
        .entries()
        .iter()
        .map(|entry| entry.language.as_str())
        .collect()
}

#[test]
fn ascending_order() {
    let results = vec![
        result("C", Some(30.0)),
        result("JavaScript", Some(10.0)),
        result("Python", Some(20.0)),
    ];

    let ranking = Ranking::new(&results);

    assert_eq!(languages(&ranking), vec!["JavaScript", "Python", "C"]);
    let positions: Vec<usize> = ranking.entries().iter().map(|entry| entry.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn ratios_to_fastest() {
    let results = vec![result("C", Some(10.0)), result("Python", Some(250.0))];

    let ranking = Ranking::new(&results);

    assert_eq!(ranking.entries()[0].ratio_to_fastest, None);
    assert!(ranking.entries()[0].is_fastest());
    assert_eq!(ranking.entries()[1].ratio_to_fastest, Some(25.0));
}

#[test]
fn failed_and_zero_totals_are_excluded() {
    let results = vec![
        LanguageResult::failed("C".to_owned(), "timed out after 300s".to_owned()),
        result("JavaScript", Some(0.0)),
        result("Python", None),
        result("PHP", Some(4.0)),
    ];

    let ranking = Ranking::new(&results);

    assert_eq!(languages(&ranking), vec!["PHP"]);
}

#[test]
fn empty() {
    let ranking = Ranking::new(&[]);

    assert!(ranking.is_empty());
    assert_eq!(ranking.fastest(), None);
    assert_eq!(ranking.standing("Tulpar"), None);
}

#[test]
fn ties_keep_enumeration_order() {
    let results = vec![
        result("PHP", Some(10.0)),
        result("C", Some(5.0)),
        result("Tulpar", Some(10.0)),
    ];

    let ranking = Ranking::new(&results);

    assert_eq!(languages(&ranking), vec!["C", "PHP", "Tulpar"]);
}

#[test]
fn tie_scenario() {
    let results = vec![result("A", Some(10.0)), result("B", Some(10.0))];

    let ranking = Ranking::new(&results);

    assert_eq!(languages(&ranking), vec!["A", "B"]);
    assert_eq!(ranking.entries()[1].ratio_to_fastest, Some(1.0));
}

#[test]
fn is_a_sorted_permutation() {
    let totals = [7.5, 0.0, 3.25, 12.0, 3.25, 1.0, 99.0];
    let results: Vec<LanguageResult> = totals
        .iter()
        .enumerate()
        .map(|(index, total)| result(format!("L{index}").as_str(), Some(*total)))
        .collect();

    let ranking = Ranking::new(&results);

    assert_eq!(ranking.entries().len(), 6);
    assert!(ranking
        .entries()
        .windows(2)
        .all(|pair| pair[0].total_ms <= pair[1].total_ms));
    assert_eq!(
        languages(&ranking),
        vec!["L5", "L2", "L4", "L0", "L3", "L6"]
    );
    for entry in ranking.entries().iter().skip(1) {
        assert!(entry.ratio_to_fastest.expect("Always exists") >= 1.0);
    }
}

#[test]
fn subject_standing() {
    let results = vec![
        result("C", Some(10.0)),
        result("Python", Some(400.0)),
        result("Tulpar", Some(40.0)),
    ];

    let ranking = Ranking::new(&results);
    let standing = ranking.standing("Tulpar").expect("Always exists");

    assert_eq!(standing.rank, 2);
    assert_eq!(standing.out_of, 3);
    assert_eq!(standing.total_ms, 40.0);
    assert_eq!(standing.fastest, "C");
    assert_eq!(standing.ratio_to_fastest, 4.0);
    assert!(!standing.is_fastest());
}

#[test]
fn subject_is_fastest() {
    let results = vec![result("C", Some(10.0)), result("Tulpar", Some(5.0))];

    let standing = Ranking::new(&results)
        .standing("Tulpar")
        .expect("Always exists");

    assert!(standing.is_fastest());
    assert_eq!(standing.ratio_to_fastest, 1.0);
}

#[test]
fn subject_without_rank() {
    let results = vec![
        result("C", Some(10.0)),
        LanguageResult::failed("Tulpar".to_owned(), "not found".to_owned()),
    ];

    assert_eq!(Ranking::new(&results).standing("Tulpar"), None);
}

#[test]
fn subject_faster_than_baseline() {
    let results = vec![result("Python", Some(300.0)), result("Tulpar", Some(100.0))];

    let comparison = Ranking::new(&results)
        .compare("Tulpar", "Python")
        .expect("Always exists");

    assert!(comparison.is_faster());
    assert!((comparison.ratio - 1.0 / 3.0).abs() < 1e-12);
    assert!((comparison.factor() - 3.0).abs() < 1e-12);
    assert_eq!(comparison.to_string(), "3.00x faster than Python");
}

#[test]
fn subject_slower_than_baseline() {
    let results = vec![result("Python", Some(100.0)), result("Tulpar", Some(150.0))];

    let comparison = Ranking::new(&results)
        .compare("Tulpar", "Python")
        .expect("Always exists");

    assert!(!comparison.is_faster());
    assert_eq!(comparison.factor(), 1.5);
    assert_eq!(comparison.to_string(), "1.50x slower than Python");
}

#[test]
fn equal_to_baseline_is_slower() {
    let results = vec![result("Python", Some(100.0)), result("Tulpar", Some(100.0))];

    let comparison = Ranking::new(&results)
        .compare("Tulpar", "Python")
        .expect("Always exists");

    assert!(!comparison.is_faster());
    assert_eq!(comparison.to_string(), "1.00x slower than Python");
}

#[test]
fn comparison_requires_both_ranked() {
    let results = vec![result("Python", None), result("Tulpar", Some(100.0))];

    assert_eq!(Ranking::new(&results).compare("Tulpar", "Python"), None);
}
