//! Unit tests for error display and aggregation behaviour.

use rstest::rstest;

use super::SchemaError;

fn unknown(leaf: &str) -> SchemaError {
    SchemaError::UnknownLeaf {
        leaf: leaf.to_owned(),
        path: format!("Config.{leaf}"),
    }
}

#[test]
fn try_aggregate_none_on_empty() {
    assert!(SchemaError::try_aggregate(Vec::new()).is_none());
}

#[test]
fn try_aggregate_unwraps_a_single_violation() {
    let outcome = SchemaError::try_aggregate(vec![unknown("A")]);
    assert!(matches!(outcome, Some(SchemaError::UnknownLeaf { .. })));
}

#[test]
fn aggregate_combines_and_numbers_entries() {
    let error = SchemaError::aggregate(vec![unknown("A"), unknown("B")]);
    let SchemaError::Aggregate(aggregate) = error else {
        panic!("expected Aggregate, got something else");
    };
    assert_eq!(aggregate.len(), 2);
    assert!(!aggregate.is_empty());
    let display = aggregate.to_string();
    assert!(display.starts_with("1:"), "first entry missing: {display}");
    assert!(display.contains("\n2:"), "second entry missing: {display}");
}

#[test]
fn aggregate_iterates_both_ways() {
    let error = SchemaError::aggregate(vec![unknown("A"), unknown("B")]);
    let SchemaError::Aggregate(aggregate) = error else {
        panic!("expected Aggregate, got something else");
    };
    let borrowed: Vec<_> = aggregate.iter().collect();
    assert_eq!(borrowed.len(), 2);
    let owned: Vec<_> = (*aggregate).into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn aggregate_panics_on_empty() {
    let outcome = std::panic::catch_unwind(|| SchemaError::aggregate(Vec::new()));
    assert!(outcome.is_err());
}

#[rstest]
#[case::unknown_leaf(unknown("FailoverMode"), "undeclared leaf 'FailoverMode'")]
#[case::duplicate_leaf(
    SchemaError::DuplicateLeaf { leaf: "State".into() },
    "bound more than once"
)]
#[case::duplicate_path(
    SchemaError::DuplicatePath {
        path: "Config.State".into(),
        first: "A".into(),
        second: "B".into(),
    },
    "targeted by leaves 'A' and 'B'"
)]
#[case::malformed(
    SchemaError::MalformedPath { path: "A..B".into(), message: "empty path segment".into() },
    "malformed path"
)]
fn display_names_the_violation(#[case] error: SchemaError, #[case] needle: &str) {
    let text = error.to_string();
    assert!(text.contains(needle), "missing {needle:?} in {text:?}");
}
