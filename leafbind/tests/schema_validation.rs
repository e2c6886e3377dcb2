//! Schema construction rejects defective spec tables eagerly.

use anyhow::{Result, ensure};
use leafbind::{OperationSchema, PathSpec, SchemaError};
use rstest::rstest;

fn spec(leaf: &str, dotted: &str) -> Result<PathSpec> {
    Ok(PathSpec::parse(leaf, dotted)?)
}

#[test]
fn a_valid_schema_constructs() -> Result<()> {
    let schema = OperationSchema::new(
        "CreateFlow",
        ["Name", "Mode"],
        vec![spec("Name", "Flow.Name")?, spec("Mode", "Flow.Config.Mode")?],
    )?;
    ensure!(schema.operation() == "CreateFlow");
    ensure!(schema.binds_leaf("Name") && schema.binds_leaf("Mode"));
    ensure!(schema.declares_leaf("Name"));
    ensure!(!schema.binds_leaf("Other"));
    ensure!(schema.specs().len() == 2);
    Ok(())
}

#[test]
fn an_unbound_declared_leaf_is_legal() -> Result<()> {
    let schema = OperationSchema::new(
        "CreateFlow",
        ["Name", "ResponseOnly"],
        vec![spec("Name", "Flow.Name")?],
    )?;
    ensure!(schema.declares_leaf("ResponseOnly"));
    ensure!(!schema.binds_leaf("ResponseOnly"));
    Ok(())
}

#[rstest]
#[case::undeclared_leaf(
    vec![("Name", "Flow.Name"), ("Ghost", "Flow.Ghost")],
    vec!["Name"],
)]
fn an_undeclared_leaf_is_rejected(
    #[case] bindings: Vec<(&str, &str)>,
    #[case] declared: Vec<&str>,
) -> Result<()> {
    let mut specs = Vec::new();
    for (leaf, dotted) in bindings {
        specs.push(spec(leaf, dotted)?);
    }
    let outcome = OperationSchema::new("CreateFlow", declared, specs);
    ensure!(
        matches!(outcome, Err(SchemaError::UnknownLeaf { .. })),
        "expected UnknownLeaf, got {outcome:?}"
    );
    Ok(())
}

#[test]
fn a_twice_bound_leaf_is_rejected() -> Result<()> {
    let outcome = OperationSchema::new(
        "CreateFlow",
        ["Name"],
        vec![spec("Name", "Flow.Name")?, spec("Name", "Flow.Title")?],
    );
    ensure!(
        matches!(outcome, Err(SchemaError::DuplicateLeaf { .. })),
        "expected DuplicateLeaf, got {outcome:?}"
    );
    Ok(())
}

#[test]
fn a_twice_targeted_path_is_rejected() -> Result<()> {
    let outcome = OperationSchema::new(
        "CreateFlow",
        ["Name", "Title"],
        vec![spec("Name", "Flow.Name")?, spec("Title", "Flow.Name")?],
    );
    ensure!(
        matches!(outcome, Err(SchemaError::DuplicatePath { .. })),
        "expected DuplicatePath, got {outcome:?}"
    );
    Ok(())
}

#[test]
fn a_prefix_path_pair_is_rejected() -> Result<()> {
    let outcome = OperationSchema::new(
        "CreateFlow",
        ["Config", "Mode"],
        vec![
            spec("Config", "Flow.Config")?,
            spec("Mode", "Flow.Config.Mode")?,
        ],
    );
    ensure!(
        matches!(outcome, Err(SchemaError::PathConflict { .. })),
        "expected PathConflict, got {outcome:?}"
    );
    Ok(())
}

#[test]
fn multiple_defects_are_reported_together() -> Result<()> {
    let outcome = OperationSchema::new(
        "CreateFlow",
        ["Name"],
        vec![
            spec("Name", "Flow.Name")?,
            spec("Name", "Flow.Title")?,
            spec("Ghost", "Flow.Ghost")?,
        ],
    );
    let Err(SchemaError::Aggregate(aggregate)) = outcome else {
        anyhow::bail!("expected an aggregated error, got {outcome:?}");
    };
    ensure!(
        aggregate.len() == 2,
        "expected both defects reported, got {}",
        aggregate.len()
    );
    ensure!(
        aggregate
            .iter()
            .any(|error| matches!(error, SchemaError::UnknownLeaf { .. }))
    );
    ensure!(
        aggregate
            .iter()
            .any(|error| matches!(error, SchemaError::DuplicateLeaf { .. }))
    );
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::dangling_dot("Flow.")]
#[case::double_dot("Flow..Name")]
fn malformed_paths_are_rejected_at_spec_parse(#[case] dotted: &str) {
    let outcome = PathSpec::parse("Name", dotted);
    assert!(matches!(outcome, Err(SchemaError::MalformedPath { .. })));
}
