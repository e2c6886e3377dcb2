//! Eager schema validation.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::SchemaError;

use super::spec::PathSpec;

/// Collects every violation in `specs` against the `declared` leaf names.
pub(super) fn run(declared: &BTreeSet<String>, specs: &[PathSpec]) -> Vec<SchemaError> {
    let mut violations = Vec::new();
    check_unknown_leaves(declared, specs, &mut violations);
    check_duplicate_leaves(specs, &mut violations);
    check_duplicate_paths(specs, &mut violations);
    check_path_conflicts(specs, &mut violations);
    violations
}

fn check_unknown_leaves(
    declared: &BTreeSet<String>,
    specs: &[PathSpec],
    out: &mut Vec<SchemaError>,
) {
    for spec in specs {
        if !declared.contains(spec.leaf()) {
            out.push(SchemaError::UnknownLeaf {
                leaf: spec.leaf().to_owned(),
                path: spec.path().to_string(),
            });
        }
    }
}

fn check_duplicate_leaves(specs: &[PathSpec], out: &mut Vec<SchemaError>) {
    let mut seen = BTreeSet::new();
    for spec in specs {
        if !seen.insert(spec.leaf()) {
            out.push(SchemaError::DuplicateLeaf {
                leaf: spec.leaf().to_owned(),
            });
        }
    }
}

fn check_duplicate_paths(specs: &[PathSpec], out: &mut Vec<SchemaError>) {
    let mut first_by_path: BTreeMap<String, &str> = BTreeMap::new();
    for spec in specs {
        let rendered = spec.path().to_string();
        match first_by_path.get(rendered.as_str()) {
            Some(first) => out.push(SchemaError::DuplicatePath {
                path: rendered.clone(),
                first: (*first).to_owned(),
                second: spec.leaf().to_owned(),
            }),
            None => {
                first_by_path.insert(rendered, spec.leaf());
            }
        }
    }
}

fn check_path_conflicts(specs: &[PathSpec], out: &mut Vec<SchemaError>) {
    for (index, left) in specs.iter().enumerate() {
        for right in specs.iter().skip(index + 1) {
            let (prefix, extension) = if left.path().is_strict_prefix_of(right.path()) {
                (left, right)
            } else if right.path().is_strict_prefix_of(left.path()) {
                (right, left)
            } else {
                continue;
            };
            out.push(SchemaError::PathConflict {
                prefix: prefix.path().to_string(),
                prefix_leaf: prefix.leaf().to_owned(),
                extension: extension.path().to_string(),
                extension_leaf: extension.leaf().to_owned(),
            });
        }
    }
}
