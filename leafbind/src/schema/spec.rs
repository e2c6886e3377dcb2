//! Path specs and validated operation schemas.

use std::collections::BTreeSet;

use crate::error::{SchemaError, SchemaResult};
use crate::path::FieldPath;

use super::validate;

/// One schema entry binding a leaf parameter to its output path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathSpec {
    leaf: String,
    path: FieldPath,
}

impl PathSpec {
    /// Creates a spec from an already-parsed path.
    #[must_use]
    pub fn new(leaf: impl Into<String>, path: FieldPath) -> Self {
        Self {
            leaf: leaf.into(),
            path,
        }
    }

    /// Creates a spec, parsing `dotted` as the output path.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedPath`] when `dotted` fails to parse.
    pub fn parse(leaf: impl Into<String>, dotted: &str) -> SchemaResult<Self> {
        Ok(Self::new(leaf, FieldPath::parse(dotted)?))
    }

    /// The leaf parameter name this spec consumes.
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// The output path the leaf lands at.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }
}

/// The validated schema for one request-operation type.
///
/// Construction is the only fallible step in the crate: every violation is
/// detected eagerly, never per bind call, and a constructed schema is
/// immutable. One schema instance may serve any number of concurrent bind
/// calls.
#[derive(Clone, Debug)]
pub struct OperationSchema {
    operation: String,
    declared: BTreeSet<String>,
    bound: BTreeSet<String>,
    specs: Vec<PathSpec>,
}

impl OperationSchema {
    /// Validates `specs` against the declared leaf parameter names.
    ///
    /// A declared leaf with no binding is legal (hosts may declare parameters
    /// that feed response shaping instead of the request tree) and is
    /// reported via `tracing::warn!`.
    ///
    /// # Errors
    ///
    /// Returns a single [`SchemaError`] describing the lone violation, or
    /// [`SchemaError::Aggregate`] listing every violation found in one pass:
    /// undeclared leaves, duplicate leaf bindings, duplicate target paths,
    /// and path prefix conflicts.
    pub fn new<I>(
        operation: impl Into<String>,
        declared: I,
        specs: Vec<PathSpec>,
    ) -> SchemaResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let declared_names: BTreeSet<String> = declared.into_iter().map(Into::into).collect();
        if let Some(error) = SchemaError::try_aggregate(validate::run(&declared_names, &specs)) {
            return Err(error);
        }
        let bound: BTreeSet<String> = specs.iter().map(|spec| spec.leaf().to_owned()).collect();
        let schema = Self {
            operation: operation.into(),
            declared: declared_names,
            bound,
            specs,
        };
        for name in schema.declared.difference(&schema.bound) {
            tracing::warn!(
                operation = schema.operation.as_str(),
                leaf = name.as_str(),
                "declared leaf has no path binding"
            );
        }
        Ok(schema)
    }

    /// The operation name this schema serves.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Declared leaf parameter names, in name order.
    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    /// The path specs, in binding order.
    #[must_use]
    pub fn specs(&self) -> &[PathSpec] {
        &self.specs
    }

    /// Whether any spec consumes the leaf `name`.
    #[must_use]
    pub fn binds_leaf(&self, name: &str) -> bool {
        self.bound.contains(name)
    }

    /// Whether `name` was declared at all.
    #[must_use]
    pub fn declares_leaf(&self, name: &str) -> bool {
        self.declared.contains(name)
    }
}
