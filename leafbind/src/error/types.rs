//! Primary error enum for schema construction.

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors raised while constructing an operation schema.
///
/// Every variant is a configuration-time defect in the schema itself.
/// Binding never fails: any combination of supplied and absent leaves is
/// legal input once a schema has been constructed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A path spec references a leaf name that was never declared.
    #[error("path '{path}' is bound to undeclared leaf '{leaf}'")]
    UnknownLeaf {
        /// Leaf name the spec references.
        leaf: String,
        /// Output path of the offending spec.
        path: String,
    },

    /// Two path specs consume the same leaf.
    #[error("leaf '{leaf}' is bound more than once")]
    DuplicateLeaf {
        /// Leaf name bound twice.
        leaf: String,
    },

    /// Two path specs target the same output path.
    #[error("path '{path}' is targeted by leaves '{first}' and '{second}'")]
    DuplicatePath {
        /// Output path targeted twice.
        path: String,
        /// Leaf bound to the path first.
        first: String,
        /// Leaf bound to the path afterwards.
        second: String,
    },

    /// One spec's full path is a strict prefix of another's, so a single
    /// field would have to be both a value slot and a nested object.
    #[error("path '{prefix}' (leaf '{prefix_leaf}') is a prefix of '{extension}' (leaf '{extension_leaf}')")]
    PathConflict {
        /// The shorter path.
        prefix: String,
        /// Leaf bound to the shorter path.
        prefix_leaf: String,
        /// The longer path extending through the shorter one's terminal field.
        extension: String,
        /// Leaf bound to the longer path.
        extension_leaf: String,
    },

    /// A dotted path failed to parse.
    #[error("malformed path '{path}': {message}")]
    MalformedPath {
        /// The dotted text that failed to parse.
        path: String,
        /// What was wrong with it.
        message: String,
    },

    /// A declarative schema table failed to parse.
    #[error("schema table error: {source}")]
    Table {
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Multiple violations found in one validation pass.
    #[error("multiple schema errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
