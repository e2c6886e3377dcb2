//! Declarative schema tables.
//!
//! Generated wrappers carry one schema table per API operation. Tables are
//! plain data: deserialise from JSON (always) or TOML (behind the `toml`
//! feature), then promote into a validated [`OperationSchema`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{SchemaError, SchemaResult};

use super::spec::{OperationSchema, PathSpec};

/// Serialisable description of one operation schema.
///
/// # Examples
///
/// ```rust
/// use leafbind::SchemaTable;
///
/// let table = SchemaTable::from_json_str(
///     r#"{
///         "operation": "UpdateFlowSource",
///         "leaves": ["FailoverMode", "PrimarySource"],
///         "bindings": {
///             "FailoverMode": "FailoverConfig.FailoverMode",
///             "PrimarySource": "FailoverConfig.SourcePriority.PrimarySource"
///         }
///     }"#,
/// )?;
/// let schema = table.into_schema()?;
/// assert_eq!(schema.operation(), "UpdateFlowSource");
/// assert!(schema.binds_leaf("FailoverMode"));
/// # Ok::<_, leafbind::SchemaError>(())
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SchemaTable {
    /// Name of the request operation the table describes.
    pub operation: String,
    /// Leaf parameter names the host declares for the operation.
    #[serde(default)]
    pub leaves: Vec<String>,
    /// Bindings from leaf name to dotted output path.
    #[serde(default)]
    pub bindings: BTreeMap<String, String>,
}

impl SchemaTable {
    /// Parses a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Table`] when the text is not a valid table.
    pub fn from_json_str(text: &str) -> SchemaResult<Self> {
        serde_json::from_str(text).map_err(|error| SchemaError::table(error))
    }

    /// Parses a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Table`] when the text is not a valid table.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> SchemaResult<Self> {
        toml::from_str(text).map_err(|error| SchemaError::table(error))
    }

    /// Promotes the table into a validated [`OperationSchema`].
    ///
    /// # Errors
    ///
    /// Returns the same violations as [`OperationSchema::new`]. Malformed
    /// dotted paths are reported together before structural validation runs.
    pub fn into_schema(self) -> SchemaResult<OperationSchema> {
        let mut parse_errors = Vec::new();
        let mut specs = Vec::with_capacity(self.bindings.len());
        for (leaf, dotted) in self.bindings {
            match PathSpec::parse(leaf, &dotted) {
                Ok(spec) => specs.push(spec),
                Err(error) => parse_errors.push(error),
            }
        }
        if let Some(error) = SchemaError::try_aggregate(parse_errors) {
            return Err(error);
        }
        OperationSchema::new(self.operation, self.leaves, specs)
    }
}
