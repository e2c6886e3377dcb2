//! Declarative operation schemas mapping leaf parameters to output paths.
//!
//! A schema is fixed per request-operation type. Construction performs every
//! validation eagerly and reports all violations together, so binding itself
//! can never fail. Schemas are built programmatically from [`PathSpec`]s or
//! loaded from declarative [`SchemaTable`]s.

mod spec;
mod table;
mod validate;

pub use spec::{OperationSchema, PathSpec};
pub use table::SchemaTable;
