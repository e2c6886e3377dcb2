//! Presence-aware binding of flat leaf parameters into sparse request trees.
//!
//! Generated SDK wrappers typically expose one flat, optionally-supplied
//! parameter per nested request field and then hand-write the code that
//! reassembles those parameters into deeply nested request objects, omitting
//! every sub-object whose fields were never supplied. `leafbind` replaces that
//! per-operation boilerplate with a single data-driven binder: a declarative
//! schema maps each leaf parameter to a dotted path in the output tree, and
//! [`Binder::bind`] produces the minimal [`BuiltTree`] for any combination of
//! supplied and absent leaves.
//!
//! Presence is tracked independently of value content: a leaf supplied as
//! `0`, `""` or `[]` still materialises its path, and an explicit null is
//! distinct from a leaf that was never supplied. Schema construction is the
//! only fallible step; binding itself accepts every presence combination.
//!
//! # Example
//!
//! ```rust
//! use leafbind::{Binder, Emitter, JsonEmitter, LeafSet, OperationSchema, PathSpec};
//! use serde_json::json;
//!
//! # fn main() -> leafbind::SchemaResult<()> {
//! let schema = OperationSchema::new(
//!     "UpdateFlowSource",
//!     ["FailoverMode", "PrimarySource"],
//!     vec![
//!         PathSpec::parse("FailoverMode", "FailoverConfig.FailoverMode")?,
//!         PathSpec::parse("PrimarySource", "FailoverConfig.SourcePriority.PrimarySource")?,
//!     ],
//! )?;
//!
//! let mut leaves = LeafSet::new();
//! leaves.set("FailoverMode", "MERGE");
//!
//! let tree = Binder::new(schema).bind(&leaves);
//! let request = JsonEmitter.emit(tree);
//! assert_eq!(request, json!({"FailoverConfig": {"FailoverMode": "MERGE"}}));
//! # Ok(())
//! # }
//! ```

mod bind;
pub mod emit;
mod error;
mod leaf;
mod path;
pub mod schema;
mod tree;

pub use bind::Binder;
pub use emit::{Emitter, JsonEmitter, QueryEmitter};
pub use error::{AggregatedErrors, SchemaError, SchemaResult};
pub use leaf::{LeafSet, LeafValue, Presence};
pub use path::FieldPath;
pub use schema::{OperationSchema, PathSpec, SchemaTable};
pub use tree::{BuiltTree, TreeNode};
