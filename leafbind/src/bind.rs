//! The presence-aware tree builder.

use std::sync::Arc;

use crate::leaf::LeafSet;
use crate::schema::OperationSchema;
use crate::tree::{BuiltTree, TreeNode};

/// Binds flat leaf sets into sparse request trees for one operation.
///
/// A binder wraps one validated [`OperationSchema`] and is cheap to clone;
/// clones share the schema. Binding is infallible: any combination of
/// supplied and absent leaves is legal input, and the only error in the
/// crate is raised at schema construction time.
///
/// Each call allocates its own tree and touches no shared mutable state, so
/// independent calls may run concurrently without locking.
#[derive(Clone, Debug)]
pub struct Binder {
    schema: Arc<OperationSchema>,
}

impl Binder {
    /// Wraps a validated schema.
    #[must_use]
    pub fn new(schema: OperationSchema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// The schema this binder serves.
    #[must_use]
    pub fn schema(&self) -> &OperationSchema {
        &self.schema
    }

    /// Builds the minimal tree for `leaves`.
    ///
    /// Every sub-object materialises only if at least one descendant leaf was
    /// supplied, and the result is independent of the order leaves were
    /// supplied in. Supplied leaves that no spec references are ignored.
    #[must_use]
    pub fn bind(&self, leaves: &LeafSet) -> BuiltTree {
        let mut root = TreeNode::new();
        let mut bound = 0_usize;
        for spec in self.schema.specs() {
            let Some(value) = leaves.get(spec.leaf()) else {
                continue;
            };
            let mut node = &mut root;
            for segment in spec.path().parents() {
                node = node.child_mut(segment);
            }
            node.set_leaf(spec.path().terminal(), value.clone());
            bound += 1;
            tracing::debug!(
                operation = self.schema.operation(),
                leaf = spec.leaf(),
                path = %spec.path(),
                "bound leaf"
            );
        }
        for (name, _) in leaves.iter() {
            if !self.schema.binds_leaf(name) {
                tracing::debug!(
                    operation = self.schema.operation(),
                    leaf = name,
                    "supplied leaf has no binding; ignored"
                );
            }
        }
        root.prune();
        tracing::debug!(
            operation = self.schema.operation(),
            bound,
            supplied = leaves.len(),
            "bind complete"
        );
        BuiltTree::from_root(root)
    }
}

impl From<OperationSchema> for Binder {
    fn from(schema: OperationSchema) -> Self {
        Self::new(schema)
    }
}
