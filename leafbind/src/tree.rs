//! Sparse request trees with bottom-up materialisation.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::path::FieldPath;

/// A possibly-empty object keyed by field name.
///
/// Leaf fields hold opaque payloads (explicit null included) and are never
/// pruned; child nodes are subject to the materialisation invariant: after
/// [`TreeNode::prune`], a node survives if and only if it holds at least one
/// leaf field or at least one surviving child, transitively bottom-up.
///
/// A leaf field and a child node never share a name: setting one side
/// replaces the other. Schema validation keeps bound trees free of such
/// collisions in the first place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeNode {
    leaves: BTreeMap<String, Value>,
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Creates an empty node.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            leaves: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Sets the leaf field `name` to `value`, replacing any same-named child.
    pub fn set_leaf(&mut self, name: impl Into<String>, value: Value) {
        let key = name.into();
        self.children.remove(&key);
        self.leaves.insert(key, value);
    }

    /// Returns the child node `name`, creating it empty when missing and
    /// replacing any same-named leaf field.
    pub fn child_mut(&mut self, name: impl Into<String>) -> &mut Self {
        let key = name.into();
        self.leaves.remove(&key);
        self.children.entry(key).or_default()
    }

    /// Returns the leaf field `name`, if set.
    #[must_use]
    pub fn leaf(&self, name: &str) -> Option<&Value> {
        self.leaves.get(name)
    }

    /// Returns the child node `name`, if materialised.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    /// Iterates over leaf fields in name order.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.leaves.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over child nodes in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// Whether the node holds no leaf fields and no children at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty() && self.children.is_empty()
    }

    /// Whether the node or any descendant holds a leaf field.
    #[must_use]
    pub fn is_materialised(&self) -> bool {
        !self.leaves.is_empty() || self.children.values().any(Self::is_materialised)
    }

    /// Removes, bottom-up, every descendant left with zero leaf fields and
    /// zero surviving children.
    ///
    /// Runs after full population rather than incrementally: a node may
    /// receive its first real field late in iteration order.
    pub fn prune(&mut self) {
        for child in self.children.values_mut() {
            child.prune();
        }
        self.children.retain(|_, child| !child.is_empty());
    }

    /// Follows `path` from this node, returning the leaf value at its
    /// terminal field.
    #[must_use]
    pub fn leaf_at(&self, path: &FieldPath) -> Option<&Value> {
        let mut node = self;
        for segment in path.parents() {
            node = node.child(segment)?;
        }
        node.leaf(path.terminal())
    }

    /// Decomposes the node into its leaf fields and children.
    #[must_use]
    pub fn into_parts(self) -> (BTreeMap<String, Value>, BTreeMap<String, Self>) {
        (self.leaves, self.children)
    }
}

/// The root of a bound request tree; absent when no leaf was present.
///
/// Lifecycle is create once, populate, emit, discard: [`crate::Binder::bind`]
/// produces the tree, an [`crate::Emitter`] consumes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuiltTree {
    root: Option<TreeNode>,
}

impl BuiltTree {
    /// A tree with no materialised content at all.
    #[must_use]
    pub const fn absent() -> Self {
        Self { root: None }
    }

    /// Wraps `root`, normalising a fully-empty node to the absent tree.
    #[must_use]
    pub fn from_root(root: TreeNode) -> Self {
        if root.is_empty() {
            Self::absent()
        } else {
            Self { root: Some(root) }
        }
    }

    /// Returns the root node, if any content materialised.
    #[must_use]
    pub const fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Consumes the tree, handing the root to an emitter.
    #[must_use]
    pub fn into_root(self) -> Option<TreeNode> {
        self.root
    }

    /// Whether nothing materialised.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.root.is_none()
    }

    /// Follows `path` from the root, returning the leaf value at its terminal
    /// field.
    #[must_use]
    pub fn leaf_at(&self, path: &FieldPath) -> Option<&Value> {
        self.root.as_ref().and_then(|root| root.leaf_at(path))
    }
}
