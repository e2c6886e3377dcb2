//! JSON emitter.

use serde_json::{Map, Value};

use crate::tree::{BuiltTree, TreeNode};

use super::Emitter;

/// Reference emitter producing a JSON object.
///
/// Materialised nodes become objects and leaf fields keep their stored
/// values, explicit null included. The absent tree becomes `{}`: a request
/// with zero optional fields set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    type Request = Value;

    fn emit(&self, tree: BuiltTree) -> Value {
        tree.into_root()
            .map_or_else(|| Value::Object(Map::new()), node_to_value)
    }
}

fn node_to_value(node: TreeNode) -> Value {
    let (leaves, children) = node.into_parts();
    let mut object = Map::new();
    for (name, value) in leaves {
        object.insert(name, value);
    }
    for (name, child) in children {
        object.insert(name, node_to_value(child));
    }
    Value::Object(object)
}
