//! Dotted-key query emitter.

use multimap::MultiMap;
use serde_json::Value;

use crate::tree::{BuiltTree, TreeNode};

use super::Emitter;

/// Multimap of dotted query keys to rendered values.
pub type QueryMap = MultiMap<String, String>;

/// Emitter flattening the tree into dotted-key/value pairs, the shape
/// query-protocol wire layers consume.
///
/// Rendering rules:
/// - strings render unquoted; numbers and booleans via their display form;
/// - an explicit null renders as an empty value for its key;
/// - a present-but-empty list contributes a single empty value for its key
///   ("clear this list" semantics); a non-empty list contributes one entry
///   per element under the same key;
/// - opaque structured leaf values render as compact JSON.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueryEmitter;

impl Emitter for QueryEmitter {
    type Request = QueryMap;

    fn emit(&self, tree: BuiltTree) -> QueryMap {
        let mut map = QueryMap::new();
        if let Some(root) = tree.into_root() {
            flatten(&root, &mut Vec::new(), &mut map);
        }
        map
    }
}

fn flatten(node: &TreeNode, prefix: &mut Vec<String>, map: &mut QueryMap) {
    for (name, value) in node.leaves() {
        let key = join_key(prefix, name);
        match value {
            Value::Array(items) if items.is_empty() => map.insert(key, String::new()),
            Value::Array(items) => {
                for item in items {
                    map.insert(key.clone(), render_scalar(item));
                }
            }
            other => map.insert(key, render_scalar(other)),
        }
    }
    for (name, child) in node.children() {
        prefix.push(name.to_owned());
        flatten(child, prefix, map);
        prefix.pop();
    }
}

fn join_key(prefix: &[String], name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        let mut key = prefix.join(".");
        key.push('.');
        key.push_str(name);
        key
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
