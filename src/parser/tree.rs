//! Token tree flattening.
//!
//! Design tools export tokens as arbitrarily nested objects whose leaves
//! carry a kind and a value:
//!
//! ```json
//! {
//!     "Black opacity": { "090": { "type": "color", "value": "#000000e6" } },
//!     "Secondary": { "Orange": { "100": { "type": "color", "value": "#ffead5" } } }
//! }
//! ```
//!
//! Flattening turns this into `black opacity.090` and `secondary.orange.100`.

use serde_json::{Map, Value};

use crate::types::{FlatCoreMap, RawLeaf};

/// Field spellings accepted for a leaf's kind and value.
const KIND_FIELDS: [&str; 2] = ["type", "$type"];
const VALUE_FIELDS: [&str; 2] = ["value", "$value"];

/// Read a node as a token leaf.
///
/// A node is a leaf iff it has both a kind and a value field with string
/// values. Anything else is an intermediate node.
pub fn as_leaf(node: &Map<String, Value>) -> Option<RawLeaf> {
    let field = |names: &[&str]| names.iter().find_map(|name| node.get(*name)?.as_str());

    let kind = field(&KIND_FIELDS)?;
    let value = field(&VALUE_FIELDS)?;
    Some(RawLeaf::new(kind, value))
}

/// Flatten a nested token tree into a map keyed by lowercase dotted path.
///
/// Values that are neither leaves nor objects (stray strings, numbers,
/// arrays) are skipped rather than treated as errors, so one malformed branch
/// does not abort the whole document.
pub fn flatten(tree: &Map<String, Value>) -> FlatCoreMap {
    let mut flat = FlatCoreMap::new();
    let mut stack: Vec<(String, &Map<String, Value>)> = vec![(String::new(), tree)];

    while let Some((prefix, node)) = stack.pop() {
        for (key, value) in node {
            let Value::Object(child) = value else {
                continue;
            };

            let segment = key.to_lowercase();
            let path = if prefix.is_empty() {
                segment
            } else {
                format!("{}.{}", prefix, segment)
            };

            match as_leaf(child) {
                Some(leaf) => {
                    flat.insert(path, leaf);
                }
                None => stack.push((path, child)),
            }
        }
    }

    flat
}
