//! Tree normalizer
//!
//! Parses canonical text with a generic JSON parse step, then converts the
//! parsed value into a [`Node`] tree in one exhaustive recursive pass. Every
//! object, at any depth and inside any list, becomes a [`Node::Map`] so that
//! later passes can walk and mutate the tree with a single match.

use crate::error::{PipelineError, Result};
use crate::node::{Node, NodeMap, Scalar};
use serde_json::Value;

/// Parse canonical (or structurally equivalent) JSON text into a tree
pub fn normalize(text: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(text).map_err(|e| PipelineError::parse(e.to_string()))?;
    Ok(normalize_value(value))
}

/// Convert an already parsed JSON value into a tree
pub fn normalize_value(value: Value) -> Node {
    match value {
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Node::Scalar(Scalar::Number(n)),
        Value::String(s) => Node::Scalar(Scalar::String(s)),
        Value::Array(items) => Node::List(items.into_iter().map(normalize_value).collect()),
        Value::Object(fields) => Node::Map(
            fields
                .into_iter()
                .map(|(key, field)| (key, normalize_value(field)))
                .collect::<NodeMap>(),
        ),
    }
}
