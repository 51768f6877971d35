//! Canonical payload tree
//!
//! Every record is a [`NodeMap`] (insertion-ordered), every sequence a
//! `Vec<Node>`, everything else a [`Scalar`]. [`Node::Reference`] only ever
//! appears where the reinjector restored a live handle.

use crate::path::FieldPath;
use crate::reference::HostRef;
use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

/// Ordered map used for every record in the tree
pub type NodeMap = IndexMap<String, Node>;

/// Leaf value of the canonical tree
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Only inside lists; map entries with null values are elided
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// A node of the canonical tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Map(NodeMap),
    List(Vec<Node>),
    Scalar(Scalar),
    /// Live handle installed by the reinjector
    Reference(HostRef),
}

impl Node {
    pub fn empty_map() -> Self {
        Node::Map(NodeMap::new())
    }

    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut NodeMap> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&HostRef> {
        match self {
            Node::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a direct child of a map node
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Follow `path` through nested maps
    pub fn get_path(&self, path: &FieldPath) -> Option<&Node> {
        path.segments()
            .iter()
            .try_fold(self, |node, key| node.get(key))
    }

    /// Short kind name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Map(_) => "map",
            Node::List(_) => "list",
            Node::Scalar(Scalar::Null) => "null",
            Node::Scalar(Scalar::Bool(_)) => "bool",
            Node::Scalar(Scalar::Number(_)) => "number",
            Node::Scalar(Scalar::String(_)) => "string",
            Node::Reference(_) => "reference",
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<NodeMap> for Node {
    fn from(map: NodeMap) -> Self {
        Node::Map(map)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        // NaN and infinities have no JSON number form
        serde_json::Number::from_f64(n)
            .map(|n| Node::Scalar(Scalar::Number(n)))
            .unwrap_or_else(Node::null)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::String(s))
    }
}

impl From<HostRef> for Node {
    fn from(r: HostRef) -> Self {
        Node::Reference(r)
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Node::List(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Node::Scalar(scalar) => scalar.serialize(serializer),
            Node::Reference(r) => r.marshal().serialize(serializer),
        }
    }
}
