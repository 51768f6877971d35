//! Reference reinjector
//!
//! Text cannot carry a live handle, so after normalization the tree holds
//! only a lossy projection (or nothing) where a callback reference used to
//! be. The reinjector reads those fields from the original graph and puts
//! the handle itself back into the tree.
//!
//! Which fields carry references is static knowledge, kept in a
//! [`ReferenceTable`] of `(path, extract)` rows. Adding a new reference
//! field means adding a row, not writing traversal code.
//!
//! Paths use declared field names, the keys serde writes before casing
//! (`options.legend.on_click`). The graph is walked by those names; the
//! tree is walked by the same names passed through the serializer's
//! [`NamingStrategy`], so both sides agree whatever the casing.

use crate::error::PipelineError;
use crate::graph::{self, HostGraph};
use crate::naming::NamingStrategy;
use crate::node::Node;
use crate::path::FieldPath;
use crate::reference::HostRef;
use std::any::Any;
use std::fmt;
use tracing::{debug, warn};

/// Checks that a graph value is a recognized reference variant and returns
/// its handle
pub type ExtractFn = fn(&dyn Any) -> Option<HostRef>;

/// One reference-carrying field
#[derive(Clone)]
pub struct ReferenceSlot {
    path: FieldPath,
    extract: ExtractFn,
}

impl ReferenceSlot {
    pub fn new(path: FieldPath, extract: ExtractFn) -> Self {
        Self { path, extract }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }
}

impl fmt::Debug for ReferenceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceSlot")
            .field("path", &self.path.to_string())
            .finish_non_exhaustive()
    }
}

/// Declarative list of reference-carrying fields
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    slots: Vec<ReferenceSlot>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row
    pub fn with_slot(mut self, path: FieldPath, extract: ExtractFn) -> Self {
        self.slots.push(ReferenceSlot::new(path, extract));
        self
    }

    pub fn slots(&self) -> &[ReferenceSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Extractor for fields whose value is a bare [`HostRef`]
pub fn bare_host_ref(value: &dyn Any) -> Option<HostRef> {
    value.downcast_ref::<HostRef>().cloned()
}

/// Restore live references from `graph` into `tree` for every row of `table`,
/// for a tree whose keys were cased with the default naming
pub fn reinject(tree: Node, graph: &dyn HostGraph, table: &ReferenceTable) -> Node {
    reinject_with(tree, graph, table, NamingStrategy::default())
}

/// [`reinject`] for a tree whose keys were cased with `naming`
pub fn reinject_with(mut tree: Node, graph: &dyn HostGraph, table: &ReferenceTable, naming: NamingStrategy) -> Node {
    for slot in table.slots() {
        reinject_slot(&mut tree, graph, slot, naming);
    }
    tree
}

fn reinject_slot(tree: &mut Node, root: &dyn HostGraph, slot: &ReferenceSlot, naming: NamingStrategy) {
    let Some((parents, leaf)) = slot.path.split_leaf() else {
        return;
    };

    // Absent in the graph: the serializer already elided it correctly.
    let Some(value) = graph::lookup(root, slot.path.segments()) else {
        return;
    };

    let Some(handle) = (slot.extract)(value.as_any()) else {
        let mismatch = PipelineError::ReinjectionTypeMismatch {
            path: slot.path.to_string(),
            found: value.type_name().to_string(),
        };
        debug!("{}; keeping serialized form", mismatch);
        return;
    };

    let mut cursor = tree;
    for key in parents {
        let map = match cursor {
            Node::Map(map) => map,
            other => {
                warn!(
                    "Cannot restore reference at '{}': found {} before '{}'",
                    slot.path,
                    other.kind(),
                    key
                );
                return;
            }
        };
        cursor = map
            .entry(naming.apply(key).into_owned())
            .or_insert_with(Node::empty_map);
    }

    match cursor {
        Node::Map(map) => {
            debug!("Restored reference {} at '{}'", handle.id(), slot.path);
            map.insert(naming.apply(leaf).into_owned(), Node::Reference(handle));
        }
        other => warn!(
            "Cannot restore reference at '{}': parent is {}",
            slot.path,
            other.kind()
        ),
    }
}
