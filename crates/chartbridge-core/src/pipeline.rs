//! Serialize, normalize, reinject

use crate::error::Result;
use crate::graph::HostGraph;
use crate::node::Node;
use crate::normalize::normalize;
use crate::reinject::{ReferenceTable, reinject_with};
use crate::serializer::{SerializerConfig, serialize};
use serde::Serialize;
use tracing::debug;

/// Build the payload for `graph`: canonical text, parsed into a tree, with
/// live references from `table` restored.
pub fn prepare_payload<G>(graph: &G, config: &SerializerConfig, references: &ReferenceTable) -> Result<Node>
where
    G: Serialize + HostGraph,
{
    let text = serialize(graph, config)?;
    debug!("Serialized graph to {} bytes of canonical text", text.len());

    let tree = normalize(&text)?;
    Ok(reinject_with(tree, graph, references, config.naming))
}
