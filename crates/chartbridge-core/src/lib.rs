//! chartbridge core
//!
//! Turns a typed configuration graph into the payload handed to a foreign
//! runtime:
//!
//! 1. [`serializer`] renders the graph to canonical JSON text (lower camel
//!    keys, null fields elided, closed enums as their wire scalar).
//! 2. [`normalize`] parses that text back into a [`Node`] tree where every
//!    record is the same ordered map kind.
//! 3. [`reinject`] walks the original graph and puts live [`HostRef`]
//!    handles back at the field paths the text form could not carry.
//!
//! [`pipeline::prepare_payload`] runs all three steps.

pub mod error;
mod finite;
pub mod graph;
pub mod naming;
pub mod node;
pub mod normalize;
pub mod path;
pub mod pipeline;
pub mod reference;
pub mod reinject;
pub mod serializer;
pub mod value_enum;

pub use error::{PipelineError, Result};
pub use graph::HostGraph;
pub use naming::{NamingStrategy, to_lower_camel};
pub use node::{Node, NodeMap, Scalar};
pub use normalize::{normalize, normalize_value};
pub use path::FieldPath;
pub use pipeline::prepare_payload;
pub use reference::HostRef;
pub use reinject::{ReferenceSlot, ReferenceTable, reinject, reinject_with};
pub use serializer::{NullHandling, SerializerConfig, serialize, to_canonical_value};
pub use value_enum::{ValueEnum, WireScalar};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
