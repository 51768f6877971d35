//! chartbridge interop
//!
//! Hands prepared chart payloads to a foreign runtime and reports whether
//! it accepted them. The runtime itself sits behind [`ForeignRuntime`];
//! [`InProcessRuntime`] hosts the foreign side as a table of Rust handlers.

pub mod config;
pub mod entry_points;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod runtime;

pub use config::{Diagnostics, EntryPoints, InteropConfig};
pub use error::{BoundaryError, InteropError, Result};
pub use invoker::BoundaryInvoker;
pub use logging::init_tracing;
pub use runtime::{ForeignRuntime, InProcessRuntime, string_rep_handler};
