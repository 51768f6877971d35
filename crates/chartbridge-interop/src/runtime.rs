//! Foreign runtime seam

use crate::error::BoundaryError;
use async_trait::async_trait;
use chartbridge_core::Node;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Something that can run named foreign functions on a payload tree.
///
/// Implementations marshal [`Node::Reference`] values however their
/// transport requires; the tree itself is handed over by value.
#[async_trait]
pub trait ForeignRuntime: Send + Sync {
    /// Call `entry_point` with `payload` and wait for its answer
    async fn call(&self, entry_point: &str, payload: Node) -> Result<Node, BoundaryError>;
}

type Handler = Arc<dyn Fn(Node) -> anyhow::Result<Node> + Send + Sync>;

/// Foreign side hosted in-process as a table of named handlers
#[derive(Clone, Default)]
pub struct InProcessRuntime {
    handlers: Arc<RwLock<HashMap<String, Handler>>>,
}

impl InProcessRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `entry_point`, replacing any earlier one
    pub async fn register<F>(&self, entry_point: impl Into<String>, handler: F)
    where
        F: Fn(Node) -> anyhow::Result<Node> + Send + Sync + 'static,
    {
        let entry_point = entry_point.into();
        debug!("Registering in-process entry point '{}'", entry_point);
        self.handlers.write().await.insert(entry_point, Arc::new(handler));
    }

    /// Remove the handler under `entry_point`, returning whether one existed
    pub async fn unregister(&self, entry_point: &str) -> bool {
        self.handlers.write().await.remove(entry_point).is_some()
    }

    /// Registered entry point names, sorted
    pub async fn entry_points(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for InProcessRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InProcessRuntime").finish_non_exhaustive()
    }
}

#[async_trait]
impl ForeignRuntime for InProcessRuntime {
    async fn call(&self, entry_point: &str, payload: Node) -> Result<Node, BoundaryError> {
        let handler = self
            .handlers
            .read()
            .await
            .get(entry_point)
            .cloned()
            .ok_or_else(|| BoundaryError::EntryPointNotFound(entry_point.to_string()))?;

        debug!("Calling in-process entry point '{}'", entry_point);
        let message = match panic::catch_unwind(AssertUnwindSafe(|| handler(payload))) {
            Ok(Ok(answer)) => return Ok(answer),
            Ok(Err(e)) => format!("{:#}", e),
            Err(panic) => {
                let message = format!("handler panicked: {}", panic_message(panic.as_ref()));
                warn!("In-process entry point '{}' {}", entry_point, message);
                message
            }
        };

        Err(BoundaryError::Foreign {
            entry_point: entry_point.to_string(),
            message,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-text panic payload"
    }
}

/// Diagnostic handler answering the JSON text of its payload, with live
/// references in their marshalled form
pub fn string_rep_handler(payload: Node) -> anyhow::Result<Node> {
    let text = serde_json::to_string(&payload)?;
    Ok(Node::from(text))
}
