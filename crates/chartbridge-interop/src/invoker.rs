//! Boundary invoker
//!
//! Prepares payloads and hands them to the foreign runtime. Every public
//! call that answers `bool` is total: pipeline and boundary failures are
//! logged here and reported as `false`.

use crate::config::InteropConfig;
use crate::error::{BoundaryError, Result};
use crate::runtime::ForeignRuntime;
use chartbridge_core::{
    HostGraph, Node, ReferenceTable, normalize, normalize_value, prepare_payload, serialize,
    to_canonical_value,
};
use chartbridge_models::legend_references;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Sends chart payloads across the boundary.
///
/// Holds only immutable settings and a shared handle to the runtime, so one
/// invoker can serve concurrent calls.
pub struct BoundaryInvoker<R: ?Sized> {
    runtime: Arc<R>,
    config: InteropConfig,
    references: ReferenceTable,
}

impl<R: ForeignRuntime + ?Sized> BoundaryInvoker<R> {
    /// Invoker with default settings and the legend reference table
    pub fn new(runtime: Arc<R>) -> Self {
        Self {
            runtime,
            config: InteropConfig::default(),
            references: legend_references(),
        }
    }

    pub fn with_config(mut self, config: InteropConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the table of reference-carrying fields
    pub fn with_references(mut self, references: ReferenceTable) -> Self {
        self.references = references;
        self
    }

    pub fn config(&self) -> &InteropConfig {
        &self.config
    }

    pub fn runtime(&self) -> &Arc<R> {
        &self.runtime
    }

    /// Send an already prepared tree to the setup entry point
    pub async fn invoke(&self, tree: Node) -> bool {
        let entry_point = &self.config.entry_points.setup;
        match self.call_bool(entry_point, tree).await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Chart setup call failed: {}", e);
                false
            }
        }
    }

    /// Prepare `graph` and send it to the setup entry point
    pub async fn setup<G>(&self, graph: &G) -> bool
    where
        G: Serialize + HostGraph,
    {
        match self.try_setup(graph).await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Chart setup failed: {}", e);
                false
            }
        }
    }

    /// Send `graph` to the update entry point. Nulls are kept and no
    /// references are restored.
    pub async fn update<G>(&self, graph: &G) -> bool
    where
        G: Serialize + ?Sized,
    {
        match self.try_update(graph).await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Chart update failed: {}", e);
                false
            }
        }
    }

    /// Ask the foreign side for the text form of `payload`
    pub async fn string_rep(&self, payload: Node) -> Result<String> {
        let entry_point = &self.config.entry_points.string_rep;
        let answer = self.runtime.call(entry_point, payload).await?;
        match answer.as_str() {
            Some(text) => Ok(text.to_string()),
            None => Err(BoundaryError::UnexpectedResult {
                entry_point: entry_point.clone(),
                found: answer.kind().to_string(),
            }
            .into()),
        }
    }

    async fn try_setup<G>(&self, graph: &G) -> Result<bool>
    where
        G: Serialize + HostGraph,
    {
        let tracing_payloads = self.config.diagnostics.trace_payloads;
        if tracing_payloads {
            let direct = to_canonical_value(graph, &self.config.update_serializer_config())?;
            self.trace_payload("direct graph", normalize_value(direct)).await;
        }

        let payload = prepare_payload(graph, &self.config.serializer_config(), &self.references)?;
        if tracing_payloads {
            self.trace_payload("setup payload", payload.clone()).await;
        }

        Ok(self.call_bool(&self.config.entry_points.setup, payload).await?)
    }

    async fn try_update<G>(&self, graph: &G) -> Result<bool>
    where
        G: Serialize + ?Sized,
    {
        let text = serialize(graph, &self.config.update_serializer_config())?;
        let payload = normalize(&text)?;
        Ok(self.call_bool(&self.config.entry_points.update, payload).await?)
    }

    async fn call_bool(&self, entry_point: &str, payload: Node) -> std::result::Result<bool, BoundaryError> {
        debug!("Calling '{}' with a {} payload", entry_point, payload.kind());
        let answer = self.runtime.call(entry_point, payload).await?;
        answer.as_bool().ok_or_else(|| BoundaryError::UnexpectedResult {
            entry_point: entry_point.to_string(),
            found: answer.kind().to_string(),
        })
    }

    async fn trace_payload(&self, label: &str, payload: Node) {
        match self.string_rep(payload).await {
            Ok(text) => debug!("{}: {}", label, text),
            Err(e) => warn!("Could not trace {}: {}", label, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::InProcessRuntime;

    #[tokio::test]
    async fn test_invoke_reads_boolean_answer() {
        let runtime = Arc::new(InProcessRuntime::new());
        runtime.register("ChartSetup.Setup", |_| Ok(Node::from(true))).await;
        let invoker = BoundaryInvoker::new(runtime);

        assert!(invoker.invoke(Node::empty_map()).await);
    }

    #[tokio::test]
    async fn test_invoke_without_entry_point_is_false() {
        let invoker = BoundaryInvoker::new(Arc::new(InProcessRuntime::new()));
        assert!(!invoker.invoke(Node::empty_map()).await);
    }

    #[tokio::test]
    async fn test_invoker_over_trait_object() {
        let runtime = InProcessRuntime::new();
        runtime.register("ChartSetup.Setup", |_| Ok(Node::from(false))).await;
        let shared: Arc<dyn ForeignRuntime> = Arc::new(runtime);
        let invoker = BoundaryInvoker::new(shared);

        assert!(!invoker.invoke(Node::empty_map()).await);
    }

    #[tokio::test]
    async fn test_string_rep_requires_text() {
        let runtime = Arc::new(InProcessRuntime::new());
        runtime.register("getStringRep", |_| Ok(Node::from(1_i64))).await;
        let invoker = BoundaryInvoker::new(runtime);

        let err = invoker.string_rep(Node::empty_map()).await.unwrap_err();
        assert_eq!(err.to_string(), "Entry point 'getStringRep' returned number");
    }
}
