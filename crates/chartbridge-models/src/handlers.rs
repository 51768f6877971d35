//! Legend callback handlers
//!
//! A handler either points at a live host object ([`HostRef`]), names a
//! static host method, or names a function that already exists on the
//! foreign side. Only the first kind needs reinjection; the other two are
//! plain data and travel through the text form unchanged.

use chartbridge_core::{HostRef, host_graph_leaf};
use serde::Serialize;
use std::any::Any;

/// A static host method, identified by assembly and method name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticHandler {
    pub assembly_name: String,
    pub method_name: String,
}

impl StaticHandler {
    pub fn new(assembly_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            assembly_name: assembly_name.into(),
            method_name: method_name.into(),
        }
    }
}

/// Called when a legend item is clicked
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LegendClickHandler {
    /// Method on a live host object
    Instance(HostRef),
    Static(StaticHandler),
    /// Name of a function defined by the foreign runtime
    Foreign(String),
}

/// Called when the pointer moves over a legend item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LegendHoverHandler {
    /// Method on a live host object
    Instance(HostRef),
    Static(StaticHandler),
    /// Name of a function defined by the foreign runtime
    Foreign(String),
}

host_graph_leaf!(StaticHandler, LegendClickHandler, LegendHoverHandler);

impl LegendClickHandler {
    /// Handler calling `method_name` on `target`
    pub fn instance<T>(target: T, method_name: impl Into<String>) -> Self
    where
        T: Any + Send + Sync,
    {
        LegendClickHandler::Instance(HostRef::new(target, method_name))
    }

    /// Live reference held by this handler, if it has one
    pub fn host_ref(&self) -> Option<&HostRef> {
        match self {
            LegendClickHandler::Instance(r) => Some(r),
            LegendClickHandler::Static(_) | LegendClickHandler::Foreign(_) => None,
        }
    }
}

impl LegendHoverHandler {
    /// Handler calling `method_name` on `target`
    pub fn instance<T>(target: T, method_name: impl Into<String>) -> Self
    where
        T: Any + Send + Sync,
    {
        LegendHoverHandler::Instance(HostRef::new(target, method_name))
    }

    /// Live reference held by this handler, if it has one
    pub fn host_ref(&self) -> Option<&HostRef> {
        match self {
            LegendHoverHandler::Instance(r) => Some(r),
            LegendHoverHandler::Static(_) | LegendHoverHandler::Foreign(_) => None,
        }
    }
}

/// Reference check for click handler slots
pub fn instance_click_handler(value: &dyn Any) -> Option<HostRef> {
    value
        .downcast_ref::<LegendClickHandler>()
        .and_then(LegendClickHandler::host_ref)
        .cloned()
}

/// Reference check for hover handler slots
pub fn instance_hover_handler(value: &dyn Any) -> Option<HostRef> {
    value
        .downcast_ref::<LegendHoverHandler>()
        .and_then(LegendHoverHandler::host_ref)
        .cloned()
}
