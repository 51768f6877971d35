//! Opaque host references
//!
//! A [`HostRef`] is a live callback handle: an object living in the host
//! plus the name of the method the foreign side calls back into. It has
//! identity, not structure. Cloning shares the same allocation, and two
//! handles are equal only when they are the same allocation.
//!
//! Serializing a `HostRef` through serde keeps only its method name and
//! drops the identity. The reinjector repairs that by putting the handle
//! itself into the payload tree, and the boundary marshals it with
//! [`HostRef::marshal`].

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Key marking a marshalled host reference in boundary JSON
pub const HOST_REF_KEY: &str = "__hostRef";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Shared handle to a host object the foreign runtime can call back into
#[derive(Clone)]
pub struct HostRef {
    inner: Arc<HostRefInner>,
}

struct HostRefInner {
    id: u64,
    method_name: String,
    target: Arc<dyn Any + Send + Sync>,
}

impl HostRef {
    /// Wrap `target` so that the foreign side can invoke `method_name` on it
    pub fn new<T>(target: T, method_name: impl Into<String>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::from_arc(Arc::new(target), method_name)
    }

    /// Wrap an already shared target
    pub fn from_arc(target: Arc<dyn Any + Send + Sync>, method_name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(HostRefInner {
                id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                method_name: method_name.into(),
                target,
            }),
        }
    }

    /// Process-unique handle id, used by the foreign side to find the target
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn method_name(&self) -> &str {
        &self.inner.method_name
    }

    /// Borrow the target if it has type `T`
    pub fn target<T: Any>(&self) -> Option<&T> {
        self.inner.target.downcast_ref::<T>()
    }

    /// True when both handles share one allocation
    pub fn ptr_eq(a: &HostRef, b: &HostRef) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Boundary form: `{"__hostRef": id, "methodName": ...}`
    pub fn marshal(&self) -> serde_json::Value {
        serde_json::json!({
            HOST_REF_KEY: self.id(),
            "methodName": self.method_name(),
        })
    }
}

impl PartialEq for HostRef {
    fn eq(&self, other: &Self) -> bool {
        HostRef::ptr_eq(self, other)
    }
}

impl fmt::Debug for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRef")
            .field("id", &self.inner.id)
            .field("method_name", &self.inner.method_name)
            .finish_non_exhaustive()
    }
}

impl Serialize for HostRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Structural form only; identity does not survive text.
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("methodName", self.method_name())?;
        map.end()
    }
}
