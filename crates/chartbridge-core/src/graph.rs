//! Read access to the original typed graph
//!
//! The reinjector needs to look at values the text form could not carry.
//! Records expose their fields through [`HostGraph::child`] under their
//! declared name, the key serde writes before any casing; leaves expose
//! nothing. The value found at the end of a path is handed to
//! a type check through [`HostGraph::as_any`].
//!
//! Records usually implement the trait with
//! [`host_graph_record!`](crate::host_graph_record!):
//!
//! ```
//! use chartbridge_core::{HostGraph, host_graph_record};
//!
//! struct Legend {
//!     display: Option<bool>,
//!     position: String,
//! }
//!
//! host_graph_record!(Legend {
//!     "display" => optional(display),
//!     "position" => required(position),
//! });
//!
//! let legend = Legend { display: None, position: "top".into() };
//! assert!(legend.child("display").is_none());
//! assert!(legend.child("position").is_some());
//! ```

use crate::reference::HostRef;
use std::any::Any;

/// A node of the original typed graph
pub trait HostGraph: Any {
    /// Field stored under the declared name `key`, if the node is a record
    /// and the field currently holds a value
    fn child(&self, key: &str) -> Option<&dyn HostGraph> {
        let _ = key;
        None
    }

    /// Type-erased view used by reference checks
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Expose a field that always holds a value
pub fn required<T: HostGraph>(value: &T) -> Option<&dyn HostGraph> {
    Some(value)
}

/// Expose an optional field; `None` reads as absent
pub fn optional<T: HostGraph>(value: &Option<T>) -> Option<&dyn HostGraph> {
    value.as_ref().map(|v| v as &dyn HostGraph)
}

/// Implement [`HostGraph`] for a record by listing its fields as
/// `"declared_name" => required(field)` or `"declared_name" => optional(field)`.
#[macro_export]
macro_rules! host_graph_record {
    ($ty:ty { $($key:literal => $kind:ident($field:ident)),* $(,)? }) => {
        impl $crate::HostGraph for $ty {
            fn child(&self, key: &str) -> ::std::option::Option<&dyn $crate::HostGraph> {
                match key {
                    $($key => $crate::graph::$kind(&self.$field),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Implement [`HostGraph`] for types without navigable fields
#[macro_export]
macro_rules! host_graph_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::HostGraph for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )+
    };
}

host_graph_leaf!(bool, i32, i64, u32, u64, f64, String, HostRef, serde_json::Value);

impl<T: 'static> HostGraph for Vec<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Follow `segments` from `root` through record fields
pub fn lookup<'a>(root: &'a dyn HostGraph, segments: &[String]) -> Option<&'a dyn HostGraph> {
    segments
        .iter()
        .try_fold(root, |node, key| node.child(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Legend {
        on_click: Option<HostRef>,
    }

    struct Options {
        legend: Option<Legend>,
        responsive: bool,
    }

    host_graph_record!(Legend { "on_click" => optional(on_click) });
    host_graph_record!(Options {
        "legend" => optional(legend),
        "responsive" => required(responsive),
    });

    fn path(s: &str) -> Vec<String> {
        s.split('.').map(String::from).collect()
    }

    #[test]
    fn test_lookup_reaches_leaf() {
        let handle = HostRef::new((), "OnClick");
        let options = Options {
            legend: Some(Legend {
                on_click: Some(handle.clone()),
            }),
            responsive: true,
        };

        let leaf = lookup(&options, &path("legend.on_click")).unwrap();
        let found = leaf.as_any().downcast_ref::<HostRef>().unwrap();
        assert!(HostRef::ptr_eq(found, &handle));

        let flag = lookup(&options, &path("responsive")).unwrap();
        assert_eq!(flag.as_any().downcast_ref::<bool>(), Some(&true));
    }

    #[test]
    fn test_absent_ancestor_stops_lookup() {
        let options = Options {
            legend: None,
            responsive: false,
        };
        assert!(lookup(&options, &path("legend.on_click")).is_none());
        assert!(lookup(&options, &path("unknown")).is_none());
    }
}
