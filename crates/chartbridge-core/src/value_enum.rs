//! Closed-variant scalar enums
//!
//! A value enum is a fixed set of named variants where each variant is
//! identified on the wire by exactly one primitive scalar (not by its
//! variant name). The mapping only goes one way: variant to scalar.
//!
//! Declare them with [`value_enum!`](crate::value_enum!):
//!
//! ```
//! chartbridge_core::value_enum! {
//!     /// How ticks are generated
//!     pub enum TickSource {
//!         Auto => "auto",
//!         Data => "data",
//!     }
//! }
//!
//! use chartbridge_core::{ValueEnum, WireScalar};
//! assert_eq!(TickSource::Data.wire(), WireScalar::Str("data"));
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// The single scalar a value enum variant serializes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WireScalar {
    Bool(bool),
    Str(&'static str),
    Int(i64),
    Float(f64),
}

impl From<bool> for WireScalar {
    fn from(value: bool) -> Self {
        WireScalar::Bool(value)
    }
}

impl From<&'static str> for WireScalar {
    fn from(value: &'static str) -> Self {
        WireScalar::Str(value)
    }
}

impl From<i32> for WireScalar {
    fn from(value: i32) -> Self {
        WireScalar::Int(value.into())
    }
}

impl From<i64> for WireScalar {
    fn from(value: i64) -> Self {
        WireScalar::Int(value)
    }
}

impl From<f64> for WireScalar {
    fn from(value: f64) -> Self {
        WireScalar::Float(value)
    }
}

impl Serialize for WireScalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            WireScalar::Bool(b) => serializer.serialize_bool(b),
            WireScalar::Str(s) => serializer.serialize_str(s),
            WireScalar::Int(i) => serializer.serialize_i64(i),
            WireScalar::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl fmt::Display for WireScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireScalar::Bool(b) => write!(f, "{}", b),
            WireScalar::Str(s) => write!(f, "{}", s),
            WireScalar::Int(i) => write!(f, "{}", i),
            WireScalar::Float(x) => write!(f, "{}", x),
        }
    }
}

/// A closed enumeration whose variants each map to one wire scalar.
pub trait ValueEnum: Copy + 'static {
    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// The scalar this variant is sent as
    fn wire(&self) -> WireScalar;

    /// The declared variant name, for diagnostics only
    fn variant_name(&self) -> &'static str;
}

/// Declare a [`ValueEnum`] together with a `Serialize` impl that writes the
/// wire scalar.
///
/// Each variant is written `Name => scalar`, where the scalar is a `bool`,
/// string, integer or float literal. Variants of one enum may mix kinds.
#[macro_export]
macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::ValueEnum for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn wire(&self) -> $crate::WireScalar {
                match self {
                    $($name::$variant => $crate::WireScalar::from($wire),)+
                }
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &$crate::ValueEnum::wire(self),
                    serializer,
                )
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&$crate::ValueEnum::wire(self), f)
            }
        }

        impl $crate::HostGraph for $name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}
