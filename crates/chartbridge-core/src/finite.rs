//! Non-finite float check
//!
//! `serde_json` writes NaN and infinities as `null`, which null elision
//! would then drop without a trace. This pass walks the graph through its
//! `Serialize` impl first and reports the field holding such a value.

use crate::error::{PipelineError, Result};
use serde::ser::{self, Serialize};
use std::fmt;

/// Fail with a `Serialization` error if `graph` holds a NaN or infinite float
pub(crate) fn check_finite<T>(graph: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let mut walker = FiniteWalker::default();
    graph
        .serialize(&mut walker)
        .map_err(|e| PipelineError::serialization(e.0))
}

#[derive(Debug)]
struct WalkError(String);

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for WalkError {}

impl ser::Error for WalkError {
    fn custom<M: fmt::Display>(msg: M) -> Self {
        WalkError(msg.to_string())
    }
}

/// Struct field names leading to the current value
#[derive(Default)]
struct FiniteWalker {
    path: Vec<&'static str>,
}

impl FiniteWalker {
    fn float(&self, value: f64) -> std::result::Result<(), WalkError> {
        if value.is_finite() {
            return Ok(());
        }
        let at = if self.path.is_empty() {
            "<root>".to_string()
        } else {
            self.path.join(".")
        };
        Err(WalkError(format!("non-finite number {} at '{}'", value, at)))
    }

    fn field<T>(&mut self, key: &'static str, value: &T) -> std::result::Result<(), WalkError>
    where
        T: Serialize + ?Sized,
    {
        self.path.push(key);
        let walked = value.serialize(&mut *self);
        self.path.pop();
        walked
    }
}

type Walk = std::result::Result<(), WalkError>;

impl<'a> ser::Serializer for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> Walk {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Walk {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Walk {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Walk {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Walk {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Walk {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Walk {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Walk {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Walk {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Walk {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Walk {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Walk {
        self.float(v.into())
    }

    fn serialize_f64(self, v: f64) -> Walk {
        self.float(v)
    }

    fn serialize_char(self, _: char) -> Walk {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Walk {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Walk {
        Ok(())
    }

    fn serialize_none(self) -> Walk {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Walk {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Walk {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> Walk {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        value: &T,
    ) -> Walk {
        self.field(variant, value)
    }

    fn serialize_seq(self, _: Option<usize>) -> std::result::Result<Self, WalkError> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> std::result::Result<Self, WalkError> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> std::result::Result<Self, WalkError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> std::result::Result<Self, WalkError> {
        self.path.push(variant);
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> std::result::Result<Self, WalkError> {
        Ok(self)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> std::result::Result<Self, WalkError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> std::result::Result<Self, WalkError> {
        self.path.push(variant);
        Ok(self)
    }
}

impl<'a> ser::SerializeSeq for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(&mut **self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(&mut **self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(&mut **self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(&mut **self)
    }

    fn end(self) -> Walk {
        self.path.pop();
        Ok(())
    }
}

impl<'a> ser::SerializeMap for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Walk {
        key.serialize(&mut **self)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(&mut **self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Walk {
        self.field(key, value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for &'a mut FiniteWalker {
    type Ok = ();
    type Error = WalkError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Walk {
        self.field(key, value)
    }

    fn end(self) -> Walk {
        self.path.pop();
        Ok(())
    }
}
