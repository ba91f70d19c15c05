//! Field serializers and the resolver that hands them out by logical type name.
//!
//! Every serializer implements [`FieldSerializer`]: a pair of conversions between an
//! [`AttributeValue`] on the record side and a [`serde_json::Value`] on the wire side.
//! Names (record types, field names) go through the same interface via
//! [`FieldSerializer::serialize_name`] / [`FieldSerializer::deserialize_name`].

mod boolean;
mod date;
mod date_time;
mod noop;
mod number;
mod resolver;
mod serializable_type;
mod settings;
mod string;

pub use {
  self::boolean::*, self::date::*, self::date_time::*, self::noop::*, self::number::*, self::resolver::*,
  self::serializable_type::*, self::settings::*, self::string::*,
};

use crate::error::{CodecError, ValueConstraintError};
use crate::value::{value_kind, AttributeValue};
use serde_json::Value;
use std::fmt;

/// Capability interface shared by all field serializers.
pub trait FieldSerializer: Send + Sync + fmt::Debug {
  /// Converts a record-side value to its wire representation.
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError>;

  /// Converts a wire value back to its record-side representation.
  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError>;

  /// Serializes a name such as a record type or a field name.
  fn serialize_name(&self, name: &str) -> Result<String, CodecError> {
    match self.serialize(&AttributeValue::String(name.to_string()))? {
      Value::String(name) => Ok(name),
      other => Err(CodecError::of_unexpected_value("string", value_kind(&other))),
    }
  }

  /// Inverse of [`FieldSerializer::serialize_name`].
  fn deserialize_name(&self, name: &str) -> Result<String, CodecError> {
    match self.deserialize(&Value::String(name.to_string()))? {
      AttributeValue::String(name) => Ok(name),
      other => Err(CodecError::of_unexpected_value("string", other.kind())),
    }
  }
}

pub(crate) fn check_null(serializer: &'static str, disallow_null: bool) -> Result<(), ValueConstraintError> {
  if disallow_null {
    return Err(ValueConstraintError::NullNotAllowed { serializer });
  }
  Ok(())
}
