use crate::error::CodecError;
use crate::serializer::FieldSerializer;
use crate::value::AttributeValue;
use serde_json::Value;

/// Fallback for types with no registered serializer: values pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSerializer;

impl NoopSerializer {
  pub const fn new() -> Self {
    Self
  }
}

impl FieldSerializer for NoopSerializer {
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError> {
    Ok(value.to_json())
  }

  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError> {
    Ok(AttributeValue::from_json(value))
  }
}
