use crate::error::CodecError;
use crate::serializer::{check_null, FieldSerializer, SerializerSettings};
use crate::value::{value_kind, AttributeValue};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct BooleanSerializer {
  disallow_null: bool,
}

impl BooleanSerializer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_settings(settings: &SerializerSettings) -> Self {
    Self {
      disallow_null: settings.disallows_null(),
    }
  }
}

impl FieldSerializer for BooleanSerializer {
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError> {
    match value {
      AttributeValue::Null => {
        check_null("BooleanSerializer", self.disallow_null)?;
        Ok(Value::Null)
      }
      AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
      other => Err(CodecError::of_unexpected_value("boolean", other.kind())),
    }
  }

  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError> {
    match value {
      Value::Null => {
        check_null("BooleanSerializer", self.disallow_null)?;
        Ok(AttributeValue::Null)
      }
      Value::Bool(b) => Ok(AttributeValue::Bool(*b)),
      other => Err(CodecError::of_unexpected_value("boolean", value_kind(other))),
    }
  }
}
