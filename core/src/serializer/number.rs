use crate::error::CodecError;
use crate::serializer::{check_null, FieldSerializer, SerializerSettings};
use crate::value::{value_kind, AttributeValue};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct NumberSerializer {
  disallow_null: bool,
}

impl NumberSerializer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_settings(settings: &SerializerSettings) -> Self {
    Self {
      disallow_null: settings.disallows_null(),
    }
  }
}

impl FieldSerializer for NumberSerializer {
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError> {
    match value {
      AttributeValue::Null => {
        check_null("NumberSerializer", self.disallow_null)?;
        Ok(Value::Null)
      }
      AttributeValue::Number(n) => Ok(Value::Number(n.clone())),
      other => Err(CodecError::of_unexpected_value("number", other.kind())),
    }
  }

  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError> {
    match value {
      Value::Null => {
        check_null("NumberSerializer", self.disallow_null)?;
        Ok(AttributeValue::Null)
      }
      Value::Number(n) => Ok(AttributeValue::Number(n.clone())),
      other => Err(CodecError::of_unexpected_value("number", value_kind(other))),
    }
  }
}
