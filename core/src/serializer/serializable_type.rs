use std::fmt;

pub const RESOURCE_TYPE: &str = "jsonapi-resource-type";
pub const RESOURCE_FIELD: &str = "jsonapi-resource-field";

/// Logical type name a serializer is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SerializableType {
  Boolean,
  Number,
  String,
  Date,
  DateTime,
  /// Record type names.
  ResourceType,
  /// Attribute and relationship names.
  ResourceField,
  Custom(String),
}

impl SerializableType {
  pub fn of_custom(name: &str) -> Self {
    SerializableType::Custom(name.to_string())
  }

  pub fn as_str(&self) -> &str {
    match self {
      SerializableType::Boolean => "boolean",
      SerializableType::Number => "number",
      SerializableType::String => "string",
      SerializableType::Date => "date",
      SerializableType::DateTime => "datetime",
      SerializableType::ResourceType => RESOURCE_TYPE,
      SerializableType::ResourceField => RESOURCE_FIELD,
      SerializableType::Custom(name) => name,
    }
  }

}

impl From<&str> for SerializableType {
  fn from(name: &str) -> Self {
    match name {
      "boolean" => SerializableType::Boolean,
      "number" => SerializableType::Number,
      "string" => SerializableType::String,
      "date" => SerializableType::Date,
      "datetime" => SerializableType::DateTime,
      RESOURCE_TYPE => SerializableType::ResourceType,
      RESOURCE_FIELD => SerializableType::ResourceField,
      other => SerializableType::Custom(other.to_string()),
    }
  }
}

impl fmt::Display for SerializableType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_round_trip() {
    for name in ["boolean", "number", "string", "date", "datetime", RESOURCE_TYPE, RESOURCE_FIELD, "money"] {
      assert_eq!(SerializableType::from(name).as_str(), name);
    }
    assert_eq!(SerializableType::from("money"), SerializableType::of_custom("money"));
    assert_eq!(SerializableType::from("datetime"), SerializableType::DateTime);
  }
}
