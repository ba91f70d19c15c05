use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::serializer::{InflectorFn, SerializableType};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeDefinition {
  pub attr_type: Option<String>,
}

impl AttributeDefinition {
  pub fn of_type(attr_type: &str) -> Self {
    Self {
      attr_type: Some(attr_type.to_string()),
    }
  }

  /// Serializer key for this attribute. `None` for untyped attributes.
  pub fn serializable_type(&self) -> Option<SerializableType> {
    self.attr_type.as_deref().map(SerializableType::from)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
  HasOne,
  HasMany,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDefinition {
  pub kind: RelationshipKind,
  pub related_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelDefinition {
  pub attributes: BTreeMap<String, AttributeDefinition>,
  pub relationships: BTreeMap<String, RelationshipDefinition>,
}

impl ModelDefinition {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_attribute(mut self, name: &str, attr_type: &str) -> Self {
    self
      .attributes
      .insert(name.to_string(), AttributeDefinition::of_type(attr_type));
    self
  }

  pub fn with_untyped_attribute(mut self, name: &str) -> Self {
    self.attributes.insert(name.to_string(), AttributeDefinition::default());
    self
  }

  pub fn with_has_one(mut self, name: &str, related_type: &str) -> Self {
    self.relationships.insert(
      name.to_string(),
      RelationshipDefinition {
        kind: RelationshipKind::HasOne,
        related_type: related_type.to_string(),
      },
    );
    self
  }

  pub fn with_has_many(mut self, name: &str, related_type: &str) -> Self {
    self.relationships.insert(
      name.to_string(),
      RelationshipDefinition {
        kind: RelationshipKind::HasMany,
        related_type: related_type.to_string(),
      },
    );
    self
  }
}

/// Model lookup, id generation and word inflection supplied by the host application.
pub trait Schema: Send + Sync {
  fn model(&self, record_type: &str) -> Option<&ModelDefinition>;

  fn has_attribute(&self, record_type: &str, attribute: &str) -> bool {
    self
      .model(record_type)
      .is_some_and(|model| model.attributes.contains_key(attribute))
  }

  fn has_relationship(&self, record_type: &str, relationship: &str) -> bool {
    self
      .model(record_type)
      .is_some_and(|model| model.relationships.contains_key(relationship))
  }

  fn generate_id(&self, record_type: &str) -> String;

  fn pluralize(&self, word: &str) -> String;

  fn singularize(&self, word: &str) -> String;
}

#[derive(Clone)]
pub struct InMemorySchema {
  models: HashMap<String, ModelDefinition>,
  pluralize: InflectorFn,
  singularize: InflectorFn,
}

impl fmt::Debug for InMemorySchema {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InMemorySchema").field("models", &self.models).finish()
  }
}

impl Default for InMemorySchema {
  fn default() -> Self {
    Self {
      models: HashMap::new(),
      pluralize: Arc::new(|word: &str| format!("{}s", word)),
      singularize: Arc::new(|word: &str| word.strip_suffix('s').unwrap_or(word).to_string()),
    }
  }
}

impl InMemorySchema {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_model(mut self, record_type: &str, model: ModelDefinition) -> Self {
    self.models.insert(record_type.to_string(), model);
    self
  }

  pub fn with_pluralize<F>(mut self, f: F) -> Self
  where
    F: Fn(&str) -> String + Send + Sync + 'static, {
    self.pluralize = Arc::new(f);
    self
  }

  pub fn with_singularize<F>(mut self, f: F) -> Self
  where
    F: Fn(&str) -> String + Send + Sync + 'static, {
    self.singularize = Arc::new(f);
    self
  }
}

impl Schema for InMemorySchema {
  fn model(&self, record_type: &str) -> Option<&ModelDefinition> {
    self.models.get(record_type)
  }

  fn generate_id(&self, _record_type: &str) -> String {
    uuid::Uuid::new_v4().to_string()
  }

  fn pluralize(&self, word: &str) -> String {
    (self.pluralize)(word)
  }

  fn singularize(&self, word: &str) -> String {
    (self.singularize)(word)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn schema() -> InMemorySchema {
    InMemorySchema::new().with_model(
      "planet",
      ModelDefinition::new()
        .with_attribute("name", "string")
        .with_untyped_attribute("classification")
        .with_has_many("moons", "moon"),
    )
  }

  #[test]
  fn schema_answers_membership_queries() {
    let schema = schema();
    assert!(schema.has_attribute("planet", "name"));
    assert!(schema.has_attribute("planet", "classification"));
    assert!(!schema.has_attribute("planet", "moons"));
    assert!(schema.has_relationship("planet", "moons"));
    assert!(!schema.has_relationship("moon", "planet"));
  }

  #[test]
  fn schema_generates_distinct_ids() {
    let schema = schema();
    assert_ne!(schema.generate_id("planet"), schema.generate_id("planet"));
  }

  #[test]
  fn default_inflectors_are_replaceable() {
    let schema = schema().with_pluralize(|word| format!("{}z", word));
    assert_eq!(schema.pluralize("cow"), "cowz");
    assert_eq!(schema.singularize("planets"), "planet");
  }
}
