use crate::config::SerializerConfig;
use crate::error::CodecError;
use crate::key_map::KeyMap;
use crate::schema::{ModelDefinition, Schema};
use crate::serializer::{FieldSerializer, SerializableType, SerializerResolver, SerializerSettings};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_RESOURCE_KEY: &str = "id";

/// Collaborators and configuration shared by the identity, resource and operation serializers.
#[derive(Clone)]
pub struct SerializerContext {
  schema: Arc<dyn Schema>,
  key_map: Arc<dyn KeyMap>,
  resolver: SerializerResolver,
  resource_keys: HashMap<String, String>,
}

impl fmt::Debug for SerializerContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SerializerContext")
      .field("resolver", &self.resolver)
      .field("resource_keys", &self.resource_keys)
      .finish()
  }
}

impl SerializerContext {
  pub fn new(schema: Arc<dyn Schema>, key_map: Arc<dyn KeyMap>, config: &SerializerConfig) -> Self {
    let resolver = SerializerResolver::new(config, Self::schema_settings(&schema));
    Self {
      schema,
      key_map,
      resolver,
      resource_keys: config.resource_keys.clone(),
    }
  }

  /// Lowest settings layer: pluralization is delegated to the schema.
  fn schema_settings(schema: &Arc<dyn Schema>) -> SerializerSettings {
    let pluralizer = schema.clone();
    let singularizer = schema.clone();
    SerializerSettings::new()
      .with_pluralize(move |word| pluralizer.pluralize(word))
      .with_singularize(move |word| singularizer.singularize(word))
  }

  pub fn schema(&self) -> &Arc<dyn Schema> {
    &self.schema
  }

  pub fn key_map(&self) -> &Arc<dyn KeyMap> {
    &self.key_map
  }

  pub fn resolver(&self) -> &SerializerResolver {
    &self.resolver
  }

  pub fn model(&self, record_type: &str) -> Result<&ModelDefinition, CodecError> {
    self
      .schema
      .model(record_type)
      .ok_or_else(|| CodecError::ModelNotDefined(record_type.to_string()))
  }

  /// Key name used as the external id of `record_type`.
  pub fn resource_key(&self, record_type: &str) -> &str {
    self
      .resource_keys
      .get(record_type)
      .map(String::as_str)
      .unwrap_or(DEFAULT_RESOURCE_KEY)
  }

  pub fn type_serializer(&self) -> Arc<dyn FieldSerializer> {
    self.resolver.resolve(&SerializableType::ResourceType)
  }

  pub fn field_serializer(&self) -> Arc<dyn FieldSerializer> {
    self.resolver.resolve(&SerializableType::ResourceField)
  }
}
