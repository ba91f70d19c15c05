use crate::config::SerializerConfig;
use crate::serializer::{FieldSerializer, SerializableType, SerializerFactory, SerializerSettings};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub enum ConfigOption {
  SetSerializer(SerializableType, Arc<dyn FieldSerializer>),
  SetSerializerFactory(SerializableType, SerializerFactory),
  SetSettings(SerializableType, SerializerSettings),
  SetSharedSettings(SerializerSettings),
  SetDefaultSerializer(Arc<dyn FieldSerializer>),
  SetResourceKey(String, String),
}

impl fmt::Debug for ConfigOption {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigOption::SetSerializer(t, serializer) => f.debug_tuple("SetSerializer").field(t).field(serializer).finish(),
      ConfigOption::SetSerializerFactory(t, _) => f.debug_tuple("SetSerializerFactory").field(t).finish(),
      ConfigOption::SetSettings(t, settings) => f.debug_tuple("SetSettings").field(t).field(settings).finish(),
      ConfigOption::SetSharedSettings(settings) => f.debug_tuple("SetSharedSettings").field(settings).finish(),
      ConfigOption::SetDefaultSerializer(serializer) => f.debug_tuple("SetDefaultSerializer").field(serializer).finish(),
      ConfigOption::SetResourceKey(record_type, key) => {
        f.debug_tuple("SetResourceKey").field(record_type).field(key).finish()
      }
    }
  }
}

impl ConfigOption {
  pub fn apply(&self, config: &mut SerializerConfig) {
    match self {
      ConfigOption::SetSerializer(serializable_type, serializer) => {
        config.serializers.insert(serializable_type.clone(), serializer.clone());
      }
      ConfigOption::SetSerializerFactory(serializable_type, factory) => {
        config.factories.insert(serializable_type.clone(), factory.clone());
      }
      ConfigOption::SetSettings(serializable_type, settings) => {
        config.settings.insert(serializable_type.clone(), settings.clone());
      }
      ConfigOption::SetSharedSettings(settings) => {
        config.shared_settings = settings.clone();
      }
      ConfigOption::SetDefaultSerializer(serializer) => {
        config.default_serializer = Some(serializer.clone());
      }
      ConfigOption::SetResourceKey(record_type, key) => {
        config.resource_keys.insert(record_type.clone(), key.clone());
      }
    }
  }

  /// Registers a ready-made serializer instance; it takes precedence over any factory.
  pub fn with_serializer(serializable_type: SerializableType, serializer: Arc<dyn FieldSerializer>) -> ConfigOption {
    ConfigOption::SetSerializer(serializable_type, serializer)
  }

  pub fn with_serializer_factory<F>(serializable_type: SerializableType, factory: F) -> ConfigOption
  where
    F: Fn(&SerializerSettings) -> Arc<dyn FieldSerializer> + Send + Sync + 'static, {
    ConfigOption::SetSerializerFactory(serializable_type, Arc::new(factory))
  }

  pub fn with_settings(serializable_type: SerializableType, settings: SerializerSettings) -> ConfigOption {
    ConfigOption::SetSettings(serializable_type, settings)
  }

  pub fn with_shared_settings(settings: SerializerSettings) -> ConfigOption {
    ConfigOption::SetSharedSettings(settings)
  }

  pub fn with_default_serializer(serializer: Arc<dyn FieldSerializer>) -> ConfigOption {
    ConfigOption::SetDefaultSerializer(serializer)
  }

  /// Names the external key used as the resource id for `record_type`.
  pub fn with_resource_key(record_type: &str, key: &str) -> ConfigOption {
    ConfigOption::SetResourceKey(record_type.to_string(), key.to_string())
  }
}
