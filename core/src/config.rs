use crate::config_option::ConfigOption;
use crate::serializer::{FieldSerializer, SerializableType, SerializerFactory, SerializerSettings};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Construction-time configuration of a [`crate::JsonApiSerializer`].
#[derive(Clone, Default)]
pub struct SerializerConfig {
  pub serializers: HashMap<SerializableType, Arc<dyn FieldSerializer>>,
  pub factories: HashMap<SerializableType, SerializerFactory>,
  pub settings: HashMap<SerializableType, SerializerSettings>,
  pub shared_settings: SerializerSettings,
  pub default_serializer: Option<Arc<dyn FieldSerializer>>,
  pub resource_keys: HashMap<String, String>,
}

impl fmt::Debug for SerializerConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SerializerConfig")
      .field("serializers", &self.serializers)
      .field("factories", &self.factories.keys().collect::<Vec<_>>())
      .field("settings", &self.settings)
      .field("shared_settings", &self.shared_settings)
      .field("default_serializer", &self.default_serializer)
      .field("resource_keys", &self.resource_keys)
      .finish()
  }
}

impl SerializerConfig {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> SerializerConfig {
    let options = options.into_iter().collect::<Vec<_>>();
    let mut config = SerializerConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  pub fn get_resource_key(&self, record_type: &str) -> Option<&str> {
    self.resource_keys.get(record_type).map(String::as_str)
  }

  pub fn get_settings(&self, serializable_type: &SerializableType) -> Option<&SerializerSettings> {
    self.settings.get(serializable_type)
  }
}
