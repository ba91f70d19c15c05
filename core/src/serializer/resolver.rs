use crate::config::SerializerConfig;
use crate::serializer::{
  BooleanSerializer, DateSerializer, DateTimeSerializer, FieldSerializer, NoopSerializer, NumberSerializer,
  SerializableType, SerializerSettings, StringInflection, StringSerializer,
};
use dashmap::DashMap;
use jsonapi_codec_utils_rs::collections::DashMapExtension;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a serializer instance from fully merged settings.
pub type SerializerFactory = Arc<dyn Fn(&SerializerSettings) -> Arc<dyn FieldSerializer> + Send + Sync>;

/// Registry mapping a [`SerializableType`] to a shared serializer instance.
///
/// Lookup order for a type that has not been resolved yet:
/// 1. an explicitly registered instance
/// 2. a factory (user supplied, else built in) called with the merged settings for the type
/// 3. the default serializer, a [`NoopSerializer`] unless configured otherwise
///
/// The first resolution of a type is cached and every later call returns the same `Arc`,
/// including under concurrent first resolution.
#[derive(Clone)]
pub struct SerializerResolver {
  serializers: Arc<DashMap<SerializableType, Arc<dyn FieldSerializer>>>,
  factories: HashMap<SerializableType, SerializerFactory>,
  settings: HashMap<SerializableType, SerializerSettings>,
  shared_settings: SerializerSettings,
  default_serializer: Arc<dyn FieldSerializer>,
}

impl fmt::Debug for SerializerResolver {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SerializerResolver")
      .field("resolved", &self.serializers.len())
      .field("factories", &self.factories.keys().collect::<Vec<_>>())
      .field("settings", &self.settings)
      .field("shared_settings", &self.shared_settings)
      .field("default_serializer", &self.default_serializer)
      .finish()
  }
}

impl Default for SerializerResolver {
  fn default() -> Self {
    Self::new(&SerializerConfig::default(), SerializerSettings::default())
  }
}

impl SerializerResolver {
  /// `shared_settings` is the bottom settings layer, typically the schema's inflectors.
  /// The config's own shared settings are layered on top of it.
  pub fn new(config: &SerializerConfig, shared_settings: SerializerSettings) -> Self {
    let serializers = DashMap::new();
    for (serializable_type, serializer) in &config.serializers {
      serializers.insert(serializable_type.clone(), serializer.clone());
    }
    let mut factories = builtin_factories();
    factories.extend(
      config
        .factories
        .iter()
        .map(|(serializable_type, factory)| (serializable_type.clone(), factory.clone())),
    );
    Self {
      serializers: Arc::new(serializers),
      factories,
      settings: config.settings.clone(),
      shared_settings: shared_settings.merge(&config.shared_settings),
      default_serializer: config
        .default_serializer
        .clone()
        .unwrap_or_else(|| Arc::new(NoopSerializer::new())),
    }
  }

  pub fn resolve(&self, serializable_type: &SerializableType) -> Arc<dyn FieldSerializer> {
    if let Some(serializer) = self.serializers.get(serializable_type) {
      return serializer.clone();
    }
    let (serializer, existed) = self
      .serializers
      .load_or_store_with(serializable_type.clone(), || self.instantiate(serializable_type));
    if !existed {
      tracing::debug!(serializable_type = %serializable_type, serializer = ?serializer, "resolved serializer");
    }
    serializer
  }

  pub fn get_serializer(&self, type_name: &str) -> Arc<dyn FieldSerializer> {
    self.resolve(&SerializableType::from(type_name))
  }

  pub fn default_serializer(&self) -> Arc<dyn FieldSerializer> {
    self.default_serializer.clone()
  }

  /// Shared settings, then built-in defaults for the type, then configured overrides.
  pub fn settings_for(&self, serializable_type: &SerializableType) -> SerializerSettings {
    let merged = self.shared_settings.merge(&builtin_settings(serializable_type));
    match self.settings.get(serializable_type) {
      Some(overrides) => merged.merge(overrides),
      None => merged,
    }
  }

  fn instantiate(&self, serializable_type: &SerializableType) -> Arc<dyn FieldSerializer> {
    match self.factories.get(serializable_type) {
      Some(factory) => factory(&self.settings_for(serializable_type)),
      None => {
        tracing::debug!(serializable_type = %serializable_type, "no serializer registered, using default");
        self.default_serializer.clone()
      }
    }
  }
}

fn builtin_settings(serializable_type: &SerializableType) -> SerializerSettings {
  match serializable_type {
    SerializableType::ResourceType => {
      SerializerSettings::new().with_inflections([StringInflection::Pluralize, StringInflection::Dasherize])
    }
    SerializableType::ResourceField => SerializerSettings::new().with_inflections([StringInflection::Dasherize]),
    _ => SerializerSettings::new(),
  }
}

fn factory_of<F, S>(build: F) -> SerializerFactory
where
  F: Fn(&SerializerSettings) -> S + Send + Sync + 'static,
  S: FieldSerializer + 'static, {
  Arc::new(move |settings: &SerializerSettings| -> Arc<dyn FieldSerializer> { Arc::new(build(settings)) })
}

fn builtin_factories() -> HashMap<SerializableType, SerializerFactory> {
  let string_factory = factory_of(StringSerializer::from_settings);
  HashMap::from([
    (SerializableType::Boolean, factory_of(BooleanSerializer::from_settings)),
    (SerializableType::Number, factory_of(NumberSerializer::from_settings)),
    (SerializableType::Date, factory_of(DateSerializer::from_settings)),
    (SerializableType::DateTime, factory_of(DateTimeSerializer::from_settings)),
    (SerializableType::String, string_factory.clone()),
    (SerializableType::ResourceType, string_factory.clone()),
    (SerializableType::ResourceField, string_factory),
  ])
}
