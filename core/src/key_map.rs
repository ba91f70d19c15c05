use crate::record::Keys;
use dashmap::DashMap;
use jsonapi_codec_utils_rs::collections::DashMapExtension;
use std::sync::Arc;

/// Bidirectional index between local record ids and named external keys.
///
/// The codec only reads and inserts. Implementations must never replace an existing
/// `(type, key name, key value)` association.
pub trait KeyMap: Send + Sync {
  fn id_to_key(&self, record_type: &str, key_name: &str, id: &str) -> Option<String>;

  fn key_to_id(&self, record_type: &str, key_name: &str, key_value: &str) -> Option<String>;

  fn id_from_keys(&self, record_type: &str, keys: &Keys) -> Option<String> {
    keys
      .iter()
      .find_map(|(key_name, key_value)| self.key_to_id(record_type, key_name, key_value))
  }

  fn push_record(&self, record_type: &str, id: &str, keys: &Keys);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct KeyMapEntry {
  record_type: String,
  key_name: String,
  value: String,
}

impl KeyMapEntry {
  fn new(record_type: &str, key_name: &str, value: &str) -> Self {
    Self {
      record_type: record_type.to_string(),
      key_name: key_name.to_string(),
      value: value.to_string(),
    }
  }
}

#[derive(Debug, Default)]
struct InMemoryKeyMapInner {
  key_to_id: DashMap<KeyMapEntry, String>,
  id_to_key: DashMap<KeyMapEntry, String>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyMap {
  inner: Arc<InMemoryKeyMapInner>,
}

impl InMemoryKeyMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of `(type, key name, key value)` associations held.
  pub fn len(&self) -> usize {
    self.inner.key_to_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl KeyMap for InMemoryKeyMap {
  fn id_to_key(&self, record_type: &str, key_name: &str, id: &str) -> Option<String> {
    self
      .inner
      .id_to_key
      .get(&KeyMapEntry::new(record_type, key_name, id))
      .map(|value| value.clone())
  }

  fn key_to_id(&self, record_type: &str, key_name: &str, key_value: &str) -> Option<String> {
    self
      .inner
      .key_to_id
      .get(&KeyMapEntry::new(record_type, key_name, key_value))
      .map(|id| id.clone())
  }

  fn push_record(&self, record_type: &str, id: &str, keys: &Keys) {
    for (key_name, key_value) in keys {
      let (mapped_id, existed) = self
        .inner
        .key_to_id
        .load_or_store(KeyMapEntry::new(record_type, key_name, key_value), id.to_string());
      if existed && mapped_id != id {
        tracing::warn!(
          "InMemoryKeyMap: key already mapped: type = {}, {} = {}, id = {}, ignored id = {}",
          record_type,
          key_name,
          key_value,
          mapped_id,
          id
        );
        continue;
      }
      self
        .inner
        .id_to_key
        .load_or_store(KeyMapEntry::new(record_type, key_name, id), key_value.clone());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn keys(name: &str, value: &str) -> Keys {
    Keys::from([(name.to_string(), value.to_string())])
  }

  #[test]
  fn push_record_indexes_both_directions() {
    let key_map = InMemoryKeyMap::new();
    key_map.push_record("planet", "local-1", &keys("remoteId", "a"));
    assert_eq!(key_map.key_to_id("planet", "remoteId", "a").as_deref(), Some("local-1"));
    assert_eq!(key_map.id_to_key("planet", "remoteId", "local-1").as_deref(), Some("a"));
    assert_eq!(key_map.id_from_keys("planet", &keys("remoteId", "a")).as_deref(), Some("local-1"));
    assert_eq!(key_map.key_to_id("moon", "remoteId", "a"), None);
  }

  #[test]
  fn push_record_never_overwrites() {
    let key_map = InMemoryKeyMap::new();
    key_map.push_record("planet", "local-1", &keys("remoteId", "a"));
    key_map.push_record("planet", "local-2", &keys("remoteId", "a"));
    assert_eq!(key_map.key_to_id("planet", "remoteId", "a").as_deref(), Some("local-1"));
    assert_eq!(key_map.id_to_key("planet", "remoteId", "local-2"), None);
    assert_eq!(key_map.len(), 1);
  }
}
