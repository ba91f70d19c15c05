use super::*;
use crate::config::SerializerConfig;
use crate::config_option::ConfigOption;
use crate::key_map::{InMemoryKeyMap, KeyMap};
use crate::schema::{InMemorySchema, ModelDefinition};

fn setup() -> (IdentitySerializer, InMemoryKeyMap) {
  let schema = InMemorySchema::new()
    .with_model("planet", ModelDefinition::new().with_attribute("name", "string"))
    .with_model("moon", ModelDefinition::new().with_attribute("name", "string"));
  let key_map = InMemoryKeyMap::new();
  let config = SerializerConfig::from([ConfigOption::with_resource_key("planet", "remoteId")]);
  let context = SerializerContext::new(Arc::new(schema), Arc::new(key_map.clone()), &config);
  (IdentitySerializer::new(Arc::new(context)), key_map)
}

fn remote_id(value: &str) -> Keys {
  Keys::from([("remoteId".to_string(), value.to_string())])
}

#[test]
fn test_serialize_with_default_key_copies_id() {
  let (serializer, _) = setup();
  assert_eq!(
    serializer.serialize(&RecordIdentity::new("moon", "m1")).unwrap(),
    ResourceIdentity::new("moons", Some("m1".to_string()))
  );
}

#[test]
fn test_serialize_with_named_key_reads_key_map() {
  let (serializer, key_map) = setup();
  key_map.push_record("planet", "local-1", &remote_id("earth"));

  assert_eq!(
    serializer.serialize(&RecordIdentity::new("planet", "local-1")).unwrap(),
    ResourceIdentity::new("planets", Some("earth".to_string()))
  );
  assert_eq!(
    serializer.serialize(&RecordIdentity::new("planet", "unknown")).unwrap(),
    ResourceIdentity::new("planets", None)
  );
}

#[test]
fn test_deserialize_with_default_key_leaves_key_map_alone() {
  let (serializer, key_map) = setup();
  let record = serializer
    .deserialize(&ResourceIdentity::new("moons", Some("m1".to_string())), None)
    .unwrap();
  assert_eq!(record, Record::new("moon", "m1"));
  assert!(key_map.is_empty());
}

#[test]
fn test_deserialize_known_key_uses_mapped_id() {
  let (serializer, key_map) = setup();
  key_map.push_record("planet", "local-1", &remote_id("earth"));

  let primary = RecordIdentity::new("planet", "ignored");
  let record = serializer
    .deserialize(
      &ResourceIdentity::new("planets", Some("earth".to_string())),
      Some(&primary),
    )
    .unwrap();
  assert_eq!(record.id, "local-1");
  assert_eq!(record.keys, Some(remote_id("earth")));
  assert_eq!(key_map.len(), 1);
}

#[test]
fn test_deserialize_unknown_key_reuses_primary_record_id() {
  let (serializer, key_map) = setup();
  let primary = RecordIdentity::new("planet", "local-7");

  let record = serializer
    .deserialize(
      &ResourceIdentity::new("planets", Some("mars".to_string())),
      Some(&primary),
    )
    .unwrap();
  assert_eq!(record.id, "local-7");
  assert_eq!(key_map.key_to_id("planet", "remoteId", "mars").as_deref(), Some("local-7"));
  assert_eq!(key_map.id_to_key("planet", "remoteId", "local-7").as_deref(), Some("mars"));
}

#[test]
fn test_deserialize_unknown_key_generates_id_once() {
  let (serializer, key_map) = setup();
  let identity = ResourceIdentity::new("planets", Some("venus".to_string()));

  let first = serializer.deserialize(&identity, None).unwrap();
  let second = serializer.deserialize(&identity, None).unwrap();
  assert!(!first.id.is_empty());
  assert_eq!(first.id, second.id);
  assert_eq!(key_map.len(), 1);
}

#[test]
fn test_deserialize_without_external_id_does_not_register() {
  let (serializer, key_map) = setup();
  let primary = RecordIdentity::new("planet", "local-9");

  let with_primary = serializer
    .deserialize(&ResourceIdentity::new("planets", None), Some(&primary))
    .unwrap();
  assert_eq!(with_primary, Record::new("planet", "local-9"));

  let generated = serializer
    .deserialize(&ResourceIdentity::new("planets", None), None)
    .unwrap();
  assert!(!generated.id.is_empty());
  assert_eq!(generated.keys, None);
  assert!(key_map.is_empty());
}

#[test]
fn test_deserialize_default_key_without_id_uses_primary_record() {
  let (serializer, key_map) = setup();
  let primary = RecordIdentity::new("moon", "m5");

  let record = serializer
    .deserialize(&ResourceIdentity::new("moons", None), Some(&primary))
    .unwrap();
  assert_eq!(record, Record::new("moon", "m5"));

  let generated = serializer.deserialize(&ResourceIdentity::new("moons", None), None).unwrap();
  assert!(!generated.id.is_empty());
  assert_eq!(generated.keys, None);
  assert!(key_map.is_empty());
}
