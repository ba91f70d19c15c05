use super::*;
use crate::config::SerializerConfig;
use crate::config_option::ConfigOption;
use crate::key_map::{InMemoryKeyMap, KeyMap};
use crate::record::Keys;
use crate::resource::ResourceIdentity;
use crate::schema::{InMemorySchema, ModelDefinition};
use crate::serializer::{SerializableType, SerializerSettings};
use crate::value::OneOrMany;
use chrono::NaiveDate;
use serde_json::json;

fn schema() -> InMemorySchema {
  InMemorySchema::new()
    .with_model(
      "planet",
      ModelDefinition::new()
        .with_attribute("name", "string")
        .with_attribute("sequence", "number")
        .with_attribute("hasRings", "boolean")
        .with_attribute("discoveredOn", "date")
        .with_untyped_attribute("classification")
        .with_has_many("moons", "moon")
        .with_has_one("solarSystem", "solarSystem"),
    )
    .with_model(
      "moon",
      ModelDefinition::new()
        .with_attribute("name", "string")
        .with_has_one("planet", "planet"),
    )
    .with_model("solarSystem", ModelDefinition::new().with_attribute("name", "string"))
}

fn serializer_with(options: Vec<ConfigOption>) -> (ResourceSerializer, InMemoryKeyMap) {
  let key_map = InMemoryKeyMap::new();
  let context = SerializerContext::new(
    Arc::new(schema()),
    Arc::new(key_map.clone()),
    &SerializerConfig::from(options),
  );
  (ResourceSerializer::new(Arc::new(context)), key_map)
}

fn serializer() -> ResourceSerializer {
  serializer_with(vec![]).0
}

fn jupiter() -> Record {
  Record::new("planet", "p1")
    .with_attribute("name", "Jupiter")
    .with_attribute("sequence", 5i64)
    .with_attribute("hasRings", false)
    .with_attribute("discoveredOn", NaiveDate::from_ymd_opt(1610, 1, 7).unwrap())
    .with_attribute("classification", "gas giant")
    .with_has_many(
      "moons",
      [RecordIdentity::new("moon", "m1"), RecordIdentity::new("moon", "m2")],
    )
    .with_has_one("solarSystem", Some(RecordIdentity::new("solarSystem", "ss1")))
}

#[test]
fn test_serialize_full_record() {
  let resource = serializer().serialize(&jupiter()).unwrap();
  assert_eq!(
    serde_json::to_value(&resource).unwrap(),
    json!({
      "type": "planets",
      "id": "p1",
      "attributes": {
        "name": "Jupiter",
        "sequence": 5,
        "has-rings": false,
        "discovered-on": "1610-1-7",
        "classification": "gas giant"
      },
      "relationships": {
        "moons": {"data": [{"type": "moons", "id": "m1"}, {"type": "moons", "id": "m2"}]},
        "solar-system": {"data": {"type": "solar-systems", "id": "ss1"}}
      }
    })
  );
}

#[test]
fn test_round_trip_preserves_record() {
  let serializer = serializer();
  let record = jupiter();
  let resource = serializer.serialize(&record).unwrap();
  assert_eq!(serializer.deserialize(&resource, None).unwrap(), record);
}

#[test]
fn test_undeclared_fields_are_dropped_both_ways() {
  let serializer = serializer();
  let record = Record::new("planet", "p1")
    .with_attribute("name", "Earth")
    .with_attribute("population", 8_000_000_000i64)
    .with_has_one("rival", Some(RecordIdentity::new("planet", "p2")));
  let resource = serializer.serialize(&record).unwrap();
  assert_eq!(serde_json::to_value(&resource.attributes).unwrap(), json!({"name": "Earth"}));
  assert_eq!(resource.relationships, None);

  let incoming: Resource = serde_json::from_value(json!({
    "type": "planets",
    "id": "p1",
    "attributes": {"name": "Earth", "population": 8},
    "relationships": {"rival": {"data": null}}
  }))
  .unwrap();
  let record = serializer.deserialize(&incoming, None).unwrap();
  assert_eq!(record, Record::new("planet", "p1").with_attribute("name", "Earth"));
}

#[test]
fn test_null_attributes_are_kept_and_absent_ones_omitted() {
  let serializer = serializer();
  let record = Record::new("planet", "p1").with_attribute("name", AttributeValue::Null);
  let resource = serializer.serialize(&record).unwrap();
  assert_eq!(
    serde_json::to_value(&resource).unwrap(),
    json!({"type": "planets", "id": "p1", "attributes": {"name": null}})
  );
  assert_eq!(serializer.deserialize(&resource, None).unwrap(), record);
}

#[test]
fn test_disallowed_null_aborts_deserialization() {
  let (serializer, _) = serializer_with(vec![ConfigOption::with_settings(
    SerializableType::String,
    SerializerSettings::new().with_disallow_null(true),
  )]);
  let incoming: Resource =
    serde_json::from_value(json!({"type": "planets", "id": "p1", "attributes": {"name": null}})).unwrap();
  assert!(serializer
    .deserialize(&incoming, None)
    .unwrap_err()
    .is_value_constraint_error());
}

#[test]
fn test_relationship_shapes_and_metadata_are_preserved() {
  let serializer = serializer();
  let incoming: Resource = serde_json::from_value(json!({
    "type": "planets",
    "id": "p1",
    "relationships": {
      "moons": {"data": [], "links": {"related": "/planets/p1/moons"}},
      "solar-system": {"data": null, "meta": {"stale": true}}
    },
    "links": {"self": "/planets/p1"},
    "meta": {"revision": 3}
  }))
  .unwrap();

  let record = serializer.deserialize(&incoming, None).unwrap();
  let moons = record.relationship("moons").unwrap();
  assert_eq!(moons.data, Some(OneOrMany::Many(vec![])));
  assert_eq!(moons.links.as_ref().unwrap()["related"], json!("/planets/p1/moons"));
  let solar_system = record.relationship("solarSystem").unwrap();
  assert_eq!(solar_system.data, Some(OneOrMany::One(None)));
  assert_eq!(solar_system.meta.as_ref().unwrap()["stale"], json!(true));
  assert_eq!(record.links.as_ref().unwrap()["self"], json!("/planets/p1"));
  assert_eq!(record.meta.as_ref().unwrap()["revision"], json!(3));

  assert_eq!(serializer.serialize(&record).unwrap(), incoming);
}

#[test]
fn test_untouched_relationship_is_omitted() {
  let record = Record::new("planet", "p1")
    .with_relationship("moons", RecordRelationship::default())
    .with_relationship("solarSystem", RecordRelationship::default());
  let resource = serializer().serialize(&record).unwrap();
  assert_eq!(
    serde_json::to_value(&resource).unwrap(),
    json!({"type": "planets", "id": "p1"})
  );
}

#[test]
fn test_missing_model_is_an_error() {
  let record = Record::new("comet", "c1").with_attribute("name", "Halley");
  assert!(matches!(
    serializer().serialize(&record),
    Err(CodecError::ModelNotDefined(record_type)) if record_type == "comet"
  ));
}

#[test]
fn test_named_keys_are_reconciled_for_primary_and_related_records() {
  let (serializer, key_map) = serializer_with(vec![
    ConfigOption::with_resource_key("planet", "remoteId"),
    ConfigOption::with_resource_key("moon", "remoteId"),
  ]);
  let incoming: Resource = serde_json::from_value(json!({
    "type": "planets",
    "id": "earth",
    "relationships": {"moons": {"data": [{"type": "moons", "id": "luna"}]}}
  }))
  .unwrap();

  let primary = RecordIdentity::new("planet", "local-earth");
  let record = serializer.deserialize(&incoming, Some(&primary)).unwrap();
  assert_eq!(record.id, "local-earth");
  assert_eq!(
    record.keys,
    Some(Keys::from([("remoteId".to_string(), "earth".to_string())]))
  );

  let luna_id = key_map.key_to_id("moon", "remoteId", "luna").unwrap();
  assert_eq!(
    record.relationship("moons").unwrap().data,
    Some(OneOrMany::many([RecordIdentity::new("moon", luna_id)]))
  );

  let resource = serializer.serialize(&record).unwrap();
  assert_eq!(resource.identity(), ResourceIdentity::new("planets", Some("earth".to_string())));
  assert_eq!(resource.relationships, incoming.relationships);
}
