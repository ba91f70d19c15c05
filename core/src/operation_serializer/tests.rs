use super::*;
use crate::config::SerializerConfig;
use crate::key_map::InMemoryKeyMap;
use crate::schema::{InMemorySchema, ModelDefinition};
use rstest::*;
use serde_json::{json, Value};

fn serializer() -> OperationSerializer {
  let schema = InMemorySchema::new()
    .with_model(
      "planet",
      ModelDefinition::new()
        .with_attribute("name", "string")
        .with_has_many("moons", "moon")
        .with_has_one("solarSystem", "solarSystem"),
    )
    .with_model("moon", ModelDefinition::new().with_attribute("name", "string"))
    .with_model("solarSystem", ModelDefinition::new());
  let context = SerializerContext::new(
    Arc::new(schema),
    Arc::new(InMemoryKeyMap::new()),
    &SerializerConfig::default(),
  );
  OperationSerializer::new(Arc::new(context))
}

fn earth() -> RecordIdentity {
  RecordIdentity::new("planet", "earth")
}

fn moon(id: &str) -> RecordIdentity {
  RecordIdentity::new("moon", id)
}

#[rstest(operation, expected)]
#[case(
  RecordOperation::of_add_record(Record::new("planet", "earth").with_attribute("name", "Earth")),
  json!({"op": "add", "ref": {"type": "planets", "id": "earth"},
         "data": {"type": "planets", "id": "earth", "attributes": {"name": "Earth"}}})
)]
#[case(
  RecordOperation::of_update_record(Record::new("planet", "earth").with_attribute("name", "Terra")),
  json!({"op": "update", "ref": {"type": "planets", "id": "earth"},
         "data": {"type": "planets", "id": "earth", "attributes": {"name": "Terra"}}})
)]
#[case(
  RecordOperation::of_remove_record(earth()),
  json!({"op": "remove", "ref": {"type": "planets", "id": "earth"}})
)]
#[case(
  RecordOperation::of_add_to_related_records(earth(), "moons", moon("luna")),
  json!({"op": "add", "ref": {"type": "planets", "id": "earth", "relationship": "moons"},
         "data": {"type": "moons", "id": "luna"}})
)]
#[case(
  RecordOperation::of_remove_from_related_records(earth(), "moons", moon("luna")),
  json!({"op": "remove", "ref": {"type": "planets", "id": "earth", "relationship": "moons"},
         "data": {"type": "moons", "id": "luna"}})
)]
#[case(
  RecordOperation::of_replace_related_record(earth(), "solarSystem", Some(RecordIdentity::new("solarSystem", "sol"))),
  json!({"op": "update", "ref": {"type": "planets", "id": "earth", "relationship": "solar-system"},
         "data": {"type": "solar-systems", "id": "sol"}})
)]
#[case(
  RecordOperation::of_replace_related_record(earth(), "solarSystem", None),
  json!({"op": "update", "ref": {"type": "planets", "id": "earth", "relationship": "solar-system"},
         "data": null})
)]
#[case(
  RecordOperation::of_replace_related_records(earth(), "moons", vec![moon("luna"), moon("selene")]),
  json!({"op": "update", "ref": {"type": "planets", "id": "earth", "relationship": "moons"},
         "data": [{"type": "moons", "id": "luna"}, {"type": "moons", "id": "selene"}]})
)]
#[case(
  RecordOperation::of_replace_related_records(earth(), "moons", vec![]),
  json!({"op": "update", "ref": {"type": "planets", "id": "earth", "relationship": "moons"},
         "data": []})
)]
fn test_operations_serialize_and_deserialize(operation: RecordOperation, expected: Value) {
  let serializer = serializer();
  let resource_operation = serializer.serialize(&operation).unwrap();
  assert_eq!(serde_json::to_value(&resource_operation).unwrap(), expected);

  let parsed: ResourceOperation = serde_json::from_value(expected).unwrap();
  assert_eq!(serializer.deserialize(&parsed).unwrap(), operation);
}

#[test]
fn test_get_is_unsupported() {
  let operation: ResourceOperation =
    serde_json::from_value(json!({"op": "get", "ref": {"type": "planets", "id": "earth"}})).unwrap();
  assert!(matches!(
    serializer().deserialize(&operation),
    Err(CodecError::UnsupportedOperation(op)) if op == "get"
  ));
}

#[rstest(operation)]
#[case(json!({"op": "add", "ref": {"type": "planets", "id": "earth"}}))]
#[case(json!({"op": "update", "ref": {"type": "planets", "id": "earth"}, "data": null}))]
#[case(json!({"op": "add", "ref": {"type": "planets", "id": "earth", "relationship": "moons"}}))]
#[case(json!({"op": "update", "ref": {"type": "planets", "id": "earth", "relationship": "moons"}}))]
fn test_operations_without_required_data_are_rejected(operation: Value) {
  let operation: ResourceOperation = serde_json::from_value(operation).unwrap();
  assert!(matches!(
    serializer().deserialize(&operation),
    Err(CodecError::MissingOperationData(_))
  ));
}
