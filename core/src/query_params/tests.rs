use super::*;
use crate::serializer::{SerializerSettings, StringInflection, StringSerializer};
use rstest::*;
use serde_json::json;

fn builder() -> QueryParamBuilder {
  QueryParamBuilder::new(Arc::new(StringSerializer::from_settings(
    &SerializerSettings::new().with_inflections([StringInflection::Dasherize]),
  )))
}

fn moon(id: &str) -> RecordIdentity {
  RecordIdentity::new("moon", id)
}

#[test]
fn test_attribute_equality_filter_inflects_field() {
  let filters = builder()
    .build_filter_param(&[FilterSpecifier::of_attribute_equal("firstName", "Ada")])
    .unwrap();
  assert_eq!(
    filters,
    vec![Filter {
      field: "first-name".to_string(),
      value: json!("Ada")
    }]
  );
}

#[rstest(specifier, field, value)]
#[case(FilterSpecifier::of_related_record("homePlanet", OneOrMany::one(RecordIdentity::new("planet", "earth"))), "home-planet", "earth")]
#[case(FilterSpecifier::of_related_record("moons", OneOrMany::many([moon("a"), moon("b")])), "moons", "a,b")]
#[case(FilterSpecifier::of_related_records("moons", vec![moon("a"), moon("b"), moon("c")]), "moons", "a,b,c")]
#[case(FilterSpecifier::of_related_records("moons", vec![]), "moons", "")]
fn test_relationship_filters_join_ids(specifier: FilterSpecifier, field: &str, value: &str) {
  assert_eq!(
    builder().build_filter_param(&[specifier]).unwrap(),
    vec![Filter {
      field: field.to_string(),
      value: json!(value)
    }]
  );
}

#[rstest(specifier)]
#[case(FilterSpecifier::Attribute { attribute: "sequence".to_string(), op: ValueComparisonOperator::Gt, value: json!(3) })]
#[case(FilterSpecifier::RelatedRecord { relation: "planet".to_string(), op: SetComparisonOperator::Some, record: OneOrMany::one(moon("a")) })]
#[case(FilterSpecifier::RelatedRecords { relation: "moons".to_string(), op: SetComparisonOperator::All, records: vec![moon("a")] })]
#[case(FilterSpecifier::of_related_record("planet", OneOrMany::none()))]
#[case(FilterSpecifier::Other { kind: "fuzzy".to_string(), op: "match".to_string() })]
fn test_unsupported_filters_carry_the_specifier(specifier: FilterSpecifier) {
  let err = builder().build_filter_param(&[specifier.clone()]).unwrap_err();
  match err {
    CodecError::UnsupportedSpecifier(UnsupportedSpecifierError::Filter { specifier: carried, .. }) => {
      assert_eq!(*carried, specifier)
    }
    other => panic!("unexpected error: {:?}", other),
  }
}

#[test]
fn test_related_records_error_names_the_operator() {
  let err = builder()
    .build_filter_param(&[FilterSpecifier::RelatedRecords {
      relation: "moons".to_string(),
      op: SetComparisonOperator::None,
      records: vec![],
    }])
    .unwrap_err();
  assert!(err.to_string().contains("\"none\""));
}

#[test]
fn test_sort_param_prefixes_descending_fields() {
  let sort = builder()
    .build_sort_param(&[
      SortSpecifier::of_attribute("lastName", SortOrder::Ascending),
      SortSpecifier::of_attribute("birthDate", SortOrder::Descending),
    ])
    .unwrap();
  assert_eq!(sort, "last-name,-birth-date");
}

#[test]
fn test_non_attribute_sort_is_rejected() {
  let specifier = SortSpecifier::Other {
    kind: "relevance".to_string(),
  };
  match builder().build_sort_param(&[specifier.clone()]) {
    Err(CodecError::UnsupportedSpecifier(UnsupportedSpecifierError::Sort { specifier: carried, message })) => {
      assert_eq!(*carried, specifier);
      assert!(message.contains("relevance"));
    }
    other => panic!("unexpected result: {:?}", other),
  }
}

#[test]
fn test_page_param_omits_absent_members() {
  assert_eq!(
    Value::Object(builder().build_page_param(&PageSpecifier::new(Some(10), Some(5)))),
    json!({"offset": 10, "limit": 5})
  );
  assert_eq!(
    Value::Object(builder().build_page_param(&PageSpecifier::new(None, Some(5)))),
    json!({"limit": 5})
  );
}

#[test]
fn test_query_params_flatten_in_order() {
  let params = QueryParams::new()
    .with_filter(FilterSpecifier::of_attribute_equal("hasRings", true))
    .with_filter(FilterSpecifier::of_related_records("moons", vec![moon("a"), moon("b")]))
    .with_sort(SortSpecifier::of_attribute("name", SortOrder::Descending))
    .with_page(PageSpecifier::new(Some(20), Some(10)))
    .build(&builder())
    .unwrap();

  let expected = [
    ("filter[has-rings]", "true"),
    ("filter[moons]", "a,b"),
    ("sort", "-name"),
    ("page[offset]", "20"),
    ("page[limit]", "10"),
  ]
  .iter()
  .map(|(name, value)| (name.to_string(), value.to_string()))
  .collect::<Vec<_>>();
  assert_eq!(params, expected);
}

#[test]
fn test_empty_query_params_build_nothing() {
  assert!(QueryParams::new().build(&builder()).unwrap().is_empty());
}
