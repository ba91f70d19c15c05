use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

pub type Links = Map<String, Value>;
pub type Meta = Map<String, Value>;

/// A field value on the record side of the codec.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
  Null,
  Bool(bool),
  Number(Number),
  String(String),
  Date(NaiveDate),
  DateTime(DateTime<Utc>),
  /// Value of a field whose type has no registered serializer.
  Json(Value),
}

impl AttributeValue {
  pub fn kind(&self) -> &'static str {
    match self {
      AttributeValue::Null => "null",
      AttributeValue::Bool(_) => "boolean",
      AttributeValue::Number(_) => "number",
      AttributeValue::String(_) => "string",
      AttributeValue::Date(_) => "date",
      AttributeValue::DateTime(_) => "datetime",
      AttributeValue::Json(_) => "json",
    }
  }

  /// Untyped conversion used when no serializer applies.
  pub fn to_json(&self) -> Value {
    match self {
      AttributeValue::Null => Value::Null,
      AttributeValue::Bool(b) => Value::Bool(*b),
      AttributeValue::Number(n) => Value::Number(n.clone()),
      AttributeValue::String(s) => Value::String(s.clone()),
      AttributeValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
      AttributeValue::DateTime(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
      AttributeValue::Json(v) => v.clone(),
    }
  }

  pub fn from_json(value: &Value) -> Self {
    match value {
      Value::Null => AttributeValue::Null,
      Value::Bool(b) => AttributeValue::Bool(*b),
      Value::Number(n) => AttributeValue::Number(n.clone()),
      Value::String(s) => AttributeValue::String(s.clone()),
      other => AttributeValue::Json(other.clone()),
    }
  }
}

impl From<bool> for AttributeValue {
  fn from(value: bool) -> Self {
    AttributeValue::Bool(value)
  }
}

impl From<i64> for AttributeValue {
  fn from(value: i64) -> Self {
    AttributeValue::Number(value.into())
  }
}

impl From<u64> for AttributeValue {
  fn from(value: u64) -> Self {
    AttributeValue::Number(value.into())
  }
}

impl From<f64> for AttributeValue {
  fn from(value: f64) -> Self {
    Number::from_f64(value).map_or(AttributeValue::Null, AttributeValue::Number)
  }
}

impl From<&str> for AttributeValue {
  fn from(value: &str) -> Self {
    AttributeValue::String(value.to_string())
  }
}

impl From<String> for AttributeValue {
  fn from(value: String) -> Self {
    AttributeValue::String(value)
  }
}

impl From<NaiveDate> for AttributeValue {
  fn from(value: NaiveDate) -> Self {
    AttributeValue::Date(value)
  }
}

impl From<DateTime<Utc>> for AttributeValue {
  fn from(value: DateTime<Utc>) -> Self {
    AttributeValue::DateTime(value)
  }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
  fn from(value: Option<T>) -> Self {
    value.map_or(AttributeValue::Null, Into::into)
  }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// `data` member of documents, relationships and operations.
///
/// `One(None)` is an explicit `null`; `Many(vec![])` is an explicit empty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  Many(Vec<T>),
  One(Option<T>),
}

impl<T> Default for OneOrMany<T> {
  fn default() -> Self {
    OneOrMany::One(None)
  }
}

impl<T> OneOrMany<T> {
  pub fn one(value: T) -> Self {
    OneOrMany::One(Some(value))
  }

  pub fn none() -> Self {
    OneOrMany::One(None)
  }

  pub fn many(values: impl IntoIterator<Item = T>) -> Self {
    OneOrMany::Many(values.into_iter().collect())
  }

  pub fn is_many(&self) -> bool {
    matches!(self, OneOrMany::Many(_))
  }

  pub fn as_one(&self) -> Option<&T> {
    match self {
      OneOrMany::One(value) => value.as_ref(),
      OneOrMany::Many(_) => None,
    }
  }

  pub fn map<U, F>(&self, f: F) -> OneOrMany<U>
  where
    F: FnMut(&T) -> U, {
    match self {
      OneOrMany::Many(values) => OneOrMany::Many(values.iter().map(f).collect()),
      OneOrMany::One(value) => OneOrMany::One(value.as_ref().map(f)),
    }
  }

  pub fn try_map<U, E, F>(&self, f: F) -> Result<OneOrMany<U>, E>
  where
    F: FnMut(&T) -> Result<U, E>, {
    match self {
      OneOrMany::Many(values) => values.iter().map(f).collect::<Result<Vec<_>, _>>().map(OneOrMany::Many),
      OneOrMany::One(value) => value.as_ref().map(f).transpose().map(OneOrMany::One),
    }
  }
}

/// Keeps an explicit `null` distinct from an absent member when used with `#[serde(default)]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>, {
  T::deserialize(deserializer).map(Some)
}
