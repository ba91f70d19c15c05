use crate::value::{AttributeValue, Links, Meta, OneOrMany};
use std::collections::BTreeMap;

/// External key name → key value.
pub type Keys = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordIdentity {
  pub record_type: String,
  pub id: String,
}

impl RecordIdentity {
  pub fn new(record_type: impl Into<String>, id: impl Into<String>) -> Self {
    Self {
      record_type: record_type.into(),
      id: id.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordRelationship {
  /// `None` leaves the linkage untouched; `Some(OneOrMany::One(None))` clears a to-one.
  pub data: Option<OneOrMany<RecordIdentity>>,
  pub links: Option<Links>,
  pub meta: Option<Meta>,
}

impl RecordRelationship {
  pub fn with_data(data: OneOrMany<RecordIdentity>) -> Self {
    Self {
      data: Some(data),
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
  pub record_type: String,
  pub id: String,
  pub keys: Option<Keys>,
  pub attributes: Option<BTreeMap<String, AttributeValue>>,
  pub relationships: Option<BTreeMap<String, RecordRelationship>>,
  pub links: Option<Links>,
  pub meta: Option<Meta>,
}

impl Record {
  pub fn new(record_type: impl Into<String>, id: impl Into<String>) -> Self {
    Self {
      record_type: record_type.into(),
      id: id.into(),
      ..Self::default()
    }
  }

  pub fn identity(&self) -> RecordIdentity {
    RecordIdentity::new(self.record_type.clone(), self.id.clone())
  }

  pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
    self
      .attributes
      .get_or_insert_with(BTreeMap::new)
      .insert(name.to_string(), value.into());
    self
  }

  pub fn with_relationship(mut self, name: &str, relationship: RecordRelationship) -> Self {
    self
      .relationships
      .get_or_insert_with(BTreeMap::new)
      .insert(name.to_string(), relationship);
    self
  }

  pub fn with_has_one(self, name: &str, related: Option<RecordIdentity>) -> Self {
    self.with_relationship(name, RecordRelationship::with_data(OneOrMany::One(related)))
  }

  pub fn with_has_many(self, name: &str, related: impl IntoIterator<Item = RecordIdentity>) -> Self {
    self.with_relationship(name, RecordRelationship::with_data(OneOrMany::many(related)))
  }

  pub fn with_key(mut self, key_name: &str, key_value: &str) -> Self {
    self
      .keys
      .get_or_insert_with(Keys::new)
      .insert(key_name.to_string(), key_value.to_string());
    self
  }

  pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
    self.attributes.as_ref().and_then(|attributes| attributes.get(name))
  }

  pub fn relationship(&self, name: &str) -> Option<&RecordRelationship> {
    self.relationships.as_ref().and_then(|relationships| relationships.get(name))
  }
}

impl From<RecordIdentity> for Record {
  fn from(identity: RecordIdentity) -> Self {
    Record::new(identity.record_type, identity.id)
  }
}
