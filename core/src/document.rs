use crate::operation::{RecordOperation, ResourceOperation};
use crate::record::{Record, RecordIdentity};
use crate::resource::Resource;
use crate::value::{Links, Meta, OneOrMany};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordDocument {
  pub data: OneOrMany<Record>,
  pub included: Option<Vec<Record>>,
  pub links: Option<Links>,
  pub meta: Option<Meta>,
}

impl RecordDocument {
  pub fn new(data: OneOrMany<Record>) -> Self {
    Self {
      data,
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceDocument {
  #[serde(default)]
  pub data: OneOrMany<Resource>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub included: Option<Vec<Resource>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Links>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<Meta>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordOperationsDocument {
  pub operations: Vec<RecordOperation>,
  pub links: Option<Links>,
  pub meta: Option<Meta>,
}

impl RecordOperationsDocument {
  pub fn new(operations: Vec<RecordOperation>) -> Self {
    Self {
      operations,
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceOperationsDocument {
  pub operations: Vec<ResourceOperation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Links>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<Meta>,
}

/// Identity hints used while deserializing a response to a request that carried these records.
///
/// `primary_record` pairs with single `data`; the i-th entry of `primary_records` pairs with the
/// i-th element of array `data`. Hints only stabilize ids, they never reorder or filter entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeserializeOptions {
  pub primary_record: Option<RecordIdentity>,
  pub primary_records: Option<Vec<RecordIdentity>>,
}

impl DeserializeOptions {
  pub fn with_primary_record(mut self, primary_record: RecordIdentity) -> Self {
    self.primary_record = Some(primary_record);
    self
  }

  pub fn with_primary_records(mut self, primary_records: Vec<RecordIdentity>) -> Self {
    self.primary_records = Some(primary_records);
    self
  }

  pub(crate) fn primary_record_at(&self, index: usize) -> Option<&RecordIdentity> {
    self.primary_records.as_ref().and_then(|records| records.get(index))
  }
}
