use crate::record::{Record, RecordIdentity};
use crate::resource::{Resource, ResourceIdentity};
use crate::value::{deserialize_some, OneOrMany};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordOperation {
  AddRecord {
    record: Record,
  },
  UpdateRecord {
    record: Record,
  },
  RemoveRecord {
    record: RecordIdentity,
  },
  AddToRelatedRecords {
    record: RecordIdentity,
    relationship: String,
    related_record: RecordIdentity,
  },
  RemoveFromRelatedRecords {
    record: RecordIdentity,
    relationship: String,
    related_record: RecordIdentity,
  },
  ReplaceRelatedRecord {
    record: RecordIdentity,
    relationship: String,
    related_record: Option<RecordIdentity>,
  },
  ReplaceRelatedRecords {
    record: RecordIdentity,
    relationship: String,
    related_records: Vec<RecordIdentity>,
  },
}

impl RecordOperation {
  pub fn of_add_record(record: Record) -> Self {
    RecordOperation::AddRecord { record }
  }

  pub fn of_update_record(record: Record) -> Self {
    RecordOperation::UpdateRecord { record }
  }

  pub fn of_remove_record(record: RecordIdentity) -> Self {
    RecordOperation::RemoveRecord { record }
  }

  pub fn of_add_to_related_records(record: RecordIdentity, relationship: &str, related_record: RecordIdentity) -> Self {
    RecordOperation::AddToRelatedRecords {
      record,
      relationship: relationship.to_string(),
      related_record,
    }
  }

  pub fn of_remove_from_related_records(
    record: RecordIdentity,
    relationship: &str,
    related_record: RecordIdentity,
  ) -> Self {
    RecordOperation::RemoveFromRelatedRecords {
      record,
      relationship: relationship.to_string(),
      related_record,
    }
  }

  pub fn of_replace_related_record(
    record: RecordIdentity,
    relationship: &str,
    related_record: Option<RecordIdentity>,
  ) -> Self {
    RecordOperation::ReplaceRelatedRecord {
      record,
      relationship: relationship.to_string(),
      related_record,
    }
  }

  pub fn of_replace_related_records(
    record: RecordIdentity,
    relationship: &str,
    related_records: Vec<RecordIdentity>,
  ) -> Self {
    RecordOperation::ReplaceRelatedRecords {
      record,
      relationship: relationship.to_string(),
      related_records,
    }
  }

  /// Identity of the record the operation targets.
  pub fn record_identity(&self) -> RecordIdentity {
    match self {
      RecordOperation::AddRecord { record } | RecordOperation::UpdateRecord { record } => record.identity(),
      RecordOperation::RemoveRecord { record }
      | RecordOperation::AddToRelatedRecords { record, .. }
      | RecordOperation::RemoveFromRelatedRecords { record, .. }
      | RecordOperation::ReplaceRelatedRecord { record, .. }
      | RecordOperation::ReplaceRelatedRecords { record, .. } => record.clone(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceOperationKind {
  Get,
  Add,
  Update,
  Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceOperationRef {
  #[serde(rename = "type")]
  pub resource_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub relationship: Option<String>,
}

impl ResourceOperationRef {
  pub fn identity(&self) -> ResourceIdentity {
    ResourceIdentity::new(self.resource_type.clone(), self.id.clone())
  }
}

impl From<ResourceIdentity> for ResourceOperationRef {
  fn from(identity: ResourceIdentity) -> Self {
    Self {
      resource_type: identity.resource_type,
      id: identity.id,
      relationship: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceOperation {
  pub op: ResourceOperationKind,
  #[serde(rename = "ref")]
  pub target: ResourceOperationRef,
  #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
  pub data: Option<OneOrMany<Resource>>,
}
