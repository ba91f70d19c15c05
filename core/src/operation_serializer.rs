use crate::context::SerializerContext;
use crate::error::CodecError;
use crate::operation::{RecordOperation, ResourceOperation, ResourceOperationKind, ResourceOperationRef};
use crate::record::{Record, RecordIdentity};
use crate::resource::Resource;
use crate::resource_serializer::ResourceSerializer;
use crate::value::OneOrMany;
use std::sync::Arc;

/// Converts record operations to atomic resource operations and back.
///
/// | record operation           | `op`     | `ref.relationship` | `data`               |
/// |----------------------------|----------|--------------------|----------------------|
/// | `AddRecord`                | `add`    | -                  | resource             |
/// | `UpdateRecord`             | `update` | -                  | resource             |
/// | `RemoveRecord`             | `remove` | -                  | -                    |
/// | `AddToRelatedRecords`      | `add`    | set                | identity             |
/// | `RemoveFromRelatedRecords` | `remove` | set                | identity             |
/// | `ReplaceRelatedRecord`     | `update` | set                | identity or `null`   |
/// | `ReplaceRelatedRecords`    | `update` | set                | array of identities  |
#[derive(Debug, Clone)]
pub struct OperationSerializer {
  context: Arc<SerializerContext>,
  resource_serializer: ResourceSerializer,
}

impl OperationSerializer {
  pub fn new(context: Arc<SerializerContext>) -> Self {
    let resource_serializer = ResourceSerializer::new(context.clone());
    Self {
      context,
      resource_serializer,
    }
  }

  pub fn serialize(&self, operation: &RecordOperation) -> Result<ResourceOperation, CodecError> {
    let resource_operation = match operation {
      RecordOperation::AddRecord { record } => self.record_operation(ResourceOperationKind::Add, record)?,
      RecordOperation::UpdateRecord { record } => self.record_operation(ResourceOperationKind::Update, record)?,
      RecordOperation::RemoveRecord { record } => ResourceOperation {
        op: ResourceOperationKind::Remove,
        target: self.target(record, None)?,
        data: None,
      },
      RecordOperation::AddToRelatedRecords {
        record,
        relationship,
        related_record,
      } => ResourceOperation {
        op: ResourceOperationKind::Add,
        target: self.target(record, Some(relationship))?,
        data: Some(OneOrMany::one(self.identity_resource(related_record)?)),
      },
      RecordOperation::RemoveFromRelatedRecords {
        record,
        relationship,
        related_record,
      } => ResourceOperation {
        op: ResourceOperationKind::Remove,
        target: self.target(record, Some(relationship))?,
        data: Some(OneOrMany::one(self.identity_resource(related_record)?)),
      },
      RecordOperation::ReplaceRelatedRecord {
        record,
        relationship,
        related_record,
      } => ResourceOperation {
        op: ResourceOperationKind::Update,
        target: self.target(record, Some(relationship))?,
        data: Some(OneOrMany::One(
          related_record
            .as_ref()
            .map(|related_record| self.identity_resource(related_record))
            .transpose()?,
        )),
      },
      RecordOperation::ReplaceRelatedRecords {
        record,
        relationship,
        related_records,
      } => ResourceOperation {
        op: ResourceOperationKind::Update,
        target: self.target(record, Some(relationship))?,
        data: Some(OneOrMany::Many(
          related_records
            .iter()
            .map(|related_record| self.identity_resource(related_record))
            .collect::<Result<Vec<_>, _>>()?,
        )),
      },
    };
    tracing::trace!(op = %resource_operation.op, target = ?resource_operation.target, "serialized operation");
    Ok(resource_operation)
  }

  pub fn deserialize(&self, operation: &ResourceOperation) -> Result<RecordOperation, CodecError> {
    if operation.op == ResourceOperationKind::Get {
      return Err(CodecError::UnsupportedOperation(operation.op.to_string()));
    }
    let Some(resource_relationship) = &operation.target.relationship else {
      return self.deserialize_record_operation(operation);
    };

    let record = self
      .resource_serializer
      .identity_serializer()
      .deserialize(&operation.target.identity(), None)?
      .identity();
    let relationship = self.context.field_serializer().deserialize_name(resource_relationship)?;
    let missing_data = || CodecError::MissingOperationData(format!("{} {}", operation.op, resource_relationship));

    match (operation.op, operation.data.as_ref()) {
      (ResourceOperationKind::Add, Some(OneOrMany::One(Some(related)))) => Ok(RecordOperation::AddToRelatedRecords {
        record,
        relationship,
        related_record: self.related_identity(related)?,
      }),
      (ResourceOperationKind::Remove, Some(OneOrMany::One(Some(related)))) => {
        Ok(RecordOperation::RemoveFromRelatedRecords {
          record,
          relationship,
          related_record: self.related_identity(related)?,
        })
      }
      (ResourceOperationKind::Update, Some(OneOrMany::Many(related))) => Ok(RecordOperation::ReplaceRelatedRecords {
        record,
        relationship,
        related_records: related
          .iter()
          .map(|related| self.related_identity(related))
          .collect::<Result<Vec<_>, _>>()?,
      }),
      (ResourceOperationKind::Update, Some(OneOrMany::One(related))) => Ok(RecordOperation::ReplaceRelatedRecord {
        record,
        relationship,
        related_record: related
          .as_ref()
          .map(|related| self.related_identity(related))
          .transpose()?,
      }),
      _ => Err(missing_data()),
    }
  }

  fn deserialize_record_operation(&self, operation: &ResourceOperation) -> Result<RecordOperation, CodecError> {
    let missing_data = || CodecError::MissingOperationData(format!("{} {}", operation.op, operation.target.resource_type));
    match operation.op {
      ResourceOperationKind::Add | ResourceOperationKind::Update => {
        let Some(OneOrMany::One(Some(resource))) = &operation.data else {
          return Err(missing_data());
        };
        let record = self.resource_serializer.deserialize(resource, None)?;
        if operation.op == ResourceOperationKind::Add {
          Ok(RecordOperation::AddRecord { record })
        } else {
          Ok(RecordOperation::UpdateRecord { record })
        }
      }
      ResourceOperationKind::Remove => {
        let record = self
          .resource_serializer
          .identity_serializer()
          .deserialize(&operation.target.identity(), None)?
          .identity();
        Ok(RecordOperation::RemoveRecord { record })
      }
      ResourceOperationKind::Get => Err(CodecError::UnsupportedOperation(operation.op.to_string())),
    }
  }

  fn record_operation(
    &self,
    op: ResourceOperationKind,
    record: &Record,
  ) -> Result<ResourceOperation, CodecError> {
    let resource = self.resource_serializer.serialize(record)?;
    Ok(ResourceOperation {
      op,
      target: ResourceOperationRef::from(resource.identity()),
      data: Some(OneOrMany::one(resource)),
    })
  }

  fn target(&self, record: &RecordIdentity, relationship: Option<&String>) -> Result<ResourceOperationRef, CodecError> {
    let mut target = ResourceOperationRef::from(self.resource_serializer.identity_serializer().serialize(record)?);
    target.relationship = relationship
      .map(|relationship| self.context.field_serializer().serialize_name(relationship))
      .transpose()?;
    Ok(target)
  }

  fn identity_resource(&self, identity: &RecordIdentity) -> Result<Resource, CodecError> {
    Ok(Resource::from(
      self.resource_serializer.identity_serializer().serialize(identity)?,
    ))
  }

  fn related_identity(&self, resource: &Resource) -> Result<RecordIdentity, CodecError> {
    Ok(
      self
        .resource_serializer
        .identity_serializer()
        .deserialize(&resource.identity(), None)?
        .identity(),
    )
  }
}

#[cfg(test)]
mod tests;
