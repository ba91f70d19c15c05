use crate::config::SerializerConfig;
use crate::context::SerializerContext;
use crate::document::{
  DeserializeOptions, RecordDocument, RecordOperationsDocument, ResourceDocument, ResourceOperationsDocument,
};
use crate::error::CodecError;
use crate::key_map::KeyMap;
use crate::operation::{RecordOperation, ResourceOperation};
use crate::operation_serializer::OperationSerializer;
use crate::query_params::QueryParamBuilder;
use crate::record::{Record, RecordIdentity};
use crate::resource::{Resource, ResourceIdentity};
use crate::resource_serializer::ResourceSerializer;
use crate::schema::Schema;
use crate::serializer::SerializerResolver;
use crate::value::OneOrMany;
use std::sync::Arc;

/// Entry point for converting whole JSON:API documents.
///
/// ```
/// use jsonapi_codec_core_rs::*;
/// use std::sync::Arc;
///
/// let schema = InMemorySchema::new().with_model("planet", ModelDefinition::new().with_attribute("name", "string"));
/// let serializer = JsonApiSerializer::new(Arc::new(schema), Arc::new(InMemoryKeyMap::new()), SerializerConfig::default());
///
/// let document = RecordDocument::new(OneOrMany::one(Record::new("planet", "p1").with_attribute("name", "Jupiter")));
/// let json = serializer.serialize_document_to_string(&document).unwrap();
/// assert_eq!(json, r#"{"data":{"type":"planets","id":"p1","attributes":{"name":"Jupiter"}}}"#);
/// ```
#[derive(Debug, Clone)]
pub struct JsonApiSerializer {
  context: Arc<SerializerContext>,
  resource_serializer: ResourceSerializer,
  operation_serializer: OperationSerializer,
}

impl JsonApiSerializer {
  pub fn new(schema: Arc<dyn Schema>, key_map: Arc<dyn KeyMap>, config: SerializerConfig) -> Self {
    let context = Arc::new(SerializerContext::new(schema, key_map, &config));
    Self {
      resource_serializer: ResourceSerializer::new(context.clone()),
      operation_serializer: OperationSerializer::new(context.clone()),
      context,
    }
  }

  pub fn resolver(&self) -> &SerializerResolver {
    self.context.resolver()
  }

  pub fn query_param_builder(&self) -> QueryParamBuilder {
    QueryParamBuilder::new(self.context.field_serializer())
  }

  pub fn serialize_document(&self, document: &RecordDocument) -> Result<ResourceDocument, CodecError> {
    let data = document.data.try_map(|record| self.serialize_record(record))?;
    let included = document
      .included
      .as_ref()
      .map(|included| self.serialize_records(included))
      .transpose()?;
    tracing::trace!(many = data.is_many(), "serialized document");
    Ok(ResourceDocument {
      data,
      included,
      links: document.links.clone(),
      meta: document.meta.clone(),
    })
  }

  pub fn deserialize_document(
    &self,
    document: &ResourceDocument,
    options: &DeserializeOptions,
  ) -> Result<RecordDocument, CodecError> {
    let data = match &document.data {
      OneOrMany::Many(resources) => OneOrMany::Many(
        resources
          .iter()
          .enumerate()
          .map(|(index, resource)| self.deserialize_resource(resource, options.primary_record_at(index)))
          .collect::<Result<Vec<_>, _>>()?,
      ),
      OneOrMany::One(resource) => OneOrMany::One(
        resource
          .as_ref()
          .map(|resource| self.deserialize_resource(resource, options.primary_record.as_ref()))
          .transpose()?,
      ),
    };
    let included = document
      .included
      .as_ref()
      .map(|included| {
        included
          .iter()
          .map(|resource| self.deserialize_resource(resource, None))
          .collect::<Result<Vec<_>, _>>()
      })
      .transpose()?;
    tracing::trace!(many = data.is_many(), "deserialized document");
    Ok(RecordDocument {
      data,
      included,
      links: document.links.clone(),
      meta: document.meta.clone(),
    })
  }

  pub fn serialize_operations_document(
    &self,
    document: &RecordOperationsDocument,
  ) -> Result<ResourceOperationsDocument, CodecError> {
    Ok(ResourceOperationsDocument {
      operations: self.serialize_operations(&document.operations)?,
      links: document.links.clone(),
      meta: document.meta.clone(),
    })
  }

  pub fn deserialize_operations_document(
    &self,
    document: &ResourceOperationsDocument,
  ) -> Result<RecordOperationsDocument, CodecError> {
    Ok(RecordOperationsDocument {
      operations: self.deserialize_operations(&document.operations)?,
      links: document.links.clone(),
      meta: document.meta.clone(),
    })
  }

  pub fn serialize_document_to_string(&self, document: &RecordDocument) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&self.serialize_document(document)?)?)
  }

  pub fn deserialize_document_str(&self, json: &str, options: &DeserializeOptions) -> Result<RecordDocument, CodecError> {
    let document: ResourceDocument = serde_json::from_str(json)?;
    self.deserialize_document(&document, options)
  }

  pub fn serialize_operations_document_to_string(
    &self,
    document: &RecordOperationsDocument,
  ) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&self.serialize_operations_document(document)?)?)
  }

  pub fn deserialize_operations_document_str(&self, json: &str) -> Result<RecordOperationsDocument, CodecError> {
    let document: ResourceOperationsDocument = serde_json::from_str(json)?;
    self.deserialize_operations_document(&document)
  }

  pub fn serialize_record(&self, record: &Record) -> Result<Resource, CodecError> {
    self.resource_serializer.serialize(record)
  }

  pub fn serialize_records(&self, records: &[Record]) -> Result<Vec<Resource>, CodecError> {
    records.iter().map(|record| self.serialize_record(record)).collect()
  }

  pub fn deserialize_resource(
    &self,
    resource: &Resource,
    primary_record: Option<&RecordIdentity>,
  ) -> Result<Record, CodecError> {
    self.resource_serializer.deserialize(resource, primary_record)
  }

  pub fn serialize_operation(&self, operation: &RecordOperation) -> Result<ResourceOperation, CodecError> {
    self.operation_serializer.serialize(operation)
  }

  pub fn serialize_operations(&self, operations: &[RecordOperation]) -> Result<Vec<ResourceOperation>, CodecError> {
    operations
      .iter()
      .map(|operation| self.serialize_operation(operation))
      .collect()
  }

  pub fn deserialize_operation(&self, operation: &ResourceOperation) -> Result<RecordOperation, CodecError> {
    self.operation_serializer.deserialize(operation)
  }

  pub fn deserialize_operations(&self, operations: &[ResourceOperation]) -> Result<Vec<RecordOperation>, CodecError> {
    operations
      .iter()
      .map(|operation| self.deserialize_operation(operation))
      .collect()
  }

  pub fn resource_identity(&self, identity: &RecordIdentity) -> Result<ResourceIdentity, CodecError> {
    self.resource_serializer.identity_serializer().serialize(identity)
  }

  pub fn record_identity(
    &self,
    identity: &ResourceIdentity,
    primary_record: Option<&RecordIdentity>,
  ) -> Result<Record, CodecError> {
    self
      .resource_serializer
      .identity_serializer()
      .deserialize(identity, primary_record)
  }

  pub fn resource_type(&self, record_type: &str) -> Result<String, CodecError> {
    self.resource_serializer.identity_serializer().resource_type(record_type)
  }

  pub fn record_type(&self, resource_type: &str) -> Result<String, CodecError> {
    self.resource_serializer.identity_serializer().record_type(resource_type)
  }

  pub fn resource_id(&self, record_type: &str, id: &str) -> Option<String> {
    self.resource_serializer.identity_serializer().resource_id(record_type, id)
  }

  /// External ids for `ids`; entries without a known key are skipped.
  pub fn resource_ids(&self, record_type: &str, ids: &[String]) -> Vec<String> {
    ids
      .iter()
      .filter_map(|id| self.resource_id(record_type, id))
      .collect()
  }

  pub fn resource_attribute(&self, attribute: &str) -> Result<String, CodecError> {
    self.context.field_serializer().serialize_name(attribute)
  }

  pub fn resource_relationship(&self, relationship: &str) -> Result<String, CodecError> {
    self.context.field_serializer().serialize_name(relationship)
  }

  pub fn record_attribute(&self, resource_attribute: &str) -> Result<String, CodecError> {
    self.context.field_serializer().deserialize_name(resource_attribute)
  }

  pub fn record_relationship(&self, resource_relationship: &str) -> Result<String, CodecError> {
    self.context.field_serializer().deserialize_name(resource_relationship)
  }
}
