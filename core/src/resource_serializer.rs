use crate::context::SerializerContext;
use crate::error::CodecError;
use crate::identity_serializer::IdentitySerializer;
use crate::record::{Record, RecordIdentity, RecordRelationship};
use crate::resource::{Resource, ResourceRelationship};
use crate::schema::AttributeDefinition;
use crate::serializer::FieldSerializer;
use crate::value::AttributeValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Converts whole records to resources and back, with the schema as the authority on which
/// attributes and relationships are carried.
#[derive(Debug, Clone)]
pub struct ResourceSerializer {
  context: Arc<SerializerContext>,
  identity_serializer: IdentitySerializer,
}

impl ResourceSerializer {
  pub fn new(context: Arc<SerializerContext>) -> Self {
    let identity_serializer = IdentitySerializer::new(context.clone());
    Self {
      context,
      identity_serializer,
    }
  }

  pub fn identity_serializer(&self) -> &IdentitySerializer {
    &self.identity_serializer
  }

  pub fn serialize(&self, record: &Record) -> Result<Resource, CodecError> {
    let mut resource = Resource::from(self.identity_serializer.serialize(&record.identity())?);
    resource.attributes = self.serialize_attributes(record)?;
    resource.relationships = self.serialize_relationships(record)?;
    resource.links = record.links.clone();
    resource.meta = record.meta.clone();
    Ok(resource)
  }

  pub fn deserialize(&self, resource: &Resource, primary_record: Option<&RecordIdentity>) -> Result<Record, CodecError> {
    let mut record = self
      .identity_serializer
      .deserialize(&resource.identity(), primary_record)?;
    record.attributes = self.deserialize_attributes(&record.record_type, resource)?;
    record.relationships = self.deserialize_relationships(&record.record_type, resource)?;
    record.links = resource.links.clone();
    record.meta = resource.meta.clone();
    Ok(record)
  }

  fn attribute_serializer(&self, definition: &AttributeDefinition) -> Arc<dyn FieldSerializer> {
    match definition.serializable_type() {
      Some(serializable_type) => self.context.resolver().resolve(&serializable_type),
      None => self.context.resolver().default_serializer(),
    }
  }

  fn serialize_attributes(&self, record: &Record) -> Result<Option<Map<String, Value>>, CodecError> {
    let Some(attributes) = &record.attributes else {
      return Ok(None);
    };
    let model = self.context.model(&record.record_type)?;
    let field_serializer = self.context.field_serializer();
    let mut serialized = Map::new();
    for (name, value) in attributes {
      let Some(definition) = model.attributes.get(name) else {
        tracing::trace!(record_type = %record.record_type, attribute = %name, "dropping undeclared attribute");
        continue;
      };
      let value = match value {
        AttributeValue::Null => Value::Null,
        value => self.attribute_serializer(definition).serialize(value)?,
      };
      serialized.insert(field_serializer.serialize_name(name)?, value);
    }
    Ok((!serialized.is_empty()).then_some(serialized))
  }

  fn serialize_relationships(
    &self,
    record: &Record,
  ) -> Result<Option<BTreeMap<String, ResourceRelationship>>, CodecError> {
    let Some(relationships) = &record.relationships else {
      return Ok(None);
    };
    let model = self.context.model(&record.record_type)?;
    let field_serializer = self.context.field_serializer();
    let mut serialized = BTreeMap::new();
    for (name, relationship) in relationships {
      if !model.relationships.contains_key(name) {
        tracing::trace!(record_type = %record.record_type, relationship = %name, "dropping undeclared relationship");
        continue;
      }
      if relationship.data.is_none() && relationship.links.is_none() && relationship.meta.is_none() {
        continue;
      }
      let data = relationship
        .data
        .as_ref()
        .map(|data| data.try_map(|identity| self.identity_serializer.serialize(identity)))
        .transpose()?;
      serialized.insert(
        field_serializer.serialize_name(name)?,
        ResourceRelationship {
          data,
          links: relationship.links.clone(),
          meta: relationship.meta.clone(),
        },
      );
    }
    Ok((!serialized.is_empty()).then_some(serialized))
  }

  fn deserialize_attributes(
    &self,
    record_type: &str,
    resource: &Resource,
  ) -> Result<Option<BTreeMap<String, AttributeValue>>, CodecError> {
    let Some(attributes) = &resource.attributes else {
      return Ok(None);
    };
    let model = self.context.model(record_type)?;
    let field_serializer = self.context.field_serializer();
    let mut deserialized = BTreeMap::new();
    for (resource_field, value) in attributes {
      let name = field_serializer.deserialize_name(resource_field)?;
      let Some(definition) = model.attributes.get(&name) else {
        tracing::trace!(record_type = %record_type, attribute = %name, "dropping undeclared attribute");
        continue;
      };
      deserialized.insert(name, self.attribute_serializer(definition).deserialize(value)?);
    }
    Ok((!deserialized.is_empty()).then_some(deserialized))
  }

  fn deserialize_relationships(
    &self,
    record_type: &str,
    resource: &Resource,
  ) -> Result<Option<BTreeMap<String, RecordRelationship>>, CodecError> {
    let Some(relationships) = &resource.relationships else {
      return Ok(None);
    };
    let model = self.context.model(record_type)?;
    let field_serializer = self.context.field_serializer();
    let mut deserialized = BTreeMap::new();
    for (resource_field, relationship) in relationships {
      let name = field_serializer.deserialize_name(resource_field)?;
      if !model.relationships.contains_key(&name) {
        tracing::trace!(record_type = %record_type, relationship = %name, "dropping undeclared relationship");
        continue;
      }
      let data = relationship
        .data
        .as_ref()
        .map(|data| {
          data.try_map(|identity| {
            self
              .identity_serializer
              .deserialize(identity, None)
              .map(|record| record.identity())
          })
        })
        .transpose()?;
      deserialized.insert(
        name,
        RecordRelationship {
          data,
          links: relationship.links.clone(),
          meta: relationship.meta.clone(),
        },
      );
    }
    Ok((!deserialized.is_empty()).then_some(deserialized))
  }
}

#[cfg(test)]
mod tests;
