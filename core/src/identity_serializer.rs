use crate::context::{SerializerContext, DEFAULT_RESOURCE_KEY};
use crate::error::CodecError;
use crate::record::{Keys, Record, RecordIdentity};
use crate::resource::ResourceIdentity;
use std::sync::Arc;

/// Translates between local record identities and external resource identities.
///
/// When a record type is configured with a named resource key, the external id is that key's
/// value and the key map reconciles it with the local id.
#[derive(Debug, Clone)]
pub struct IdentitySerializer {
  context: Arc<SerializerContext>,
}

impl IdentitySerializer {
  pub fn new(context: Arc<SerializerContext>) -> Self {
    Self { context }
  }

  pub fn serialize(&self, identity: &RecordIdentity) -> Result<ResourceIdentity, CodecError> {
    let resource_type = self.resource_type(&identity.record_type)?;
    let id = self.resource_id(&identity.record_type, &identity.id);
    Ok(ResourceIdentity::new(resource_type, id))
  }

  pub fn resource_type(&self, record_type: &str) -> Result<String, CodecError> {
    self.context.type_serializer().serialize_name(record_type)
  }

  pub fn record_type(&self, resource_type: &str) -> Result<String, CodecError> {
    self.context.type_serializer().deserialize_name(resource_type)
  }

  /// External id for a local id. `None` when the key map has no value for a named key.
  pub fn resource_id(&self, record_type: &str, id: &str) -> Option<String> {
    let resource_key = self.context.resource_key(record_type);
    if resource_key == DEFAULT_RESOURCE_KEY {
      Some(id.to_string())
    } else {
      self.context.key_map().id_to_key(record_type, resource_key, id)
    }
  }

  /// Resolves the local identity of `identity`. The returned record carries `keys` when the type
  /// uses a named resource key and the resource had an id.
  pub fn deserialize(
    &self,
    identity: &ResourceIdentity,
    primary_record: Option<&RecordIdentity>,
  ) -> Result<Record, CodecError> {
    let record_type = self.record_type(&identity.resource_type)?;
    let resource_key = self.context.resource_key(&record_type).to_string();

    let record = match identity.id.as_deref() {
      Some(id) if resource_key == DEFAULT_RESOURCE_KEY => Record::new(record_type, id),
      // No external id under either key: the hinted or a fresh local id, never the key map.
      None => {
        let id = self.local_id(&record_type, primary_record);
        Record::new(record_type, id)
      }
      Some(key_value) => {
        let keys = Keys::from([(resource_key, key_value.to_string())]);
        let key_map = self.context.key_map();
        let id = match key_map.id_from_keys(&record_type, &keys) {
          Some(id) => id,
          None => {
            let id = self.local_id(&record_type, primary_record);
            tracing::debug!(record_type = %record_type, id = %id, keys = ?keys, "registering keys");
            key_map.push_record(&record_type, &id, &keys);
            id
          }
        };
        Record {
          keys: Some(keys),
          ..Record::new(record_type, id)
        }
      }
    };
    Ok(record)
  }

  fn local_id(&self, record_type: &str, primary_record: Option<&RecordIdentity>) -> String {
    primary_record
      .map(|primary_record| primary_record.id.clone())
      .unwrap_or_else(|| self.context.schema().generate_id(record_type))
  }
}

#[cfg(test)]
mod tests;
