use crate::value::{deserialize_some, Links, Meta, OneOrMany};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentity {
  #[serde(rename = "type")]
  pub resource_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
}

impl ResourceIdentity {
  pub fn new(resource_type: impl Into<String>, id: Option<String>) -> Self {
    Self {
      resource_type: resource_type.into(),
      id,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceRelationship {
  #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
  pub data: Option<OneOrMany<ResourceIdentity>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Links>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<Meta>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
  #[serde(rename = "type")]
  pub resource_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attributes: Option<Map<String, Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub relationships: Option<BTreeMap<String, ResourceRelationship>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Links>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<Meta>,
}

impl Resource {
  pub fn identity(&self) -> ResourceIdentity {
    ResourceIdentity::new(self.resource_type.clone(), self.id.clone())
  }
}

impl From<ResourceIdentity> for Resource {
  fn from(identity: ResourceIdentity) -> Self {
    Self {
      resource_type: identity.resource_type,
      id: identity.id,
      ..Self::default()
    }
  }
}
