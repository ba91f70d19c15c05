use crate::error::{CodecError, ConfigurationError};
use crate::serializer::{check_null, FieldSerializer, InflectorFn, SerializerSettings};
use crate::value::{value_kind, AttributeValue};
use jsonapi_codec_utils_rs::strings::{camelize, dasherize, underscore};
use serde_json::Value;
use std::fmt;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StringInflection {
  Camelize,
  Dasherize,
  Underscore,
  Pluralize,
  Singularize,
}

impl StringInflection {
  pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
    name
      .parse()
      .map_err(|_| ConfigurationError::UnknownInflection(name.to_string()))
  }
}

/// String value codec and name inflection engine.
///
/// Serialization applies the configured inflections left to right. Deserialization applies
/// the inverse of each inflection in reverse order:
///
/// | inflection    | inverse       |
/// |---------------|---------------|
/// | `camelize`    | identity      |
/// | `dasherize`   | `camelize`    |
/// | `underscore`  | `camelize`    |
/// | `pluralize`   | `singularize` |
/// | `singularize` | `pluralize`   |
#[derive(Clone, Default)]
pub struct StringSerializer {
  disallow_null: bool,
  inflections: Vec<StringInflection>,
  pluralize: Option<InflectorFn>,
  singularize: Option<InflectorFn>,
}

impl fmt::Debug for StringSerializer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StringSerializer")
      .field("disallow_null", &self.disallow_null)
      .field("inflections", &self.inflections)
      .finish()
  }
}

impl StringSerializer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_settings(settings: &SerializerSettings) -> Self {
    Self {
      disallow_null: settings.disallows_null(),
      inflections: settings.inflections.clone().unwrap_or_default(),
      pluralize: settings.pluralize.clone(),
      singularize: settings.singularize.clone(),
    }
  }

  pub fn inflections(&self) -> &[StringInflection] {
    &self.inflections
  }

  pub fn inflect(&self, s: &str) -> Result<String, ConfigurationError> {
    self
      .inflections
      .iter()
      .try_fold(s.to_string(), |acc, inflection| self.apply_inflection(*inflection, &acc))
  }

  pub fn uninflect(&self, s: &str) -> Result<String, ConfigurationError> {
    self
      .inflections
      .iter()
      .rev()
      .try_fold(s.to_string(), |acc, inflection| self.apply_inverse_inflection(*inflection, &acc))
  }

  fn apply_inflection(&self, inflection: StringInflection, s: &str) -> Result<String, ConfigurationError> {
    match inflection {
      StringInflection::Pluralize => self.pluralize(s),
      StringInflection::Singularize => self.singularize(s),
      StringInflection::Dasherize => Ok(dasherize(s)),
      StringInflection::Underscore => Ok(underscore(s)),
      StringInflection::Camelize => Ok(camelize(s)),
    }
  }

  fn apply_inverse_inflection(&self, inflection: StringInflection, s: &str) -> Result<String, ConfigurationError> {
    match inflection {
      StringInflection::Pluralize => self.singularize(s),
      StringInflection::Singularize => self.pluralize(s),
      StringInflection::Dasherize | StringInflection::Underscore => Ok(camelize(s)),
      StringInflection::Camelize => Ok(s.to_string()),
    }
  }

  fn pluralize(&self, s: &str) -> Result<String, ConfigurationError> {
    self
      .pluralize
      .as_ref()
      .map(|pluralize| pluralize(s))
      .ok_or(ConfigurationError::MissingInflector("pluralizeFn"))
  }

  fn singularize(&self, s: &str) -> Result<String, ConfigurationError> {
    self
      .singularize
      .as_ref()
      .map(|singularize| singularize(s))
      .ok_or(ConfigurationError::MissingInflector("singularizeFn"))
  }
}

impl FieldSerializer for StringSerializer {
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError> {
    match value {
      AttributeValue::Null => {
        check_null("StringSerializer", self.disallow_null)?;
        Ok(Value::Null)
      }
      AttributeValue::String(s) => Ok(Value::String(self.inflect(s)?)),
      other => Err(CodecError::of_unexpected_value("string", other.kind())),
    }
  }

  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError> {
    match value {
      Value::Null => {
        check_null("StringSerializer", self.disallow_null)?;
        Ok(AttributeValue::Null)
      }
      Value::String(s) => Ok(AttributeValue::String(self.uninflect(s)?)),
      other => Err(CodecError::of_unexpected_value("string", value_kind(other))),
    }
  }
}
