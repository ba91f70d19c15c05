use crate::error::ConfigurationError;
use crate::serializer::StringInflection;
use std::fmt;
use std::sync::Arc;

pub type InflectorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Construction settings for a field serializer.
///
/// Every member is optional so that settings can be layered: shared settings, then the
/// built-in defaults for a type, then the caller's overrides for that type. See
/// [`SerializerSettings::merge`].
#[derive(Clone, Default)]
pub struct SerializerSettings {
  pub disallow_null: Option<bool>,
  pub inflections: Option<Vec<StringInflection>>,
  pub pluralize: Option<InflectorFn>,
  pub singularize: Option<InflectorFn>,
}

impl fmt::Debug for SerializerSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SerializerSettings")
      .field("disallow_null", &self.disallow_null)
      .field("inflections", &self.inflections)
      .field("pluralize", &self.pluralize.is_some())
      .field("singularize", &self.singularize.is_some())
      .finish()
  }
}

impl SerializerSettings {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_disallow_null(mut self, disallow_null: bool) -> Self {
    self.disallow_null = Some(disallow_null);
    self
  }

  pub fn with_inflections(mut self, inflections: impl IntoIterator<Item = StringInflection>) -> Self {
    self.inflections = Some(inflections.into_iter().collect());
    self
  }

  /// Parses inflection names such as `"pluralize"`; an unknown name is a configuration error.
  pub fn with_inflection_names<S: AsRef<str>>(
    self,
    names: impl IntoIterator<Item = S>,
  ) -> Result<Self, ConfigurationError> {
    let inflections = names
      .into_iter()
      .map(|name| StringInflection::parse(name.as_ref()))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(self.with_inflections(inflections))
  }

  pub fn with_pluralize<F>(mut self, f: F) -> Self
  where
    F: Fn(&str) -> String + Send + Sync + 'static, {
    self.pluralize = Some(Arc::new(f));
    self
  }

  pub fn with_singularize<F>(mut self, f: F) -> Self
  where
    F: Fn(&str) -> String + Send + Sync + 'static, {
    self.singularize = Some(Arc::new(f));
    self
  }

  pub fn disallows_null(&self) -> bool {
    self.disallow_null.unwrap_or(false)
  }

  /// Field-wise merge where members set on `overrides` win.
  pub fn merge(&self, overrides: &SerializerSettings) -> SerializerSettings {
    SerializerSettings {
      disallow_null: overrides.disallow_null.or(self.disallow_null),
      inflections: overrides.inflections.clone().or_else(|| self.inflections.clone()),
      pluralize: overrides.pluralize.clone().or_else(|| self.pluralize.clone()),
      singularize: overrides.singularize.clone().or_else(|| self.singularize.clone()),
    }
  }
}
