use crate::query_params::{FilterSpecifier, SortSpecifier};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
  #[error("StringSerializer does not recognize inflection '{0}'")]
  UnknownInflection(String),
  #[error("StringSerializer must be passed a '{0}' in order to apply this inflection")]
  MissingInflector(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueConstraintError {
  #[error("{serializer}: null values are not allowed")]
  NullNotAllowed { serializer: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnsupportedSpecifierError {
  #[error("{message}")]
  Filter {
    message: String,
    specifier: Box<FilterSpecifier>,
  },
  #[error("{message}")]
  Sort {
    message: String,
    specifier: Box<SortSpecifier>,
  },
}

#[derive(Debug, Error)]
pub enum CodecError {
  #[error("Configuration error: {0}")]
  Configuration(#[from] ConfigurationError),
  #[error("Value constraint error: {0}")]
  ValueConstraint(#[from] ValueConstraintError),
  #[error("Unsupported specifier: {0}")]
  UnsupportedSpecifier(#[from] UnsupportedSpecifierError),
  #[error("Unexpected value: expected {expected}, found {found}")]
  UnexpectedValue { expected: &'static str, found: &'static str },
  #[error("Invalid date: {0}")]
  InvalidDate(String),
  #[error("Invalid datetime: {0}")]
  InvalidDateTime(String),
  #[error("Model not defined: {0}")]
  ModelNotDefined(String),
  #[error("Unsupported operation: {0}")]
  UnsupportedOperation(String),
  #[error("Operation is missing data: {0}")]
  MissingOperationData(String),
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

impl CodecError {
  pub fn of_unexpected_value(expected: &'static str, found: &'static str) -> Self {
    CodecError::UnexpectedValue { expected, found }
  }

  pub fn is_configuration_error(&self) -> bool {
    matches!(self, CodecError::Configuration(_))
  }

  pub fn is_value_constraint_error(&self) -> bool {
    matches!(self, CodecError::ValueConstraint(_))
  }
}

static_assertions::assert_impl_all!(CodecError: Send, Sync);
