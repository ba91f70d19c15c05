//! Translation of abstract filter, sort and page specifiers into flat JSON:API query parameters.

use crate::error::{CodecError, UnsupportedSpecifierError};
use crate::record::RecordIdentity;
use crate::serializer::FieldSerializer;
use crate::value::OneOrMany;
use serde_json::{Map, Value};
use std::sync::Arc;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ValueComparisonOperator {
  Equal,
  Gt,
  Lt,
  Gte,
  Lte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SetComparisonOperator {
  Equal,
  All,
  Some,
  None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Ascending,
  Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterSpecifier {
  Attribute {
    attribute: String,
    op: ValueComparisonOperator,
    value: Value,
  },
  RelatedRecord {
    relation: String,
    op: SetComparisonOperator,
    record: OneOrMany<RecordIdentity>,
  },
  RelatedRecords {
    relation: String,
    op: SetComparisonOperator,
    records: Vec<RecordIdentity>,
  },
  /// A specifier kind this builder has no encoding for.
  Other { kind: String, op: String },
}

impl FilterSpecifier {
  pub fn of_attribute_equal(attribute: &str, value: impl Into<Value>) -> Self {
    FilterSpecifier::Attribute {
      attribute: attribute.to_string(),
      op: ValueComparisonOperator::Equal,
      value: value.into(),
    }
  }

  pub fn of_related_record(relation: &str, record: OneOrMany<RecordIdentity>) -> Self {
    FilterSpecifier::RelatedRecord {
      relation: relation.to_string(),
      op: SetComparisonOperator::Equal,
      record,
    }
  }

  pub fn of_related_records(relation: &str, records: Vec<RecordIdentity>) -> Self {
    FilterSpecifier::RelatedRecords {
      relation: relation.to_string(),
      op: SetComparisonOperator::Equal,
      records,
    }
  }

  pub fn op(&self) -> String {
    match self {
      FilterSpecifier::Attribute { op, .. } => op.to_string(),
      FilterSpecifier::RelatedRecord { op, .. } | FilterSpecifier::RelatedRecords { op, .. } => op.to_string(),
      FilterSpecifier::Other { op, .. } => op.clone(),
    }
  }

  fn unsupported(&self, message: String) -> CodecError {
    UnsupportedSpecifierError::Filter {
      message,
      specifier: Box::new(self.clone()),
    }
    .into()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSpecifier {
  Attribute { attribute: String, order: SortOrder },
  Other { kind: String },
}

impl SortSpecifier {
  pub fn of_attribute(attribute: &str, order: SortOrder) -> Self {
    SortSpecifier::Attribute {
      attribute: attribute.to_string(),
      order,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSpecifier {
  pub offset: Option<u64>,
  pub limit: Option<u64>,
}

impl PageSpecifier {
  pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
    Self { offset, limit }
  }
}

/// A single `filter[<field>]=<value>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
  pub field: String,
  pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
  pub filter: Vec<FilterSpecifier>,
  pub sort: Vec<SortSpecifier>,
  pub page: Option<PageSpecifier>,
}

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_filter(mut self, filter: FilterSpecifier) -> Self {
    self.filter.push(filter);
    self
  }

  pub fn with_sort(mut self, sort: SortSpecifier) -> Self {
    self.sort.push(sort);
    self
  }

  pub fn with_page(mut self, page: PageSpecifier) -> Self {
    self.page = Some(page);
    self
  }

  /// Flattens into ordered `(name, value)` pairs: filters, then `sort`, then page members.
  pub fn build(&self, builder: &QueryParamBuilder) -> Result<Vec<(String, String)>, CodecError> {
    let mut params = Vec::new();
    for filter in builder.build_filter_param(&self.filter)? {
      params.push((format!("filter[{}]", filter.field), param_value(&filter.value)));
    }
    if !self.sort.is_empty() {
      params.push(("sort".to_string(), builder.build_sort_param(&self.sort)?));
    }
    if let Some(page) = &self.page {
      let page_param = builder.build_page_param(page);
      for name in ["offset", "limit"] {
        if let Some(value) = page_param.get(name) {
          params.push((format!("page[{}]", name), param_value(value)));
        }
      }
    }
    Ok(params)
  }
}

fn param_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

fn join_ids<'a>(records: impl IntoIterator<Item = &'a RecordIdentity>) -> String {
  records
    .into_iter()
    .map(|record| record.id.as_str())
    .collect::<Vec<_>>()
    .join(",")
}

/// Builds query parameters with field names inflected by the resource-field serializer.
#[derive(Debug, Clone)]
pub struct QueryParamBuilder {
  field_serializer: Arc<dyn FieldSerializer>,
}

impl QueryParamBuilder {
  pub fn new(field_serializer: Arc<dyn FieldSerializer>) -> Self {
    Self { field_serializer }
  }

  pub fn build_filter_param(&self, specifiers: &[FilterSpecifier]) -> Result<Vec<Filter>, CodecError> {
    specifiers
      .iter()
      .map(|specifier| self.build_filter(specifier))
      .collect()
  }

  fn build_filter(&self, specifier: &FilterSpecifier) -> Result<Filter, CodecError> {
    match specifier {
      FilterSpecifier::Attribute {
        attribute,
        op: ValueComparisonOperator::Equal,
        value,
      } => Ok(Filter {
        field: self.field_serializer.serialize_name(attribute)?,
        value: value.clone(),
      }),
      FilterSpecifier::RelatedRecord {
        relation,
        op: SetComparisonOperator::Equal,
        record,
      } => {
        let value = match record {
          OneOrMany::Many(records) => join_ids(records),
          OneOrMany::One(Some(record)) => record.id.clone(),
          OneOrMany::One(None) => {
            return Err(specifier.unsupported(format!(
              "Filter on relatedRecord \"{}\" requires a record",
              relation
            )))
          }
        };
        Ok(Filter {
          field: self.field_serializer.serialize_name(relation)?,
          value: Value::String(value),
        })
      }
      FilterSpecifier::RelatedRecords {
        relation,
        op: SetComparisonOperator::Equal,
        records,
      } => Ok(Filter {
        field: self.field_serializer.serialize_name(relation)?,
        value: Value::String(join_ids(records)),
      }),
      FilterSpecifier::RelatedRecord { op, .. } => Err(specifier.unsupported(format!(
        "Operation \"{}\" is not supported in JSON:API for relatedRecord filtering",
        op
      ))),
      FilterSpecifier::RelatedRecords { op, .. } => Err(specifier.unsupported(format!(
        "Operation \"{}\" is not supported in JSON:API for relatedRecords filtering",
        op
      ))),
      FilterSpecifier::Attribute { .. } | FilterSpecifier::Other { .. } => Err(specifier.unsupported(format!(
        "Filter operation {} not recognized for JSON:API",
        specifier.op()
      ))),
    }
  }

  pub fn build_sort_param(&self, specifiers: &[SortSpecifier]) -> Result<String, CodecError> {
    let params = specifiers
      .iter()
      .map(|specifier| match specifier {
        SortSpecifier::Attribute { attribute, order } => {
          let field = self.field_serializer.serialize_name(attribute)?;
          Ok(match order {
            SortOrder::Descending => format!("-{}", field),
            SortOrder::Ascending => field,
          })
        }
        SortSpecifier::Other { kind } => Err(CodecError::from(UnsupportedSpecifierError::Sort {
          message: format!("Sort specifier {} not recognized for JSON:API", kind),
          specifier: Box::new(specifier.clone()),
        })),
      })
      .collect::<Result<Vec<_>, CodecError>>()?;
    Ok(params.join(","))
  }

  /// Page members that are set, without the specifier kind.
  pub fn build_page_param(&self, specifier: &PageSpecifier) -> Map<String, Value> {
    let mut param = Map::new();
    if let Some(offset) = specifier.offset {
      param.insert("offset".to_string(), Value::from(offset));
    }
    if let Some(limit) = specifier.limit {
      param.insert("limit".to_string(), Value::from(limit));
    }
    param
  }
}

#[cfg(test)]
mod tests;
