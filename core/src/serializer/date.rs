use crate::error::CodecError;
use crate::serializer::{check_null, FieldSerializer, SerializerSettings};
use crate::value::{value_kind, AttributeValue};
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

/// Calendar date codec. The wire form is `year-month-day` without zero padding, e.g. `2024-3-5`.
#[derive(Debug, Clone, Default)]
pub struct DateSerializer {
  disallow_null: bool,
}

impl DateSerializer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_settings(settings: &SerializerSettings) -> Self {
    Self {
      disallow_null: settings.disallows_null(),
    }
  }

  pub fn format(date: &NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
  }

  pub fn parse(s: &str) -> Result<NaiveDate, CodecError> {
    let invalid = || CodecError::InvalidDate(s.to_string());
    let mut parts = s.split('-');
    let mut next_part = || parts.next().and_then(parse_leading_int).ok_or_else(invalid);
    let year = next_part()?;
    let month = next_part()?;
    let day = next_part()?;
    let month = u32::try_from(month).map_err(|_| invalid())?;
    let day = u32::try_from(day).map_err(|_| invalid())?;
    let year = i32::try_from(year).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
  }
}

/// Reads the leading decimal digits of `s`, ignoring surrounding whitespace and any trailing text.
fn parse_leading_int(s: &str) -> Option<i64> {
  let s = s.trim_start();
  let (sign, digits) = match s.strip_prefix('+') {
    Some(rest) => (1, rest),
    None => match s.strip_prefix('-') {
      Some(rest) => (-1, rest),
      None => (1, s),
    },
  };
  let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
  digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

impl FieldSerializer for DateSerializer {
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError> {
    match value {
      AttributeValue::Null => {
        check_null("DateSerializer", self.disallow_null)?;
        Ok(Value::Null)
      }
      AttributeValue::Date(date) => Ok(Value::String(Self::format(date))),
      AttributeValue::DateTime(date_time) => Ok(Value::String(Self::format(&date_time.date_naive()))),
      other => Err(CodecError::of_unexpected_value("date", other.kind())),
    }
  }

  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError> {
    match value {
      Value::Null => {
        check_null("DateSerializer", self.disallow_null)?;
        Ok(AttributeValue::Null)
      }
      Value::String(s) => Ok(AttributeValue::Date(Self::parse(s)?)),
      other => Err(CodecError::of_unexpected_value("string", value_kind(other))),
    }
  }
}
