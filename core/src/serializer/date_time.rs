use crate::error::CodecError;
use crate::serializer::{check_null, FieldSerializer, SerializerSettings};
use crate::value::{value_kind, AttributeValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// ISO-8601 timestamp codec. Serializes in UTC with millisecond precision.
#[derive(Debug, Clone, Default)]
pub struct DateTimeSerializer {
  disallow_null: bool,
}

impl DateTimeSerializer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_settings(settings: &SerializerSettings) -> Self {
    Self {
      disallow_null: settings.disallows_null(),
    }
  }

  pub fn format(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
  }

  /// Parses an ISO-8601 timestamp. A trailing `+HHMM` offset is accepted as `+HH:MM`.
  /// Timestamps without an offset are read as UTC.
  pub fn parse(s: &str) -> Result<DateTime<Utc>, CodecError> {
    let normalized = normalize_offset(s);
    if let Ok(date_time) = DateTime::parse_from_rfc3339(&normalized) {
      return Ok(date_time.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f") {
      return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
      .ok()
      .and_then(|date| date.and_hms_opt(0, 0, 0))
      .map(|naive| naive.and_utc())
      .ok_or_else(|| CodecError::InvalidDateTime(s.to_string()))
  }
}

fn normalize_offset(s: &str) -> String {
  match s.find('+') {
    Some(offset) if offset + 5 == s.len() && s[offset + 1..].bytes().all(|b| b.is_ascii_digit()) => {
      let split = offset + 3;
      format!("{}:{}", &s[..split], &s[split..])
    }
    _ => s.to_string(),
  }
}

impl FieldSerializer for DateTimeSerializer {
  fn serialize(&self, value: &AttributeValue) -> Result<Value, CodecError> {
    match value {
      AttributeValue::Null => {
        check_null("DateTimeSerializer", self.disallow_null)?;
        Ok(Value::Null)
      }
      AttributeValue::DateTime(date_time) => Ok(Value::String(Self::format(date_time))),
      other => Err(CodecError::of_unexpected_value("datetime", other.kind())),
    }
  }

  fn deserialize(&self, value: &Value) -> Result<AttributeValue, CodecError> {
    match value {
      Value::Null => {
        check_null("DateTimeSerializer", self.disallow_null)?;
        Ok(AttributeValue::Null)
      }
      Value::String(s) => Ok(AttributeValue::DateTime(Self::parse(s)?)),
      other => Err(CodecError::of_unexpected_value("string", value_kind(other))),
    }
  }
}
