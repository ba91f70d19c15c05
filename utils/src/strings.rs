//! Word-case inflectors used to map names between naming conventions.
//!
//! The rules mirror the usual JavaScript inflector family:
//!
//! - `camelize("one-two_three four")` == `"oneTwoThreeFour"`
//! - `decamelize("innerHTML")` == `"inner_html"`
//! - `dasherize("MixedCase")` == `"mixed-case"`
//! - `underscore("oneTwo")` == `"one_two"`

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CAMELIZE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-|_|\.|\s)+(.)?").expect("valid regex"));
static CAMELIZE_LEADING_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|/)([A-Z])").expect("valid regex"));
static DECAMELIZE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));
static DASHERIZE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ _]").expect("valid regex"));
static UNDERSCORE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z]+)").expect("valid regex"));
static UNDERSCORE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"-|\s+").expect("valid regex"));

/// Removes dashes, underscores, dots and whitespace, upper-casing the character after each
/// separator run, then lower-cases a leading capital.
pub fn camelize(s: &str) -> String {
  let joined = CAMELIZE_SEPARATOR.replace_all(s, |caps: &Captures| {
    caps
      .get(2)
      .map(|chr| chr.as_str().to_uppercase())
      .unwrap_or_default()
  });
  CAMELIZE_LEADING_UPPER
    .replace_all(&joined, |caps: &Captures| caps[0].to_lowercase())
    .into_owned()
}

/// Splits lowerCamelCase words with `_` and lower-cases the result.
pub fn decamelize(s: &str) -> String {
  DECAMELIZE_BOUNDARY.replace_all(s, "${1}_${2}").to_lowercase()
}

pub fn dasherize(s: &str) -> String {
  DASHERIZE_SEPARATOR.replace_all(&decamelize(s), "-").into_owned()
}

pub fn underscore(s: &str) -> String {
  let split = UNDERSCORE_BOUNDARY.replace_all(s, "${1}_${2}");
  UNDERSCORE_SEPARATOR.replace_all(&split, "_").to_lowercase()
}
