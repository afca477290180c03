//! Feature values and per-patient feature dictionaries.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::numeric::format_number;

/// Textual form of [`FeatureValue::Null`] in serialized output.
pub const NULL_SENTINEL: &str = "NULL";

/// A single feature cell.
///
/// `Null` marks a zero-valued extreme (see the statistics reducers). It is
/// kept distinct from `Number(0.0)` and always renders as `"NULL"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Null,
}

impl FeatureValue {
    pub fn as_number(self) -> Option<f64> {
        match self {
            FeatureValue::Number(value) => Some(value),
            FeatureValue::Null => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        FeatureValue::Number(value as f64)
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Number(value) => f.write_str(&format_number(*value)),
            FeatureValue::Null => f.write_str(NULL_SENTINEL),
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FeatureValue::Number(value)
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 =>
            {
                serializer.serialize_i64(value as i64)
            }
            FeatureValue::Number(value) => serializer.serialize_f64(value),
            FeatureValue::Null => serializer.serialize_str(NULL_SENTINEL),
        }
    }
}

/// Key-sorted feature dictionary produced by one reducer for one patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeMap<String, FeatureValue>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts `value` only when `key` is not present yet.
    pub fn insert_default(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<FeatureValue> {
        self.0.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }
}
