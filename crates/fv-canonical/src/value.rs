use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::canon::canonicalize;
use crate::error::{CanonError, CanonResult};

/// Largest integer magnitude representable exactly in an IEEE 754 double.
///
/// Canonical numbers are integers within `±MAX_SAFE_INTEGER` so that every
/// runtime, including ones with double-only arithmetic, reads them back
/// without loss.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// A canonical value.
///
/// `Value` is the normalized form itself: object keys are unique and held in
/// code-point order by construction, and no float, absent marker, or other
/// non-portable state is representable. Serializing a `Value` with
/// `serde_json` emits canonical bytes directly.
///
/// `Int` must stay within `±`[`MAX_SAFE_INTEGER`]; [`canonicalize`] and
/// [`Value::int`] enforce the range at every ingestion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Range-checked integer constructor.
    pub fn int(value: i64) -> CanonResult<Self> {
        if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
            return Err(CanonError::UnsafeInteger(value.to_string()));
        }
        Ok(Value::Int(value))
    }

    /// Convert a float that happens to hold an integral value.
    ///
    /// Accepts only finite, fraction-free floats within the safe range;
    /// everything else is rejected with the matching [`CanonError`].
    pub fn from_f64(value: f64) -> CanonResult<Self> {
        if !value.is_finite() {
            return Err(CanonError::NonFiniteNumber(value.to_string()));
        }
        if value.fract() != 0.0 {
            return Err(CanonError::NonIntegerNumber(value.to_string()));
        }
        if value.abs() > MAX_SAFE_INTEGER as f64 {
            return Err(CanonError::UnsafeInteger(value.to_string()));
        }
        Ok(Value::Int(value as i64))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Object field lookup; `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

/// Renders the canonical JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut obj = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    obj.serialize_entry(key, value)?;
                }
                obj.end()
            }
        }
    }
}

/// Deserialization canonicalizes: parsed strings are normalized and numbers
/// are checked against the integer rules, exactly as [`canonicalize`] does.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        canonicalize(&raw).map_err(serde::de::Error::custom)
    }
}
