//! Normalization of raw JSON values into canonical [`Value`]s.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::error::{CanonError, CanonResult};
use crate::text::normalize_string;
use crate::value::{Value, MAX_SAFE_INTEGER};

/// Normalize a raw JSON value into its canonical form.
///
/// Object keys are sorted in code-point order (never rewritten), numbers are
/// restricted to integers within `±2^53 - 1`, and identity-bearing strings
/// are normalized per [`normalize_string`]. Array element order is
/// preserved.
pub fn canonicalize(input: &Json) -> CanonResult<Value> {
    match input {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => canonical_int(n).map(Value::Int),
        Json::String(s) => normalize_string(s).map(Value::Str),
        Json::Array(items) => items
            .iter()
            .map(canonicalize)
            .collect::<CanonResult<Vec<_>>>()
            .map(Value::Array),
        Json::Object(map) => {
            let mut out = BTreeMap::new();
            for (key, value) in map {
                out.insert(key.clone(), canonicalize(value)?);
            }
            Ok(Value::Object(out))
        }
    }
}

/// Normalize a maybe-absent raw value.
///
/// Absence is an ingestion-level state only; it can never be embedded in a
/// canonical structure, so `None` is rejected here. Identity hashing of
/// maybe-absent slots goes through
/// [`hash_value_or_absent`](crate::hash::hash_value_or_absent) instead.
pub fn canonicalize_opt(input: Option<&Json>) -> CanonResult<Value> {
    match input {
        Some(value) => canonicalize(value),
        None => Err(CanonError::AbsentValue),
    }
}

fn canonical_int(n: &serde_json::Number) -> CanonResult<i64> {
    if let Some(i) = n.as_i64() {
        if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i) {
            return Err(CanonError::UnsafeInteger(n.to_string()));
        }
        return Ok(i);
    }
    if n.is_u64() {
        // above i64::MAX, far outside the safe range
        return Err(CanonError::UnsafeInteger(n.to_string()));
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 => Err(CanonError::NonIntegerNumber(n.to_string())),
        Some(f) if f.abs() > MAX_SAFE_INTEGER as f64 => {
            Err(CanonError::UnsafeInteger(n.to_string()))
        }
        Some(f) => Ok(f as i64),
        None => Err(CanonError::UnsupportedType(n.to_string())),
    }
}
