//! Deterministic serialization and content hashing of canonical values.

use std::collections::BTreeMap;

use fv_types::ContentHash;
use serde::Serialize;

use crate::canon::canonicalize;
use crate::error::{CanonError, CanonResult};
use crate::value::Value;

/// Canonicalization rules version. Bumped on any change that could alter
/// canonical bytes or hashes.
pub const CANON_VERSION: &str = "0.1.0";

/// Reserved object key marking an absent value in identity hashing.
///
/// The sentinel object `{"__fv_absent": true}` exists only inside
/// [`hash_value_or_absent`]; it is never produced by canonicalization, and a
/// raw input that happens to contain the key canonicalizes as an ordinary
/// object.
pub const ABSENT_SENTINEL_KEY: &str = "__fv_absent";

/// Serialize a canonical value to its deterministic JSON text.
pub fn serialize(value: &Value) -> CanonResult<String> {
    serde_json::to_string(value).map_err(|e| CanonError::Serialization(e.to_string()))
}

/// Parse JSON text, then canonicalize the parsed value.
pub fn deserialize(text: &str) -> CanonResult<Value> {
    let raw: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CanonError::Deserialization(e.to_string()))?;
    canonicalize(&raw)
}

/// SHA-256 over the canonical bytes of a canonical value.
pub fn hash_canonical(value: &Value) -> CanonResult<ContentHash> {
    Ok(ContentHash::from_bytes(serialize(value)?.as_bytes()))
}

/// Canonicalize any serializable value, then hash its canonical bytes.
pub fn hash_json<T: Serialize>(value: &T) -> CanonResult<ContentHash> {
    let raw = serde_json::to_value(value).map_err(|e| CanonError::Serialization(e.to_string()))?;
    hash_canonical(&canonicalize(&raw)?)
}

/// Whether two raw values are equal after canonicalization.
pub fn canonical_equal(a: &serde_json::Value, b: &serde_json::Value) -> CanonResult<bool> {
    Ok(canonicalize(a)? == canonicalize(b)?)
}

/// Hash a value that may be absent.
///
/// Absence hashes the reserved sentinel object so that "no value" and JSON
/// `null` keep distinct identities.
pub fn hash_value_or_absent(value: Option<&Value>) -> CanonResult<ContentHash> {
    match value {
        Some(v) => hash_canonical(v),
        None => hash_canonical(&absent_sentinel()),
    }
}

fn absent_sentinel() -> Value {
    let mut map = BTreeMap::new();
    map.insert(ABSENT_SENTINEL_KEY.to_string(), Value::Bool(true));
    Value::Object(map)
}
