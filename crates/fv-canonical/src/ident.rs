//! Content-derived stable identifiers.

use uuid::Uuid;

use crate::error::CanonResult;
use crate::hash::serialize;
use crate::value::Value;

/// Deterministic UUID for a namespaced canonical payload.
///
/// The id is UUIDv5 (RFC 4122, DNS namespace) over the name
/// `"<namespace>:" + <canonical JSON of payload>`. Payloads that
/// canonicalize to the same bytes produce the same id on every
/// implementation; no randomness is involved anywhere.
pub fn stable_id(namespace: &str, payload: &Value) -> CanonResult<String> {
    let name = format!("{namespace}:{}", serialize(payload)?);
    Ok(Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes()).to_string())
}
