//! Canonicalization kernel for FlowVersion.
//!
//! Normalizes JSON-like values into a single canonical form, serializes that
//! form to deterministic bytes, and derives content hashes and stable
//! identifiers from the bytes. Two independent implementations of these rules
//! must produce byte-identical output for every accepted input; all diff,
//! merge, and validation identity in the kernel rests on that property.
//!
//! # Key Types
//!
//! - [`Value`] — A canonical value; the normalized form itself
//! - [`canonicalize`] — Raw JSON to canonical [`Value`]
//! - [`serialize`] / [`deserialize`] — Deterministic JSON text
//! - [`hash_canonical`] — SHA-256 content hash over canonical bytes
//! - [`stable_id`] — Content-derived UUIDv5 identifiers
//! - [`CanonError`] — Rejection taxonomy for non-portable inputs

pub mod canon;
pub mod error;
pub mod hash;
pub mod ident;
pub mod text;
pub mod value;

pub use canon::{canonicalize, canonicalize_opt};
pub use error::{CanonError, CanonResult};
pub use hash::{
    canonical_equal, deserialize, hash_canonical, hash_json, hash_value_or_absent, serialize,
    ABSENT_SENTINEL_KEY, CANON_VERSION,
};
pub use ident::stable_id;
pub use value::{Value, MAX_SAFE_INTEGER};
