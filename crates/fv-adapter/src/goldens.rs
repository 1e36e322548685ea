use chrono::{SecondsFormat, Utc};
use fv_canonical::{canonicalize, hash_canonical, serialize};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::adapter::DomainAdapter;
use crate::error::{AdapterError, AdapterResult};

/// Adapter contract version. Bump on breaking changes to the adapter
/// operations or the golden vector format.
pub const SPEC_VERSION: &str = "0.1.0";

/// Provenance block of a golden file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenMeta {
    pub spec_version: String,
    pub canon_version: String,
    pub generated_at: String,
    pub generator: String,
}

impl GoldenMeta {
    /// Meta block stamped with the current time.
    pub fn new(generator: impl Into<String>) -> Self {
        GoldenMeta {
            spec_version: SPEC_VERSION.to_string(),
            canon_version: fv_canonical::CANON_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            generator: generator.into(),
        }
    }
}

/// One conformance vector: an input pinned to its canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub input: Json,
    pub canonical_json: String,
    pub sha256: String,
}

/// A versioned set of conformance vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenFile {
    #[serde(rename = "_meta")]
    pub meta: GoldenMeta,
    pub version: u32,
    pub vectors: Vec<GoldenVector>,
}

impl GoldenFile {
    /// Recomputes every vector through the base canonicalizer.
    pub fn verify(&self) -> AdapterResult<()> {
        for vector in &self.vectors {
            verify_vector(vector)?;
        }
        Ok(())
    }

    /// Recomputes every vector through `adapter` before the base pass.
    pub fn verify_domain<A: DomainAdapter>(&self, adapter: &A) -> AdapterResult<()> {
        for vector in &self.vectors {
            verify_domain_vector(adapter, vector)?;
        }
        Ok(())
    }
}

/// Computes the canonical forms for a kernel vector input.
pub fn make_vector(
    name: impl Into<String>,
    notes: Option<&str>,
    input: Json,
) -> AdapterResult<GoldenVector> {
    let canonical = canonicalize(&input)?;
    let canonical_json = serialize(&canonical)?;
    let sha256 = hash_canonical(&canonical)?.to_hex();
    Ok(GoldenVector {
        name: name.into(),
        notes: notes.map(str::to_string),
        input,
        canonical_json,
        sha256,
    })
}

/// Computes the canonical forms for a domain vector input, routing the
/// input through `adapter` first.
pub fn make_domain_vector<A: DomainAdapter>(
    adapter: &A,
    name: impl Into<String>,
    notes: Option<&str>,
    input: Json,
) -> AdapterResult<GoldenVector> {
    let canonical = adapter.canonicalize_domain(&input)?;
    let canonical_json = serialize(&canonical)?;
    let sha256 = hash_canonical(&canonical)?.to_hex();
    Ok(GoldenVector {
        name: name.into(),
        notes: notes.map(str::to_string),
        input,
        canonical_json,
        sha256,
    })
}

fn verify_vector(vector: &GoldenVector) -> AdapterResult<()> {
    let canonical = canonicalize(&vector.input)?;
    check_vector(vector, &serialize(&canonical)?, &hash_canonical(&canonical)?.to_hex())
}

fn verify_domain_vector<A: DomainAdapter>(adapter: &A, vector: &GoldenVector) -> AdapterResult<()> {
    let canonical = adapter.canonicalize_domain(&vector.input)?;
    check_vector(vector, &serialize(&canonical)?, &hash_canonical(&canonical)?.to_hex())
}

fn check_vector(vector: &GoldenVector, canonical_json: &str, sha256: &str) -> AdapterResult<()> {
    if canonical_json != vector.canonical_json {
        return Err(AdapterError::GoldenMismatch {
            name: vector.name.clone(),
            field: "canonical_json",
        });
    }
    if sha256 != vector.sha256 {
        return Err(AdapterError::GoldenMismatch {
            name: vector.name.clone(),
            field: "sha256",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::WorkflowAdapter;
    use serde_json::json;

    fn vector(name: &str, input: Json, canonical_json: &str, sha256: &str) -> GoldenVector {
        GoldenVector {
            name: name.to_string(),
            notes: None,
            input,
            canonical_json: canonical_json.to_string(),
            sha256: sha256.to_string(),
        }
    }

    fn kernel_vectors() -> Vec<GoldenVector> {
        vec![
            vector(
                "null_value",
                json!(null),
                "null",
                "74234e98afe7498fb5daf1f36ac2d78acc339464f950703b8c019892f982b90b",
            ),
            vector(
                "bool_true",
                json!(true),
                "true",
                "b5bea41b6c623f7c09f1bf24dcae58ebab3c0cdd90ad966bc43a45b44867e12b",
            ),
            vector(
                "int_answer",
                json!(42),
                "42",
                "73475cb40a568e8da8a045ced110137e159f890ac4da883b6b17dc651b3a8049",
            ),
            vector(
                "max_safe_integer",
                json!(9007199254740991i64),
                "9007199254740991",
                "f40b423c2dd95ff2b2f027e22208f438cf7242862e5e746860e697308c9add26",
            ),
            vector(
                "simple_object",
                json!({"b": 2, "a": 1}),
                r#"{"a":1,"b":2}"#,
                "43258cff783fe7036d8a43033f830adfc60ec037382473548ac742b888292777",
            ),
            vector(
                "nested_sort",
                json!({"z": {"y": 2, "x": 1}, "a": [3, 1]}),
                r#"{"a":[3,1],"z":{"x":1,"y":2}}"#,
                "bfaa867b44f5903d2812c785492b0359e89263e915b7b63eaf44be73066ec106",
            ),
            vector(
                "uuid_lowercased",
                json!("A1B2C3D4-E5F6-7890-ABCD-EF1234567890"),
                r#""a1b2c3d4-e5f6-7890-abcd-ef1234567890""#,
                "b8130e5982d15ecafcb778050d417cc4bcf0e395812940e5f2e1907e54c14668",
            ),
            vector(
                "hash_lowercased",
                json!("ABCDEF1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF1234567890"),
                r#""abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890""#,
                "197f2ac1cdf0b82d8b08e7a526e9ca3c4f352a6f07ed30e940e72c1b7da02641",
            ),
            vector(
                "timestamp_offset_to_utc",
                json!("2024-01-15T10:00:00-08:00"),
                r#""2024-01-15T18:00:00Z""#,
                "d532e52c951984e8312451653d209170217571d842d24c69bd24e4ae6d604228",
            ),
            vector(
                "timestamp_millis_kept",
                json!("2024-01-15T18:00:00.123Z"),
                r#""2024-01-15T18:00:00.123Z""#,
                "42e1ce437b9f3573d21723b0503536d24411735efca8a577ceca90c15ef5fbfe",
            ),
            vector(
                "unicode_key_order",
                json!({"zebra": 1, "apple": 2, "Banana": 4}),
                r#"{"Banana":4,"apple":2,"zebra":1}"#,
                "1574ce2e1c9b57a12adfe0aa365a4257dcc70ee4bb5b282f1039b83ea21e9db0",
            ),
            vector(
                "empty_containers",
                json!({"a": [], "b": {}}),
                r#"{"a":[],"b":{}}"#,
                "9959f7ea5ff37e0cf81634a894845a335eb6e26fbad0877944e9bc009b4f0644",
            ),
            vector(
                "absent_sentinel_object",
                json!({"__fv_absent": true}),
                r#"{"__fv_absent":true}"#,
                "9f14cc648d4db7ac220169366959602b661c42ad0e9e409af441a68f45c8a095",
            ),
        ]
    }

    #[test]
    fn kernel_vectors_verify() {
        let file = GoldenFile {
            meta: GoldenMeta::new("fv-adapter"),
            version: 1,
            vectors: kernel_vectors(),
        };
        file.verify().unwrap();
    }

    #[test]
    fn domain_vector_verifies_through_adapter() {
        let file = GoldenFile {
            meta: GoldenMeta::new("fv-adapter"),
            version: 1,
            vectors: vec![vector(
                "order_flow",
                json!({
                    "name": "Order Flow",
                    "nodes": [
                        {"id": "finish", "type": "end"},
                        {"id": "begin", "type": " start "},
                        {"id": "ship", "label": "Ship order", "config": {"task_key": "ship_order", "retries": 3}},
                    ],
                    "edges": [
                        {"from": "ship", "to": "finish"},
                        {"from": "begin", "to": "ship", "type": ""},
                    ],
                }),
                "{\"edges\":[{\"from\":\"begin\",\"id\":\"begin->ship\",\"to\":\"ship\",\"type\":\"flow\"},\
                 {\"from\":\"ship\",\"id\":\"ship->finish\",\"to\":\"finish\",\"type\":\"flow\"}],\
                 \"kind\":\"workflow_graph@1\",\"name\":\"Order Flow\",\"nodes\":[\
                 {\"config\":{},\"id\":\"begin\",\"type\":\"start\"},\
                 {\"config\":{},\"id\":\"finish\",\"type\":\"end\"},\
                 {\"config\":{\"retries\":3,\"task_key\":\"ship_order\"},\"id\":\"ship\",\
                 \"label\":\"Ship order\",\"type\":\"task\"}]}",
                "3cb70afa7ea24946b652f1f9cad8297a8efd780f571bc6327bc21e9bd6e49fb1",
            )],
        };
        file.verify_domain(&WorkflowAdapter).unwrap();
    }

    #[test]
    fn make_vector_reproduces_recorded_forms() {
        for expected in kernel_vectors() {
            let made = make_vector(expected.name.clone(), None, expected.input.clone()).unwrap();
            assert_eq!(made.canonical_json, expected.canonical_json, "{}", expected.name);
            assert_eq!(made.sha256, expected.sha256, "{}", expected.name);
        }
    }

    #[test]
    fn make_domain_vector_uses_the_adapter_path() {
        let made = make_domain_vector(
            &WorkflowAdapter,
            "empty_graph",
            Some("kind tag alone classifies as a graph"),
            json!({"kind": "workflow_graph@1"}),
        )
        .unwrap();
        assert_eq!(
            made.canonical_json,
            r#"{"edges":[],"kind":"workflow_graph@1","nodes":[]}"#
        );
        assert_eq!(
            made.sha256,
            "84d48c7c717b2e3cc0647bf00fc6e0c22a01a5b9bd0f668c2fe96a56558d306d"
        );
        assert_eq!(made.notes.as_deref(), Some("kind tag alone classifies as a graph"));
    }

    #[test]
    fn mismatch_names_the_failing_field() {
        let bad = GoldenVector {
            name: "drifted".to_string(),
            notes: None,
            input: json!({"a": 1}),
            canonical_json: r#"{"a":1}"#.to_string(),
            sha256: "0".repeat(64),
        };
        let file = GoldenFile {
            meta: GoldenMeta::new("fv-adapter"),
            version: 1,
            vectors: vec![bad],
        };
        let err = file.verify().unwrap_err();
        assert_eq!(err.to_string(), "golden vector drifted mismatched on sha256");
    }

    #[test]
    fn golden_file_round_trips_as_json() {
        let file = GoldenFile {
            meta: GoldenMeta {
                spec_version: SPEC_VERSION.to_string(),
                canon_version: fv_canonical::CANON_VERSION.to_string(),
                generated_at: "2024-01-15T18:00:00.000Z".to_string(),
                generator: "fv-adapter".to_string(),
            },
            version: 1,
            vectors: kernel_vectors(),
        };
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.starts_with("{\"_meta\":{\"spec_version\":\"0.1.0\""));
        let back: GoldenFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }
}
