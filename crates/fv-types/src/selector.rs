use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// The closed set of atom kinds a selector can address.
///
/// Variants are declared in code-point order of their wire names so that the
/// derived ordering agrees with string ordering of rendered selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomKind {
    Blob,
    Edge,
    Field,
    Node,
    Path,
    Region,
    Value,
    Workflow,
}

impl AtomKind {
    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AtomKind::Blob => "blob",
            AtomKind::Edge => "edge",
            AtomKind::Field => "field",
            AtomKind::Node => "node",
            AtomKind::Path => "path",
            AtomKind::Region => "region",
            AtomKind::Value => "value",
            AtomKind::Workflow => "workflow",
        }
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(AtomKind::Blob),
            "edge" => Ok(AtomKind::Edge),
            "field" => Ok(AtomKind::Field),
            "node" => Ok(AtomKind::Node),
            "path" => Ok(AtomKind::Path),
            "region" => Ok(AtomKind::Region),
            "value" => Ok(AtomKind::Value),
            "workflow" => Ok(AtomKind::Workflow),
            other => Err(TypeError::UnknownAtomKind(other.to_string())),
        }
    }
}

/// Typed address of a single mergeable atom, rendered as `kind:id`.
///
/// Selectors identify nodes, edges, and the reserved whole-value atoms in
/// diff and merge output. The identifier part is free-form and may itself
/// contain `:`; only the first separator is structural.
///
/// Ordering is the string ordering of the rendered form, which makes sorted
/// selector lists byte-stable across implementations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector {
    pub kind: AtomKind,
    pub id: String,
}

impl Selector {
    pub fn new(kind: AtomKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Selector for a graph node.
    pub fn node(id: impl Into<String>) -> Self {
        Self::new(AtomKind::Node, id)
    }

    /// Selector for a graph edge.
    pub fn edge(id: impl Into<String>) -> Self {
        Self::new(AtomKind::Edge, id)
    }

    /// The reserved selector for an opaque value treated as one atom.
    pub fn value_root() -> Self {
        Self::new(AtomKind::Value, "root")
    }

    /// The reserved selector for graph-level concerns (e.g. start/end rules).
    pub fn workflow_root() -> Self {
        Self::new(AtomKind::Workflow, "root")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for Selector {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| TypeError::InvalidSelector(s.to_string()))?;
        if id.is_empty() {
            return Err(TypeError::InvalidSelector(s.to_string()));
        }
        Ok(Self {
            kind: kind.parse()?,
            id: id.to_string(),
        })
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
