use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level shared by merge conflicts and validation issues.
///
/// `Error` outranks `Warning`: an error-severity conflict forces the merged
/// atom back to its base state, and an error-severity issue makes a
/// validation result invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
