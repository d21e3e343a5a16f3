use serde::{Deserialize, Serialize};

/// A recommended action derived from a pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Strategy {
    pub description: String,
    /// Human-readable estimate, e.g. "+8% revenue".
    pub expected_impact: String,
    pub implementation: String,
}

impl Strategy {
    pub fn new(
        description: impl Into<String>,
        expected_impact: impl Into<String>,
        implementation: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            expected_impact: expected_impact.into(),
            implementation: implementation.into(),
        }
    }
}
