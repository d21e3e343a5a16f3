use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The recorded outcome of applying one strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Improvement {
    /// Description of the strategy that was applied.
    pub strategy: String,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}
